/*!
Sweep-and-slide and ground probe tolerances.

These constants centralize the parameters used by the collision resolver and the
ground detector. They are part of the controller's observable behavior (positions
after a contact depend on them), so changing any of them changes simulation output.

Notes
- Distances are in world units, time in seconds.
- Time of impact values reported by the host are fractions of the swept vector; since
  the resolver sweeps along a velocity, a fraction is also a duration in seconds.
*/

/// Push-out distance applied along the contact normal after every hit.
/// Keeps the next sweep from starting inside the surface it just touched.
pub const SKIN_OFFSET: f32 = 0.01;

/// Maximum number of contacts the resolver handles per tick.
/// Once spent, any simulation time left in the tick is dropped.
pub const MAX_CORRECTIONS: u32 = 5;

/// Length of the downward sweep used to decide whether an entity is grounded.
pub const GROUND_PROBE_DISTANCE: f32 = 0.1;

/// Colour tag passed to the host when drawing the grounded debug cylinder.
pub const GROUND_DEBUG_COLOR: &str = "blue";

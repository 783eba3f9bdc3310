use super::{
    settings::{MAX_CORRECTIONS, SKIN_OFFSET},
    types::{ResolveResult, ShapeParams, Vec3},
};
use crate::{math::deflect, world::World};

/// Parameters for a single sweep-and-slide resolution.
///
/// - Motion is expressed as a velocity integrated over `dt` seconds.
/// - Collision is handled by asking the host to sweep the entity's cylinder along the
///   velocity, stopping at contact, pushing out by `skin`, and sliding along the
///   contact normal.
/// - At most `max_corrections` contacts are handled; see [`resolve`] for what happens
///   to time left over once they are spent.
#[derive(Clone, Copy, Debug)]
pub struct ResolveRequest {
    /// Starting entity position (base of the cylinder).
    pub position: Vec3,
    /// Desired velocity for this tick.
    pub velocity: Vec3,
    pub shape: ShapeParams,
    /// Tick duration in seconds.
    pub dt: f32,
    /// Push-out distance along the contact normal after each hit.
    pub skin: f32,
    /// Contact budget for this tick.
    pub max_corrections: u32,
}

impl ResolveRequest {
    #[inline]
    pub fn with_defaults(position: Vec3, velocity: Vec3, shape: ShapeParams, dt: f32) -> Self {
        Self {
            position,
            velocity,
            shape,
            dt,
            skin: SKIN_OFFSET,
            max_corrections: MAX_CORRECTIONS,
        }
    }
}

/// Turn a desired velocity into geometry-respecting motion for one tick.
///
/// Algorithm:
/// - Sweep the cylinder along `velocity` for the time remaining in the tick.
/// - On hit: move to the contact (`position + velocity * toi`), push out along the
///   normal by `skin`, project the velocity onto the contact plane, and spend one
///   correction and `toi` seconds.
/// - Without a hit: fly freely for the rest of the tick and stop.
///
/// When the correction budget runs out with time still remaining, that time is dropped
/// and the entity stays where its last contact left it. Corners that keep producing
/// contacts therefore stall motion for the tick instead of being retried.
pub fn resolve<W: World + ?Sized>(world: &W, req: ResolveRequest) -> ResolveResult {
    let mut position = req.position;
    let mut velocity = req.velocity;
    let mut remaining = req.dt;
    let mut corrections = req.max_corrections;

    while remaining > 0.0 && corrections > 0 {
        let hit = world.cast_cylinder(
            req.shape.center(position),
            velocity,
            req.shape.half_height,
            req.shape.radius,
            remaining,
        );

        match hit {
            Some(hit) => {
                let toi = hit.time_of_impact.clamp(0.0, remaining);
                let contact = position + velocity * toi;
                position = contact + hit.normal * req.skin;
                velocity = deflect(velocity, hit.normal);

                remaining -= toi;
                corrections -= 1;
            }
            None => {
                position += velocity * remaining;
                remaining = 0.0;
            }
        }
    }

    let dropped_time = remaining.max(0.0);
    if dropped_time > 0.0 {
        log::debug!(
            "correction budget exhausted; dropping {dropped_time:.4}s of motion at {:?}",
            position
        );
    }

    ResolveResult {
        position,
        velocity,
        corrections_used: req.max_corrections - corrections,
        dropped_time,
    }
}

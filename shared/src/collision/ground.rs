use super::{
    settings::{GROUND_DEBUG_COLOR, GROUND_PROBE_DISTANCE},
    types::{ShapeParams, Vec3},
};
use crate::world::World;

/// Returns whether the entity standing at `position` rests on a supporting surface.
///
/// Issues one downward sweep of the entity's cylinder along `-Y` for
/// [`GROUND_PROBE_DISTANCE`]. Any hit counts as ground; there is no slope filter and no
/// hysteresis, so the result is re-derived from geometry every tick.
///
/// When grounded, the probed cylinder is drawn via the host's debug hook.
pub fn is_grounded<W: World + ?Sized>(world: &mut W, position: Vec3, shape: ShapeParams) -> bool {
    let center = shape.center(position);
    let hit = world.cast_cylinder(
        center,
        Vec3::new(0.0, -1.0, 0.0),
        shape.half_height,
        shape.radius,
        GROUND_PROBE_DISTANCE,
    );

    if hit.is_some() {
        world.debug_cylinder(center, shape.half_height, shape.radius, GROUND_DEBUG_COLOR);
        true
    } else {
        false
    }
}

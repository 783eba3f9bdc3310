/*!
Core collision types and math aliases shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- the host's swept-shape query (`World::cast_cylinder`)
- the ground detector
- the sweep-and-slide resolver
- the per-tick movement integrator
*/

use nalgebra as na;

use crate::constants::{DEFAULT_CYLINDER_HEIGHT, DEFAULT_CYLINDER_RADIUS};

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// Y-aligned cylinder used for both movement sweeps and ground probes.
///
/// The entity position is the base of the cylinder; its centre sits `half_height`
/// above it. Queries are always issued from the centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParams {
    pub half_height: f32,
    pub radius: f32,
}

impl ShapeParams {
    #[inline]
    pub const fn new(half_height: f32, radius: f32) -> Self {
        Self {
            half_height,
            radius,
        }
    }

    /// World-space centre of the cylinder for an entity standing at `position`.
    #[inline]
    pub fn center(&self, position: Vec3) -> Vec3 {
        position + Vec3::new(0.0, self.half_height, 0.0)
    }
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self::new(DEFAULT_CYLINDER_HEIGHT / 2.0, DEFAULT_CYLINDER_RADIUS)
    }
}

/// The nearest blocking contact reported by a swept-shape query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionHit {
    /// World-space unit normal of the blocking surface, pointing back toward the mover.
    pub normal: Vec3,
    /// Fraction of the swept vector at which contact occurs, in `[0, max_time_of_impact]`.
    pub time_of_impact: f32,
}

impl CollisionHit {
    #[inline]
    pub fn new(normal: Vec3, time_of_impact: f32) -> Self {
        Self {
            normal,
            time_of_impact,
        }
    }
}

/// Result of resolving one tick of motion against the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveResult {
    /// Final entity position (base of the cylinder).
    pub position: Vec3,
    /// Velocity after every contact deflection.
    pub velocity: Vec3,
    /// Number of contacts handled this tick (at most `MAX_CORRECTIONS`).
    pub corrections_used: u32,
    /// Simulation time left unapplied because the correction budget ran out.
    pub dropped_time: f32,
}

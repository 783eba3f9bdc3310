// NOTE: This module only computes the velocity a controlled entity *wants* this tick.
// It performs no collision queries; feed the result to the sweep-and-slide resolver.

use crate::{
    ControlInput,
    collision::{Vec2, Vec3},
    config::MotionConfig,
    math::{add, rotate_planar, scale},
};

/// Input for shaping one tick's desired velocity.
#[derive(Clone, Copy, Debug)]
pub struct DesiredVelocityParams {
    /// Velocity carried over from the previous tick.
    pub velocity: Vec3,
    /// Planar move intent already rotated into world XZ (`x` → X, `y` → Z).
    pub move_world: Vec2,
    pub jump: bool,
    /// Ground probe result at the start of the tick.
    pub grounded: bool,
}

/// Result of the desired-velocity computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesiredVelocity {
    pub velocity: Vec3,
    /// Whether the entity counts as grounded for the rest of the tick
    /// (a jump forces this to false).
    pub grounded: bool,
    pub jumped: bool,
}

/// Rotate camera-space move input into world XZ using the heading of the reference
/// entity's orientation.
#[inline]
pub fn world_move_direction(controls: &ControlInput, heading: f32) -> Vec2 {
    rotate_planar(controls.move_direction, heading)
}

/// Apply friction, move input, gravity and jump to the carried-over velocity.
///
/// Order matters and is part of the controller's feel:
/// 1. Grounded friction scales X/Z.
/// 2. Any non-zero input axis overwrites that axis outright (input always beats decay).
/// 3. Gravity is integrated only while airborne, using the ground state from the probe.
/// 4. A grounded jump sets Y to the impulse and flips the entity airborne for the tick.
pub fn compute_desired_velocity(
    params: DesiredVelocityParams,
    config: &MotionConfig,
) -> DesiredVelocity {
    let DesiredVelocityParams {
        mut velocity,
        move_world,
        jump,
        mut grounded,
    } = params;

    if grounded {
        velocity.x *= config.ground_friction;
        velocity.z *= config.ground_friction;
    }

    if move_world.x.abs() > 0.0 {
        velocity.x = move_world.x * config.move_speed;
    }
    if move_world.y.abs() > 0.0 {
        velocity.z = move_world.y * config.move_speed;
    }

    if !grounded {
        velocity = add(velocity, scale(config.gravity, config.dt));
    }

    let jumped = grounded && jump;
    if jumped {
        velocity.y = config.jump_impulse;
        grounded = false;
    }

    DesiredVelocity {
        velocity,
        grounded,
        jumped,
    }
}

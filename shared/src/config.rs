//! Per-entity-class controller configuration.
//!
//! One configurable controller replaces a family of near-identical entity scripts: each
//! class of entity gets a [`MotionConfig`] (and clients a [`CameraConfig`]) instead of a
//! copy of the movement code with different literals. Defaults reproduce the player
//! class exactly.

use thiserror::Error;

use crate::{
    EntityId,
    collision::{ShapeParams, Vec3},
    constants::{
        CAMERA_CLIENT_ENTITY_ID, CAMERA_DISTANCE, CAMERA_HEIGHT, DEFAULT_MOVE_SPEED, GRAVITY,
        GROUND_FRICTION, JUMP_IMPULSE, KILL_PLANE_Y, LOOK_SENSITIVITY_X, LOOK_SENSITIVITY_Y,
        MAX_SPEED, RESPAWN_POINT, TICK_DT,
    },
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}

fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn finite_vec(field: &'static str, v: Vec3) -> Result<(), ConfigError> {
    for value in v.iter().copied() {
        finite(field, value)?;
    }
    Ok(())
}

/// Movement constants for one class of controlled entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub shape: ShapeParams,
    /// Horizontal speed set directly from move input (units per second).
    pub move_speed: f32,
    /// Acceleration applied while airborne.
    pub gravity: Vec3,
    /// Horizontal velocity multiplier applied each grounded tick.
    pub ground_friction: f32,
    /// Vertical velocity set on jump.
    pub jump_impulse: f32,
    /// Maximum resolved speed.
    pub max_speed: f32,
    /// Height below which the entity is respawned.
    pub kill_plane_y: f32,
    pub respawn_point: Vec3,
    /// Entity whose rotation defines "forward" for move input (the client camera).
    pub reference_entity: EntityId,
    /// Simulation step in seconds.
    pub dt: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            shape: ShapeParams::default(),
            move_speed: DEFAULT_MOVE_SPEED,
            gravity: Vec3::from(GRAVITY),
            ground_friction: GROUND_FRICTION,
            jump_impulse: JUMP_IMPULSE,
            max_speed: MAX_SPEED,
            kill_plane_y: KILL_PLANE_Y,
            respawn_point: Vec3::from(RESPAWN_POINT),
            reference_entity: CAMERA_CLIENT_ENTITY_ID,
            dt: TICK_DT,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("shape.half_height", self.shape.half_height)?;
        positive("shape.radius", self.shape.radius)?;
        non_negative("move_speed", self.move_speed)?;
        finite_vec("gravity", self.gravity)?;
        non_negative("ground_friction", self.ground_friction)?;
        non_negative("jump_impulse", self.jump_impulse)?;
        positive("max_speed", self.max_speed)?;
        finite("kill_plane_y", self.kill_plane_y)?;
        finite_vec("respawn_point", self.respawn_point)?;
        positive("dt", self.dt)?;
        Ok(())
    }
}

/// Orbit camera constants for one client.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    /// Radians of yaw per unit of horizontal look input.
    pub sensitivity_x: f32,
    /// Radians of pitch per unit of vertical look input.
    pub sensitivity_y: f32,
    /// Trailing distance from the subject.
    pub distance: f32,
    /// Vertical offset above the subject.
    pub height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity_x: LOOK_SENSITIVITY_X,
            sensitivity_y: LOOK_SENSITIVITY_Y,
            distance: CAMERA_DISTANCE,
            height: CAMERA_HEIGHT,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("sensitivity_x", self.sensitivity_x)?;
        finite("sensitivity_y", self.sensitivity_y)?;
        positive("distance", self.distance)?;
        finite("height", self.height)?;
        Ok(())
    }
}

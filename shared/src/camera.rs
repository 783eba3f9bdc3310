//! Third-person orbit camera.
//!
//! Look input accumulates into a yaw/pitch pair owned by the caller ([`OrbitState`]).
//! Each update writes the camera entity's orientation and places it behind and above
//! the tracked subject.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::{
    collision::{Vec2, Vec3},
    config::{CameraConfig, ConfigError},
    math::quat_from_yaw_pitch,
    world::{EntityId, World},
};

/// Accumulated look angles for one client camera.
///
/// Invariants after every [`OrbitCamera::update`]: `yaw` in `[0, 2π)`,
/// `pitch` in `[-π/2, π/2]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitState {
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitState {
    #[inline]
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Unit vector the camera looks along.
    #[inline]
    pub fn look_direction(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, -sp, cy * cp)
    }
}

/// Wrap an angle into `[0, 2π)`, for any finite input.
#[inline]
pub fn wrap_yaw(yaw: f32) -> f32 {
    let wrapped = yaw.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[inline]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-FRAC_PI_2, FRAC_PI_2)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitCamera {
    config: CameraConfig,
}

impl OrbitCamera {
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Apply `look_delta` to `state` and return the wrapped/clamped result.
    pub fn integrate(&self, state: OrbitState, look_delta: Vec2) -> OrbitState {
        let yaw = state.yaw + look_delta.x * self.config.sensitivity_x;
        let pitch = state.pitch + look_delta.y * self.config.sensitivity_y;
        OrbitState::new(wrap_yaw(yaw), clamp_pitch(pitch))
    }

    /// Camera position trailing `subject` for the given orientation.
    #[inline]
    pub fn trailing_position(&self, state: &OrbitState, subject: Vec3) -> Vec3 {
        subject - state.look_direction() * self.config.distance
            + Vec3::new(0.0, self.config.height, 0.0)
    }

    /// Update the camera entity from `look_delta` and the subject's current position.
    ///
    /// Returns the new orbit state for the caller to persist until the next tick.
    pub fn update<W: World + ?Sized>(
        &self,
        world: &mut W,
        camera: EntityId,
        subject: EntityId,
        state: OrbitState,
        look_delta: Vec2,
    ) -> OrbitState {
        let next = self.integrate(state, look_delta);

        world.set_rotation(camera, quat_from_yaw_pitch(next.yaw, next.pitch));

        let subject_position = world.position(subject);
        let camera_position = self.trailing_position(&next, subject_position);
        world.set_position(camera, camera_position);

        log::trace!(
            "camera {camera}: yaw={:.3} pitch={:.3} pos={:?}",
            next.yaw,
            next.pitch,
            camera_position
        );

        next
    }
}

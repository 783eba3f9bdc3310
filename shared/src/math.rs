//! Vector algebra and orientation helpers.
//!
//! Pure, stateless functions. Orientation follows the host's left-handed, Y-up
//! convention with YXZ Euler order; the component layout of [`quat_from_yaw_pitch`]
//! must not change or cameras will rotate the wrong way on the host.

use nalgebra as na;

use crate::collision::{Quat, Vec2, Vec3};

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

#[inline]
pub fn scale(v: Vec3, s: f32) -> Vec3 {
    v * s
}

#[inline]
pub fn length(v: Vec3) -> f32 {
    v.norm()
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has zero length.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
}

/// Remove the component of `v` along the unit normal `n`.
///
/// The result lies in the plane orthogonal to `n`: sliding, not bouncing.
#[inline]
pub fn deflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * v.dot(&n)
}

/// Build a quaternion from raw `(x, y, z, w)` components without renormalising.
#[inline]
fn quat_from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Quat {
    na::UnitQuaternion::new_unchecked(na::Quaternion::new(w, x, y, z))
}

/// Camera orientation from yaw (about +Y) and pitch (about the yawed X axis).
#[inline]
pub fn quat_from_yaw_pitch(yaw: f32, pitch: f32) -> Quat {
    let (sy, cy) = (yaw * 0.5).sin_cos();
    let (sp, cp) = (pitch * 0.5).sin_cos();
    quat_from_xyzw(sp * cy, sy * cp, -sy * sp, cy * cp)
}

/// Rotation of `angle` radians about `axis`.
///
/// `axis` is used as given; pass a unit vector to get a unit quaternion.
#[inline]
pub fn quat_from_axis_angle(axis: Vec3, angle: f32) -> Quat {
    let (s, c) = (angle * 0.5).sin_cos();
    quat_from_xyzw(axis.x * s, axis.y * s, axis.z * s, c)
}

/// Heading (rotation about +Y) encoded in `q`.
#[inline]
pub fn yaw_from_quat(q: &Quat) -> f32 {
    let (x, y, z, w) = (q.i, q.j, q.k, q.w);
    (2.0 * (w * y + x * z)).atan2(1.0 - 2.0 * (y * y + z * z))
}

/// Rotate a camera-space planar direction into world XZ by `yaw`.
///
/// Returned as `(x, z)` packed into a [`Vec2`].
#[inline]
pub fn rotate_planar(dir: Vec2, yaw: f32) -> Vec2 {
    let (sin, cos) = yaw.sin_cos();
    Vec2::new(dir.x * cos + dir.y * sin, -dir.x * sin + dir.y * cos)
}

/// Yaw-only rotation facing the planar direction of `velocity`.
///
/// No horizontal component gives `atan2(0, 0) = 0`, i.e. facing +Z.
#[inline]
pub fn facing_from_velocity(velocity: Vec3) -> Quat {
    let yaw = velocity.x.atan2(velocity.z);
    quat_from_axis_angle(Vec3::y(), yaw)
}

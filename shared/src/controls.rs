use crate::collision::Vec2;

/// Per-tick player input for one controlled entity.
///
/// Supplied fresh each tick by the host. The movement core reads it but never writes it
/// back; the camera-relative rotation of `move_direction` is applied to a local copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlInput {
    /// Planar move intent in camera space (`x` = strafe, `y` = forward).
    pub move_direction: Vec2,
    pub jump: bool,
    /// Not consumed by the movement core.
    pub fire: bool,
    /// Look delta from mouse or right stick (`x` = yaw, `y` = pitch).
    pub look_delta: Vec2,
}

impl ControlInput {
    /// True when either move axis carries a non-zero value.
    #[inline]
    pub fn has_move_input(&self) -> bool {
        self.move_direction.x.abs() > 0.0 || self.move_direction.y.abs() > 0.0
    }
}

impl Default for ControlInput {
    fn default() -> Self {
        Self {
            move_direction: Vec2::zeros(),
            jump: false,
            fire: false,
            look_delta: Vec2::zeros(),
        }
    }
}

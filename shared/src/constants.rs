use crate::EntityId;

/// Fixed simulation step in seconds (20 Hz).
pub const TICK_DT: f32 = 1.0 / 20.0;

/// Gravity acceleration applied while airborne (units per second squared).
pub const GRAVITY: [f32; 3] = [0.0, -30.0, 0.0];

/// Multiplier applied to horizontal velocity every grounded tick.
pub const GROUND_FRICTION: f32 = 0.25;

/// Vertical velocity set when a grounded entity jumps.
pub const JUMP_IMPULSE: f32 = 8.0;

/// Hard ceiling on resolved velocity magnitude (units per second).
pub const MAX_SPEED: f32 = 50.0;

/// Anything below this height is treated as having fallen out of the world.
pub const KILL_PLANE_Y: f32 = -50.0;

/// Where entities that fall below [`KILL_PLANE_Y`] are teleported.
pub const RESPAWN_POINT: [f32; 3] = [80.0, 25.0, 80.0];

/// Where a freshly initialised controlled entity is placed.
pub const PLAYER_SPAWN_POINT: [f32; 3] = [8.0, 8.0, 8.0];

/// Horizontal move speed for player-class entities (units per second).
pub const DEFAULT_MOVE_SPEED: f32 = 6.0;

/// Full height of the player-class movement cylinder.
pub const DEFAULT_CYLINDER_HEIGHT: f32 = 1.4;

/// Radius of the player-class movement cylinder.
pub const DEFAULT_CYLINDER_RADIUS: f32 = 0.25;

/// Well-known entity id of the client camera.
pub const CAMERA_CLIENT_ENTITY_ID: EntityId = 65434;

/// Initial camera position before the first orbit update.
pub const CAMERA_DEFAULT_POSITION: [f32; 3] = [0.0, 5.0, -10.0];

/// Distance the orbit camera trails behind its subject.
pub const CAMERA_DISTANCE: f32 = 3.0;

/// Height offset of the orbit camera above its subject.
pub const CAMERA_HEIGHT: f32 = 1.5;

/// Radians of yaw per unit of horizontal look input.
pub const LOOK_SENSITIVITY_X: f32 = 0.005;

/// Radians of pitch per unit of vertical look input.
pub const LOOK_SENSITIVITY_Y: f32 = 0.005;

/// Blend time (seconds) used when switching between idle and run animations.
pub const ANIMATION_BLEND_S: f32 = 0.2;

pub const RUN_ANIMATION: &str = "run";
pub const IDLE_ANIMATION: &str = "idle";

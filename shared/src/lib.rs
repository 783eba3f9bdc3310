pub mod camera;
pub mod collision;
pub mod config;
pub mod constants;
pub mod controls;
pub mod math;
pub mod motion;
pub mod movement;
pub mod rapier_world;
pub mod session;
pub mod world;

#[cfg(test)]
mod test_world;

pub use camera::{OrbitCamera, OrbitState};
pub use collision::{
    CollisionHit, Quat, ResolveRequest, ResolveResult, ShapeParams, Vec2, Vec3, is_grounded,
    resolve,
};
pub use config::{CameraConfig, ConfigError, MotionConfig};
pub use controls::ControlInput;
pub use motion::{DesiredVelocity, DesiredVelocityParams, compute_desired_velocity};
pub use movement::{MotionController, MotionPhase, TickOutcome};
pub use rapier_world::{ColliderShapeDef, RapierQueryWorld, WorldStaticDef};
pub use session::ClientSession;
pub use world::{CosmeticError, EntityId, World};

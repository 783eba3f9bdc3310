pub mod arena;
pub mod tick;
pub mod world;

pub use arena::default_arena;
pub use tick::Simulation;
pub use world::{DebugDraw, EntityRecord, SimWorld};

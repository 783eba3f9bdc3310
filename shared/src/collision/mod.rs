/*!
Collision root module.

This module re-exports submodules that implement the character's collision handling
on top of the host's swept-cylinder query (`World::cast_cylinder`). The code is
split for clarity:

- types:     shared data types (ShapeParams, CollisionHit, ResolveResult, math aliases)
- settings:  skin offset, correction budget and probe distance
- ground:    downward probe deciding grounded/airborne
- kinematic: sweep-and-slide resolver
*/

pub mod ground;
pub mod kinematic;
pub mod settings;
pub mod types;

// Re-export commonly used types and functions.
pub use ground::is_grounded;
pub use kinematic::{ResolveRequest, resolve};
pub use types::{CollisionHit, Quat, ResolveResult, ShapeParams, Vec2, Vec3};

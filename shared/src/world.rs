//! The host-side collaborator the movement core runs against.
//!
//! The core holds no entity state of its own. Every read and write goes through a
//! [`World`] passed explicitly into each call, which keeps the controllers testable
//! without a live host and makes the data flow per tick obvious at the call site.

use thiserror::Error;

use crate::{
    ControlInput,
    collision::{CollisionHit, Quat, Vec3},
};

/// Opaque host identifier for any entity (player, camera, NPC).
pub type EntityId = u64;

/// Failure of a cosmetic (render-layer) side effect.
///
/// These never affect simulation state: the integrator captures them after the
/// physics write-back and reports them in its tick outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CosmeticError {
    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),
    #[error("entity {entity} has no animation named `{name}`")]
    MissingAnimation { entity: EntityId, name: String },
}

/// Entity state accessors and geometry queries provided by the host.
///
/// Contract
/// - Accessors are direct and infallible; the host owns entity lifecycle and is
///   responsible for only handing live ids to the controllers.
/// - `cast_cylinder` sweeps a Y-aligned cylinder centred at `origin` along `sweep` and
///   returns the nearest blocking surface with a time of impact in
///   `[0, max_time_of_impact]`, expressed as a fraction of `sweep`. `None` means the path
///   is unobstructed within that range.
/// - `debug_cylinder` is visualisation only and may be a no-op.
/// - `play_animation` and `animate_model` are cosmetic and allowed to fail.
pub trait World {
    fn spawn(&mut self) -> EntityId;

    fn position(&self, entity: EntityId) -> Vec3;
    fn set_position(&mut self, entity: EntityId, position: Vec3);

    fn velocity(&self, entity: EntityId) -> Vec3;
    fn set_velocity(&mut self, entity: EntityId, velocity: Vec3);

    fn rotation(&self, entity: EntityId) -> Quat;
    fn set_rotation(&mut self, entity: EntityId, rotation: Quat);

    fn client_controls(&self, entity: EntityId) -> ControlInput;
    fn set_client_controls(&mut self, entity: EntityId, controls: ControlInput);

    fn cast_cylinder(
        &self,
        origin: Vec3,
        sweep: Vec3,
        half_height: f32,
        radius: f32,
        max_time_of_impact: f32,
    ) -> Option<CollisionHit>;

    fn debug_cylinder(&mut self, center: Vec3, half_height: f32, radius: f32, color: &str);

    fn play_animation(
        &mut self,
        entity: EntityId,
        name: &str,
        blend_seconds: f32,
    ) -> Result<(), CosmeticError>;

    fn animate_model(&mut self, entity: EntityId) -> Result<(), CosmeticError>;
}

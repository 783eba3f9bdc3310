//! Per-tick movement integrator for controlled entities.
//!
//! A [`MotionController`] is a stateless strategy parameterised by a [`MotionConfig`].
//! Everything it touches lives in the host [`World`]; the host calls
//! [`MotionController::tick`] once per fixed step for every entity of that class.

use crate::{
    ControlInput,
    collision::{Quat, ResolveRequest, ResolveResult, Vec3, is_grounded, resolve},
    config::{ConfigError, MotionConfig},
    constants::{ANIMATION_BLEND_S, IDLE_ANIMATION, PLAYER_SPAWN_POINT, RUN_ANIMATION},
    math::{facing_from_velocity, length, normalize, scale, yaw_from_quat},
    motion::{DesiredVelocityParams, compute_desired_velocity, world_move_direction},
    world::{CosmeticError, EntityId, World},
};

/// Ground state of an entity for one tick, re-derived from a probe every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPhase {
    Grounded,
    Airborne,
}

impl MotionPhase {
    #[inline]
    pub fn from_grounded(grounded: bool) -> Self {
        if grounded {
            Self::Grounded
        } else {
            Self::Airborne
        }
    }
}

/// Output of a single [`MotionController::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    /// Phase used for this tick's physics (a jump reports `Airborne`).
    pub phase: MotionPhase,
    pub jumped: bool,
    pub resolve: ResolveResult,
    /// Resolved speed exceeded the ceiling and was rescaled.
    pub speed_clamped: bool,
    /// Entity fell below the kill plane and was teleported.
    pub respawned: bool,
    /// Position and velocity written back to the world.
    pub position: Vec3,
    pub velocity: Vec3,
    /// Result of the animation/facing update. A failure here never affects the fields above.
    pub cosmetic: Result<(), CosmeticError>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionController {
    config: MotionConfig,
}

impl MotionController {
    pub fn new(config: MotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Place a freshly spawned entity at the spawn point at rest, facing +Z, with idle controls.
    pub fn init<W: World + ?Sized>(&self, world: &mut W, entity: EntityId) {
        world.set_position(entity, Vec3::from(PLAYER_SPAWN_POINT));
        world.set_velocity(entity, Vec3::zeros());
        world.set_rotation(entity, Quat::identity());
        world.set_client_controls(entity, ControlInput::default());
    }

    /// Advance `entity` by one tick.
    ///
    /// Behavior
    /// - Reads controls, velocity and position; rotates move input by the heading of
    ///   the reference entity (the client camera).
    /// - Probes for ground, shapes the desired velocity (friction, input, gravity, jump).
    /// - Resolves motion against geometry with sweep-and-slide.
    /// - Clamps speed to the ceiling, then respawns if below the kill plane.
    /// - Writes position and velocity back before touching any cosmetic state.
    pub fn tick<W: World + ?Sized>(&self, world: &mut W, entity: EntityId) -> TickOutcome {
        let cfg = &self.config;

        let controls = world.client_controls(entity);
        let velocity = world.velocity(entity);
        let position = world.position(entity);

        let heading = yaw_from_quat(&world.rotation(cfg.reference_entity));
        let move_world = world_move_direction(&controls, heading);

        let grounded = is_grounded(world, position, cfg.shape);
        let desired = compute_desired_velocity(
            DesiredVelocityParams {
                velocity,
                move_world,
                jump: controls.jump,
                grounded,
            },
            cfg,
        );

        let resolved = resolve(
            &*world,
            ResolveRequest::with_defaults(position, desired.velocity, cfg.shape, cfg.dt),
        );

        let mut new_position = resolved.position;
        let mut new_velocity = resolved.velocity;

        let speed = length(new_velocity);
        let speed_clamped = speed > cfg.max_speed;
        if speed_clamped {
            log::debug!("entity {entity}: clamping speed {speed:.2} to {}", cfg.max_speed);
            new_velocity = scale(normalize(new_velocity), cfg.max_speed);
        }

        let respawned = new_position.y < cfg.kill_plane_y;
        if respawned {
            log::info!(
                "entity {entity} fell out of the world at {:?}; respawning at {:?}",
                new_position,
                cfg.respawn_point
            );
            new_position = cfg.respawn_point;
            new_velocity = Vec3::zeros();
        }

        world.set_position(entity, new_position);
        world.set_velocity(entity, new_velocity);

        let cosmetic = update_presentation(world, entity, &controls, new_velocity);
        if let Err(err) = &cosmetic {
            log::error!("entity {entity}: animation update failed: {err}");
        }

        log::trace!(
            "entity {entity}: grounded={} pos={:?} vel={:?} corrections={}",
            desired.grounded,
            new_position,
            new_velocity,
            resolved.corrections_used
        );

        TickOutcome {
            phase: MotionPhase::from_grounded(desired.grounded),
            jumped: desired.jumped,
            resolve: resolved,
            speed_clamped,
            respawned,
            position: new_position,
            velocity: new_velocity,
            cosmetic,
        }
    }
}

/// Face the direction of travel and pick run/idle. Render-layer only.
fn update_presentation<W: World + ?Sized>(
    world: &mut W,
    entity: EntityId,
    controls: &ControlInput,
    velocity: Vec3,
) -> Result<(), CosmeticError> {
    if controls.has_move_input() {
        world.set_rotation(entity, facing_from_velocity(velocity));
        world.play_animation(entity, RUN_ANIMATION, ANIMATION_BLEND_S)?;
    } else {
        world.play_animation(entity, IDLE_ANIMATION, ANIMATION_BLEND_S)?;
    }
    world.animate_model(entity)
}

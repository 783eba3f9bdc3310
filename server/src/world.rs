//! In-memory host world for the headless server.
//!
//! Entity state lives in a plain map keyed by [`EntityId`]; swept-shape queries are
//! answered by an immutable [`RapierQueryWorld`] built once from the level's statics.
//! Render-layer calls (debug draws, animations) are recorded so tools and tests can
//! inspect them.

use std::collections::{HashMap, HashSet};

use shared::{
    CollisionHit, ControlInput, CosmeticError, EntityId, Quat, RapierQueryWorld, Vec3, World,
    WorldStaticDef,
    constants::{IDLE_ANIMATION, RUN_ANIMATION},
};

/// Per-entity state owned by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityRecord {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub controls: ControlInput,
    /// Animation currently playing and its blend time.
    pub animation: Option<(String, f32)>,
    /// Number of `animate_model` calls received.
    pub animated_frames: u64,
}

impl Default for EntityRecord {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            rotation: Quat::identity(),
            controls: ControlInput::default(),
            animation: None,
            animated_frames: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DebugDraw {
    pub center: Vec3,
    pub half_height: f32,
    pub radius: f32,
    pub color: String,
}

pub struct SimWorld {
    statics: RapierQueryWorld,
    entities: HashMap<EntityId, EntityRecord>,
    next_id: EntityId,
    animations: HashSet<String>,
    debug_draws: Vec<DebugDraw>,
}

impl SimWorld {
    /// Build a world over the given static geometry with no entities.
    ///
    /// Models know the `run` and `idle` clips; see [`SimWorld::register_animation`].
    pub fn new(statics: Vec<WorldStaticDef>) -> Self {
        Self {
            statics: RapierQueryWorld::build(statics),
            entities: HashMap::new(),
            next_id: 1,
            animations: [RUN_ANIMATION, IDLE_ANIMATION]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            debug_draws: Vec::new(),
        }
    }

    pub fn register_animation(&mut self, name: &str) {
        self.animations.insert(name.to_owned());
    }

    pub fn unregister_animation(&mut self, name: &str) {
        self.animations.remove(name);
    }

    pub fn entity(&self, entity: EntityId) -> Option<&EntityRecord> {
        self.entities.get(&entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Debug draws recorded since the last [`SimWorld::clear_debug_draws`].
    pub fn debug_draws(&self) -> &[DebugDraw] {
        &self.debug_draws
    }

    pub fn clear_debug_draws(&mut self) {
        self.debug_draws.clear();
    }

    fn read(&self, entity: EntityId, what: &str) -> Option<&EntityRecord> {
        let record = self.entities.get(&entity);
        if record.is_none() {
            log::warn!("read of {what} for unknown entity {entity}");
        }
        record
    }

    /// Writes create the record; hosts address some entities (the client camera) by a
    /// fixed id without spawning them.
    fn write(&mut self, entity: EntityId) -> &mut EntityRecord {
        self.entities.entry(entity).or_default()
    }
}

impl World for SimWorld {
    fn spawn(&mut self) -> EntityId {
        while self.entities.contains_key(&self.next_id) {
            self.next_id += 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entities.insert(id, EntityRecord::default());
        log::debug!("spawned entity {id}");
        id
    }

    fn position(&self, entity: EntityId) -> Vec3 {
        self.read(entity, "position")
            .map(|r| r.position)
            .unwrap_or_else(Vec3::zeros)
    }

    fn set_position(&mut self, entity: EntityId, position: Vec3) {
        self.write(entity).position = position;
    }

    fn velocity(&self, entity: EntityId) -> Vec3 {
        self.read(entity, "velocity")
            .map(|r| r.velocity)
            .unwrap_or_else(Vec3::zeros)
    }

    fn set_velocity(&mut self, entity: EntityId, velocity: Vec3) {
        self.write(entity).velocity = velocity;
    }

    fn rotation(&self, entity: EntityId) -> Quat {
        self.read(entity, "rotation")
            .map(|r| r.rotation)
            .unwrap_or_else(Quat::identity)
    }

    fn set_rotation(&mut self, entity: EntityId, rotation: Quat) {
        self.write(entity).rotation = rotation;
    }

    fn client_controls(&self, entity: EntityId) -> ControlInput {
        self.read(entity, "controls")
            .map(|r| r.controls)
            .unwrap_or_default()
    }

    fn set_client_controls(&mut self, entity: EntityId, controls: ControlInput) {
        self.write(entity).controls = controls;
    }

    fn cast_cylinder(
        &self,
        origin: Vec3,
        sweep: Vec3,
        half_height: f32,
        radius: f32,
        max_time_of_impact: f32,
    ) -> Option<CollisionHit> {
        self.statics
            .cast_cylinder(origin, sweep, half_height, radius, max_time_of_impact)
    }

    fn debug_cylinder(&mut self, center: Vec3, half_height: f32, radius: f32, color: &str) {
        log::trace!("debug cylinder at {center:?} ({color})");
        self.debug_draws.push(DebugDraw {
            center,
            half_height,
            radius,
            color: color.to_owned(),
        });
    }

    fn play_animation(
        &mut self,
        entity: EntityId,
        name: &str,
        blend_seconds: f32,
    ) -> Result<(), CosmeticError> {
        if !self.animations.contains(name) {
            return Err(CosmeticError::MissingAnimation {
                entity,
                name: name.to_owned(),
            });
        }
        let record = self
            .entities
            .get_mut(&entity)
            .ok_or(CosmeticError::UnknownEntity(entity))?;
        record.animation = Some((name.to_owned(), blend_seconds));
        Ok(())
    }

    fn animate_model(&mut self, entity: EntityId) -> Result<(), CosmeticError> {
        let record = self
            .entities
            .get_mut(&entity)
            .ok_or(CosmeticError::UnknownEntity(entity))?;
        record.animated_frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::default_arena;
    use shared::{
        ColliderShapeDef, MotionController, MotionPhase, ShapeParams, Vec2,
        constants::{CAMERA_CLIENT_ENTITY_ID, PLAYER_SPAWN_POINT},
        is_grounded,
        rapier_world::rapier3d::prelude::vector,
    };

    #[test]
    fn spawn_hands_out_fresh_ids() {
        let mut world = SimWorld::new(Vec::new());
        world.set_position(2, Vec3::x());
        let a = world.spawn();
        let b = world.spawn();
        assert_eq!(a, 1);
        assert_eq!(b, 3);
        assert_eq!(world.entity_count(), 3);
    }

    #[test]
    fn unknown_entities_read_as_defaults() {
        let world = SimWorld::new(Vec::new());
        assert_eq!(world.position(42), Vec3::zeros());
        assert_eq!(world.rotation(42), Quat::identity());
        assert_eq!(world.client_controls(42), ControlInput::default());
        assert!(world.entity(42).is_none());
    }

    #[test]
    fn cosmetic_calls_fail_for_unknown_entity_or_clip() {
        let mut world = SimWorld::new(Vec::new());
        assert_eq!(
            world.animate_model(9),
            Err(CosmeticError::UnknownEntity(9))
        );

        let id = world.spawn();
        assert!(matches!(
            world.play_animation(id, "dance", 0.2),
            Err(CosmeticError::MissingAnimation { .. })
        ));
        assert!(world.play_animation(id, RUN_ANIMATION, 0.2).is_ok());
        assert_eq!(
            world.entity(id).and_then(|r| r.animation.clone()),
            Some((RUN_ANIMATION.to_owned(), 0.2))
        );
    }

    #[test]
    fn registered_clips_can_be_played() {
        let mut world = SimWorld::new(Vec::new());
        let id = world.spawn();
        world.register_animation("wave");
        assert!(world.play_animation(id, "wave", 0.5).is_ok());
        assert_eq!(
            world.entity(id).and_then(|r| r.animation.clone()),
            Some(("wave".to_owned(), 0.5))
        );
    }

    #[test]
    fn missing_run_clip_still_writes_back_motion() {
        let mut world = SimWorld::new(default_arena());
        world.unregister_animation(RUN_ANIMATION);
        let motion = MotionController::default();
        let id = world.spawn();
        let start = Vec3::new(0.0, 0.5, 0.0);
        world.set_position(id, start);
        world.set_rotation(CAMERA_CLIENT_ENTITY_ID, Quat::identity());
        world.set_client_controls(
            id,
            ControlInput {
                move_direction: Vec2::new(1.0, 0.0),
                ..ControlInput::default()
            },
        );

        let outcome = motion.tick(&mut world, id);

        assert!(matches!(
            &outcome.cosmetic,
            Err(CosmeticError::MissingAnimation { name, .. }) if name == RUN_ANIMATION
        ));
        assert_eq!(world.position(id), outcome.position);
        assert_eq!(world.velocity(id), outcome.velocity);
        assert!((outcome.position.x - start.x - 0.3).abs() < 1.0e-3);
        assert_eq!(world.entity(id).map(|r| r.animated_frames), Some(0));
    }

    #[test]
    fn ground_check_on_arena_floor_is_grounded_and_drawn() {
        let mut world = SimWorld::new(default_arena());
        let shape = ShapeParams::default();
        assert!(is_grounded(&mut world, Vec3::new(0.0, 0.05, 0.0), shape));
        assert_eq!(world.debug_draws().len(), 1);
        assert_eq!(world.debug_draws()[0].color, "blue");

        world.clear_debug_draws();
        assert!(!is_grounded(&mut world, Vec3::new(0.0, 1.0, 0.0), shape));
        assert!(world.debug_draws().is_empty());
    }

    #[test]
    fn idle_entity_falls_and_comes_to_rest_on_floor() {
        let mut world = SimWorld::new(default_arena());
        let motion = MotionController::default();
        let id = world.spawn();
        motion.init(&mut world, id);
        assert_eq!(world.position(id), Vec3::from(PLAYER_SPAWN_POINT));

        for _ in 0..60 {
            motion.tick(&mut world, id);
        }

        let p = world.position(id);
        assert!(p.y >= -1.0e-3, "sank through floor: {p:?}");
        assert!(p.y < 0.15, "still airborne: {p:?}");
        assert!((p.x - PLAYER_SPAWN_POINT[0]).abs() < 1.0e-3);
        assert!((p.z - PLAYER_SPAWN_POINT[2]).abs() < 1.0e-3);

        let outcome = motion.tick(&mut world, id);
        assert_eq!(outcome.phase, MotionPhase::Grounded);
        assert!(outcome.cosmetic.is_ok());
    }

    #[test]
    fn walking_into_a_wall_stops_at_its_face() {
        let floor = WorldStaticDef::new(
            0,
            vector![0.0, 0.0, 0.0],
            ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
        );
        // Face at z = 2.0.
        let wall = WorldStaticDef::new(
            1,
            vector![0.0, 2.0, 2.5],
            ColliderShapeDef::Cuboid {
                half_extents: vector![5.0, 2.0, 0.5],
            },
        );
        let mut world = SimWorld::new(vec![floor, wall]);
        let motion = MotionController::default();
        let id = world.spawn();
        world.set_rotation(CAMERA_CLIENT_ENTITY_ID, Quat::identity());
        world.set_client_controls(
            id,
            ControlInput {
                move_direction: Vec2::new(0.0, 1.0),
                ..ControlInput::default()
            },
        );

        for _ in 0..40 {
            motion.tick(&mut world, id);
        }

        let p = world.position(id);
        assert!(p.z <= 1.75 + 1.0e-3, "passed through wall: {p:?}");
        assert!(p.z > 1.6, "stopped short: {p:?}");
        assert!(p.x.abs() < 1.0e-3);
        assert!(p.y >= -1.0e-3 && p.y < 0.1);
    }
}

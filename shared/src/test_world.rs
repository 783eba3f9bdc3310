//! Scripted in-memory [`World`] for unit tests.
//!
//! Casts are answered from a queue of prepared results (one entry per call, `None` once
//! the queue is empty unless a fallback is set), and every cast and cosmetic call is
//! recorded for assertions.

use std::collections::{HashMap, VecDeque};

use crate::{
    ControlInput,
    collision::{CollisionHit, Quat, Vec3},
    world::{CosmeticError, EntityId, World},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CastCall {
    pub origin: Vec3,
    pub sweep: Vec3,
    pub half_height: f32,
    pub radius: f32,
    pub max_time_of_impact: f32,
}

#[derive(Clone, Debug)]
pub struct Record {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub controls: ControlInput,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            rotation: Quat::identity(),
            controls: ControlInput::default(),
        }
    }
}

#[derive(Default)]
pub struct ScriptedWorld {
    pub records: HashMap<EntityId, Record>,
    next_id: EntityId,
    pub casts: std::cell::RefCell<VecDeque<Option<CollisionHit>>>,
    pub cast_fallback: Option<CollisionHit>,
    pub cast_log: std::cell::RefCell<Vec<CastCall>>,
    pub debug_draws: Vec<(Vec3, f32, f32, String)>,
    pub animations: Vec<(EntityId, String, f32)>,
    pub animate_calls: u32,
    pub fail_animations: bool,
}

impl ScriptedWorld {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, id: EntityId, position: Vec3, velocity: Vec3) -> Self {
        self.records.insert(
            id,
            Record {
                position,
                velocity,
                ..Default::default()
            },
        );
        self
    }

    pub fn push_cast(&self, result: Option<CollisionHit>) {
        self.casts.borrow_mut().push_back(result);
    }

    pub fn cast_count(&self) -> usize {
        self.cast_log.borrow().len()
    }

    fn record_mut(&mut self, entity: EntityId) -> &mut Record {
        self.records.entry(entity).or_default()
    }
}

impl World for ScriptedWorld {
    fn spawn(&mut self) -> EntityId {
        while self.records.contains_key(&self.next_id) {
            self.next_id += 1;
        }
        let id = self.next_id;
        self.records.insert(id, Record::default());
        self.next_id += 1;
        id
    }

    fn position(&self, entity: EntityId) -> Vec3 {
        self.records.get(&entity).map(|r| r.position).unwrap_or_default()
    }

    fn set_position(&mut self, entity: EntityId, position: Vec3) {
        self.record_mut(entity).position = position;
    }

    fn velocity(&self, entity: EntityId) -> Vec3 {
        self.records.get(&entity).map(|r| r.velocity).unwrap_or_default()
    }

    fn set_velocity(&mut self, entity: EntityId, velocity: Vec3) {
        self.record_mut(entity).velocity = velocity;
    }

    fn rotation(&self, entity: EntityId) -> Quat {
        self.records
            .get(&entity)
            .map(|r| r.rotation)
            .unwrap_or_else(Quat::identity)
    }

    fn set_rotation(&mut self, entity: EntityId, rotation: Quat) {
        self.record_mut(entity).rotation = rotation;
    }

    fn client_controls(&self, entity: EntityId) -> ControlInput {
        self.records.get(&entity).map(|r| r.controls).unwrap_or_default()
    }

    fn set_client_controls(&mut self, entity: EntityId, controls: ControlInput) {
        self.record_mut(entity).controls = controls;
    }

    fn cast_cylinder(
        &self,
        origin: Vec3,
        sweep: Vec3,
        half_height: f32,
        radius: f32,
        max_time_of_impact: f32,
    ) -> Option<CollisionHit> {
        self.cast_log.borrow_mut().push(CastCall {
            origin,
            sweep,
            half_height,
            radius,
            max_time_of_impact,
        });
        self.casts
            .borrow_mut()
            .pop_front()
            .unwrap_or(self.cast_fallback)
    }

    fn debug_cylinder(&mut self, center: Vec3, half_height: f32, radius: f32, color: &str) {
        self.debug_draws
            .push((center, half_height, radius, color.to_owned()));
    }

    fn play_animation(
        &mut self,
        entity: EntityId,
        name: &str,
        blend_seconds: f32,
    ) -> Result<(), CosmeticError> {
        if self.fail_animations {
            return Err(CosmeticError::MissingAnimation {
                entity,
                name: name.to_owned(),
            });
        }
        self.animations.push((entity, name.to_owned(), blend_seconds));
        Ok(())
    }

    fn animate_model(&mut self, _entity: EntityId) -> Result<(), CosmeticError> {
        self.animate_calls += 1;
        Ok(())
    }
}

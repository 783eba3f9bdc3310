//! Rapier-backed query world over immutable level geometry.
//!
//! Hosts map their level data to [`WorldStaticDef`]s, build a [`RapierQueryWorld`]
//! once, and answer the movement core's cylinder sweeps through
//! [`RapierQueryWorld::cast_cylinder`].
//!
//! Given the same defs (sorted by `id`), the build is deterministic. Statics are assumed
//! not to move after construction.

// Re-export Rapier so hosts can build defs without depending on `rapier3d` directly.
pub use rapier3d;

use rapier3d::{
    na::{Translation3, UnitQuaternion},
    parry::query::ShapeCastOptions,
    prelude::*,
};

use crate::collision::{CollisionHit, Vec3};

/// Schema-agnostic definition of an immutable world collider.
///
/// Units are meters. For planes the normal is `rotation * +Y` and the plane passes
/// through `translation + normal * offset_along_normal`.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable unique identifier used for insertion order.
    pub id: u32,
    pub translation: Vector<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub shape: ColliderShapeDef,
}

impl WorldStaticDef {
    pub fn new(id: u32, translation: Vector<f32>, shape: ColliderShapeDef) -> Self {
        Self {
            id,
            translation,
            rotation: UnitQuaternion::identity(),
            shape,
        }
    }

    pub fn with_rotation(mut self, rotation: UnitQuaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    fn is_finite(&self) -> bool {
        let t = &self.translation;
        let r = self.rotation.quaternion();
        let shape_ok = match &self.shape {
            ColliderShapeDef::Plane {
                offset_along_normal,
            } => offset_along_normal.is_finite(),
            ColliderShapeDef::Cuboid { half_extents } => {
                half_extents.iter().all(|v| v.is_finite() && *v > 0.0)
            }
            ColliderShapeDef::Sphere { radius } => radius.is_finite() && *radius > 0.0,
            ColliderShapeDef::CapsuleY {
                radius,
                half_height,
            }
            | ColliderShapeDef::CylinderY {
                radius,
                half_height,
            } => radius.is_finite() && *radius > 0.0 && half_height.is_finite() && *half_height > 0.0,
        };
        shape_ok && t.iter().all(|v| v.is_finite()) && r.coords.iter().all(|v| v.is_finite())
    }
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite half-space; solid below the plane.
    Plane { offset_along_normal: f32 },
    /// Oriented box with given half-extents.
    Cuboid { half_extents: Vector<f32> },
    Sphere { radius: f32 },
    CapsuleY { radius: f32, half_height: f32 },
    CylinderY { radius: f32, half_height: f32 },
}

/// In-memory Rapier structures for scene queries against a static world.
pub struct RapierQueryWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhaseBvh,
    pub narrow_phase: NarrowPhase,
}

impl RapierQueryWorld {
    /// Build a query world from static collider definitions.
    ///
    /// Defs with non-finite or degenerate values are skipped with a warning.
    pub fn build(mut defs: Vec<WorldStaticDef>) -> Self {
        defs.sort_by_key(|d| d.id);

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        for def in defs.into_iter() {
            if !def.is_finite() {
                log::warn!("skipping static {}: invalid geometry {:?}", def.id, def.shape);
                continue;
            }

            // Half-spaces carry their full world placement on the collider.
            let pose = match def.shape {
                ColliderShapeDef::Plane { .. } => Isometry::identity(),
                _ => Isometry::from_parts(Translation3::from(def.translation), def.rotation),
            };

            let rb = RigidBodyBuilder::fixed().pose(pose).build();
            let rb_handle = bodies.insert(rb);
            colliders.insert_with_parent(collider_from_def(&def), rb_handle, &mut bodies);
        }

        // Collision detection only (no dynamics): fills the broad-phase BVH so queries run.
        let mut broad_phase = BroadPhaseBvh::new();
        let mut narrow_phase = NarrowPhase::new();
        let mut collision_pipeline = CollisionPipeline::new();
        collision_pipeline.step(
            0.0,
            &mut broad_phase,
            &mut narrow_phase,
            &mut bodies,
            &mut colliders,
            &(),
            &(),
        );

        log::info!("built static query world with {} colliders", colliders.len());

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase,
        }
    }

    /// Borrowed `QueryPipeline` view; use it within the scope of the borrow.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }

    /// Sweep an upright cylinder centred at `origin` along `sweep`.
    ///
    /// `time_of_impact` is in units of `sweep`, capped at `max_time_of_impact`. The
    /// returned normal is unit length and faces against the sweep.
    pub fn cast_cylinder(
        &self,
        origin: Vec3,
        sweep: Vec3,
        half_height: f32,
        radius: f32,
        max_time_of_impact: f32,
    ) -> Option<CollisionHit> {
        if max_time_of_impact <= 0.0 || sweep.norm_squared() == 0.0 {
            return None;
        }

        let shape = Cylinder::new(half_height, radius);
        let pose = Isometry::translation(origin.x, origin.y, origin.z);
        let vel = vector![sweep.x, sweep.y, sweep.z];
        let options = ShapeCastOptions::with_max_time_of_impact(max_time_of_impact);

        let (_, hit) = self
            .query_pipeline(QueryFilter::default())
            .cast_shape(&pose, &vel, &shape, options)?;

        let n = hit.normal1.into_inner();
        let mut normal = Vec3::new(n.x, n.y, n.z);
        if normal.dot(&sweep) > 0.0 {
            normal = -normal;
        }
        let normal = normal.try_normalize(0.0)?;

        Some(CollisionHit::new(normal, hit.time_of_impact))
    }
}

/// Build a Rapier collider from a `WorldStaticDef`.
///
/// Non-plane shapes are created with identity local transform; the parent body holds the
/// pose.
fn collider_from_def(def: &WorldStaticDef) -> Collider {
    match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => {
            // n ⋅ x = dist for any point x on the plane.
            let n = def.rotation * Vector::y();
            let dist = n.dot(&def.translation) + *offset_along_normal;
            let unit_n = UnitVector::new_normalize(n);

            ColliderBuilder::new(SharedShape::new(HalfSpace::new(unit_n)))
                .translation(unit_n.into_inner() * dist)
                .build()
        }

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build()
        }

        ColliderShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius).build(),

        ColliderShapeDef::CapsuleY {
            radius,
            half_height,
        } => ColliderBuilder::capsule_y(*half_height, *radius).build(),

        ColliderShapeDef::CylinderY {
            radius,
            half_height,
        } => ColliderBuilder::cylinder(*half_height, *radius).build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HH: f32 = 0.7;
    const R: f32 = 0.25;

    fn floor_at(y: f32) -> WorldStaticDef {
        WorldStaticDef::new(
            0,
            vector![0.0, y, 0.0],
            ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
        )
    }

    fn wall_at_x(x: f32) -> WorldStaticDef {
        WorldStaticDef::new(
            1,
            vector![x + 0.5, 5.0, 0.0],
            ColliderShapeDef::Cuboid {
                half_extents: vector![0.5, 5.0, 5.0],
            },
        )
    }

    #[test]
    fn downward_probe_hits_floor_with_up_normal() {
        let world = RapierQueryWorld::build(vec![floor_at(0.0)]);

        // Cylinder base 0.05 above the floor.
        let hit = world
            .cast_cylinder(Vec3::new(0.0, HH + 0.05, 0.0), -Vec3::y(), HH, R, 0.1)
            .expect("floor within probe range");

        assert!((hit.time_of_impact - 0.05).abs() < 1.0e-3);
        assert!((hit.normal - Vec3::y()).norm() < 1.0e-3);
    }

    #[test]
    fn probe_out_of_range_misses() {
        let world = RapierQueryWorld::build(vec![floor_at(0.0)]);
        let hit = world.cast_cylinder(Vec3::new(0.0, HH + 0.5, 0.0), -Vec3::y(), HH, R, 0.1);
        assert!(hit.is_none());
    }

    #[test]
    fn sideways_sweep_hits_wall_face() {
        let world = RapierQueryWorld::build(vec![wall_at_x(1.0)]);

        // Cylinder surface at x = 0.25, wall face at x = 1.0, moving 5 m/s.
        let hit = world
            .cast_cylinder(Vec3::new(0.0, 1.0, 0.0), Vec3::new(5.0, 0.0, 0.0), HH, R, 1.0)
            .expect("wall ahead");

        assert!((hit.time_of_impact - 0.15).abs() < 1.0e-3);
        assert!((hit.normal - Vec3::new(-1.0, 0.0, 0.0)).norm() < 1.0e-3);
    }

    #[test]
    fn raised_plane_uses_translation_once() {
        let world = RapierQueryWorld::build(vec![floor_at(2.0)]);
        let hit = world
            .cast_cylinder(Vec3::new(0.0, 2.0 + HH + 0.02, 0.0), -Vec3::y(), HH, R, 0.1)
            .expect("raised floor");
        assert!((hit.time_of_impact - 0.02).abs() < 1.0e-3);
    }

    #[test]
    fn zero_sweep_or_budget_never_hits() {
        let world = RapierQueryWorld::build(vec![floor_at(0.0)]);
        let origin = Vec3::new(0.0, HH, 0.0);
        assert!(world.cast_cylinder(origin, Vec3::zeros(), HH, R, 1.0).is_none());
        assert!(world.cast_cylinder(origin, -Vec3::y(), HH, R, 0.0).is_none());
    }

    #[test]
    fn invalid_defs_are_skipped() {
        let bad = WorldStaticDef::new(
            7,
            vector![f32::NAN, 0.0, 0.0],
            ColliderShapeDef::Sphere { radius: 1.0 },
        );
        let world = RapierQueryWorld::build(vec![bad, wall_at_x(3.0)]);
        assert_eq!(world.colliders.len(), 1);
    }
}

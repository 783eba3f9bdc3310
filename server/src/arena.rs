//! Default static level used by the headless server.

use shared::rapier_world::rapier3d::{na::UnitQuaternion, prelude::vector};
use shared::{ColliderShapeDef, WorldStaticDef};

/// Half-width of the walled play area on X and Z.
pub const ARENA_HALF_EXTENT: f32 = 100.0;

/// Top surface height of the ledge block.
pub const LEDGE_TOP: f32 = 2.0;

/// Static colliders for the default arena.
///
/// - Infinite ground plane at y = 0.
/// - Four perimeter walls enclosing `[-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT]` on X and Z.
/// - A ledge block to stand on and walk off.
/// - A pillar inside the spawn quadrant to slide around.
/// - A shallow ramp (tilted box).
pub fn default_arena() -> Vec<WorldStaticDef> {
    let mut defs = vec![WorldStaticDef::new(
        0,
        vector![0.0, 0.0, 0.0],
        ColliderShapeDef::Plane {
            offset_along_normal: 0.0,
        },
    )];

    let e = ARENA_HALF_EXTENT;
    let wall_height = 4.0;
    let thickness = 0.5;
    let walls = [
        (vector![e + thickness, wall_height, 0.0], vector![thickness, wall_height, e]),
        (vector![-e - thickness, wall_height, 0.0], vector![thickness, wall_height, e]),
        (vector![0.0, wall_height, e + thickness], vector![e, wall_height, thickness]),
        (vector![0.0, wall_height, -e - thickness], vector![e, wall_height, thickness]),
    ];
    for (i, (translation, half_extents)) in walls.into_iter().enumerate() {
        defs.push(WorldStaticDef::new(
            1 + i as u32,
            translation,
            ColliderShapeDef::Cuboid { half_extents },
        ));
    }

    // Ledge: 4x4 block whose top sits at LEDGE_TOP.
    defs.push(WorldStaticDef::new(
        10,
        vector![-8.0, LEDGE_TOP * 0.5, -8.0],
        ColliderShapeDef::Cuboid {
            half_extents: vector![2.0, LEDGE_TOP * 0.5, 2.0],
        },
    ));

    defs.push(WorldStaticDef::new(
        11,
        vector![14.0, 2.0, 14.0],
        ColliderShapeDef::CylinderY {
            radius: 1.0,
            half_height: 2.0,
        },
    ));

    // Tilt around X by -15 degrees so moving +Z goes uphill.
    defs.push(
        WorldStaticDef::new(
            12,
            vector![-14.0, 0.0, 10.0],
            ColliderShapeDef::Cuboid {
                half_extents: vector![1.5, 0.5, 6.0],
            },
        )
        .with_rotation(UnitQuaternion::from_euler_angles(
            -15f32.to_radians(),
            0.0,
            0.0,
        )),
    );

    defs
}

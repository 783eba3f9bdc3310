//! Per-client glue: one controlled player plus its orbit camera.
//!
//! Hosts create a [`ClientSession`] when a client connects and call
//! [`ClientSession::update`] whenever fresh input arrives. Physics for the player runs
//! separately in the fixed-step tick via [`MotionController::tick`].

use crate::{
    ControlInput,
    camera::{OrbitCamera, OrbitState},
    collision::{Quat, Vec3},
    constants::{CAMERA_CLIENT_ENTITY_ID, CAMERA_DEFAULT_POSITION},
    movement::MotionController,
    world::{EntityId, World},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientSession {
    pub player: EntityId,
    pub camera: EntityId,
    pub orbit: OrbitState,
}

impl ClientSession {
    /// Spawn the player entity, place it at the spawn point and seat the camera.
    ///
    /// The camera uses the well-known client camera id, which is also the heading
    /// reference for the player's move input.
    pub fn init<W: World + ?Sized>(world: &mut W, motion: &MotionController) -> Self {
        let player = world.spawn();
        motion.init(world, player);

        let camera = CAMERA_CLIENT_ENTITY_ID;
        world.set_position(camera, Vec3::from(CAMERA_DEFAULT_POSITION));
        world.set_rotation(camera, Quat::identity());

        log::info!("client session started: player={player} camera={camera}");

        Self {
            player,
            camera,
            orbit: OrbitState::default(),
        }
    }

    /// Store the latest controls on the player and move the camera.
    pub fn update<W: World + ?Sized>(
        &mut self,
        world: &mut W,
        camera: &OrbitCamera,
        controls: ControlInput,
    ) {
        world.set_client_controls(self.player, controls);
        self.orbit = camera.update(
            world,
            self.camera,
            self.player,
            self.orbit,
            controls.look_delta,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collision::Vec2, constants::PLAYER_SPAWN_POINT, test_world::ScriptedWorld};

    #[test]
    fn init_spawns_player_and_seats_camera() {
        let mut world = ScriptedWorld::new();
        let session = ClientSession::init(&mut world, &MotionController::default());

        assert_eq!(world.position(session.player), Vec3::from(PLAYER_SPAWN_POINT));
        assert_eq!(world.velocity(session.player), Vec3::zeros());
        assert_eq!(session.camera, CAMERA_CLIENT_ENTITY_ID);
        assert_eq!(world.position(session.camera), Vec3::from(CAMERA_DEFAULT_POSITION));
        assert_eq!(world.rotation(session.camera), Quat::identity());
        assert_eq!(session.orbit, OrbitState::default());
    }

    #[test]
    fn update_forwards_controls_and_orbits_camera() {
        let mut world = ScriptedWorld::new();
        let mut session = ClientSession::init(&mut world, &MotionController::default());

        let controls = ControlInput {
            move_direction: Vec2::new(0.0, 1.0),
            jump: true,
            look_delta: Vec2::new(100.0, 0.0),
            ..ControlInput::default()
        };
        session.update(&mut world, &OrbitCamera::default(), controls);

        assert_eq!(world.client_controls(session.player), controls);
        assert!((session.orbit.yaw - 0.5).abs() < 1.0e-5);

        // Camera now trails the player rather than sitting at its default spot.
        let player = world.position(session.player);
        let cam = world.position(session.camera);
        assert!(((cam - player).y - 1.5).abs() < 1.0e-4);
        let planar = Vec2::new(cam.x - player.x, cam.z - player.z).norm();
        assert!((planar - 3.0).abs() < 1.0e-4);
    }

    #[test]
    fn orbit_state_persists_between_updates() {
        let mut world = ScriptedWorld::new();
        let mut session = ClientSession::init(&mut world, &MotionController::default());
        let camera = OrbitCamera::default();

        let look = ControlInput {
            look_delta: Vec2::new(0.0, 40.0),
            ..ControlInput::default()
        };
        session.update(&mut world, &camera, look);
        session.update(&mut world, &camera, look);

        assert!((session.orbit.pitch - 0.4).abs() < 1.0e-5);
    }
}

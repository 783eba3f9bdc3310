//! Fixed-step simulation driver.
//!
//! One [`Simulation::step`] is one server tick: the client's fresh input is applied
//! through its [`ClientSession`] (controls + camera), then the player is advanced by the
//! [`MotionController`].

use shared::{
    CameraConfig, ClientSession, ConfigError, ControlInput, MotionConfig, MotionController,
    OrbitCamera, TickOutcome, Vec3, World, WorldStaticDef,
};

use crate::{arena::default_arena, world::SimWorld};

pub struct Simulation {
    world: SimWorld,
    motion: MotionController,
    camera: OrbitCamera,
    session: ClientSession,
    tick: u64,
}

impl Simulation {
    /// Build the world from `statics` and start one client session.
    pub fn new(
        statics: Vec<WorldStaticDef>,
        motion: MotionConfig,
        camera: CameraConfig,
    ) -> Result<Self, ConfigError> {
        let motion = MotionController::new(motion)?;
        let camera = OrbitCamera::new(camera)?;

        let mut world = SimWorld::new(statics);
        let session = ClientSession::init(&mut world, &motion);

        log::info!(
            "simulation started: dt={}s player={} camera={}",
            motion.config().dt,
            session.player,
            session.camera
        );

        Ok(Self {
            world,
            motion,
            camera,
            session,
            tick: 0,
        })
    }

    /// Default arena with default player and camera configuration.
    pub fn with_default_arena() -> Result<Self, ConfigError> {
        Self::new(
            default_arena(),
            MotionConfig::default(),
            CameraConfig::default(),
        )
    }

    /// Advance one tick with the client's input for this tick.
    pub fn step(&mut self, controls: ControlInput) -> TickOutcome {
        self.world.clear_debug_draws();
        self.session.update(&mut self.world, &self.camera, controls);
        let outcome = self.motion.tick(&mut self.world, self.session.player);
        self.tick += 1;
        outcome
    }

    /// Run one tick per input and return the last outcome, if any.
    pub fn run<I>(&mut self, inputs: I) -> Option<TickOutcome>
    where
        I: IntoIterator<Item = ControlInput>,
    {
        inputs.into_iter().map(|c| self.step(c)).last()
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds elapsed.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.tick as f32 * self.motion.config().dt
    }

    pub fn player_position(&self) -> Vec3 {
        self.world.position(self.session.player)
    }

    pub fn camera_position(&self) -> Vec3 {
        self.world.position(self.session.camera)
    }

    pub fn session(&self) -> &ClientSession {
        &self.session
    }

    pub fn world(&self) -> &SimWorld {
        &self.world
    }
}

use std::{error::Error, iter::repeat_n};

use server::Simulation;
use shared::{ControlInput, Vec2};

fn idle() -> ControlInput {
    ControlInput::default()
}

fn walk(forward: f32, strafe: f32) -> ControlInput {
    ControlInput {
        move_direction: Vec2::new(strafe, forward),
        ..ControlInput::default()
    }
}

/// Settle, walk, jump, then turn the camera and walk the new way.
fn script() -> Vec<ControlInput> {
    let mut inputs = Vec::new();
    inputs.extend(repeat_n(idle(), 30));
    inputs.extend(repeat_n(walk(1.0, 0.0), 40));
    inputs.push(ControlInput {
        jump: true,
        ..walk(1.0, 0.0)
    });
    inputs.extend(repeat_n(walk(1.0, 0.0), 20));
    inputs.push(ControlInput {
        look_delta: Vec2::new(std::f32::consts::FRAC_PI_2 / 0.005, 0.0),
        ..idle()
    });
    inputs.extend(repeat_n(walk(1.0, 0.5), 60));
    inputs.extend(repeat_n(idle(), 20));
    inputs
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut sim = Simulation::with_default_arena()?;
    for (i, controls) in script().into_iter().enumerate() {
        let outcome = sim.step(controls);
        if outcome.jumped || outcome.respawned || outcome.resolve.dropped_time > 0.0 {
            log::info!(
                "tick {i}: jumped={} respawned={} dropped={:.3}s",
                outcome.jumped,
                outcome.respawned,
                outcome.resolve.dropped_time
            );
        }
        if let Err(e) = &outcome.cosmetic {
            log::warn!("tick {i}: cosmetic update failed: {e}");
        }
    }

    let p = sim.player_position();
    let orbit = sim.session().orbit;
    log::info!(
        "simulation finished after {} ticks ({:.2}s): player at ({:.2}, {:.2}, {:.2}), camera yaw={:.3} pitch={:.3}",
        sim.tick_count(),
        sim.elapsed(),
        p.x,
        p.y,
        p.z,
        orbit.yaw,
        orbit.pitch
    );
    Ok(())
}

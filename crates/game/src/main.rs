use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use engine::{InputAction, InputSnapshot, RecordingRenderer};
use tracing::{error, info};

mod app;

use app::bootstrap::{self, WorldWiring};

const SIM_TICKS: u32 = 600;
const FRAME_DURATION: Duration = Duration::from_millis(16);

fn main() -> ExitCode {
    bootstrap::init_tracing();
    info!("=== Thornbow Startup ===");

    let wiring = match bootstrap::build_world() {
        Ok(wiring) => wiring,
        Err(error) => {
            error!(error = %error, "startup_failed");
            return ExitCode::FAILURE;
        }
    };
    run(wiring);
    ExitCode::SUCCESS
}

fn run(mut wiring: WorldWiring) {
    let mut renderer = RecordingRenderer::new();
    for tick in 0..SIM_TICKS {
        let frame_start = Instant::now();
        // Fixed cadence, so one tick is one reference frame.
        let delta_time = 1.0;
        let input = scripted_input(tick);

        wiring.camera.update(delta_time);
        wiring.stage.update(delta_time);
        wiring
            .objects
            .tick(&input, &mut wiring.camera, &wiring.stage, delta_time);

        renderer.clear();
        wiring.stage.draw(&mut renderer, &wiring.camera);
        wiring.objects.draw(&mut renderer);

        if tick % 60 == 0 {
            let position = wiring.objects.player().position();
            let enemies_alive = wiring
                .objects
                .enemies()
                .iter()
                .filter(|enemy| enemy.is_alive())
                .count();
            let arrows_alive = wiring
                .objects
                .arrows()
                .iter()
                .filter(|arrow| arrow.is_alive())
                .count();
            info!(
                tick,
                player_x = position.x,
                player_y = position.y,
                player_speed = wiring.objects.player().body().velocity().length(),
                player_health = wiring.objects.player().health(),
                enemies_alive,
                arrows_alive,
                draw_calls = renderer.calls().len(),
                "sim_heartbeat"
            );
        }

        if let Some(remaining) = FRAME_DURATION.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
    info!("simulation_complete");
}

/// Canned input so the headless run exercises walking, the sword swing,
/// the bow, and a wall stop.
fn scripted_input(tick: u32) -> InputSnapshot {
    let snapshot = InputSnapshot::empty();
    match tick % 240 {
        0..=89 => snapshot.with_action_down(InputAction::MoveRight, true),
        90..=119 => snapshot.with_action_down(InputAction::MoveDown, true),
        120 => snapshot.with_action_pressed(InputAction::Attack, true),
        150 => snapshot.with_action_pressed(InputAction::Fire, true),
        _ => snapshot,
    }
}

//! Ball Battle entry point
//!
//! Owns the window, samples input into `TickInput`, and paces the fixed
//! timestep simulation.

use macroquad::prelude::*;

use ball_battle::consts::{MAX_SUBSTEPS, SIM_DT};
use ball_battle::render::{self, Button};
use ball_battle::sim::{GamePhase, GameState, TickInput, tick};
use ball_battle::tuning::Tuning;

/// Optional balance override file, read once at startup
const TUNING_PATH: &str = "ball-battle.json";

fn window_conf() -> Conf {
    // The window matches the field, so tuning overrides must be read here too
    let tuning = Tuning::load_or_default(TUNING_PATH);
    Conf {
        window_title: "Ball Battle".to_owned(),
        window_width: tuning.field_width as i32,
        window_height: tuning.field_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let tuning = Tuning::load_or_default(TUNING_PATH);
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    let mut state = GameState::new(tuning, seed);
    let button = Button::start(tuning.field_width);

    log::info!("Ball Battle starting (seed {seed})");

    // Route window-close through the quit signal instead of a hard exit
    prevent_quit();

    let mut input = TickInput::default();
    let mut accumulator: f32 = 0.0;
    let mut finished_at: Option<f64> = None;

    loop {
        // Sample input once per frame; one-shots latch until a tick consumes them
        input.left = is_key_down(KeyCode::A) || is_key_down(KeyCode::Left);
        input.right = is_key_down(KeyCode::D) || is_key_down(KeyCode::Right);
        input.up = is_key_down(KeyCode::W) || is_key_down(KeyCode::Up);
        input.down = is_key_down(KeyCode::S) || is_key_down(KeyCode::Down);
        if is_key_pressed(KeyCode::Escape) || is_quit_requested() {
            input.quit = true;
        }
        if state.phase == GamePhase::Menu && is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            if button.contains(mx, my) {
                input.start = true;
            }
        }

        // Quit from the menu ends the process immediately; mid-round it goes
        // through the sim and becomes a Computer win. The winner display is
        // not cancellable.
        if input.quit && state.phase == GamePhase::Menu {
            log::info!("Quit requested");
            break;
        }

        // Fixed-timestep catch-up, capped to avoid the spiral of death
        accumulator += get_frame_time().min(0.1);
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input);
            accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.start = false;
            input.quit = false;
        }

        render::draw(&state, &button);

        // Hold the winner overlay for the configured delay, then exit
        if state.phase == GamePhase::Finished {
            let shown_at = *finished_at.get_or_insert_with(get_time);
            if get_time() - shown_at >= state.tuning.win_display_ms as f64 / 1000.0 {
                break;
            }
        }

        next_frame().await;
    }
}

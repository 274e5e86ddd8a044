//! Brick Breaker entry point
//!
//! Headless demo runner: an autopilot tracks the ball so the whole
//! update/render pipeline can be exercised without a host canvas. Pass a
//! JSON config path as the first argument to override the defaults.

use std::time::Duration;

use brick_breaker::render::RenderSurface;
use brick_breaker::{Game, GameConfig};

/// Surface that discards primitives; the demo has no canvas to paint.
struct NullSurface;

impl RenderSurface for NullSurface {
    fn clear(&mut self) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) {}
    fn fill_circle(&mut self, _cx: f32, _cy: f32, _r: f32, _color: &str) {}
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32, _font: &str, _color: &str) {}
}

/// Steer the paddle toward the ball, the same way a host would deliver
/// key events between ticks.
fn autopilot(game: &mut Game) {
    let state = game.state();
    let paddle_center = state.paddle.x + state.paddle.width / 2.0;
    let delta = state.ball.pos.x - paddle_center;
    let speed = state.paddle.speed;

    game.key_up("ArrowLeft");
    game.key_up("ArrowRight");
    if delta < -speed {
        game.key_down("ArrowLeft");
    } else if delta > speed {
        game.key_down("ArrowRight");
    }
}

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    log::info!("Brick Breaker demo starting (autopilot)");
    let frame_delay = Duration::from_secs_f32(1.0 / config.fps as f32);
    let mut surface = NullSurface;

    while !game.state().game_over {
        autopilot(&mut game);
        game.update();
        game.show(&mut surface);
        std::thread::sleep(frame_delay);
    }
    game.show(&mut surface);

    let state = game.state();
    let outcome = if state.win { "win" } else { "loss" };
    log::info!(
        "Finished after {} ticks: {} (score {})",
        state.time_ticks,
        outcome,
        state.score
    );
}

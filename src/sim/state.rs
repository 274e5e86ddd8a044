//! Game state and core simulation types
//!
//! All mutable gameplay state lives in [`GameState`]; the tick function takes
//! it by exclusive reference so there is no hidden aliasing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::*;

/// One brick in the grid. Destroyed bricks stay in the vector with
/// `alive = false` so the collision scan order never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            alive: true,
        }
    }
}

/// The ball. `speed` is the scalar magnitude used to re-aim velocity on a
/// paddle bounce; reflections only ever flip component signs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    /// Ball centered horizontally near the bottom, launched up-and-right.
    fn at_start(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.width / 2.0, config.height - BALL_START_OFFSET),
            vel: Vec2::new(BALL_SPEED, -BALL_SPEED),
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
        }
    }
}

/// The player's paddle. Only `x` ever changes; `y` is fixed by the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    fn centered(config: &GameConfig) -> Self {
        Self {
            x: (config.width - PADDLE_WIDTH) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Construction parameters (validated before this is built)
    pub config: GameConfig,
    /// Score, +10 per destroyed brick
    pub score: u32,
    /// Terminal flag; once set, ticks are no-ops until reset
    pub game_over: bool,
    /// Terminal sub-flavor; `win` implies `game_over`
    pub win: bool,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major grid; storage order is the collision scan order
    pub bricks: Vec<Brick>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build the initial Running state for a validated config.
    pub fn new(config: GameConfig) -> Self {
        let state = Self {
            config,
            score: 0,
            game_over: false,
            win: false,
            ball: Ball::at_start(&config),
            paddle: Paddle::centered(&config),
            bricks: create_bricks(&config),
            time_ticks: 0,
        };
        log::info!(
            "New game: {}x{} field, {} bricks",
            config.width,
            config.height,
            state.bricks.len()
        );
        state
    }

    /// Vertical position of the paddle's top edge.
    pub fn paddle_top(&self) -> f32 {
        self.config.height - PADDLE_BOTTOM_OFFSET
    }

    /// True once every brick has been destroyed.
    pub fn all_bricks_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }

    /// Return to a freshly constructed initial state: new grid, zeroed
    /// score, cleared flags, centered ball and paddle.
    pub fn reset(&mut self) {
        log::info!("Game reset");
        *self = Self::new(self.config);
    }
}

/// Lay out the brick grid: `rows` x `columns`, evenly spaced with fixed
/// padding and offsets, widths computed to fill the usable field span.
fn create_bricks(config: &GameConfig) -> Vec<Brick> {
    let brick_width = config.brick_width();
    let mut bricks = Vec::with_capacity((config.rows * config.columns) as usize);
    for row in 0..config.rows {
        for col in 0..config.columns {
            let x = BRICK_OFFSET_LEFT + col as f32 * (brick_width + BRICK_PADDING);
            let y = BRICK_OFFSET_TOP + row as f32 * (BRICK_HEIGHT + BRICK_PADDING);
            bricks.push(Brick::new(x, y, brick_width, BRICK_HEIGHT));
        }
    }
    bricks
}

//! Brick Breaker - a paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle/ball motion, collisions, game state)
//! - `render`: Render adapter producing draw commands for an external canvas
//! - `input`: Keyboard event to input-flag mapping
//! - `game`: Lifecycle wrapper and fixed-rate driving loop
//! - `config`: Construction parameters with validation

pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use input::InputState;
pub use render::{DrawCmd, RenderSurface, present, render};
pub use sim::{GameState, tick};

/// Game design constants
///
/// Everything here is a fixed tunable of the design; sizes that hosts may
/// choose (field dimensions, grid shape, frame rate) live in [`GameConfig`].
pub mod consts {
    /// Paddle dimensions (pixels)
    pub const PADDLE_WIDTH: f32 = 90.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Paddle horizontal movement per tick
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Distance from the field bottom to the paddle top
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_SPEED: f32 = 4.5;
    /// Distance from the field bottom at which the ball spawns
    pub const BALL_START_OFFSET: f32 = 40.0;

    /// Brick grid layout
    pub const BRICK_PADDING: f32 = 6.0;
    pub const BRICK_OFFSET_TOP: f32 = 40.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    pub const BRICK_HEIGHT: f32 = 16.0;

    /// Points awarded per destroyed brick
    pub const BRICK_SCORE: u32 = 10;

    /// Maximum paddle deflection from vertical (radians). A hit at the very
    /// edge of the paddle sends the ball out at about ±82 degrees.
    pub const MAX_DEFLECTION: f32 = std::f32::consts::PI / 2.2;
}

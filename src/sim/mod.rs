//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable brick iteration order (row-major storage order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_brick, ball_hits_paddle, paddle_bounce_velocity};
pub use state::{Ball, Brick, GameState, Paddle};
pub use tick::tick;

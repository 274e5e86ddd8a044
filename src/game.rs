//! Game lifecycle wrapper
//!
//! Owns the simulation state and input flags, exposes key-event entry points
//! for the host, and provides a blocking fixed-rate driving loop for hosts
//! that do not bring their own frame callback.

use std::time::{Duration, Instant};

use crate::config::{ConfigError, GameConfig};
use crate::input::InputState;
use crate::render::{RenderSurface, present, render};
use crate::sim::{GameState, tick};

/// A running (or runnable) game instance.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    input: InputState,
    running: bool,
}

impl Game {
    /// Validate the config and build the initial state.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config),
            input: InputState::default(),
            running: false,
        })
    }

    pub fn with_defaults() -> Self {
        // Default config always validates.
        Self {
            state: GameState::new(GameConfig::default()),
            input: InputState::default(),
            running: false,
        }
    }

    /// Read-only view of the simulation state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Host key-down event (between ticks; flags are read at tick start).
    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    /// Host key-up event.
    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Advance the simulation by one tick.
    pub fn update(&mut self) {
        tick(&mut self.state, &self.input);
    }

    /// Return to the initial state without touching the render surface.
    pub fn reset(&mut self) {
        self.state.reset();
        self.input.clear();
    }

    /// Render one static frame without starting the loop.
    pub fn show<S: RenderSurface>(&self, surface: &mut S) {
        present(surface, &render(&self.state));
    }

    /// Run the blocking driving loop: tick then render at the configured
    /// rate until the game ends, then render one final frame. Idempotent if
    /// the loop is already running.
    pub fn start<S: RenderSurface>(&mut self, surface: &mut S) {
        if self.running {
            log::warn!("start() called while already running");
            return;
        }
        self.running = true;
        let frame_delay = Duration::from_secs_f32(1.0 / self.state.config.fps as f32);
        log::info!("Starting game loop at {} Hz", self.state.config.fps);

        while !self.state.game_over {
            let frame_start = Instant::now();
            self.update();
            self.show(surface);

            // Suspend for the rest of the frame budget; all work happens
            // between ticks, never mid-tick.
            if let Some(remaining) = frame_delay.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        self.show(surface);
        self.running = false;
    }
}

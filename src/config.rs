//! Construction parameters
//!
//! Only sizes a host may legitimately choose are configurable; every other
//! tunable is a fixed constant in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BRICK_OFFSET_LEFT, BRICK_PADDING, PADDLE_WIDTH};

/// Invalid construction parameters are a programmer error, rejected up front.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("field dimensions must be positive, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },
    #[error("brick grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: u32, columns: u32 },
    #[error("{columns} brick columns do not fit in a field {width} wide")]
    GridTooWide { columns: u32, width: f32 },
    #[error("target frame rate must be positive")]
    InvalidFrameRate,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Field width in pixels
    pub width: f32,
    /// Field height in pixels
    pub height: f32,
    /// Brick grid rows
    pub rows: u32,
    /// Brick grid columns
    pub columns: u32,
    /// Target simulation/render rate (Hz)
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            rows: 5,
            columns: 10,
            fps: 60,
        }
    }
}

impl GameConfig {
    /// Check that the parameters describe a playable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidField {
                width: self.width,
                height: self.height,
            });
        }
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        // Each brick must end up with positive width once margins and
        // padding are taken out, and the paddle must fit the field.
        let usable = self.width - 2.0 * BRICK_OFFSET_LEFT - (self.columns - 1) as f32 * BRICK_PADDING;
        if usable <= 0.0 || self.width < PADDLE_WIDTH {
            return Err(ConfigError::GridTooWide {
                columns: self.columns,
                width: self.width,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        Ok(())
    }

    /// Brick width for this field, columns filling the usable span evenly.
    pub fn brick_width(&self) -> f32 {
        (self.width - 2.0 * BRICK_OFFSET_LEFT - (self.columns - 1) as f32 * BRICK_PADDING)
            / self.columns as f32
    }

    /// Load a config from a JSON file, falling back on defaults for
    /// missing fields.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }
}

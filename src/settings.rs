//! Session configuration
//!
//! Loaded from JSON. Missing fields fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::World;

/// Failure to read or parse a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON")]
    Parse(#[from] serde_json::Error),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Screen width in pixels
    pub world_width: u32,
    /// Screen height in pixels
    pub world_height: u32,

    // === Timing ===
    /// Host frame rate
    pub ticks_per_second: u32,
    /// How long the win/lose message stays up
    pub post_round_seconds: u32,

    // === Gameplay ===
    /// Paddle distance per tick of held input
    pub paddle_step: f32,
    /// Level loaded at startup (1-based)
    pub start_level: u32,
    /// RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            ticks_per_second: TICKS_PER_SECOND,
            post_round_seconds: POST_ROUND_SECONDS,

            paddle_step: PADDLE_STEP,
            start_level: 1,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// World bounds for physics calls
    pub fn world(&self) -> World {
        World::new(self.world_width as f32, self.world_height as f32)
    }

    /// Post-round message length in ticks, saturating at `u32::MAX`
    pub fn post_round_ticks(&self) -> u32 {
        self.post_round_seconds.saturating_mul(self.ticks_per_second)
    }
}

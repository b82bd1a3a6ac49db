//! Fixit Breakit - A single-screen ball-and-brick arcade game
//!
//! Core modules:
//! - `sim`: Simulation (geometry, collisions, session state, tick)
//! - `settings`: Data-driven configuration

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default world dimensions (pixels)
    pub const WORLD_WIDTH: u32 = 160;
    pub const WORLD_HEIGHT: u32 = 120;

    /// Host frame rate the session timers are counted in
    pub const TICKS_PER_SECOND: u32 = 30;
    /// Win/lose message time before the session resets
    pub const POST_ROUND_SECONDS: u32 = 2;

    /// Distance the walls sit inside the world edge
    pub const WALL_MARGIN: f32 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 1.0;
    /// Per-axis velocity limit, applied after every integration step
    pub const BALL_MAX_SPEED: f32 = 3.0;
    pub const BALL_SERVE_VY: f32 = -1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 3.0;
    /// Horizontal distance per tick of held input
    pub const PADDLE_STEP: f32 = 2.0;
    /// Gap between the paddle's top edge and the bottom of the world
    pub const PADDLE_FLOOR_OFFSET: f32 = PADDLE_HEIGHT + 1.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 20.0;
    pub const BRICK_HEIGHT: f32 = 10.0;
}

//! Session state: world bounds, phase, entities and flags
//!
//! Everything a host needs to draw a frame or snapshot a session lives here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geometry::Point;
use super::level::Level;
use super::shapes::{Bar, Brick};
use crate::Settings;
use crate::consts::*;

/// World bounds, passed explicitly into every physics call that needs them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WORLD_WIDTH as f32, WORLD_HEIGHT as f32)
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Title,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Win/lose message showing; counts down then resets to the title
    PostRound {
        ticks_remaining: u32,
        outcome: RoundOutcome,
    },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub world: World,
    /// Level loaded on the next start or reset
    pub level: Level,
    pub phase: GamePhase,
    pub bricks: Vec<Brick>,
    pub bar: Bar,
    pub ball: Ball,
    pub win: bool,
    pub lose: bool,
    /// Host-side debug overlay toggle
    pub debug: bool,
    /// Paddle distance per tick of held input
    pub paddle_step: f32,
    /// Length of the post-round message in ticks
    pub post_round_ticks: u32,
    /// Simulation ticks run while playing
    pub time_ticks: u64,
    /// Unresolvable brick hits seen this session
    pub anomalies: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a session on the title screen
    pub fn new(settings: &Settings) -> Self {
        let world = settings.world();
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("New session: {}x{} world, seed {}", world.width, world.height, seed);

        let mut state = Self {
            world,
            level: Level::from_number(settings.start_level),
            phase: GamePhase::Title,
            bricks: Vec::new(),
            bar: Bar::home(&world),
            ball: Ball::new(Point::ZERO, BALL_RADIUS, 0.0, 0.0),
            win: false,
            lose: false,
            debug: false,
            paddle_step: settings.paddle_step,
            post_round_ticks: settings.post_round_ticks(),
            time_ticks: 0,
            anomalies: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Replace the brick set and put the paddle and ball back on their marks.
    ///
    /// The paddle keeps its move latch.
    pub fn change_level(&mut self, level: Level) {
        self.level = level;
        self.bricks = level.bricks();

        let home = Point::new(WALL_MARGIN, self.world.height - PADDLE_FLOOR_OFFSET);
        self.bar.set_location(home);

        let serve = Point::new(
            5.0,
            self.world.height - PADDLE_FLOOR_OFFSET - 1.0 - self.bar.height(),
        );
        let vx = self.rng.random_range(1..=2) as f32;
        self.ball = Ball::new(serve, BALL_RADIUS, vx, BALL_SERVE_VY);

        log::info!("Loaded level {} ({} bricks)", level.number(), self.bricks.len());
    }

    /// Reload the current level and return to the title screen
    pub fn reset(&mut self) {
        self.change_level(self.level);
        self.phase = GamePhase::Title;
        self.win = false;
        self.lose = false;
        self.debug = false;
        log::info!("Session reset to title on level {}", self.level.number());
    }

    /// Reload the current level and begin play
    pub fn start(&mut self) {
        self.change_level(self.level);
        self.win = false;
        self.lose = false;
        self.phase = GamePhase::Playing;
        log::info!("Round started on level {}", self.level.number());
    }

    /// True when every brick has been switched on
    pub fn all_bricks_active(&self) -> bool {
        self.bricks.iter().all(|b| b.active)
    }

    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Enter the post-round countdown
    pub fn finish_round(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won => log::info!("Level {} cleared", self.level.number()),
            RoundOutcome::Lost => log::info!("Round lost on level {}", self.level.number()),
        }
        self.phase = GamePhase::PostRound {
            ticks_remaining: self.post_round_ticks,
            outcome,
        };
    }
}

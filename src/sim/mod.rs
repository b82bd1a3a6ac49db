//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One update per host tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (level brick order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod geometry;
pub mod level;
pub mod shapes;
pub mod state;
pub mod tick;

pub use ball::{Ball, Face, FaceHit};
pub use collision::{
    BrickHit, CollisionReport, ResolutionError, Side, hits_brick, hits_paddle, resolve_collisions,
};
pub use geometry::{Point, Segment, get_intersection};
pub use level::Level;
pub use shapes::{Bar, Brick};
pub use state::{GamePhase, GameState, RoundOutcome, World};
pub use tick::{TickInput, tick};

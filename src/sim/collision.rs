//! Broad-phase tests and per-tick collision resolution
//!
//! Each tick runs a fixed sequence: walls, then the paddle, then every brick
//! in level order. Several of these can fire in the same tick and their
//! effects stack.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ball::{Ball, FaceHit};
use super::geometry::Segment;
use super::shapes::{Bar, Brick};
use super::state::World;

/// Which side of a brick's center the ball started the tick on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Narrow-phase could not explain a broad-phase hit
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    #[error("no eligible brick face crossed by movement {movement:?} (approached from {side:?})")]
    NoEligibleFace { movement: Segment, side: Side },
}

/// Coarse ball/paddle overlap test.
///
/// Compares center distances against the paddle's full width and height
/// rather than half extents, giving a hitbox larger than the drawn paddle.
pub fn hits_paddle(ball: &Ball, bar: &Bar) -> bool {
    let center = bar.center();
    (ball.center.x - center.x).abs() < bar.width() + ball.radius
        && (ball.center.y - center.y).abs() < bar.height() + ball.radius
}

/// Coarse ball/brick overlap test using half extents and a shrunken radius
pub fn hits_brick(ball: &Ball, brick: &Brick) -> bool {
    let radius = ball.radius - 1.0;
    let center = brick.center();
    (ball.center.x - center.x).abs() < brick.width() / 2.0 + radius
        && (ball.center.y - center.y).abs() < brick.height() / 2.0 + radius
}

/// A brick touched during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickHit {
    /// Index into the level's brick list
    pub index: usize,
    /// Brick state after the toggle
    pub active: bool,
    /// Edge the ball was snapped to, if narrow-phase found one
    pub face: Option<FaceHit>,
}

/// Everything that happened during one resolution pass
#[derive(Debug, Clone, Default)]
pub struct CollisionReport {
    pub wall: bool,
    pub paddle: bool,
    pub bricks: Vec<BrickHit>,
    /// Broad-phase hits that narrow-phase could not resolve
    pub anomalies: Vec<ResolutionError>,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        !self.wall && !self.paddle && self.bricks.is_empty()
    }
}

/// Run one collision pass on an already integrated ball
pub fn resolve_collisions(
    world: &World,
    ball: &mut Ball,
    bar: &Bar,
    bricks: &mut [Brick],
) -> CollisionReport {
    let mut report = CollisionReport {
        wall: ball.intersect_wall(world),
        ..Default::default()
    };

    if hits_paddle(ball, bar) {
        ball.vy = -ball.vy;
        ball.vx += f32::from(bar.last_move());
        report.paddle = true;
    }

    for (index, brick) in bricks.iter_mut().enumerate() {
        if !hits_brick(ball, brick) {
            continue;
        }

        let active = brick.toggle();
        log::debug!(
            "Brick {} hit at {:?}, ball velocity before = ({}, {})",
            index,
            brick.top_left(),
            ball.vx,
            ball.vy
        );

        let face = match ball.intersect_brick(brick) {
            Ok(hit) => {
                log::debug!(
                    "Ball snapped to {:?} face, velocity after = ({}, {})",
                    hit.face,
                    ball.vx,
                    ball.vy
                );
                Some(hit)
            }
            Err(err) => {
                log::warn!(
                    "{} (left {:?}, right {:?}, top {:?}, bottom {:?})",
                    err,
                    brick.left_segment(),
                    brick.right_segment(),
                    brick.top_segment(),
                    brick.bottom_segment()
                );
                report.anomalies.push(err);
                None
            }
        };

        report.bricks.push(BrickHit {
            index,
            active,
            face,
        });
    }

    report
}

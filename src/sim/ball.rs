//! The ball: integration, wall bounces and brick narrow-phase
//!
//! The ball keeps the position it had at the start of the tick so that the
//! path it swept during the tick can be tested against brick edges.

use serde::{Deserialize, Serialize};

use super::collision::{ResolutionError, Side};
use super::geometry::{Point, Segment, get_intersection};
use super::shapes::Brick;
use super::state::World;
use crate::consts::*;

/// Which brick edge the ball was snapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Left,
    Right,
    Top,
    Bottom,
}

/// Outcome of a successful narrow-phase resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceHit {
    pub face: Face,
    /// Point on the edge the ball now sits at
    pub point: Point,
    /// Velocity after reflection
    pub vx: f32,
    pub vy: f32,
}

/// A candidate edge crossing, ranked by distance to the post-move center
struct Candidate {
    hit: FaceHit,
    distance: f32,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub center: Point,
    /// Center before the current tick's integration
    pub previous: Point,
    pub radius: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    pub fn new(center: Point, radius: f32, vx: f32, vy: f32) -> Self {
        Self {
            center,
            previous: center,
            radius,
            vx,
            vy,
        }
    }

    /// Integrate one tick, then clamp each velocity axis independently
    pub fn update(&mut self) {
        self.previous = self.center;
        self.center.x += self.vx;
        self.center.y += self.vy;
        self.vx = self.vx.clamp(-BALL_MAX_SPEED, BALL_MAX_SPEED);
        self.vy = self.vy.clamp(-BALL_MAX_SPEED, BALL_MAX_SPEED);
    }

    /// The path swept during the current tick
    #[inline]
    pub fn movement(&self) -> Segment {
        Segment::new(self.previous, self.center)
    }

    /// True once the ball reaches the bottom of the world
    pub fn out_of_bounds(&self, world: &World) -> bool {
        self.center.y + self.radius >= world.height
    }

    /// Bounce off the left, right and top walls. Returns true if any bounce happened.
    ///
    /// Side walls pin the ball back onto the wall line; the top wall only
    /// reflects. The bottom is the loss boundary and is not handled here.
    pub fn intersect_wall(&mut self, world: &World) -> bool {
        let mut bounced = false;
        let right_wall = world.width - WALL_MARGIN;

        if self.center.x <= WALL_MARGIN {
            self.vx = -self.vx;
            self.center.x = WALL_MARGIN;
            bounced = true;
        }

        if self.center.x >= right_wall {
            self.vx = -self.vx;
            self.center.x = right_wall;
            bounced = true;
        }

        if self.center.y <= WALL_MARGIN {
            self.vy = -self.vy;
            bounced = true;
        }

        bounced
    }

    /// Snap the ball onto the first brick edge its swept path crossed, reflecting velocity.
    ///
    /// Only one vertical edge is eligible, chosen by which side of the brick
    /// center the ball started the tick on. Only one horizontal edge is
    /// eligible, chosen by the current vertical direction. When neither
    /// eligible edge is crossed the ball is left untouched and an error is
    /// returned.
    pub fn intersect_brick(&mut self, brick: &Brick) -> Result<FaceHit, ResolutionError> {
        let movement = self.movement();
        let side = if self.previous.x < brick.center().x {
            Side::Left
        } else {
            Side::Right
        };

        let (side_face, side_edge) = match side {
            Side::Left => (Face::Left, brick.left_segment()),
            Side::Right => (Face::Right, brick.right_segment()),
        };
        let (flat_face, flat_edge) = if self.vy > 0.0 {
            (Face::Top, brick.top_segment())
        } else {
            (Face::Bottom, brick.bottom_segment())
        };

        let mut candidates: Vec<Candidate> = Vec::with_capacity(2);
        if let Some(point) = get_intersection(movement, side_edge) {
            candidates.push(Candidate {
                hit: FaceHit {
                    face: side_face,
                    point,
                    vx: -self.vx,
                    vy: self.vy,
                },
                distance: point.distance(self.center),
            });
        }
        if let Some(point) = get_intersection(movement, flat_edge) {
            candidates.push(Candidate {
                hit: FaceHit {
                    face: flat_face,
                    point,
                    vx: self.vx,
                    vy: -self.vy,
                },
                distance: point.distance(self.center),
            });
        }

        // Ties go to the vertical edge
        let chosen = candidates
            .into_iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
            .ok_or(ResolutionError::NoEligibleFace { movement, side })?;

        self.center = chosen.hit.point;
        self.vx = chosen.hit.vx;
        self.vy = chosen.hit.vy;
        Ok(chosen.hit)
    }
}

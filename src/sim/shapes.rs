//! Axis-aligned rectangles: bricks and the paddle
//!
//! Both derive their boundary segments on demand from position and size.
//! Collision decisions live in [`super::ball`] and [`super::collision`].

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Segment};
use super::state::World;
use crate::consts::*;

/// A brick. Bricks are never destroyed, only toggled between inactive and active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    top_left: Point,
    width: f32,
    height: f32,
    /// Fixed at construction
    center: Point,
    pub active: bool,
}

impl Brick {
    pub fn new(top_left: Point, width: f32, height: f32) -> Self {
        Self {
            top_left,
            width,
            height,
            center: top_left + Point::new(width / 2.0, height / 2.0),
            active: false,
        }
    }

    /// Brick of the default size at `top_left`
    pub fn at(top_left: Point) -> Self {
        Self::new(top_left, BRICK_WIDTH, BRICK_HEIGHT)
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Flip the active flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn top_segment(&self) -> Segment {
        let (x, y) = (self.top_left.x, self.top_left.y);
        Segment::new(Point::new(x, y), Point::new(x + self.width, y))
    }

    pub fn bottom_segment(&self) -> Segment {
        let (x, y) = (self.top_left.x, self.top_left.y);
        let bottom = y + self.height;
        Segment::new(Point::new(x, bottom), Point::new(x + self.width, bottom))
    }

    pub fn left_segment(&self) -> Segment {
        let (x, y) = (self.top_left.x, self.top_left.y);
        Segment::new(Point::new(x, y), Point::new(x, y + self.height))
    }

    pub fn right_segment(&self) -> Segment {
        let (x, y) = (self.top_left.x, self.top_left.y);
        let right = x + self.width;
        Segment::new(Point::new(right, y), Point::new(right, y + self.height))
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    location: Point,
    width: f32,
    height: f32,
    center: Point,
    /// Direction of the most recent move (-1, 0 or +1). Only a move overwrites it.
    last_move: i8,
}

impl Bar {
    pub fn new(location: Point, width: f32, height: f32) -> Self {
        Self {
            location,
            width,
            height,
            center: location + Point::new(width / 2.0, height / 2.0),
            last_move: 0,
        }
    }

    /// Default-sized paddle resting at the bottom-left of the world
    pub fn home(world: &World) -> Self {
        Self::new(
            Point::new(WALL_MARGIN, world.height - PADDLE_FLOOR_OFFSET),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        )
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.location
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn last_move(&self) -> i8 {
        self.last_move
    }

    /// Place the paddle, keeping the latch
    pub fn set_location(&mut self, location: Point) {
        self.location = location;
        self.center = location + Point::new(self.width / 2.0, self.height / 2.0);
    }

    pub fn top_segment(&self) -> Segment {
        let (x, y) = (self.location.x, self.location.y);
        Segment::new(Point::new(x, y), Point::new(x + self.width, y))
    }

    /// Move left by `step`, stopping at the left wall
    pub fn move_left(&mut self, step: f32) {
        let x = (self.location.x - step).max(WALL_MARGIN);
        self.set_location(Point::new(x, self.location.y));
        self.last_move = -1;
    }

    /// Move right by `step`, stopping at the right wall
    pub fn move_right(&mut self, step: f32, world: &World) {
        let x = (self.location.x + step).min(world.width - (WALL_MARGIN + self.width));
        self.set_location(Point::new(x, self.location.y));
        self.last_move = 1;
    }
}

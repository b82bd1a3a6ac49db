//! Built-in level layouts

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::shapes::Brick;

const LEVEL_ONE: &[(f32, f32)] = &[
    (25.0, 30.0),
    (45.0, 30.0),
    (65.0, 30.0),
    (90.0, 30.0),
    (20.0, 50.0),
    (40.0, 50.0),
    (60.0, 50.0),
    (100.0, 50.0),
    (120.0, 50.0),
];

const LEVEL_TWO: &[(f32, f32)] = &[(60.0, 50.0), (100.0, 50.0), (120.0, 50.0)];

/// A selectable level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    One,
    Two,
}

impl Level {
    /// Look up a level by its 1-based number. Unknown numbers give level one.
    pub fn from_number(number: u32) -> Self {
        match number {
            2 => Level::Two,
            _ => Level::One,
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            Level::One => 1,
            Level::Two => 2,
        }
    }

    /// A fresh, all-inactive brick set for this level
    pub fn bricks(&self) -> Vec<Brick> {
        let layout = match self {
            Level::One => LEVEL_ONE,
            Level::Two => LEVEL_TWO,
        };
        layout
            .iter()
            .map(|&(x, y)| Brick::at(Point::new(x, y)))
            .collect()
    }
}

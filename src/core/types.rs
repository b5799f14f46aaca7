//! Core type definitions used throughout the codebase

use crate::core::error::RobotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells along each side of the square grid
pub const GRID_SIZE: u8 = 5;

/// Largest valid column or row index
pub const GRID_MAX: u8 = GRID_SIZE - 1;

/// Cardinal heading of the robot
///
/// The discriminants follow the cyclic order `[N, E, S, W]`, so rotation is
/// index arithmetic modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    N,
    E,
    S,
    W,
}

impl Direction {
    /// All headings in clockwise order
    pub const ALL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Position of this heading in [`Direction::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Heading at `index` in the cyclic order, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Next heading clockwise (W wraps to N)
    pub fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Next heading counter-clockwise (N wraps to W)
    pub fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    /// Unit step `(dx, dy)` in grid coordinates. Row 0 is the top edge, so
    /// north decreases `y`.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (0, -1),
            Direction::E => (1, 0),
            Direction::S => (0, 1),
            Direction::W => (-1, 0),
        }
    }

    /// Arrow drawn for the robot marker
    pub fn glyph(self) -> char {
        match self {
            Direction::N => '↑',
            Direction::E => '→',
            Direction::S => '↓',
            Direction::W => '←',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Direction::N => "N",
            Direction::E => "E",
            Direction::S => "S",
            Direction::W => "W",
        };
        f.write_str(letter)
    }
}

impl FromStr for Direction {
    type Err = RobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" | "up" => Ok(Direction::N),
            "e" | "east" | "right" => Ok(Direction::E),
            "s" | "south" | "down" => Ok(Direction::S),
            "w" | "west" | "left" => Ok(Direction::W),
            _ => Err(RobotError::UnknownHeading(s.to_string())),
        }
    }
}

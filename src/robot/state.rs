//! Robot state and its pure transitions
//!
//! A [`RobotState`] is a value: transitions consume a state and return the
//! next one, leaving the caller to decide where the new state lives.

use crate::core::types::{Direction, GRID_MAX};
use serde::Serialize;
use std::fmt;

/// Position and heading of the robot on the grid
///
/// `x` is the column and `y` the row, both in `0..=GRID_MAX`, with row 0 at
/// the top. The fields are private so every state in circulation is on-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RobotState {
    x: u8,
    y: u8,
    direction: Direction,
}

impl Default for RobotState {
    /// Bottom-left corner, facing north
    fn default() -> Self {
        Self {
            x: 0,
            y: GRID_MAX,
            direction: Direction::N,
        }
    }
}

impl RobotState {
    /// Create a state, clamping coordinates onto the grid
    pub fn new(x: u8, y: u8, direction: Direction) -> Self {
        Self {
            x: x.min(GRID_MAX),
            y: y.min(GRID_MAX),
            direction,
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one cell in the faced direction.
    ///
    /// Movement that would leave the grid is absorbed by the clamp, so at an
    /// edge the blocked axis stays put. The heading never changes.
    #[must_use]
    pub fn move_forward(self) -> Self {
        let (dx, dy) = self.direction.delta();
        Self {
            x: step_clamped(self.x, dx),
            y: step_clamped(self.y, dy),
            direction: self.direction,
        }
    }

    /// Turn one step along `[N, E, S, W]`; position is unchanged.
    #[must_use]
    pub fn rotate(self, clockwise: bool) -> Self {
        let direction = if clockwise {
            self.direction.clockwise()
        } else {
            self.direction.counter_clockwise()
        };
        Self { direction, ..self }
    }
}

fn step_clamped(value: u8, delta: i8) -> u8 {
    (i16::from(value) + i16::from(delta)).clamp(0, i16::from(GRID_MAX)) as u8
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bottom_left_facing_north() {
        let state = RobotState::default();
        assert_eq!((state.x(), state.y(), state.direction()), (0, 4, Direction::N));
    }

    #[test]
    fn test_new_clamps_onto_grid() {
        let state = RobotState::new(9, 200, Direction::E);
        assert_eq!((state.x(), state.y()), (4, 4));
    }

    #[test]
    fn test_forward_each_heading() {
        let center = |d| RobotState::new(2, 2, d);
        assert_eq!(center(Direction::N).move_forward(), RobotState::new(2, 1, Direction::N));
        assert_eq!(center(Direction::E).move_forward(), RobotState::new(3, 2, Direction::E));
        assert_eq!(center(Direction::S).move_forward(), RobotState::new(2, 3, Direction::S));
        assert_eq!(center(Direction::W).move_forward(), RobotState::new(1, 2, Direction::W));
    }

    #[test]
    fn test_forward_from_start() {
        let state = RobotState::default().move_forward();
        assert_eq!(state, RobotState::new(0, 3, Direction::N));
    }

    #[test]
    fn test_forward_clamps_at_edges() {
        let top = RobotState::new(0, 0, Direction::N);
        assert_eq!(top.move_forward(), top);

        let right = RobotState::new(4, 0, Direction::E);
        assert_eq!(right.move_forward(), right);

        let bottom = RobotState::new(3, 4, Direction::S);
        assert_eq!(bottom.move_forward(), bottom);

        let left = RobotState::new(0, 2, Direction::W);
        assert_eq!(left.move_forward(), left);
    }

    #[test]
    fn test_rotate_keeps_position() {
        let state = RobotState::new(3, 1, Direction::N);
        let cw = state.rotate(true);
        assert_eq!(cw, RobotState::new(3, 1, Direction::E));
        assert_eq!(cw.rotate(false), state);
        assert_eq!(state.rotate(false).direction(), Direction::W);
    }

    #[test]
    fn test_display() {
        assert_eq!(RobotState::new(1, 2, Direction::S).to_string(), "(1, 2) S");
    }

    #[test]
    fn test_serializes_state_shape() {
        let json = serde_json::to_string(&RobotState::default()).unwrap();
        assert_eq!(json, r#"{"x":0,"y":4,"direction":"N"}"#);
    }
}

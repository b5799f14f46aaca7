//! Grid Robot - a robot driven around a fixed 5x5 grid
//!
//! The `robot` module is the state engine: a single [`robot::RobotState`]
//! replaced by pure transitions. The `ui` module projects that state onto a
//! terminal grid and feeds user commands back into the session.

pub mod core;
pub mod robot;
pub mod ui;

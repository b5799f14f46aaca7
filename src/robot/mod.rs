//! State engine: robot state, commands and the running session

pub mod command;
pub mod session;
pub mod state;

pub use command::{parse_script, RobotCommand};
pub use session::{RobotSession, Transition};
pub use state::RobotState;

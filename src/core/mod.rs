pub mod config;
pub mod error;
pub mod types;

pub use config::RobotConfig;
pub use error::{Result, RobotError};
pub use types::{Direction, GRID_MAX, GRID_SIZE};

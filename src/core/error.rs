use thiserror::Error;

#[derive(Error, Debug)]
pub enum RobotError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unknown heading: {0}")]
    UnknownHeading(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RobotError>;

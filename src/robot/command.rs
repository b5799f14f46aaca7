//! The three commands a user can issue

use crate::core::error::RobotError;
use crate::robot::state::RobotState;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RobotCommand {
    /// Move one cell in the faced direction
    Forward,
    /// Rotate counter-clockwise
    RotateLeft,
    /// Rotate clockwise
    RotateRight,
}

impl RobotCommand {
    /// Commands in button order
    pub const ALL: [RobotCommand; 3] = [
        RobotCommand::Forward,
        RobotCommand::RotateLeft,
        RobotCommand::RotateRight,
    ];

    /// Compute the state after this command
    #[must_use]
    pub fn apply(self, state: RobotState) -> RobotState {
        match self {
            RobotCommand::Forward => state.move_forward(),
            RobotCommand::RotateLeft => state.rotate(false),
            RobotCommand::RotateRight => state.rotate(true),
        }
    }

    /// Canonical command name used by the console and scripts
    pub fn name(self) -> &'static str {
        match self {
            RobotCommand::Forward => "forward",
            RobotCommand::RotateLeft => "rotate-left",
            RobotCommand::RotateRight => "rotate-right",
        }
    }

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            RobotCommand::Forward => "Move Forward",
            RobotCommand::RotateLeft => "↺",
            RobotCommand::RotateRight => "↻",
        }
    }
}

impl fmt::Display for RobotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RobotCommand {
    type Err = RobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forward" | "f" | "move" | "m" => Ok(RobotCommand::Forward),
            "rotate-left" | "left" | "l" | "ccw" => Ok(RobotCommand::RotateLeft),
            "rotate-right" | "right" | "r" | "cw" => Ok(RobotCommand::RotateRight),
            _ => Err(RobotError::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Parse a comma or whitespace separated list of commands
pub fn parse_script(script: &str) -> Result<Vec<RobotCommand>, RobotError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<RobotCommand>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Direction;

    #[test]
    fn test_apply_dispatches_to_transitions() {
        let state = RobotState::default();
        assert_eq!(RobotCommand::Forward.apply(state), state.move_forward());
        assert_eq!(RobotCommand::RotateLeft.apply(state).direction(), Direction::W);
        assert_eq!(RobotCommand::RotateRight.apply(state).direction(), Direction::E);
    }

    #[test]
    fn test_parse_names_and_aliases() {
        for cmd in RobotCommand::ALL {
            assert_eq!(cmd.name().parse::<RobotCommand>().unwrap(), cmd);
        }
        assert_eq!("F".parse::<RobotCommand>().unwrap(), RobotCommand::Forward);
        assert_eq!("ccw".parse::<RobotCommand>().unwrap(), RobotCommand::RotateLeft);
        assert_eq!("cw".parse::<RobotCommand>().unwrap(), RobotCommand::RotateRight);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = "jump".parse::<RobotCommand>().unwrap_err();
        assert!(matches!(err, RobotError::UnknownCommand(ref s) if s == "jump"));
    }

    #[test]
    fn test_parse_script() {
        let cmds = parse_script("forward, r  f,,l").unwrap();
        assert_eq!(
            cmds,
            vec![
                RobotCommand::Forward,
                RobotCommand::RotateRight,
                RobotCommand::Forward,
                RobotCommand::RotateLeft,
            ]
        );
        assert!(parse_script("").unwrap().is_empty());
        assert!(parse_script("f, spin").is_err());
    }
}

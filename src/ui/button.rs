//! Activatable control bound to a robot command

use crate::robot::command::RobotCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub command: RobotCommand,
    /// Disabled buttons are drawn dimmed and ignore activation
    pub disabled: bool,
}

impl Button {
    pub fn new(command: RobotCommand) -> Self {
        Self {
            label: command.label().to_string(),
            command,
            disabled: false,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Command to dispatch when the button is pressed, if it is enabled
    pub fn activate(&self) -> Option<RobotCommand> {
        if self.disabled {
            None
        } else {
            Some(self.command)
        }
    }
}

/// Forward, rotate counter-clockwise, rotate clockwise; none disabled
pub fn default_buttons() -> Vec<Button> {
    RobotCommand::ALL.iter().copied().map(Button::new).collect()
}

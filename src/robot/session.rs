//! The running session: the one current robot state and its history count

use crate::robot::command::RobotCommand;
use crate::robot::state::RobotState;

/// Owns the single [`RobotState`] of a running program
///
/// Every command replaces the state wholesale. Front ends read the state back
/// after each [`dispatch`](Self::dispatch) and redraw from it.
#[derive(Debug, Clone)]
pub struct RobotSession {
    initial: RobotState,
    state: RobotState,
    commands_applied: u64,
}

/// Outcome of one dispatched command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub command: RobotCommand,
    pub before: RobotState,
    pub after: RobotState,
}

impl Transition {
    /// True when a forward move was absorbed by the grid edge
    pub fn blocked(&self) -> bool {
        self.command == RobotCommand::Forward && self.before == self.after
    }
}

impl RobotSession {
    pub fn new(initial: RobotState) -> Self {
        Self {
            initial,
            state: initial,
            commands_applied: 0,
        }
    }

    /// Current robot state
    pub fn state(&self) -> RobotState {
        self.state
    }

    /// Number of commands dispatched since start or the last reset
    pub fn commands_applied(&self) -> u64 {
        self.commands_applied
    }

    /// Apply a command and replace the current state with the result
    pub fn dispatch(&mut self, command: RobotCommand) -> Transition {
        let before = self.state;
        let after = command.apply(before);
        self.state = after;
        self.commands_applied += 1;

        let transition = Transition {
            command,
            before,
            after,
        };
        if transition.blocked() {
            tracing::debug!(%command, state = %after, "Blocked at grid edge");
        } else {
            tracing::debug!(%command, from = %before, to = %after, "Robot moved");
        }
        transition
    }

    /// Return to the starting state
    pub fn reset(&mut self) {
        tracing::info!(state = %self.initial, "Session reset");
        self.state = self.initial;
        self.commands_applied = 0;
    }
}

impl Default for RobotSession {
    fn default() -> Self {
        Self::new(RobotState::default())
    }
}

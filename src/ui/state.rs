//! UI state management for the terminal front end

use crate::robot::command::RobotCommand;
use crate::robot::session::Transition;
use crate::ui::anim::MarkerTween;
use crate::ui::button::{default_buttons, Button};
use ratatui::layout::Rect;
use std::collections::VecDeque;

/// Maximum action log entries to keep
const MAX_LOG_ENTRIES: usize = 50;

/// Terminal UI state
///
/// Holds everything the presentation needs between frames. The robot state
/// itself lives in the session, never here.
#[derive(Debug)]
pub struct UiState {
    /// Controls in display order
    pub buttons: Vec<Button>,
    /// Index of the button activated by Enter
    pub focused: usize,
    /// Screen rectangles of the buttons from the last draw, for mouse hits
    pub button_areas: Vec<Rect>,
    /// Action log entries
    pub action_log: VecDeque<LogEntry>,
    /// Where the marker is drawn
    pub tween: MarkerTween,
    /// Set when the user asked to leave
    pub should_quit: bool,
}

/// An entry in the action log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub seq: u64,
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Move,
    Rotate,
    Blocked,
    System,
}

impl LogCategory {
    pub fn for_transition(transition: &Transition) -> Self {
        if transition.blocked() {
            LogCategory::Blocked
        } else if transition.command == RobotCommand::Forward {
            LogCategory::Move
        } else {
            LogCategory::Rotate
        }
    }
}

impl UiState {
    pub fn new(tween: MarkerTween) -> Self {
        Self {
            buttons: default_buttons(),
            focused: 0,
            button_areas: Vec::new(),
            action_log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            tween,
            should_quit: false,
        }
    }

    /// Add an entry to the action log
    pub fn log(&mut self, seq: u64, message: String, category: LogCategory) {
        if self.action_log.len() >= MAX_LOG_ENTRIES {
            self.action_log.pop_front();
        }
        self.action_log.push_back(LogEntry {
            seq,
            message,
            category,
        });
    }

    /// Record a dispatched command in the log
    pub fn log_transition(&mut self, seq: u64, transition: &Transition) {
        let category = LogCategory::for_transition(transition);
        let message = match category {
            LogCategory::Blocked => format!("{}: blocked at {}", transition.command, transition.after),
            _ => format!("{}: {} -> {}", transition.command, transition.before, transition.after),
        };
        self.log(seq, message, category);
    }

    pub fn focus_next(&mut self) {
        if !self.buttons.is_empty() {
            self.focused = (self.focused + 1) % self.buttons.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.buttons.is_empty() {
            self.focused = (self.focused + self.buttons.len() - 1) % self.buttons.len();
        }
    }

    /// Command of the focused button, unless it is disabled
    pub fn activate_focused(&self) -> Option<RobotCommand> {
        self.buttons.get(self.focused).and_then(Button::activate)
    }

    /// Command bound to `command`'s button, unless that button is disabled
    pub fn activate_command(&self, command: RobotCommand) -> Option<RobotCommand> {
        self.buttons
            .iter()
            .find(|b| b.command == command)
            .and_then(Button::activate)
    }

    /// Index of the button drawn under a screen cell
    pub fn button_at(&self, column: u16, row: u16) -> Option<usize> {
        self.button_areas.iter().position(|area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }
}

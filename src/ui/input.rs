//! Keyboard and mouse mapping for the terminal front end

use crate::robot::command::RobotCommand;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the user asked the UI to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Shortcut for one of the three buttons
    Press(RobotCommand),
    FocusNext,
    FocusPrev,
    ActivateFocused,
    /// Left click at a screen cell
    Click { column: u16, row: u16 },
    Reset,
    Redraw,
    Quit,
}

/// Translate a terminal event, ignoring anything without a binding
pub fn map_event(event: &Event) -> Option<UiAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(UiAction::Click {
            column: *column,
            row: *row,
        }),
        Event::Resize(..) => Some(UiAction::Redraw),
        _ => None,
    }
}

pub fn map_key(key: &KeyEvent) -> Option<UiAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiAction::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('f') => {
            UiAction::Press(RobotCommand::Forward)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('[') => {
            UiAction::Press(RobotCommand::RotateLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char(']') => {
            UiAction::Press(RobotCommand::RotateRight)
        }
        KeyCode::Tab => UiAction::FocusNext,
        KeyCode::BackTab => UiAction::FocusPrev,
        KeyCode::Enter | KeyCode::Char(' ') => UiAction::ActivateFocused,
        KeyCode::Char('r') => UiAction::Reset,
        KeyCode::Char('q') | KeyCode::Esc => UiAction::Quit,
        _ => return None,
    };
    Some(action)
}

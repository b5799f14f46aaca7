//! Palette and styles for the terminal front end

use crate::ui::state::LogCategory;
use ratatui::style::{Color, Modifier, Style};

/// Grid lines, marker disc, button faces and headings
pub const ACCENT: Color = Color::Rgb(0x58, 0x7D, 0x71);

/// Grid interior and button captions
pub const PAPER: Color = Color::Rgb(0xFF, 0xFB, 0xF0);

/// Screen background around the grid
pub const BACKGROUND: Color = Color::Rgb(0xF5, 0xF2, 0xE8);

/// Arrow drawn on the marker
pub const MARKER_GLYPH: Color = Color::White;

/// Red used for blocked moves in the action log
pub const WARNING: Color = Color::Rgb(0xB5, 0x4A, 0x3C);

pub fn title_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(BACKGROUND)
        .add_modifier(Modifier::BOLD)
}

pub fn text_style() -> Style {
    Style::default().fg(ACCENT).bg(BACKGROUND)
}

/// Outer grid border
pub fn border_style() -> Style {
    Style::default().fg(ACCENT).bg(PAPER)
}

/// Sub-cell lines, drawn faint like the outer border at reduced opacity
pub fn inner_line_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(PAPER)
        .add_modifier(Modifier::DIM)
}

pub fn cell_style() -> Style {
    Style::default().bg(PAPER)
}

pub fn marker_style() -> Style {
    Style::default()
        .fg(MARKER_GLYPH)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Button face; disabled buttons are dimmed, the focused one is underlined
pub fn button_style(focused: bool, disabled: bool) -> Style {
    let mut style = Style::default()
        .fg(PAPER)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD);
    if disabled {
        style = style.add_modifier(Modifier::DIM);
    }
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

pub fn log_color(category: LogCategory) -> Color {
    match category {
        LogCategory::Move | LogCategory::Rotate => ACCENT,
        LogCategory::Blocked => WARNING,
        LogCategory::System => Color::DarkGray,
    }
}

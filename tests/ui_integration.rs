//! Integration tests for the terminal presentation
//!
//! Frames are drawn into ratatui's TestBackend and read back as text, so the
//! full layout (title, grid, buttons, status line, debug panel) is checked
//! without a real terminal.

use grid_robot::core::config::RobotConfig;
use grid_robot::core::types::Direction;
use grid_robot::robot::{RobotCommand, RobotState};
use grid_robot::ui::grid::{CELL_HEIGHT, CELL_WIDTH};
use grid_robot::ui::input::UiAction;
use grid_robot::ui::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 40;

fn setup() -> (App, Terminal<TestBackend>) {
    let config = RobotConfig {
        animation_ms: 0,
        ..RobotConfig::default()
    };
    let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    (App::new(&config), terminal)
}

fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) -> Vec<String> {
    terminal.draw(|frame| app.draw(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buffer.get(x, y).symbol()).collect())
        .collect()
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

/// Screen column and row of the first occurrence of `glyph`
fn glyph_position(lines: &[String], glyph: char) -> Option<(usize, usize)> {
    lines.iter().enumerate().find_map(|(row, line)| {
        line.chars().position(|c| c == glyph).map(|col| (col, row))
    })
}

#[test]
fn test_initial_frame() {
    let (mut app, mut terminal) = setup();
    let lines = draw(&mut app, &mut terminal);

    assert!(screen_contains(&lines, "Robot Control"));
    assert!(screen_contains(&lines, "Move Forward"));
    assert!(screen_contains(&lines, "↺"));
    assert!(screen_contains(&lines, "↻"));
    assert!(screen_contains(&lines, "Position: (0, 4) Facing: N"));
    assert!(screen_contains(&lines, "Debug Info"));
    assert!(screen_contains(&lines, "Grid Size: 5x5"));
    assert!(screen_contains(&lines, "Robot Position: (0, 4)"));
    assert!(screen_contains(&lines, "Robot Direction: N"));
    assert!(glyph_position(&lines, '↑').is_some());
}

#[test]
fn test_marker_moves_one_cell_per_forward() {
    let (mut app, mut terminal) = setup();
    let (col0, row0) = glyph_position(&draw(&mut app, &mut terminal), '↑').unwrap();

    app.handle(UiAction::Press(RobotCommand::Forward));
    let lines = draw(&mut app, &mut terminal);
    let (col1, row1) = glyph_position(&lines, '↑').unwrap();
    assert_eq!(col1, col0);
    assert_eq!(row0 - row1, CELL_HEIGHT as usize);
    assert!(screen_contains(&lines, "Position: (0, 3) Facing: N"));

    app.handle(UiAction::Press(RobotCommand::RotateRight));
    app.handle(UiAction::Press(RobotCommand::Forward));
    let lines = draw(&mut app, &mut terminal);
    let (col2, row2) = glyph_position(&lines, '→').unwrap();
    assert_eq!(row2, row1);
    assert_eq!(col2 - col1, CELL_WIDTH as usize);
    assert!(screen_contains(&lines, "Robot Direction: E"));
}

#[test]
fn test_clicking_buttons() {
    let (mut app, mut terminal) = setup();
    draw(&mut app, &mut terminal);

    let rotate_right = app.ui.button_areas[2];
    app.handle(UiAction::Click {
        column: rotate_right.x + rotate_right.width / 2,
        row: rotate_right.y + 1,
    });
    assert_eq!(app.session.state(), RobotState::new(0, 4, Direction::E));
    assert_eq!(app.ui.focused, 2);

    let lines = draw(&mut app, &mut terminal);
    assert!(screen_contains(&lines, "Facing: E"));
    assert!(screen_contains(&lines, "rotate-right: (0, 4) N -> (0, 4) E"));
}

#[test]
fn test_blocked_move_is_logged() {
    let (mut app, mut terminal) = setup();
    app.handle(UiAction::Press(RobotCommand::RotateLeft));
    app.handle(UiAction::Press(RobotCommand::Forward));
    let lines = draw(&mut app, &mut terminal);
    assert!(screen_contains(&lines, "forward: blocked at (0, 4) W"));
    assert!(glyph_position(&lines, '←').is_some());
}

#[test]
fn test_debug_panel_can_be_hidden() {
    let config = RobotConfig {
        show_debug: false,
        ..RobotConfig::default()
    };
    let mut app = App::new(&config);
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let lines = draw(&mut app, &mut terminal);
    assert!(!screen_contains(&lines, "Debug Info"));
    assert!(screen_contains(&lines, "Position: (0, 4) Facing: N"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let (mut app, _) = setup();
    let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
}

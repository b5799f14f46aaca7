//! Pure projection of robot state into what the front ends display
//!
//! Nothing here touches the terminal. Every front end recomputes these values
//! from the current [`RobotState`] after each command.

use crate::core::types::GRID_SIZE;
use crate::robot::state::RobotState;
use glam::Vec2;

/// Width (and height) of one grid cell as a percentage of the grid side
pub const CELL_PERCENT: f32 = 100.0 / GRID_SIZE as f32;

/// Cell coordinates of the robot as a float vector, for interpolation
pub fn grid_position(state: &RobotState) -> Vec2 {
    Vec2::new(f32::from(state.x()), f32::from(state.y()))
}

/// Offset of the top-left corner of a (possibly fractional) cell position,
/// in percent of the grid's width and height
pub fn offset_percent(position: Vec2) -> Vec2 {
    position * CELL_PERCENT
}

/// Offset of the robot marker within the grid, in percent: `(x * 20, y * 20)`
pub fn marker_offset_percent(state: &RobotState) -> (f32, f32) {
    let offset = offset_percent(grid_position(state));
    (offset.x, offset.y)
}

/// One-line summary shown under the controls
pub fn status_line(state: &RobotState) -> String {
    format!(
        "Position: ({}, {}) Facing: {}",
        state.x(),
        state.y(),
        state.direction()
    )
}

/// Lines of the debug readout panel
pub fn debug_lines(state: &RobotState) -> Vec<String> {
    vec![
        format!("Grid Size: {}x{}", GRID_SIZE, GRID_SIZE),
        format!("Robot Position: ({}, {})", state.x(), state.y()),
        format!("Robot Direction: {}", state.direction()),
    ]
}

/// Plain-text grid for line mode, one row per line
pub fn render_ascii(state: &RobotState) -> String {
    let mut out = String::new();
    for y in 0..GRID_SIZE {
        let row: Vec<String> = (0..GRID_SIZE)
            .map(|x| {
                if x == state.x() && y == state.y() {
                    state.direction().glyph().to_string()
                } else {
                    "·".to_string()
                }
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

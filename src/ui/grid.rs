//! Grid widget: a bordered square of 5x5 bordered cells with the robot marker

use crate::core::types::{Direction, GRID_SIZE};
use crate::ui::colors;
use crate::ui::view;
use glam::Vec2;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Terminal columns per cell, including the cell's left border
pub const CELL_WIDTH: u16 = 6;

/// Terminal rows per cell, including the cell's top border
pub const CELL_HEIGHT: u16 = 3;

/// Columns covered by the whole grid
pub const GRID_WIDTH: u16 = GRID_SIZE as u16 * CELL_WIDTH + 1;

/// Rows covered by the whole grid
pub const GRID_HEIGHT: u16 = GRID_SIZE as u16 * CELL_HEIGHT + 1;

/// Draws the grid and the marker at a (possibly fractional) cell position
pub struct GridWidget {
    marker: Vec2,
    direction: Direction,
}

impl GridWidget {
    pub fn new(marker: Vec2, direction: Direction) -> Self {
        Self { marker, direction }
    }

    /// Rectangle of the grid centred horizontally at the top of `area`
    pub fn placement(area: Rect) -> Rect {
        let x = area.x + area.width.saturating_sub(GRID_WIDTH) / 2;
        Rect::new(x, area.y, GRID_WIDTH, GRID_HEIGHT).intersection(area)
    }
}

/// Box-drawing symbol at grid-local `(dx, dy)`, or `None` inside a cell
fn line_symbol(dx: u16, dy: u16) -> Option<&'static str> {
    let top = dy == 0;
    let bottom = dy == GRID_HEIGHT - 1;
    let left = dx == 0;
    let right = dx == GRID_WIDTH - 1;
    let on_vertical = dx % CELL_WIDTH == 0;
    let on_horizontal = dy % CELL_HEIGHT == 0;

    let symbol = match (on_vertical, on_horizontal) {
        (true, true) => match (top, bottom, left, right) {
            (true, _, true, _) => "┌",
            (true, _, _, true) => "┐",
            (_, true, true, _) => "└",
            (_, true, _, true) => "┘",
            (true, _, _, _) => "┬",
            (_, true, _, _) => "┴",
            (_, _, true, _) => "├",
            (_, _, _, true) => "┤",
            _ => "┼",
        },
        (false, true) => "─",
        (true, false) => "│",
        (false, false) => return None,
    };
    Some(symbol)
}

fn on_outer_edge(dx: u16, dy: u16) -> bool {
    dx == 0 || dy == 0 || dx == GRID_WIDTH - 1 || dy == GRID_HEIGHT - 1
}

impl Widget for GridWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = GridWidget::placement(area);

        for dy in 0..area.height {
            for dx in 0..area.width {
                let (symbol, style) = match line_symbol(dx, dy) {
                    Some(s) if on_outer_edge(dx, dy) => (s, colors::border_style()),
                    Some(s) => (s, colors::inner_line_style()),
                    None => (" ", colors::cell_style()),
                };
                buf.set_string(area.x + dx, area.y + dy, symbol, style);
            }
        }

        // Marker covers the interior of the cell it occupies
        let offset = view::offset_percent(self.marker) / 100.0;
        let span = Vec2::new(
            f32::from(GRID_WIDTH - 1),
            f32::from(GRID_HEIGHT - 1),
        );
        let origin = (offset * span).round();
        let left = origin.x as u16 + 1;
        let top = origin.y as u16 + 1;
        let inner_w = CELL_WIDTH - 1;
        let inner_h = CELL_HEIGHT - 1;
        let glyph = self.direction.glyph().to_string();

        for dy in 0..inner_h {
            for dx in 0..inner_w {
                let (gx, gy) = (left + dx, top + dy);
                if gx >= area.width || gy >= area.height {
                    continue;
                }
                let symbol = if dx == inner_w / 2 && dy == (inner_h - 1) / 2 {
                    glyph.as_str()
                } else {
                    " "
                };
                buf.set_string(area.x + gx, area.y + gy, symbol, colors::marker_style());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(GRID_WIDTH, 31);
        assert_eq!(GRID_HEIGHT, 16);
    }

    #[test]
    fn test_line_symbols() {
        assert_eq!(line_symbol(0, 0), Some("┌"));
        assert_eq!(line_symbol(GRID_WIDTH - 1, 0), Some("┐"));
        assert_eq!(line_symbol(0, GRID_HEIGHT - 1), Some("└"));
        assert_eq!(line_symbol(GRID_WIDTH - 1, GRID_HEIGHT - 1), Some("┘"));
        assert_eq!(line_symbol(CELL_WIDTH, 0), Some("┬"));
        assert_eq!(line_symbol(0, CELL_HEIGHT), Some("├"));
        assert_eq!(line_symbol(CELL_WIDTH, CELL_HEIGHT), Some("┼"));
        assert_eq!(line_symbol(1, 0), Some("─"));
        assert_eq!(line_symbol(0, 1), Some("│"));
        assert_eq!(line_symbol(1, 1), None);
    }

    #[test]
    fn test_placement_centres_and_clips() {
        let placed = GridWidget::placement(Rect::new(0, 2, 51, 30));
        assert_eq!(placed, Rect::new(10, 2, GRID_WIDTH, GRID_HEIGHT));

        let clipped = GridWidget::placement(Rect::new(0, 0, 20, 10));
        assert_eq!(clipped, Rect::new(0, 0, 20, 10));
    }

    #[test]
    fn test_marker_drawn_in_start_cell() {
        let area = Rect::new(0, 0, GRID_WIDTH, GRID_HEIGHT);
        let mut buf = Buffer::empty(area);
        GridWidget::new(Vec2::new(0.0, 4.0), Direction::N).render(area, &mut buf);

        // Cell (0, 4) interior starts one column and one row inside its corner
        let glyph_x = 1 + (CELL_WIDTH - 1) / 2;
        let glyph_y = 4 * CELL_HEIGHT + 1;
        assert_eq!(buf.get(glyph_x, glyph_y).symbol(), "↑");
        assert_eq!(buf.get(0, 0).symbol(), "┌");
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        GridWidget::new(Vec2::new(4.0, 4.0), Direction::E).render(area, &mut buf);
        assert_eq!(buf.get(0, 0).symbol(), "┌");
    }
}

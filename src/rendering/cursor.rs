use macroquad::prelude::*;

use crate::core::{cell_to_screen_position, CELL_PIXELS, GRID_ORIGIN_X, GRID_ORIGIN_Y};
use crate::input::DragMode;

/// Outline the hovered cell according to the active drag
pub fn draw_cursor_based_on_mode(mode: DragMode, hovered: Option<usize>) {
    let Some(index) = hovered else {
        return;
    };
    let pos = cell_to_screen_position(index, vec2(GRID_ORIGIN_X, GRID_ORIGIN_Y), CELL_PIXELS);

    match mode {
        DragMode::Idle | DragMode::Painting => {
            draw_rectangle_lines(pos.x, pos.y, CELL_PIXELS, CELL_PIXELS, 2.0, Color::from_rgba(0, 0, 0, 150));
        }
        DragMode::Erasing => {
            // Red highlight for the eraser
            draw_rectangle_lines(pos.x, pos.y, CELL_PIXELS, CELL_PIXELS, 2.0, Color::from_rgba(255, 100, 100, 200));
        }
    }
}

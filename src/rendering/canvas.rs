use macroquad::prelude::*;

use crate::core::*;

/// Cell canvas that caches each cell's resolved color.
/// Only cells the grid reports as dirty are resolved again.
pub struct CanvasRenderer {
    resolved: Vec<Option<Color>>,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        CanvasRenderer {
            resolved: vec![None; CELL_COUNT],
        }
    }

    /// Re-resolve the cells changed since the last frame
    pub fn update(&mut self, grid: &mut GridStore) {
        for index in grid.take_dirty() {
            let value = grid.get_color(index);
            // White cells are left to the background, like an export leaves them transparent
            self.resolved[index] = if is_unpainted(value) {
                None
            } else {
                Rgba::parse_css(value).ok().map(Rgba::to_mq_color)
            };
        }
    }

    pub fn draw(&self) {
        let side = GRID_CELLS as f32 * CELL_PIXELS;
        draw_rectangle(GRID_ORIGIN_X, GRID_ORIGIN_Y, side, side, WHITE);

        let origin = vec2(GRID_ORIGIN_X, GRID_ORIGIN_Y);
        for (index, color) in self.resolved.iter().enumerate() {
            if let Some(color) = color {
                let pos = cell_to_screen_position(index, origin, CELL_PIXELS);
                draw_rectangle(pos.x, pos.y, CELL_PIXELS, CELL_PIXELS, *color);
            }
        }
    }
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new()
    }
}

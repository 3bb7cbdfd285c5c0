use macroquad::prelude::*;

use crate::core::*;

/// Cell boundaries over the fixed-size canvas
pub struct GridRenderer {
    color: Color,
    thickness: f32,
}

impl GridRenderer {
    pub fn new() -> Self {
        GridRenderer {
            color: grid_color(),
            thickness: GRID_THICKNESS,
        }
    }

    pub fn draw(&self) {
        let side = GRID_CELLS as f32 * CELL_PIXELS;
        let (x0, y0) = (GRID_ORIGIN_X, GRID_ORIGIN_Y);

        for i in 0..=GRID_CELLS {
            let offset = i as f32 * CELL_PIXELS;
            // Vertical
            draw_line(x0 + offset, y0, x0 + offset, y0 + side, self.thickness, self.color);
            // Horizontal
            draw_line(x0, y0 + offset, x0 + side, y0 + offset, self.thickness, self.color);
        }

        draw_rectangle_lines(x0, y0, side, side, 2.0, DARKGRAY);
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

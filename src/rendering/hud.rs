use macroquad::prelude::*;

use crate::core::{CELL_PIXELS, GRID_CELLS, GRID_ORIGIN_X};
use crate::ui::{FlashMessage, UiFont};

/// Flash banner centered above the grid
pub fn draw_flash(flash: &FlashMessage, now: f64, font: &UiFont) {
    if !flash.is_visible() {
        return;
    }

    let alpha = flash.opacity(now);
    let grid_side = GRID_CELLS as f32 * CELL_PIXELS;
    let dims = font.measure(flash.text(), 18);
    let width = dims.width + 40.0;
    let rect = Rect::new(GRID_ORIGIN_X + (grid_side - width) / 2.0, 330.0, width, 40.0);

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::new(0.18, 0.55, 0.34, 0.9 * alpha));
    font.draw_centered(flash.text(), rect, 18, Color::new(1.0, 1.0, 1.0, alpha));
}

use macroquad::prelude::*;

use super::text::UiFont;
use super::toolbar::draw_button;

const LINES: [&str; 8] = [
    "Left drag: paint cells with the current color",
    "Right drag: erase cells back to white",
    "Palette: click a swatch to pick its color",
    "Custom...: open the RGB picker, changes apply live",
    "Save: keep the drawing for the next session",
    "Delete: remove the saved drawing and clear the grid",
    "Download: write a transparent PNG (600x600)",
    "Dialogs: Enter confirms, Esc cancels, Tab moves focus",
];

/// Draw the how-to page; true when the user asks to go back
pub fn render_howto(font: &UiFont) -> bool {
    font.draw("How to use", 40.0, 60.0, 32, BLACK);

    for (i, line) in LINES.iter().enumerate() {
        font.draw(line, 50.0, 110.0 + i as f32 * 34.0, 20, DARKGRAY);
    }

    let back = Rect::new(40.0, 110.0 + LINES.len() as f32 * 34.0 + 20.0, 120.0, 34.0);
    draw_button("Back", back, false, font) || is_key_pressed(KeyCode::Escape)
}

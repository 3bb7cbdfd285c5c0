use macroquad::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// Text drawing with an optional TTF; macroquad's built-in font has no CJK glyphs
pub struct UiFont {
    font: Option<Font>,
}

impl UiFont {
    pub async fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return UiFont { font: None };
        };

        match load_ttf_font(&path.to_string_lossy()).await {
            Ok(font) => {
                info!(path = %path.display(), "font loaded");
                UiFont { font: Some(font) }
            }
            Err(err) => {
                warn!(path = %path.display(), error = ?err, "failed to load font, using built-in");
                UiFont { font: None }
            }
        }
    }

    pub fn draw(&self, text: &str, x: f32, y: f32, size: u16, color: Color) {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size: size,
                color,
                ..Default::default()
            },
        );
    }

    pub fn measure(&self, text: &str, size: u16) -> TextDimensions {
        measure_text(text, self.font.as_ref(), size, 1.0)
    }

    /// Draw text centered inside a rect
    pub fn draw_centered(&self, text: &str, rect: Rect, size: u16, color: Color) {
        let dims = self.measure(text, size);
        let x = rect.x + (rect.w - dims.width) / 2.0;
        let y = rect.y + (rect.h + dims.height) / 2.0;
        self.draw(text, x, y, size, color);
    }
}

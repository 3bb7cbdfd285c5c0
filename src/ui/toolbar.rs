use macroquad::prelude::*;

use super::text::UiFont;
use crate::core::GRID_ORIGIN_X;

/// Toolbar requests handled by the editor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    Save,
    Delete,
    Download,
    HowTo,
}

pub fn draw_button_face(text: &str, rect: Rect, is_active: bool, font: &UiFont) {
    let color = if is_active { DARKGRAY } else { GRAY };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, BLACK);
    font.draw_centered(text, rect, 20, BLACK);
}

/// Draw a button; it counts as clicked when the left button is let go over it,
/// after any drag the press started has already ended
pub fn draw_button(text: &str, rect: Rect, is_active: bool, font: &UiFont) -> bool {
    draw_button_face(text, rect, is_active, font);
    is_mouse_button_released(MouseButton::Left) && rect.contains(Vec2::from(mouse_position()))
}

/// Draw the top toolbar; clicks only count when `interactive`
pub fn render_toolbar(font: &UiFont, interactive: bool) -> Option<ToolbarAction> {
    let buttons = [
        ("Save", ToolbarAction::Save),
        ("Delete", ToolbarAction::Delete),
        ("Download", ToolbarAction::Download),
        ("How to", ToolbarAction::HowTo),
    ];

    let mut clicked = None;
    for (i, (label, action)) in buttons.into_iter().enumerate() {
        let rect = Rect::new(GRID_ORIGIN_X + i as f32 * 110.0, 10.0, 100.0, 34.0);
        if draw_button(label, rect, false, font) && interactive {
            clicked = Some(action);
        }
    }
    clicked
}

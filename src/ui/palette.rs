use macroquad::prelude::*;
use tracing::debug;

use super::text::UiFont;
use super::toolbar::draw_button;
use crate::core::{Rgba, GRID_ORIGIN_Y, SIDE_PANEL_WIDTH, SIDE_PANEL_X};
use crate::state::AppState;

/// A preset color option; `data_color` is the value it applies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub data_color: &'static str,
}

const fn swatch(name: &'static str, data_color: &'static str) -> Swatch {
    Swatch { name, data_color }
}

pub const SWATCHES: [Swatch; 16] = [
    swatch("Black", "black"),
    swatch("White", "white"),
    swatch("Gray", "gray"),
    swatch("Silver", "silver"),
    swatch("Red", "red"),
    swatch("Orange", "orange"),
    swatch("Yellow", "yellow"),
    swatch("Lime", "lime"),
    swatch("Green", "green"),
    swatch("Cyan", "cyan"),
    swatch("Blue", "blue"),
    swatch("Navy", "navy"),
    swatch("Purple", "purple"),
    swatch("Magenta", "magenta"),
    swatch("Pink", "pink"),
    swatch("Brown", "brown"),
];

pub fn select_swatch(state: &mut AppState, swatch: &Swatch) {
    state.current_color = swatch.data_color.to_string();
    debug!(color = swatch.data_color, "swatch selected");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

const CHANNELS: [(Channel, &str); 3] = [(Channel::Red, "R"), (Channel::Green, "G"), (Channel::Blue, "B")];

pub const PICKER_WIDTH: f32 = SIDE_PANEL_WIDTH;
pub const PICKER_HEIGHT: f32 = 170.0;

/// Popup color input; its value survives closing, like a form control
#[derive(Debug)]
pub struct ColorPicker {
    open: bool,
    anchor: Vec2,
    value: Rgba,
    dragging: Option<Channel>,
}

impl ColorPicker {
    pub fn new() -> Self {
        ColorPicker {
            open: false,
            anchor: Vec2::ZERO,
            value: Rgba::rgb(0, 0, 0),
            dragging: None,
        }
    }

    /// Show the popup right below its trigger, as placed right now
    pub fn open(&mut self, trigger: Rect) {
        self.anchor = vec2(trigger.x, trigger.y + trigger.h);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.dragging = None;
    }

    /// Update one channel; every actual change is applied to the current color at once
    pub fn set_channel(&mut self, channel: Channel, value: u8, state: &mut AppState) {
        let before = self.value;
        match channel {
            Channel::Red => self.value.r = value,
            Channel::Green => self.value.g = value,
            Channel::Blue => self.value.b = value,
        }
        if self.value != before {
            state.current_color = self.value.to_hex();
        }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.value.r,
            Channel::Green => self.value.g,
            Channel::Blue => self.value.b,
        }
    }

    pub fn value(&self) -> Rgba {
        self.value
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.anchor.x, self.anchor.y, PICKER_WIDTH, PICKER_HEIGHT)
    }

    /// Whether the open popup covers `pos`
    pub fn covers(&self, pos: Vec2) -> bool {
        self.open && self.rect().contains(pos)
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Channel value for a pointer x position over a slider track
pub fn slider_value(track: Rect, x: f32) -> u8 {
    (((x - track.x) / track.w).clamp(0.0, 1.0) * 255.0).round() as u8
}

fn colors_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || matches!((Rgba::parse_css(a), Rgba::parse_css(b)), (Ok(x), Ok(y)) if x == y)
}

fn resolved_mq_color(value: &str) -> Color {
    Rgba::parse_css(value).unwrap_or(Rgba::WHITE).to_mq_color()
}

pub fn render_palette(state: &mut AppState, picker: &mut ColorPicker, font: &UiFont, interactive: bool) {
    let panel_x = SIDE_PANEL_X;
    let panel_y = GRID_ORIGIN_Y;
    let panel_height = 300.0;
    let mouse_pos = Vec2::from(mouse_position());
    let clicked = interactive && is_mouse_button_pressed(MouseButton::Left);

    draw_rectangle(panel_x, panel_y, SIDE_PANEL_WIDTH, panel_height, Color::from_rgba(230, 230, 230, 255));
    draw_rectangle_lines(panel_x, panel_y, SIDE_PANEL_WIDTH, panel_height, 2.0, BLACK);
    font.draw("Palette", panel_x + 8.0, panel_y + 20.0, 18, BLACK);

    // Current color indicator
    let indicator = Rect::new(panel_x + 8.0, panel_y + 32.0, 40.0, 40.0);
    draw_rectangle(indicator.x, indicator.y, indicator.w, indicator.h, resolved_mq_color(&state.current_color));
    draw_rectangle_lines(indicator.x, indicator.y, indicator.w, indicator.h, 2.0, BLACK);
    font.draw(&state.current_color, indicator.x + indicator.w + 8.0, indicator.y + 26.0, 16, BLACK);

    let color_size = 32.0;
    let padding = 8.0;
    let start_y = indicator.y + indicator.h + 16.0;

    for (i, swatch) in SWATCHES.iter().enumerate() {
        let col = i % 4;
        let row = i / 4;
        let x = panel_x + padding + col as f32 * (color_size + padding);
        let y = start_y + row as f32 * (color_size + padding);

        draw_rectangle(x, y, color_size, color_size, resolved_mq_color(swatch.data_color));

        let selected = colors_match(&state.current_color, swatch.data_color);
        let (border_width, border_color) = if selected {
            (3.0, Color::from_rgba(255, 200, 0, 255))
        } else {
            (1.5, BLACK)
        };
        draw_rectangle_lines(x, y, color_size, color_size, border_width, border_color);

        if clicked && Rect::new(x, y, color_size, color_size).contains(mouse_pos) {
            select_swatch(state, swatch);
        }
    }

    let trigger = Rect::new(panel_x + padding, start_y + 4.0 * (color_size + padding), SIDE_PANEL_WIDTH - 2.0 * padding, 30.0);
    if draw_button("Custom...", trigger, picker.is_open(), font) && interactive {
        picker.open(trigger);
    }
}

pub fn render_color_picker(picker: &mut ColorPicker, state: &mut AppState, font: &UiFont, interactive: bool) {
    if is_mouse_button_released(MouseButton::Left) {
        picker.dragging = None;
    }
    if !picker.is_open() {
        return;
    }

    let area = picker.rect();
    let mouse_pos = Vec2::from(mouse_position());

    draw_rectangle(area.x, area.y, area.w, area.h, Color::from_rgba(245, 245, 245, 255));
    draw_rectangle_lines(area.x, area.y, area.w, area.h, 2.0, BLACK);

    for (row, (channel, label)) in CHANNELS.into_iter().enumerate() {
        let y = area.y + 14.0 + row as f32 * 28.0;
        let track = Rect::new(area.x + 28.0, y, area.w - 40.0, 12.0);

        if interactive && is_mouse_button_pressed(MouseButton::Left) && track.contains(mouse_pos) {
            picker.dragging = Some(channel);
        }
        if picker.dragging == Some(channel) && is_mouse_button_down(MouseButton::Left) {
            picker.set_channel(channel, slider_value(track, mouse_pos.x), state);
        }

        let value = picker.channel(channel);
        let fill = match channel {
            Channel::Red => Color::from_rgba(value, 0, 0, 255),
            Channel::Green => Color::from_rgba(0, value, 0, 255),
            Channel::Blue => Color::from_rgba(0, 0, value, 255),
        };
        font.draw(label, area.x + 8.0, y + 11.0, 16, BLACK);
        draw_rectangle(track.x, track.y, track.w, track.h, Color::from_rgba(200, 200, 200, 255));
        draw_rectangle(track.x, track.y, track.w * value as f32 / 255.0, track.h, fill);
        draw_rectangle_lines(track.x, track.y, track.w, track.h, 1.0, BLACK);
    }

    let preview_y = area.y + 96.0;
    draw_rectangle(area.x + 8.0, preview_y, 30.0, 30.0, picker.value().to_mq_color());
    draw_rectangle_lines(area.x + 8.0, preview_y, 30.0, 30.0, 1.5, BLACK);
    font.draw(&picker.value().to_hex(), area.x + 46.0, preview_y + 21.0, 18, BLACK);

    let close = Rect::new(area.x + area.w - 78.0, area.y + area.h - 36.0, 70.0, 28.0);
    if draw_button("Close", close, false, font) && interactive {
        picker.close();
    }
}

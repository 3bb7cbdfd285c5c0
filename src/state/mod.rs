//! Application State Module
//!
//! Holds the state shared between editor components. `AppState` carries the
//! current drawing color; it is owned by the editor and handed by reference
//! to the palette, the color picker and the drawing surface.

use crate::core::INITIAL_COLOR;

/// Session state read by drawing and written by color selection
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// CSS color value applied to newly painted cells
    pub current_color: String,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            current_color: INITIAL_COLOR.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which top-level screen the window shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Editor,
    HowTo,
}

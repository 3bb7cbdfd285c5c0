use tracing::trace;

use crate::core::{cell_at, position, GridStore, UNPAINTED};
use crate::state::AppState;

/// Drag mode locked in when a button goes down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Idle,
    Painting,
    Erasing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Discrete pointer input, independent of the windowing layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// A button went down; `cell` is the cell under the pointer, if any
    Down { button: PointerButton, cell: Option<usize> },
    /// The pointer moved onto a different cell
    Enter { cell: usize },
    /// The pointer moved off the grid or under an overlay
    Leave,
    /// Any button was released anywhere
    Up,
}

/// Turns pointer gestures into grid mutations
#[derive(Debug)]
pub struct DrawingSurface {
    mode: DragMode,
    interpolate: bool,
    last_cell: Option<usize>,
}

impl DrawingSurface {
    pub fn new(interpolate: bool) -> Self {
        DrawingSurface {
            mode: DragMode::Idle,
            interpolate,
            last_cell: None,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn handle(&mut self, event: PointerEvent, state: &AppState, grid: &mut GridStore) {
        match event {
            PointerEvent::Down { button, cell } => {
                // Only primary and secondary presses touch the cell under the pointer
                if let Some(index) = cell {
                    match button {
                        PointerButton::Primary => grid.set_color(index, &state.current_color),
                        PointerButton::Secondary => grid.set_color(index, UNPAINTED),
                        PointerButton::Middle => {}
                    }
                }
                self.mode = match button {
                    PointerButton::Primary => DragMode::Painting,
                    _ => DragMode::Erasing,
                };
                self.last_cell = cell;
                trace!(mode = ?self.mode, ?cell, "stroke started");
            }
            PointerEvent::Enter { cell } => {
                let color = match self.mode {
                    DragMode::Idle => return,
                    DragMode::Painting => state.current_color.as_str(),
                    DragMode::Erasing => UNPAINTED,
                };

                match self.last_cell.filter(|_| self.interpolate) {
                    Some(from) => {
                        for index in cells_between(from, cell) {
                            grid.set_color(index, color);
                        }
                    }
                    None => grid.set_color(cell, color),
                }
                self.last_cell = Some(cell);
            }
            // A stroke that re-enters elsewhere starts a new line
            PointerEvent::Leave => self.last_cell = None,
            PointerEvent::Up => {
                if self.mode != DragMode::Idle {
                    trace!(mode = ?self.mode, "stroke ended");
                }
                self.mode = DragMode::Idle;
                self.last_cell = None;
            }
        }
    }
}

/// Bresenham line between two cells, both ends included
fn cells_between(from: usize, to: usize) -> Vec<usize> {
    let (r0, c0) = position(from);
    let (r1, c1) = position(to);
    let (mut x0, mut y0) = (c0 as i32, r0 as i32);
    let (x1, y1) = (c1 as i32, r1 as i32);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let mut cells = Vec::new();

    loop {
        cells.extend(cell_at(y0 as usize, x0 as usize));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    cells
}

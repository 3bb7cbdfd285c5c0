// src/app/mod.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use macroquad::prelude::*;
use tracing::{error, info};

use crate::config::EditorConfig;
use crate::core::*;
use crate::error::PersistenceError;
use crate::export;
use crate::input::{poll_buttons, DragMode, DrawingSurface, PointerButton, PointerEvent, PointerTracker};
use crate::rendering::{draw_cursor_based_on_mode, draw_flash, CanvasRenderer, GridRenderer};
use crate::state::{AppState, Screen};
use crate::storage::{FileStore, Persistence};
use crate::ui::{
    render_color_picker, render_dialog, render_howto, render_palette, render_toolbar, ColorPicker,
    ConfirmDialog, DialogLayout, FlashMessage, ToolbarAction, UiFont,
};

/// Work gated behind the confirmation dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteSaved,
    ExportImage,
    LeaveForHowTo,
}

/// The grid cell under `mouse`, unless the modal or the open picker covers it
pub fn hovered_cell(mouse: Vec2, modal: bool, picker: &ColorPicker) -> Option<usize> {
    if modal || picker.covers(mouse) {
        return None;
    }
    screen_position_to_cell(mouse, vec2(GRID_ORIGIN_X, GRID_ORIGIN_Y), CELL_PIXELS)
}

/// One editor page: grid, color state and the widgets around them
pub struct Editor {
    state: AppState,
    grid: GridStore,
    persistence: Persistence<FileStore>,
    surface: DrawingSurface,
    pointer: PointerTracker,
    picker: ColorPicker,
    dialog: ConfirmDialog<ConfirmAction>,
    flash: FlashMessage,
    canvas: CanvasRenderer,
    grid_lines: GridRenderer,
    export_dir: PathBuf,
}

impl Editor {
    /// Build a fresh page and restore the saved drawing, if any
    pub fn new(config: &EditorConfig) -> Result<Self, PersistenceError> {
        let persistence = Persistence::new(FileStore::new(&config.storage_dir));
        let mut grid = GridStore::new();
        persistence.load(&mut grid)?;

        Ok(Editor {
            state: AppState::new(),
            grid,
            persistence,
            surface: DrawingSurface::new(config.drawing.interpolate_strokes),
            pointer: PointerTracker::new(),
            picker: ColorPicker::new(),
            dialog: ConfirmDialog::new(),
            flash: FlashMessage::new(config.notifications.latest_wins),
            canvas: CanvasRenderer::new(),
            grid_lines: GridRenderer::new(),
            export_dir: config.export_dir.clone(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn flash(&self) -> &FlashMessage {
        &self.flash
    }

    pub fn dialog(&self) -> &ConfirmDialog<ConfirmAction> {
        &self.dialog
    }

    pub fn picker_mut(&mut self) -> &mut ColorPicker {
        &mut self.picker
    }

    pub fn drag_mode(&self) -> DragMode {
        self.surface.mode()
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.surface.handle(event, &self.state, &mut self.grid);
    }

    /// Feed one frame of mouse state through the tracker; returns the hovered cell
    pub fn pointer_input(&mut self, mouse: Vec2, pressed: &[PointerButton], released: bool) -> Option<usize> {
        let hovered = hovered_cell(mouse, self.dialog.is_open(), &self.picker);
        for event in self.pointer.collect_events(hovered, pressed, released) {
            self.handle_pointer(event);
        }
        hovered
    }

    /// A completed click on the dialog laid out for a `screen`-sized window
    pub fn click_dialog(&mut self, mouse: Vec2, screen: Vec2, now: f64) -> Option<Screen> {
        let action = self.dialog.click_at(&DialogLayout::centered(screen), mouse)?;
        self.run(action, now)
    }

    /// Save runs right away; everything else asks first
    pub fn request(&mut self, action: ToolbarAction, now: f64) {
        match action {
            ToolbarAction::Save => self.save(now),
            ToolbarAction::Delete => self.dialog.open(CONFIRM_DELETE_MESSAGE, ConfirmAction::DeleteSaved),
            ToolbarAction::Download => self.dialog.open(CONFIRM_EXPORT_MESSAGE, ConfirmAction::ExportImage),
            ToolbarAction::HowTo => self.dialog.open(CONFIRM_LEAVE_MESSAGE, ConfirmAction::LeaveForHowTo),
        }
    }

    /// Confirm the open dialog; returns the screen to switch to, if any
    pub fn confirm(&mut self, now: f64) -> Option<Screen> {
        let action = self.dialog.confirm()?;
        self.run(action, now)
    }

    pub fn cancel(&mut self) {
        self.dialog.cancel();
    }

    fn run(&mut self, action: ConfirmAction, now: f64) -> Option<Screen> {
        match action {
            ConfirmAction::DeleteSaved => {
                match self.persistence.delete(&mut self.grid) {
                    Ok(()) => self.flash.show(DELETED_MESSAGE, now),
                    Err(err) => error!(%err, "delete failed"),
                }
                None
            }
            ConfirmAction::ExportImage => {
                if let Err(err) = export::export(&self.grid, &self.export_dir) {
                    error!(%err, "export failed");
                }
                None
            }
            ConfirmAction::LeaveForHowTo => Some(Screen::HowTo),
        }
    }

    fn save(&mut self, now: f64) {
        match self.persistence.save(&self.grid) {
            Ok(()) => self.flash.show(SAVED_MESSAGE, now),
            Err(err) => error!(%err, "save failed"),
        }
    }

    /// Run one frame of input and drawing
    pub fn frame(&mut self, font: &UiFont, now: f64) -> Option<Screen> {
        self.flash.tick(now);

        let modal = self.dialog.is_open();
        let (pressed, released) = poll_buttons();
        let hovered = self.pointer_input(Vec2::from(mouse_position()), &pressed, released);

        self.canvas.update(&mut self.grid);
        self.canvas.draw();
        self.grid_lines.draw();
        draw_cursor_based_on_mode(self.surface.mode(), hovered);

        if let Some(action) = render_toolbar(font, !modal) {
            self.request(action, now);
        }
        render_palette(&mut self.state, &mut self.picker, font, !modal);
        render_color_picker(&mut self.picker, &mut self.state, font, !modal);
        draw_flash(&self.flash, now, font);

        let action = render_dialog(&mut self.dialog, font)?;
        self.run(action, now)
    }
}

pub async fn run(config: EditorConfig) -> Result<()> {
    let font = UiFont::load(config.font_path.as_deref()).await;
    let mut editor = Editor::new(&config).context("Failed to initialize editor")?;
    let mut screen = Screen::Editor;

    loop {
        // White background
        clear_background(WHITE);
        let now = get_time();

        match screen {
            Screen::Editor => {
                if let Some(next) = editor.frame(&font, now) {
                    info!(?next, "leaving editor");
                    screen = next;
                }
            }
            Screen::HowTo => {
                if render_howto(&font) {
                    // Coming back is a fresh page load: unsaved edits are gone
                    editor = Editor::new(&config).context("Failed to initialize editor")?;
                    screen = Screen::Editor;
                    info!("editor reloaded");
                }
            }
        }

        next_frame().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_is_hovered_only_when_nothing_covers_it() {
        let mouse = vec2(GRID_ORIGIN_X + 15.0, GRID_ORIGIN_Y + 25.0);
        let mut picker = ColorPicker::new();

        assert_eq!(hovered_cell(mouse, false, &picker), Some(2 * GRID_CELLS + 1));
        assert_eq!(hovered_cell(mouse, true, &picker), None);

        picker.open(Rect::new(GRID_ORIGIN_X, GRID_ORIGIN_Y - 20.0, 50.0, 20.0));
        assert_eq!(hovered_cell(mouse, false, &picker), None);

        let beside = vec2(GRID_ORIGIN_X + 305.0, GRID_ORIGIN_Y + 25.0);
        assert_eq!(hovered_cell(beside, false, &picker), Some(2 * GRID_CELLS + 30));

        picker.close();
        assert_eq!(hovered_cell(mouse, false, &picker), Some(2 * GRID_CELLS + 1));
    }

    #[test]
    fn pointer_off_the_grid_hovers_nothing() {
        let picker = ColorPicker::new();
        assert_eq!(hovered_cell(vec2(10.0, 10.0), false, &picker), None);
    }
}

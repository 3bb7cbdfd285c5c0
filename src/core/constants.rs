// Core constants for the dot canvas
pub const GRID_CELLS: usize = 60;
pub const CELL_COUNT: usize = GRID_CELLS * GRID_CELLS;

/// Edge length of one cell in exported image pixels
pub const EXPORT_CELL_PIXELS: u32 = 10;

/// Edge length of one cell on screen
pub const CELL_PIXELS: f32 = 10.0;
pub const GRID_THICKNESS: f32 = 1.0;

// Screen layout: palette column on the left, grid to its right, toolbar on top
pub const GRID_ORIGIN_X: f32 = 200.0;
pub const GRID_ORIGIN_Y: f32 = 60.0;
pub const SIDE_PANEL_X: f32 = 10.0;
pub const SIDE_PANEL_WIDTH: f32 = 175.0;

pub const WINDOW_WIDTH: i32 = 820;
pub const WINDOW_HEIGHT: i32 = 690;

pub const UNPAINTED: &str = "white";
pub const INITIAL_COLOR: &str = "black";

pub const STORAGE_KEY: &str = "dotEditorData";
pub const EXPORT_FILE_NAME: &str = "dot_image.png";

pub const SAVED_MESSAGE: &str = "編集内容を保存しました";
pub const DELETED_MESSAGE: &str = "編集内容を削除しました";
pub const CONFIRM_DELETE_MESSAGE: &str = "保存した編集内容を削除しますか？";
pub const CONFIRM_EXPORT_MESSAGE: &str = "作成したドット絵を画像ファイル(透過png)で保存しますか？";
pub const CONFIRM_LEAVE_MESSAGE: &str = "保存していない編集内容は破棄されます。ページを移動しますか？";

/// Seconds until the flash banner starts fading out
pub const FLASH_FADE_DELAY: f64 = 2.8;
/// Seconds until the flash banner is fully hidden
pub const FLASH_HIDE_DELAY: f64 = 3.0;

// Grid color helper function (since Color::from_rgba is not const)
pub fn grid_color() -> macroquad::prelude::Color {
    macroquad::prelude::Color::from_rgba(210, 225, 255, 255)
}

pub mod canvas;
pub mod grid;
pub mod cursor;
pub mod hud;

pub use canvas::CanvasRenderer;
pub use grid::GridRenderer;
pub use cursor::draw_cursor_based_on_mode;
pub use hud::draw_flash;

pub mod dialog;
pub mod flash;
pub mod howto;
pub mod palette;
pub mod text;
pub mod toolbar;

pub use dialog::{render_dialog, ConfirmDialog, DialogFocus, DialogLayout};
pub use flash::FlashMessage;
pub use howto::render_howto;
pub use palette::{render_color_picker, render_palette, ColorPicker, SWATCHES};
pub use text::UiFont;
pub use toolbar::{draw_button, draw_button_face, render_toolbar, ToolbarAction};

pub mod dispatcher;
pub mod drawing;

pub use dispatcher::{poll_buttons, PointerTracker};
pub use drawing::{DragMode, DrawingSurface, PointerButton, PointerEvent};

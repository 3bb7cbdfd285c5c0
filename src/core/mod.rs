pub mod constants;
pub mod grid;
pub mod color;

pub use constants::*;
pub use grid::*;
pub use color::*;

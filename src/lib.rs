//! Dot editor: a 60×60 pixel-art canvas with a palette, a custom color
//! picker, save/restore through a durable slot and transparent PNG export.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod input;
pub mod rendering;
pub mod state;
pub mod storage;
pub mod ui;

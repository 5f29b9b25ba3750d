//! Shared styling for the egui HUD

pub mod colors;

pub use colors::UiColors;

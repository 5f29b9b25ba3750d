//! UI module - egui HUD around the board
//!
//! - `game_ui` - connecting overlay, message panel, action buttons
//! - `styles` - shared color palette

pub mod game_ui;
pub mod styles;

// Re-export commonly used items
pub use game_ui::UiPlugin;

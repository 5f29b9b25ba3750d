//! User-facing client settings
//!
//! [`ClientSettings`] holds the preferences that survive across sessions:
//! the board color theme and whether legal-move highlights are drawn.
//! Persistence is handled by [`crate::core::settings_persistence`].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Board color theme
///
/// Each theme supplies the two checkerboard colors plus the highlight color
/// used for legal-move markers. The highlight color is chosen to contrast
/// with both square colors so a marked square is unambiguous on either
/// parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardTheme {
    /// Ghost-white and charcoal squares with a gold highlight
    ClassicWeb,
    /// Cream and green tournament-board squares
    Tournament,
    /// Low-contrast gray squares
    Slate,
}

impl BoardTheme {
    pub const ALL: [BoardTheme; 3] =
        [BoardTheme::ClassicWeb, BoardTheme::Tournament, BoardTheme::Slate];

    /// Display name for the settings UI
    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::ClassicWeb => "Classic",
            BoardTheme::Tournament => "Tournament",
            BoardTheme::Slate => "Slate",
        }
    }

    /// (light, dark) checkerboard colors
    pub fn colors(&self) -> (Color, Color) {
        match self {
            BoardTheme::ClassicWeb => (
                Color::srgb_u8(248, 248, 255),
                Color::srgb_u8(51, 51, 51),
            ),
            BoardTheme::Tournament => (
                Color::srgb_u8(238, 238, 210),
                Color::srgb_u8(118, 150, 86),
            ),
            BoardTheme::Slate => (
                Color::srgb_u8(170, 175, 180),
                Color::srgb_u8(90, 95, 100),
            ),
        }
    }

    /// Highlight color for legal-move markers
    pub fn highlight(&self) -> Color {
        match self {
            BoardTheme::ClassicWeb => Color::srgb_u8(255, 215, 0),
            BoardTheme::Tournament => Color::srgb_u8(246, 246, 105),
            BoardTheme::Slate => Color::srgb_u8(255, 200, 60),
        }
    }
}

/// User preferences, persisted as JSON in the user config directory
#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Board color theme
    pub board_theme: BoardTheme,
    /// Whether legal-move highlight markers are drawn
    pub show_hints: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            board_theme: BoardTheme::ClassicWeb,
            show_hints: true,
        }
    }
}

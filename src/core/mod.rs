//! Core module - application states, settings, and infrastructure
//!
//! - `states` - the two-state machine (Connecting → InGame)
//! - `settings` - user preferences ([`ClientSettings`], [`BoardTheme`])
//! - `settings_persistence` - JSON persistence under the user config dir
//! - `error` - core error types

pub mod error;
pub mod settings;
pub mod settings_persistence;
pub mod states;

// Re-export commonly used items
pub use settings::{BoardTheme, ClientSettings};
pub use states::GameState;

use bevy::prelude::*;

/// Plugin wiring up settings persistence and state transition logging
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, settings_persistence::load_settings_system)
            .add_systems(
                Update,
                (
                    settings_persistence::save_settings_system,
                    states::log_state_transitions,
                ),
            );
    }
}

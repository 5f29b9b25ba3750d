//! Game module - client-side view state
//!
//! Holds everything the client knows about the game in progress, all of it
//! supplied by the backend:
//!
//! - `resources` - board view, messages, buttons, session token
//! - `events` - interaction messages emitted by the board and HUD
//! - `plugin` - resource and message registration
//!
//! There is deliberately no rules logic here: move legality, turn order,
//! and game outcome are the backend's business.

pub mod events;
pub mod plugin;
pub mod resources;

// Re-export the plugin (main entry point)
pub use plugin::GamePlugin;

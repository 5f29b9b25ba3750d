//! Application state machine
//!
//! The client has exactly two states:
//!
//! ```text
//! [Connecting] → [InGame]
//! ```
//!
//! - **Connecting**: the initial board request is outstanding. The board is
//!   not spawned yet; the UI shows the loading message. The client stays here
//!   on failure (there is no retry, the backend must be reachable at launch).
//! - **InGame**: a board response has been applied; the 64 squares and the
//!   HUD are live. Every later response is reconciled in place without
//!   leaving this state.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

/// Primary application state
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States)]
pub enum GameState {
    /// Waiting for the initial board response from the backend
    #[default]
    Connecting,

    /// Board and HUD are live; responses update them in place
    InGame,
}

/// System that logs state transitions
///
/// The only legal transition is Connecting → InGame; anything else indicates
/// a logic error and is logged at error level.
pub fn log_state_transitions(
    mut transitions: MessageReader<StateTransitionEvent<GameState>>,
) {
    for transition in transitions.read() {
        match (transition.exited, transition.entered) {
            (Some(GameState::Connecting), Some(GameState::InGame)) => {
                info!("[STATE] Connecting -> InGame");
            }
            (Some(exited), Some(entered)) if exited != entered => {
                error!(
                    "[STATE] Unexpected transition: {:?} -> {:?}",
                    exited, entered
                );
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_state_default() {
        let state = GameState::default();
        assert_eq!(
            state,
            GameState::Connecting,
            "Client should start waiting for the initial board"
        );
    }

    #[test]
    fn test_game_state_variants_distinct() {
        assert_ne!(GameState::Connecting, GameState::InGame);
    }
}

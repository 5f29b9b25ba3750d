//! View-state resources
//!
//! These resources are the client's entire model of the game. They are
//! replaced wholesale whenever a backend response is applied; nothing in
//! here is derived locally from chess rules.
//!
//! - [`BoardView`] - the 64 occupant characters and 64 highlight flags
//! - [`StatusMessages`] - the two backend-supplied display lines
//! - [`ActionButtons`] - the currently offered action labels
//! - [`GameSession`] - the opaque session token from the initial load

use crate::networking::error::{ClientError, ClientResult};
use bevy::prelude::*;

/// The displayed board: occupant character and highlight flag per square
///
/// Index = row * 8 + col. An occupant character that is not one of the 12
/// recognized piece characters means the square is empty; the backend sends
/// '0' for empty squares. A highlight flag marks the square as a legal
/// destination for the currently selected piece.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    occupants: [char; Self::SQUARES],
    highlights: [bool; Self::SQUARES],
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            occupants: ['0'; Self::SQUARES],
            highlights: [false; Self::SQUARES],
        }
    }
}

impl BoardView {
    pub const SQUARES: usize = 64;

    /// Build a view from the backend's board and moves strings
    ///
    /// Both strings must be exactly 64 characters; a square is highlighted
    /// iff the moves string carries 'X' at its index. Validation rejects the
    /// whole pair, so a partially applied board can never be observed.
    pub fn from_strings(board: &str, moves: &str) -> ClientResult<Self> {
        let occupant_chars: Vec<char> = board.chars().collect();
        if occupant_chars.len() != Self::SQUARES {
            return Err(ClientError::MalformedField {
                field: "board",
                len: occupant_chars.len(),
            });
        }

        let move_chars: Vec<char> = moves.chars().collect();
        if move_chars.len() != Self::SQUARES {
            return Err(ClientError::MalformedField {
                field: "moves",
                len: move_chars.len(),
            });
        }

        let mut view = Self::default();
        for index in 0..Self::SQUARES {
            view.occupants[index] = occupant_chars[index];
            view.highlights[index] = move_chars[index] == 'X';
        }
        Ok(view)
    }

    /// Occupant character at a square index (0..64)
    pub fn occupant(&self, index: usize) -> char {
        self.occupants[index]
    }

    /// Whether the square at `index` is a legal-move highlight
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlights[index]
    }

    /// Whether any square is currently highlighted
    pub fn has_highlights(&self) -> bool {
        self.highlights.iter().any(|&h| h)
    }
}

/// The two display lines sent with every response
///
/// `message1` is the status line (whose turn, check, game over); `message2`
/// carries secondary info or error text. Both are replaced wholesale on
/// every applied response.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct StatusMessages {
    pub message1: String,
    pub message2: String,
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            message1: String::new(),
            message2: String::from("Loading..."),
        }
    }
}

/// The action buttons currently offered by the backend
///
/// Labels are displayed verbatim; the lowercased/underscored form only
/// exists in the request path.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionButtons {
    pub labels: Vec<String>,
}

/// Opaque session token scoping all requests to one game instance
///
/// Set once from the initial load response and never altered by square or
/// button responses.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    id: Option<String>,
}

impl GameSession {
    pub fn set(&mut self, id: String) {
        self.id = Some(id);
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(piece: char, at: usize) -> String {
        let mut chars = vec!['0'; 64];
        chars[at] = piece;
        chars.into_iter().collect()
    }

    fn moves_with_highlight(at: usize) -> String {
        let mut chars = vec!['-'; 64];
        chars[at] = 'X';
        chars.into_iter().collect()
    }

    #[test]
    fn test_board_view_default_is_empty() {
        let view = BoardView::default();
        for index in 0..BoardView::SQUARES {
            assert_eq!(view.occupant(index), '0');
            assert!(!view.is_highlighted(index));
        }
        assert!(!view.has_highlights());
    }

    #[test]
    fn test_from_strings_round_trip() {
        let board = board_with('Q', 27);
        let moves = moves_with_highlight(12);
        let view = BoardView::from_strings(&board, &moves).expect("Should parse");

        for (index, expected) in board.chars().enumerate() {
            assert_eq!(view.occupant(index), expected, "occupant at {}", index);
        }
        for (index, mark) in moves.chars().enumerate() {
            assert_eq!(view.is_highlighted(index), mark == 'X', "highlight at {}", index);
        }
        assert!(view.has_highlights());
    }

    #[test]
    fn test_only_x_marks_a_highlight() {
        let board = board_with('0', 0);
        let moves: String = "Xx-0".chars().chain(['-'; 60]).collect();
        let view = BoardView::from_strings(&board, &moves).expect("Should parse");

        assert!(view.is_highlighted(0));
        assert!(!view.is_highlighted(1), "lowercase x is not a highlight");
        assert!(!view.is_highlighted(2));
        assert!(!view.is_highlighted(3));
    }

    #[test]
    fn test_short_board_string_rejected() {
        let err = BoardView::from_strings("0000", &moves_with_highlight(0)).unwrap_err();
        assert!(matches!(
            err,
            ClientError::MalformedField { field: "board", len: 4 }
        ));
    }

    #[test]
    fn test_long_moves_string_rejected() {
        let board = board_with('0', 0);
        let moves: String = std::iter::repeat('-').take(65).collect();
        let err = BoardView::from_strings(&board, &moves).unwrap_err();
        assert!(matches!(
            err,
            ClientError::MalformedField { field: "moves", len: 65 }
        ));
    }

    #[test]
    fn test_status_messages_default_shows_loading() {
        let messages = StatusMessages::default();
        assert!(messages.message1.is_empty());
        assert_eq!(messages.message2, "Loading...");
    }

    #[test]
    fn test_session_set_and_read() {
        let mut session = GameSession::default();
        assert!(session.id().is_none());

        session.set("abc".to_string());
        assert_eq!(session.id(), Some("abc"));
    }
}

//! HTTP client for the chess backend
//!
//! The backend exposes three GET endpoints under a single origin:
//!
//! - `/` - initial board fetch, the only response carrying `session`
//! - `/square/{session}/{row}/{col}` - select a square
//! - `/button/{session}/{label}` - press an action button
//!
//! All responses share one JSON shape; success is signaled both by the
//! transport status and by the body's `status` field (200 expected).
//! Requests are issued with `reqwest::blocking` from a worker thread, so no
//! async runtime is required.

use crate::networking::error::{ClientError, ClientResult};
use bevy::prelude::*;
use serde::Deserialize;

/// A request the client can issue against the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// GET the backend root; starts (or resumes) a game and yields a session
    InitialBoard,
    /// Select the square at (row, col), both in 0..8
    SelectSquare { row: u8, col: u8 },
    /// Press the action button with this raw label
    ActionButton { label: String },
}

/// One backend response, shared by all three endpoints
///
/// On a 200 `status` the board/moves/message/button fields are present;
/// `session` is only sent by the initial load. Everything except `status`
/// is optional so a short payload fails validation instead of
/// deserialization, which keeps the error messages useful.
#[derive(Deserialize, Debug, Clone)]
pub struct BoardResponse {
    pub status: u16,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub moves: Option<String>,
    #[serde(default)]
    pub message1: Option<String>,
    #[serde(default)]
    pub message2: Option<String>,
    #[serde(default)]
    pub buttons: Option<Vec<String>>,
    #[serde(default)]
    pub session: Option<String>,
}

impl BoardResponse {
    /// Reject a response whose application-level status is not 200
    pub fn ensure_ok(self) -> ClientResult<Self> {
        if self.status != 200 {
            return Err(ClientError::Server {
                status: self.status,
            });
        }
        Ok(self)
    }
}

/// Normalize a button label into its path segment
///
/// The backend expects labels lowercased with spaces replaced by
/// underscores, e.g. "New Game" → "new_game".
pub fn normalize_label(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

/// Resource holding the backend origin and issuing blocking requests
#[derive(Resource, Debug, Clone)]
pub struct ApiClient {
    origin: String,
}

impl ApiClient {
    /// Create a client for the given origin; a trailing slash is stripped
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self { origin }
    }

    /// Build the URL for a request
    ///
    /// `session` is the token from the initial load; the initial request
    /// itself ignores it.
    pub fn url_for(&self, request: &ApiRequest, session: &str) -> String {
        match request {
            ApiRequest::InitialBoard => format!("{}/", self.origin),
            ApiRequest::SelectSquare { row, col } => {
                format!("{}/square/{}/{}/{}", self.origin, session, row, col)
            }
            ApiRequest::ActionButton { label } => {
                format!("{}/button/{}/{}", self.origin, session, normalize_label(label))
            }
        }
    }

    /// Issue a blocking GET and decode the response
    ///
    /// Blocks the calling thread; only ever invoked from the fetch task's
    /// worker thread, never from a Bevy system directly.
    pub fn fetch(&self, url: &str) -> ClientResult<BoardResponse> {
        let client = reqwest::blocking::Client::new();
        let response = client.get(url).send()?.error_for_status()?;
        let body: BoardResponse = response.json()?;
        body.ensure_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_trailing_slash_stripped() {
        let client = ApiClient::new("http://example.test/");
        let url = client.url_for(&ApiRequest::InitialBoard, "");
        assert_eq!(url, "http://example.test/");
    }

    #[test]
    fn test_initial_board_url() {
        let client = ApiClient::new("http://example.test");
        assert_eq!(
            client.url_for(&ApiRequest::InitialBoard, "ignored"),
            "http://example.test/"
        );
    }

    #[test]
    fn test_select_square_url() {
        let client = ApiClient::new("http://example.test");
        let url = client.url_for(&ApiRequest::SelectSquare { row: 2, col: 3 }, "abc");
        assert_eq!(url, "http://example.test/square/abc/2/3");
    }

    #[test]
    fn test_button_url_normalizes_label() {
        let client = ApiClient::new("http://example.test");
        let url = client.url_for(
            &ApiRequest::ActionButton {
                label: "New Game".to_string(),
            },
            "abc",
        );
        assert_eq!(url, "http://example.test/button/abc/new_game");
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("New Game"), "new_game");
        assert_eq!(normalize_label("Resign"), "resign");
        assert_eq!(normalize_label("Promote To Queen"), "promote_to_queen");
        assert_eq!(normalize_label("already_done"), "already_done");
    }

    #[test]
    fn test_board_response_deserialization() {
        let board: String = "0".repeat(64);
        let mut moves = vec!['-'; 64];
        moves[12] = 'X';
        let moves: String = moves.into_iter().collect();

        let json = format!(
            r#"{{
                "status": 200,
                "board": "{board}",
                "moves": "{moves}",
                "message1": "White to move",
                "message2": "",
                "buttons": ["New Game"],
                "session": "abc"
            }}"#
        );

        let response: BoardResponse =
            serde_json::from_str(&json).expect("Should deserialize");

        assert_eq!(response.status, 200);
        assert_eq!(response.board.as_deref().map(str::len), Some(64));
        assert_eq!(response.moves.as_deref().and_then(|m| m.chars().nth(12)), Some('X'));
        assert_eq!(response.buttons, Some(vec!["New Game".to_string()]));
        assert_eq!(response.session.as_deref(), Some("abc"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let response: BoardResponse =
            serde_json::from_str(r#"{"status": 404}"#).expect("Should deserialize");
        assert_eq!(response.status, 404);
        assert!(response.board.is_none());
        assert!(response.session.is_none());
    }

    #[test]
    fn test_ensure_ok_rejects_non_200_status() {
        let response: BoardResponse =
            serde_json::from_str(r#"{"status": 500}"#).expect("Should deserialize");
        let err = response.ensure_ok().unwrap_err();
        assert!(matches!(err, ClientError::Server { status: 500 }));
    }

    #[test]
    fn test_ensure_ok_passes_200_status() {
        let response: BoardResponse =
            serde_json::from_str(r#"{"status": 200}"#).expect("Should deserialize");
        assert!(response.ensure_ok().is_ok());
    }
}

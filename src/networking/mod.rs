//! Networking module - the client side of the chess backend protocol
//!
//! - `client` - endpoint URLs, response payloads, blocking fetch
//! - `fetch` - the task bridge between Bevy systems and the HTTP client
//! - `error` - typed failures on the request/response path
//!
//! The backend holds all game state; this module's job is to turn
//! interactions into GETs and responses into resource updates, nothing
//! more.

pub mod client;
pub mod error;
pub mod fetch;

// Re-export commonly used items
pub use client::{ApiClient, ApiRequest, BoardResponse};
pub use error::{ClientError, ClientResult};
pub use fetch::{FetchTask, NetworkingPlugin};

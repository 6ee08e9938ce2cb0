//! Client core for the notes service.
//!
//! # Overview
//! Five CRUD operations against the remote notes REST API plus a view-state
//! controller that keeps a note list, selection, search text and loading
//! flag in sync with the server.
//!
//! # Design
//! - `NotesClient` is sans-IO: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`.
//! - `Transport` performs the round-trip; `UreqTransport` is the default.
//! - `NotesApi` joins the two into one async call per operation.
//! - `NotesState` drives `NotesApi` and patches its `ViewState` with the
//!   server's responses.
//! - `NotesConfig` is built once at startup and passed in explicitly.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod state;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::NotesApi;
pub use client::{normalize_search, NotesClient};
pub use config::NotesConfig;
pub use error::RequestError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{NotesState, ViewState};
pub use transport::{Transport, UreqTransport};
pub use types::{Note, NotePayload};

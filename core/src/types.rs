//! Domain DTOs for the notes API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Timestamps stay opaque strings: the server owns them and the client only
//! displays them, so there is nothing to gain from parsing.

use serde::{Deserialize, Serialize};

/// A single note returned by the API. `id` is assigned by the server and
/// never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request body for creating or updating a note. Both fields may be empty;
/// no validation happens client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

impl NotePayload {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Payload used when the user asks for a fresh note.
    pub fn untitled() -> Self {
        Self::new("Untitled", "")
    }
}

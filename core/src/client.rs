//! Stateless HTTP request builder and response parser for the notes API.
//!
//! # Design
//! `NotesClient` holds only the base path and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `NotesApi` glues the two together over a `Transport`.

use serde::de::DeserializeOwned;

use crate::config::NotesConfig;
use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Note, NotePayload};

/// Trim a search string, treating blank input as "no filter".
pub fn normalize_search(search: &str) -> Option<&str> {
    let trimmed = search.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Debug, Clone)]
pub struct NotesClient {
    base_url: String,
}

impl NotesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &NotesConfig) -> Self {
        Self::new(&config.api_base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `search` is normalized here, so callers may pass raw input.
    pub fn build_list_notes(&self, search: Option<&str>) -> HttpRequest {
        let path = match search.and_then(normalize_search) {
            Some(query) => format!("{}/notes?search={}", self.base_url, urlencoding::encode(query)),
            None => format!("{}/notes", self.base_url),
        };
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_note(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.note_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_note(&self, payload: &NotePayload) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/notes", self.base_url),
            headers: json_headers(),
            body: Some(encode(payload)?),
        })
    }

    pub fn build_update_note(&self, id: &str, payload: &NotePayload) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.note_path(id),
            headers: json_headers(),
            body: Some(encode(payload)?),
        })
    }

    pub fn build_delete_note(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.note_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// An empty body yields an empty list.
    pub fn parse_list_notes(&self, response: HttpResponse) -> Result<Vec<Note>, RequestError> {
        check_status(&response)?;
        Ok(decode_optional(&response.body)?.unwrap_or_default())
    }

    /// An empty (or `null`) body yields `None`.
    pub fn parse_get_note(&self, response: HttpResponse) -> Result<Option<Note>, RequestError> {
        check_status(&response)?;
        decode_optional(&response.body)
    }

    pub fn parse_create_note(&self, response: HttpResponse) -> Result<Note, RequestError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_note(&self, response: HttpResponse) -> Result<Note, RequestError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_delete_note(&self, response: HttpResponse) -> Result<(), RequestError> {
        check_status(&response)
    }

    fn note_path(&self, id: &str) -> String {
        format!("{}/notes/{}", self.base_url, urlencoding::encode(id))
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode(payload: &NotePayload) -> Result<String, RequestError> {
    serde_json::to_string(payload).map_err(|e| RequestError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))
}

fn decode_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, RequestError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode(body)
}

/// Every non-2xx status maps to `RequestError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), RequestError> {
    if response.is_success() {
        return Ok(());
    }
    Err(RequestError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

//! Async notes API: one HTTP request per call.
//!
//! Each method builds a request with `NotesClient`, executes it on the
//! transport and parses the response. Errors propagate unchanged; nothing is
//! retried or cached.

use crate::client::NotesClient;
use crate::config::NotesConfig;
use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Note, NotePayload};

#[derive(Debug, Clone)]
pub struct NotesApi<T> {
    client: NotesClient,
    transport: T,
}

impl<T: Transport> NotesApi<T> {
    pub fn new(config: &NotesConfig, transport: T) -> Self {
        Self {
            client: NotesClient::from_config(config),
            transport,
        }
    }

    pub fn client(&self) -> &NotesClient {
        &self.client
    }

    /// List notes, filtered by `search` when it is not blank.
    pub async fn list_notes(&self, search: Option<&str>) -> Result<Vec<Note>, RequestError> {
        let response = self.send(self.client.build_list_notes(search)).await?;
        let notes = self.client.parse_list_notes(response)?;
        tracing::debug!(count = notes.len(), "listed notes");
        Ok(notes)
    }

    pub async fn fetch_note(&self, id: &str) -> Result<Option<Note>, RequestError> {
        let response = self.send(self.client.build_get_note(id)).await?;
        self.client.parse_get_note(response)
    }

    pub async fn create_note(&self, payload: &NotePayload) -> Result<Note, RequestError> {
        let request = self.client.build_create_note(payload)?;
        let note = self.client.parse_create_note(self.send(request).await?)?;
        tracing::debug!(note_id = %note.id, "created note");
        Ok(note)
    }

    pub async fn update_note(&self, id: &str, payload: &NotePayload) -> Result<Note, RequestError> {
        let request = self.client.build_update_note(id, payload)?;
        self.client.parse_update_note(self.send(request).await?)
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), RequestError> {
        let response = self.send(self.client.build_delete_note(id)).await?;
        self.client.parse_delete_note(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!(%method, %path, "sending request");
        match self.transport.execute(request).await {
            Ok(response) => {
                if !response.is_success() {
                    tracing::warn!(%method, %path, status = response.status, "request failed");
                }
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(%method, %path, error = %e, "request failed");
                Err(e)
            }
        }
    }
}

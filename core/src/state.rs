//! View-state controller for a single notes view.
//!
//! # Design
//! `NotesState` keeps a `ViewState` inside a `tokio::sync::watch` channel so a
//! UI can subscribe to snapshots. Each action makes one call through
//! `NotesApi` and then patches the list with the server's response; a failed
//! call leaves the state as it was.
//!
//! Actions take `&self` and are not coordinated with each other. Two actions
//! in flight apply their patches in the order their responses arrive, so a
//! slow `refresh` can overwrite the effect of a later `delete_note`.

use tokio::sync::watch;

use crate::api::NotesApi;
use crate::error::RequestError;
use crate::transport::Transport;
use crate::types::{Note, NotePayload};

/// Snapshot of everything the view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub notes: Vec<Note>,
    /// True only while a `refresh` is in flight.
    pub loading: bool,
    pub selected_id: Option<String>,
    /// Raw search text as typed; trimmed only when a request is built.
    pub search: String,
}

impl ViewState {
    /// The note matching `selected_id`, looked up on every call.
    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected_id.as_deref()?;
        self.notes.iter().find(|n| n.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }
}

/// Sets `loading` on creation and clears it on drop, so every exit path of
/// `refresh` (including a dropped future) resets the flag.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<ViewState>,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(state: &'a watch::Sender<ViewState>) -> Self {
        state.send_modify(|s| s.loading = true);
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.loading = false);
    }
}

pub struct NotesState<T> {
    api: NotesApi<T>,
    state: watch::Sender<ViewState>,
}

impl<T: Transport> NotesState<T> {
    pub fn new(api: NotesApi<T>) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { api, state }
    }

    pub fn api(&self) -> &NotesApi<T> {
        &self.api
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.borrow().notes.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn selected_id(&self) -> Option<String> {
        self.state.borrow().selected_id.clone()
    }

    pub fn selected_note(&self) -> Option<Note> {
        self.state.borrow().selected_note().cloned()
    }

    pub fn search(&self) -> String {
        self.state.borrow().search.clone()
    }

    pub fn set_search(&self, search: impl Into<String>) {
        let search = search.into();
        self.state.send_modify(|s| s.search = search);
    }

    pub fn select(&self, id: Option<String>) {
        self.state.send_modify(|s| s.selected_id = id);
    }

    /// Reload the list using the current search text. Blank search means no
    /// filter.
    pub async fn refresh(&self) -> Result<(), RequestError> {
        let _loading = LoadingGuard::acquire(&self.state);
        let search = self.search();
        let notes = self.api.list_notes(Some(search.as_str())).await?;
        tracing::debug!(count = notes.len(), "replacing note list");
        self.state.send_modify(|s| s.notes = notes);
        Ok(())
    }

    /// Create an "Untitled" note, put it at the top and select it.
    pub async fn create_note(&self) -> Result<Note, RequestError> {
        let note = self.api.create_note(&NotePayload::untitled()).await?;
        self.state.send_modify(|s| {
            s.selected_id = Some(note.id.clone());
            s.notes.insert(0, note.clone());
        });
        Ok(note)
    }

    /// Save `payload` and swap the server's copy into place. If the note is
    /// no longer listed, the response is dropped.
    pub async fn update_note(&self, id: &str, payload: &NotePayload) -> Result<(), RequestError> {
        let updated = self.api.update_note(id, payload).await?;
        self.state.send_if_modified(|s| match s.position(id) {
            Some(idx) => {
                s.notes[idx] = updated;
                true
            }
            None => {
                tracing::debug!(note_id = %id, "updated note no longer listed");
                false
            }
        });
        Ok(())
    }

    /// Delete a note. If it was selected, the selection moves to the first
    /// remaining note.
    pub async fn delete_note(&self, id: &str) -> Result<(), RequestError> {
        self.api.delete_note(id).await?;
        self.state.send_if_modified(|s| {
            let mut changed = false;
            if let Some(idx) = s.position(id) {
                s.notes.remove(idx);
                changed = true;
            }
            if s.selected_id.as_deref() == Some(id) {
                s.selected_id = s.notes.first().map(|n| n.id.clone());
                changed = true;
            }
            changed
        });
        Ok(())
    }
}

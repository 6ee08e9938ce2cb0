use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// Newest note first.
pub type Db = Arc<RwLock<Vec<Note>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    let notes = Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", get(get_note).put(update_note).delete(delete_note))
        .with_state(db);
    Router::new().nest("/api", notes)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn note_matches(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle) || note.content.to_lowercase().contains(needle)
}

async fn list_notes(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Note>> {
    let notes = db.read().await;
    let needle = params
        .search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let listed: Vec<Note> = match needle {
        Some(needle) => notes.iter().filter(|n| note_matches(n, &needle)).cloned().collect(),
        None => notes.clone(),
    };
    tracing::debug!(count = listed.len(), "list notes");
    Json(listed)
}

async fn create_note(
    State(db): State<Db>,
    Json(input): Json<NotePayload>,
) -> (StatusCode, Json<Note>) {
    let stamp = now();
    let note = Note {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        content: input.content,
        created_at: stamp.clone(),
        updated_at: stamp,
    };
    db.write().await.insert(0, note.clone());
    tracing::debug!(id = %note.id, "created note");
    (StatusCode::CREATED, Json(note))
}

async fn get_note(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Note>, StatusCode> {
    let notes = db.read().await;
    notes
        .iter()
        .find(|n| n.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_note(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<NotePayload>,
) -> Result<Json<Note>, StatusCode> {
    let mut notes = db.write().await;
    let note = notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    note.title = input.title;
    note.content = input.content;
    note.updated_at = now();
    tracing::debug!(%id, "updated note");
    Ok(Json(note.clone()))
}

async fn delete_note(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut notes = db.write().await;
    let idx = notes
        .iter()
        .position(|n| n.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    notes.remove(idx);
    tracing::debug!(%id, "deleted note");
    Ok(StatusCode::NO_CONTENT)
}

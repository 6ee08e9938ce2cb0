//! Scripted transports for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Note;

/// Replays queued responses in order and records every request it sees.
/// Clones share the same script and log.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, RequestError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every request waits for one `notify_one` on `gate` before answering.
    pub(crate) fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub(crate) fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.push(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.into(),
        }))
    }

    pub(crate) fn respond_json<S: serde::Serialize>(&self, status: u16, value: &S) -> &Self {
        self.respond(status, serde_json::to_string(value).unwrap())
    }

    pub(crate) fn fail(&self, message: &str) -> &Self {
        self.push(Err(RequestError::Transport(message.to_string())))
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, response: Result<HttpResponse, RequestError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        self.requests.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

pub(crate) fn note(id: &str) -> Note {
    Note {
        id: id.to_string(),
        title: format!("title {id}"),
        content: String::new(),
        created_at: None,
        updated_at: None,
    }
}

//! Stub upstream for tests. Records every request and replays a canned reply.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ChatRequest, CompletionBackend, LlmError};

enum Reply {
    Text(String),
    ApiError { status: u16, message: String },
}

pub struct StubBackend {
    reply: Reply,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl StubBackend {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self::new(Reply::Text(text.to_string())))
    }

    pub fn failing(status: u16, message: &str) -> Arc<Self> {
        Arc::new(Self::new(Reply::ApiError {
            status,
            message: message.to_string(),
        }))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for StubBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::ApiError { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

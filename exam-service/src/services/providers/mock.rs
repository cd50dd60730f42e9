//! Mock provider implementation for testing.

use super::{ChatProvider, ProviderError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted chat provider for tests.
///
/// Replies are consumed from a queue in order; once the queue runs dry the
/// provider echoes the user prompt. Calls are counted so tests can assert
/// how many generation calls an operation made.
#[derive(Default)]
pub struct MockChatProvider {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    calls: AtomicUsize,
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, reply: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(reply.to_string()));
    }

    pub fn push_failure(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ProviderError::ApiError(message.to_string())));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        _system: &str,
        user: &str,
        _max_tokens: Option<u32>,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => reply,
            None => Ok(format!("Mock response for: {}", user)),
        }
    }
}

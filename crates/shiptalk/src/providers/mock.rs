use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use super::base::{CompletionClient, OutputFormat};
use super::utils::validate_output;
use crate::models::message::Conversation;

/// A completion client that returns pre-configured responses, for tests
#[derive(Clone, Default)]
pub struct MockProvider {
    responses: Arc<Mutex<Vec<Result<Value, String>>>>,
    conversations: Arc<Mutex<Vec<Conversation>>>,
    calls: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of responses
    pub fn new(responses: Vec<Value>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().map(Ok).collect())),
            ..Default::default()
        }
    }

    /// A provider whose every call fails with `message`
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Err(message.into())])),
            ..Default::default()
        }
    }

    /// Sleep before answering, to exercise timeouts
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every conversation submitted so far
    pub fn conversations(&self) -> Vec<Conversation> {
        self.conversations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CompletionClient for MockProvider {
    async fn complete(&self, conversation: &Conversation, format: &OutputFormat<'_>) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.conversations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(conversation.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = {
            let mut responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
            match responses.len() {
                0 => None,
                // A lone failure repeats so `failing` holds for every call
                1 if responses[0].is_err() => responses.first().cloned(),
                _ => Some(responses.remove(0)),
            }
        };

        match next {
            Some(Ok(response)) => validate_output(format, &response),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("No more mock responses")),
        }
    }
}

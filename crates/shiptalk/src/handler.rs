use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::errors::{HandlerError, HandlerResult};
use crate::models::message::Conversation;
use crate::providers::base::{CompletionClient, OutputFormat};
use crate::providers::configs::DEFAULT_TIMEOUT_SECS;
use crate::registry::{Registry, ToolEntry};

/// Runs one tool request: lookup, validation, prompt, completion.
///
/// Stateless apart from the shared registry; every call is independent and
/// failures are never retried.
#[derive(Clone)]
pub struct RequestHandler {
    registry: Arc<Registry>,
    client: Arc<dyn CompletionClient>,
    timeout: Duration,
}

impl RequestHandler {
    pub fn new(registry: Arc<Registry>, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            registry,
            client,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub async fn handle(&self, tool_id: &str, raw_input: &Value) -> HandlerResult<Value> {
        let entry = self
            .registry
            .lookup(tool_id)
            .ok_or_else(|| HandlerError::UnknownTool(tool_id.to_string()))?;

        let input = entry.input.validate(raw_input).map_err(|violations| {
            tracing::warn!(tool = tool_id, violations = violations.len(), "Rejected tool input");
            HandlerError::InvalidInput(violations)
        })?;

        let conversation = build_conversation(entry, &input)?;
        let format = OutputFormat::for_tool(entry.id, &entry.output);

        let started = Instant::now();
        let result = tokio::time::timeout(self.timeout, self.client.complete(&conversation, &format)).await;
        let elapsed = started.elapsed();

        match result {
            Ok(Ok(output)) => {
                tracing::info!(tool = tool_id, elapsed_ms = elapsed.as_millis() as u64, "Tool completed");
                Ok(output)
            }
            Ok(Err(e)) => {
                tracing::error!(tool = tool_id, "Completion failed: {:#}", e);
                Err(HandlerError::CompletionFailed(format!("{:#}", e)))
            }
            Err(_) => {
                tracing::error!(tool = tool_id, timeout_secs = self.timeout.as_secs_f64(), "Completion timed out");
                Err(HandlerError::CompletionFailed(format!(
                    "Completion timed out after {:?}",
                    self.timeout
                )))
            }
        }
    }
}

// Kept synchronous so the thread-local rng never lives across an await point
fn build_conversation(entry: &ToolEntry, input: &Value) -> HandlerResult<Conversation> {
    let mut rng = rand::thread_rng();
    entry
        .prompt
        .build(input, &mut rng)
        .map_err(|e| HandlerError::PromptFailed(format!("{}: {}", entry.id, e)))
}

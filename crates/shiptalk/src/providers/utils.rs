use anyhow::{anyhow, Result};
use serde_json::{json, Value};

use super::base::OutputFormat;
use crate::errors::summarize;
use crate::models::message::Conversation;

/// Convert a conversation to OpenAI's chat message specification
pub fn conversation_to_openai_spec(conversation: &Conversation) -> Vec<Value> {
    conversation
        .messages()
        .iter()
        .map(|message| {
            json!({
                "role": message.role,
                "content": message.content,
            })
        })
        .collect()
}

/// The `response_format` block requesting JSON Schema constrained output.
///
/// Shapes with open dictionaries cannot be expressed in strict mode, so they
/// are sent with the descriptive schema and `strict: false`.
pub fn response_format_spec(format: &OutputFormat<'_>) -> Value {
    let strict = format.shape.supports_strict();
    let schema = if strict {
        format.shape.strict_json_schema()
    } else {
        format.shape.json_schema()
    };
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": format.schema_name(),
            "schema": schema,
            "strict": strict,
        }
    })
}

/// Pull the structured result out of a chat completion response
pub fn openai_response_to_json(response: &Value) -> Result<Value> {
    let choice = response
        .get("choices")
        .and_then(|c| c.get(0))
        .ok_or_else(|| anyhow!("No choices in completion response"))?;

    if choice.get("finish_reason").and_then(|r| r.as_str()) == Some("length") {
        return Err(anyhow!("Completion was truncated before the result was complete"));
    }

    let message = &choice["message"];
    if let Some(refusal) = message.get("refusal").and_then(|r| r.as_str()) {
        return Err(anyhow!("Model refused the request: {}", refusal));
    }

    let content = message
        .get("content")
        .and_then(|c| c.as_str())
        .ok_or_else(|| anyhow!("Completion response has no content"))?;

    serde_json::from_str(content).map_err(|e| anyhow!("Completion content is not valid JSON: {}", e))
}

/// Check a parsed result against the requested shape, returning the normalized value
pub fn validate_output(format: &OutputFormat<'_>, value: &Value) -> Result<Value> {
    format.shape.validate(value).map_err(|violations| {
        anyhow!(
            "Response does not match {}: {}",
            format.shape.title,
            summarize(&violations)
        )
    })
}

#[derive(Debug, thiserror::Error)]
#[error("Context length exceeded. Message: {0}")]
pub struct ContextLengthExceededError(String);

pub fn check_openai_context_length_error(error: &Value) -> Option<ContextLengthExceededError> {
    let code = error.get("code")?.as_str()?;
    if code == "context_length_exceeded" || code == "string_above_max_length" {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        Some(ContextLengthExceededError(message))
    } else {
        None
    }
}

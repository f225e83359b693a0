use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::models::message::Conversation;
use crate::shape::ObjectShape;

/// The structure a completion must satisfy
#[derive(Debug, Clone, Copy)]
pub struct OutputFormat<'a> {
    pub tool: &'a str,
    pub shape: &'a ObjectShape,
}

impl<'a> OutputFormat<'a> {
    pub fn for_tool(tool: &'a str, shape: &'a ObjectShape) -> Self {
        Self { tool, shape }
    }

    /// Name under which the schema is submitted, e.g. `shiptalk_cycle_counting_tool_response`
    pub fn schema_name(&self) -> String {
        format!("shiptalk_{}_tool_response", self.tool.replace('-', "_"))
    }
}

/// A remote service that turns a conversation into a structured result
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Request a completion constrained to `format`.
    ///
    /// On success the returned value has already been validated against
    /// `format.shape`.
    async fn complete(&self, conversation: &Conversation, format: &OutputFormat<'_>) -> Result<Value>;
}

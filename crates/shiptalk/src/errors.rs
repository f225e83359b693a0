use thiserror::Error;

use crate::shape::Violation;

/// Failures of a single tool request
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<Violation>),

    #[error("Completion failed: {0}")]
    CompletionFailed(String),

    #[error("Prompt construction failed: {0}")]
    PromptFailed(String),
}

pub(crate) fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Faults found while building the registry. The server must not start.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Tool definition has an empty identifier")]
    EmptyIdentifier,

    #[error("Tool '{0}' is defined more than once")]
    DuplicateTool(String),

    #[error("Tool '{tool}' uses prompt template '{template}' which does not exist")]
    MissingTemplate { tool: String, template: String },

    #[error("Tool '{tool}' needs reference data '{file}' which was not loaded")]
    MissingReference { tool: String, file: String },

    #[error("Tool '{tool}' hints values for '{field}', which is already a closed set")]
    HintOnEnforcedField { tool: String, field: String },

    #[error("Tool '{tool}' asks for {min}..={max} {chart} charts")]
    InvalidChartQuota {
        tool: String,
        chart: &'static str,
        min: u8,
        max: u8,
    },

    #[error("Reference data '{file}' is not valid JSON: {source}")]
    InvalidReference {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read reference data: {0}")]
    ReferenceIo(#[from] std::io::Error),

    #[error("Prompt template error for '{tool}': {source}")]
    Template {
        tool: String,
        #[source]
        source: tera::Error,
    },
}

pub type HandlerResult<T> = Result<T, HandlerError>;

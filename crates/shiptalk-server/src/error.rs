use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use shiptalk::errors::HandlerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {env_var}")]
    MissingEnvVar { env_var: String },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// `provider.api_key` -> `SHIPTALK_PROVIDER__API_KEY`
pub fn to_env_var(field_path: &str) -> String {
    let path = field_path
        .split('.')
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join("__");
    format!("SHIPTALK_{}", path)
}

/// A failed request, as seen by an HTTP client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing tool identifier")]
    MissingTool,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingTool | ApiError::Handler(HandlerError::UnknownTool(_)) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Handler(HandlerError::InvalidInput(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Handler(HandlerError::CompletionFailed(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Handler(HandlerError::PromptFailed(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Violations stay structured so clients can point at the offending fields
    fn detail(&self) -> Value {
        match self {
            ApiError::Handler(HandlerError::InvalidInput(violations)) => json!(violations),
            other => json!(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// Dedicated per-tool endpoint. The body is the tool input; results come back
/// in a `success` envelope.
async fn run_tool(
    State(state): State<AppState>,
    Path(tool): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    match execute(&state, &tool, body).await {
        Ok(results) => Json(json!({ "success": true, "results": results })).into_response(),
        Err(err) => (err.status(), Json(json!({ "success": false, "message": err.to_string() }))).into_response(),
    }
}

async fn execute(
    state: &AppState,
    tool: &str,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Value, ApiError> {
    let Json(input) = body?;
    Ok(state.handler.handle(tool, &input).await?)
}

async fn list_tools(State(state): State<AppState>) -> Json<Value> {
    let tools: Vec<Value> = state.handler.registry().entries().map(|e| e.describe()).collect();
    Json(json!({ "tools": tools }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/tools", get(list_tools))
        .route("/api/v1/:tool", post(run_tool))
        .with_state(state)
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ChatToolsQuery {
    tool: Option<String>,
}

/// Runs any registered tool. The tool comes from `?tool=` with the input as
/// the body, or from a `{"tool", "inputParameters"}` body.
async fn chat_tools(
    State(state): State<AppState>,
    Query(query): Query<ChatToolsQuery>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    let (tool, input) = match query.tool {
        Some(tool) => (tool, body),
        None => {
            let tool = body
                .get("tool")
                .and_then(Value::as_str)
                .ok_or(ApiError::MissingTool)?
                .to_string();
            let input = body.get("inputParameters").cloned().unwrap_or_else(|| json!({}));
            (tool, input)
        }
    };

    let response = state.handler.handle(&tool, &input).await?;
    Ok(Json(json!({ "tool": tool, "response": response })))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/chat-tools", post(chat_tools))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{json_body, post_json, state_with};
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use shiptalk::providers::mock::MockProvider;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_tool_from_query() {
        let provider = MockProvider::new(vec![json!({ "message": "Service is healthy", "input": "ping" })]);
        let app = routes(state_with(provider.clone()));

        let response = app
            .oneshot(post_json("/api/v1/chat-tools?tool=health-check", &json!({ "message": "ping" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "tool": "health-check", "response": { "message": "Service is healthy", "input": "ping" } })
        );
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_tool_from_body() {
        let provider = MockProvider::new(vec![json!({ "message": "Service is healthy", "input": "ping" })]);
        let app = routes(state_with(provider));

        let body = json!({ "tool": "health-check", "inputParameters": { "message": "ping" } });
        let response = app.oneshot(post_json("/api/v1/chat-tools", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["tool"], "health-check");
    }

    #[tokio::test]
    async fn test_missing_tool() {
        let app = routes(state_with(MockProvider::default()));

        let response = app
            .oneshot(post_json("/api/v1/chat-tools", &json!({ "message": "ping" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "detail": "Missing tool identifier" }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let provider = MockProvider::default();
        let app = routes(state_with(provider.clone()));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/chat-tools?tool=health-check")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ nope"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().starts_with("Malformed request body"));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_body() {
        let app = routes(state_with(MockProvider::default()));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/chat-tools?tool=health-check")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_body(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let app = routes(state_with(MockProvider::default()));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/chat-tools?tool=health-check")
            .body(Body::from(r#"{"message": "ping"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let provider = MockProvider::default();
        let app = routes(state_with(provider.clone()));

        let response = app
            .oneshot(post_json("/api/v1/chat-tools?tool=not-a-real-tool", &json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "detail": "Unknown tool: not-a-real-tool" })
        );
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_lists_violations() {
        let provider = MockProvider::default();
        let app = routes(state_with(provider.clone()));

        let response = app
            .oneshot(post_json("/api/v1/chat-tools?tool=health-check", &json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["detail"][0]["field"], "message");
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_completion_failure() {
        let app = routes(state_with(MockProvider::failing("Server error: 503")));

        let response = app
            .oneshot(post_json("/api/v1/chat-tools?tool=health-check", &json!({ "message": "ping" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json_body(response).await,
            json!({ "detail": "Completion failed: Server error: 503" })
        );
    }
}

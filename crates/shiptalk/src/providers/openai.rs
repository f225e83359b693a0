use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde_json::{json, Value};

use super::base::{CompletionClient, OutputFormat};
use super::configs::OpenAiProviderConfig;
use super::utils::{
    check_openai_context_length_error, conversation_to_openai_spec, openai_response_to_json,
    response_format_spec, validate_output,
};
use crate::models::message::Conversation;

pub struct OpenAiProvider {
    client: Client,
    config: OpenAiProviderConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiProviderConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn post(&self, payload: Value) -> Result<Value> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() >= 500 => {
                Err(anyhow!("Server error: {}", status))
            }
            status => {
                // OpenAI reports client errors as {"error": {"message": ...}}
                let body: Value = response.json().await.unwrap_or(Value::Null);
                let detail = body["error"]["message"].as_str().unwrap_or("no details");
                Err(anyhow!("Request failed: {}: {}", status, detail))
            }
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiProvider {
    async fn complete(&self, conversation: &Conversation, format: &OutputFormat<'_>) -> Result<Value> {
        let mut payload = json!({
            "model": self.config.model,
            "messages": conversation_to_openai_spec(conversation),
            "response_format": response_format_spec(format),
        });

        // Add optional parameters
        if let Some(options) = payload.as_object_mut() {
            if let Some(temp) = self.config.temperature {
                options.insert("temperature".to_string(), json!(temp));
            }
            if let Some(tokens) = self.config.max_tokens {
                options.insert("max_tokens".to_string(), json!(tokens));
            }
        }

        let response = self.post(payload).await?;

        // Raise specific error if context length is exceeded
        if let Some(error) = response.get("error") {
            if let Some(err) = check_openai_context_length_error(error) {
                return Err(err.into());
            }
            return Err(anyhow!("OpenAI API error: {}", error));
        }

        if let Some(usage) = response.get("usage") {
            tracing::debug!(
                tool = format.tool,
                prompt_tokens = usage["prompt_tokens"].as_i64(),
                completion_tokens = usage["completion_tokens"].as_i64(),
                "Completion usage"
            );
        }

        let result = openai_response_to_json(&response)?;
        validate_output(format, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Field, ObjectShape, Shape};
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn _setup_mock_server(status: u16, response_body: Value) -> (MockServer, OpenAiProvider) {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
            .mount(&mock_server)
            .await;

        let provider = OpenAiProvider::new(test_config(&mock_server)).unwrap();
        (mock_server, provider)
    }

    fn test_config(mock_server: &MockServer) -> OpenAiProviderConfig {
        OpenAiProviderConfig {
            host: mock_server.uri(),
            api_key: "test_api_key".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: Some(0.5),
            max_tokens: None,
            timeout: Duration::from_secs(5),
        }
    }

    fn health_output() -> ObjectShape {
        ObjectShape::new(
            "HealthCheckOutput",
            vec![
                Field::required("message", Shape::String),
                Field::required("input", Shape::String),
            ],
        )
    }

    fn completion(content: &str, finish_reason: &str) -> Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content,
                    "refusal": null
                },
                "finish_reason": finish_reason
            }],
            "usage": {
                "prompt_tokens": 40,
                "completion_tokens": 12,
                "total_tokens": 52
            }
        })
    }

    #[tokio::test]
    async fn test_complete_structured_output() -> Result<()> {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test_api_key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "temperature": 0.5,
                "messages": [
                    { "role": "system", "content": "Reply with JSON." },
                    { "role": "user", "content": "ping" }
                ],
                "response_format": {
                    "type": "json_schema",
                    "json_schema": {
                        "name": "shiptalk_health_check_tool_response",
                        "strict": true
                    }
                }
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion(r#"{"message": "ok", "input": "ping"}"#, "stop")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = OpenAiProvider::new(test_config(&mock_server))?;
        let shape = health_output();
        let result = provider
            .complete(
                &Conversation::new("Reply with JSON.", "ping"),
                &OutputFormat::for_tool("health-check", &shape),
            )
            .await?;

        assert_eq!(result, json!({ "message": "ok", "input": "ping" }));
        Ok(())
    }

    #[tokio::test]
    async fn test_non_conformant_output_is_rejected() {
        let (_, provider) = _setup_mock_server(200, completion(r#"{"message": "ok"}"#, "stop")).await;
        let shape = health_output();
        let err = provider
            .complete(
                &Conversation::new("system", "user"),
                &OutputFormat::for_tool("health-check", &shape),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("input: field required"));
    }

    #[tokio::test]
    async fn test_truncated_output_is_rejected() {
        let (_, provider) = _setup_mock_server(200, completion(r#"{"message": "o"#, "length")).await;
        let shape = health_output();
        let err = provider
            .complete(
                &Conversation::new("system", "user"),
                &OutputFormat::for_tool("health-check", &shape),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[tokio::test]
    async fn test_client_error_reports_api_message() {
        let (_, provider) = _setup_mock_server(
            401,
            json!({ "error": { "message": "Incorrect API key provided", "code": "invalid_api_key" } }),
        )
        .await;
        let shape = health_output();
        let err = provider
            .complete(
                &Conversation::new("system", "user"),
                &OutputFormat::for_tool("health-check", &shape),
            )
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Request failed: 401 Unauthorized: Incorrect API key provided"
        );
    }

    #[tokio::test]
    async fn test_server_error() {
        let (_, provider) = _setup_mock_server(503, json!({})).await;
        let shape = health_output();
        let err = provider
            .complete(
                &Conversation::new("system", "user"),
                &OutputFormat::for_tool("health-check", &shape),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Server error: 503"));
    }

    #[tokio::test]
    async fn test_context_length_error() {
        let (_, provider) = _setup_mock_server(
            200,
            json!({ "error": { "code": "context_length_exceeded", "message": "Too many tokens" } }),
        )
        .await;
        let shape = health_output();
        let err = provider
            .complete(
                &Conversation::new("system", "user"),
                &OutputFormat::for_tool("health-check", &shape),
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Context length exceeded. Message: Too many tokens");
    }
}

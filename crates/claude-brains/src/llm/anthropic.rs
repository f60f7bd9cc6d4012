use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use super::transport::InferenceTransport;
use super::types::*;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Name of the tool used to force schema-shaped output
const RESPOND_TOOL: &str = "respond";

/// Anthropic Messages API client
pub struct AnthropicClient {
    client: Client,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_key: &str) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    /// Build Messages API request body: history turns, then the prompt
    fn build_request_body(&self, request: &InferenceRequest) -> Value {
        let mut messages: Vec<Value> = request.history.iter().map(message_to_api).collect();
        messages.push(message_to_api(&Message::user(&request.prompt)));

        let mut body = json!({
            "model": request.model_id,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
            "messages": messages,
        });

        if let Some(ref sys) = request.system {
            body["system"] = json!(sys);
        }

        if let Some(ref schema) = request.schema {
            body["tools"] = json!([{
                "name": RESPOND_TOOL,
                "description": "Respond with output that satisfies the input schema.",
                "input_schema": schema,
            }]);
            body["tool_choice"] = json!({"type": "tool", "name": RESPOND_TOOL});
        }

        body
    }

    /// Pull the output out of a response: the forced tool input, or the text
    fn parse_response(&self, body: ApiResponse, wants_schema: bool) -> Result<InferenceResponse> {
        let output = if wants_schema {
            body.content
                .iter()
                .find(|b| b.block_type == "tool_use" && b.name.as_deref() == Some(RESPOND_TOOL))
                .and_then(|b| b.input.clone())
                .ok_or_else(|| anyhow!("Anthropic response contained no structured output"))?
        } else {
            let text: String = body
                .content
                .iter()
                .filter(|b| b.block_type == "text")
                .filter_map(|b| b.text.as_deref())
                .collect();
            Value::String(text)
        };

        Ok(InferenceResponse {
            output,
            usage: body.usage,
            model: body.model,
        })
    }
}

fn message_to_api(msg: &Message) -> Value {
    json!({
        "role": msg.role,
        "content": [{"type": "text", "text": msg.content}],
    })
}

#[async_trait]
impl InferenceTransport for AnthropicClient {
    async fn infer(&self, request: &InferenceRequest) -> Result<InferenceResponse> {
        let body = self.build_request_body(request);
        debug!(
            model = %request.model_id,
            turns = request.history.len() + 1,
            "Sending Anthropic request"
        );

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Anthropic API error ({}): {}", status, error_body));
        }

        let api_response: ApiResponse = response.json().await?;
        self.parse_response(api_response, request.schema.is_some())
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}

/// Anthropic API response structures
#[derive(Debug, Deserialize)]
struct ApiResponse {
    model: String,
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
    name: Option<String>,
    input: Option<Value>,
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior turn of an exchange, replayed for continuation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(text: &str) -> Self {
        Self {
            role: Role::User,
            content: text.to_string(),
        }
    }

    pub fn assistant(text: &str) -> Self {
        Self {
            role: Role::Assistant,
            content: text.to_string(),
        }
    }
}

/// Token counters reported by the vendor
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(default)]
    pub cache_creation_input_tokens: u32,
    #[serde(default)]
    pub cache_read_input_tokens: u32,
}

impl Usage {
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// A single inference call
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    /// Vendor model id, e.g. `claude-sonnet-4-20250514`
    pub model_id: String,
    pub system: Option<String>,
    pub prompt: String,
    /// Prior turns, oldest first
    pub history: Vec<Message>,
    /// JSON Schema the output must satisfy; `None` asks for plain text
    pub schema: Option<Value>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl InferenceRequest {
    pub fn new(model_id: &str, prompt: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            system: None,
            prompt: prompt.to_string(),
            history: Vec::new(),
            schema: None,
            max_tokens: 4096,
            temperature: 0.0,
        }
    }
}

/// Result of an inference call
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceResponse {
    /// Structured output, or a JSON string when no schema was requested
    pub output: Value,
    pub usage: Usage,
    pub model: String,
}

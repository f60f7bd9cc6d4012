use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use crate::catalog::{ModelCatalog, ModelSpec};
use crate::llm::{InferenceRequest, InferenceTransport, Message, Usage};

/// Input to a single stateless inference
#[derive(Debug, Clone, Default)]
pub struct AskInput {
    pub system: Option<String>,
    pub prompt: String,
    /// JSON Schema for the output; `None` returns plain text
    pub schema: Option<Value>,
    /// Episode from a previous `ask`, to continue that exchange
    pub history: Vec<Message>,
}

impl AskInput {
    pub fn prompt(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrainOutput {
    pub output: Value,
    pub usage: Usage,
    /// `history` plus this exchange; pass back as `history` to continue
    pub episode: Vec<Message>,
}

/// Stateless inference against one catalog model
#[derive(Clone)]
pub struct BrainAtom {
    spec: &'static ModelSpec,
    transport: Arc<dyn InferenceTransport>,
    max_tokens: u32,
    temperature: f32,
}

/// Atom for `slug`, or `None` when the catalog doesn't know it
pub fn get_brain_atom(slug: &str, transport: Arc<dyn InferenceTransport>) -> Option<BrainAtom> {
    let spec = ModelCatalog::lookup(slug)?;
    Some(BrainAtom {
        spec,
        transport,
        max_tokens: 4096,
        temperature: 0.0,
    })
}

impl BrainAtom {
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn spec(&self) -> &ModelSpec {
        self.spec
    }

    pub async fn ask(&self, input: AskInput) -> Result<BrainOutput> {
        let request = InferenceRequest {
            model_id: self.spec.model_id.to_string(),
            system: input.system,
            prompt: input.prompt.clone(),
            history: input.history.clone(),
            schema: input.schema,
            max_tokens: self.max_tokens.min(self.spec.max_output_tokens),
            temperature: self.temperature,
        };

        let response = self.transport.infer(&request).await?;
        info!(
            slug = self.spec.slug,
            transport = self.transport.name(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Brain atom answered"
        );

        let reply = match &response.output {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        let mut episode = input.history;
        episode.push(Message::user(&input.prompt));
        episode.push(Message::assistant(&reply));

        Ok(BrainOutput {
            output: response.output,
            usage: response.usage,
            episode,
        })
    }
}

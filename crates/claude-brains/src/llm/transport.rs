use anyhow::Result;
use async_trait::async_trait;

use super::types::{InferenceRequest, InferenceResponse};

/// Performs the network call for an inference request
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    async fn infer(&self, request: &InferenceRequest) -> Result<InferenceResponse>;

    /// Transport name for logging
    fn name(&self) -> &str;
}

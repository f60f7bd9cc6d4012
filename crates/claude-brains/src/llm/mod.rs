pub mod anthropic;
pub mod transport;
pub mod types;

pub use anthropic::AnthropicClient;
pub use transport::InferenceTransport;
pub use types::{InferenceRequest, InferenceResponse, Message, Role, Usage};

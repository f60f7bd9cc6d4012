pub mod atom;
pub mod catalog;
pub mod discovery;
pub mod hooks;
pub mod llm;

pub use atom::{get_brain_atom, AskInput, BrainAtom, BrainOutput};
pub use catalog::{ModelCatalog, ModelSpec, TokenRates};
pub use discovery::{
    get_brain_hooks, is_claude_specifier, BrainHooksSupplier, BrainRegistry, ClaudeCodeSupplier,
};
pub use hooks::{
    parse_timeout, BrainHook, BrainHooksAdapter, ClaudeCodeHooks, HookEvent, HookFilter, HookKey,
    HookQuery, SettingsDocument, SettingsStore,
};
pub use llm::{
    AnthropicClient, InferenceRequest, InferenceResponse, InferenceTransport, Message, Role, Usage,
};

/// Initialize structured JSON logging on stderr
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

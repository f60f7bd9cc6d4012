pub mod adapter;
pub mod events;
pub mod hook;
pub mod query;
pub mod reconcile;
pub mod settings;
pub mod translate;

pub use adapter::{BrainHooksAdapter, ClaudeCodeHooks};
pub use events::HookEvent;
pub use hook::{parse_timeout, BrainHook, HookFilter, HookKey, HookQuery, DEFAULT_HOOK_TIMEOUT};
pub use settings::{SettingsDocument, SettingsStore};

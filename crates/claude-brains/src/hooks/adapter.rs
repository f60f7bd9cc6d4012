use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use super::hook::{BrainHook, HookKey, HookQuery};
use super::query::{collect_hooks, find_hook};
use super::reconcile::{delete_hook, upsert_hook};
use super::settings::SettingsStore;

/// Persistence of brain hooks for one brain.
/// Every call re-reads the backing store; nothing is cached between calls.
#[async_trait]
pub trait BrainHooksAdapter: Send + Sync {
    /// Brain this adapter writes hooks for
    fn slug(&self) -> &str;

    /// Hooks matching `query` (AND across supplied fields)
    async fn get_all(&self, query: &HookQuery) -> Result<Vec<BrainHook>>;

    async fn get_one(&self, key: &HookKey) -> Result<Option<BrainHook>>;

    /// Create or update the hook identified by `hook.key()`
    async fn upsert(&self, hook: BrainHook) -> Result<()>;

    /// Remove the hook. Deleting a hook that doesn't exist is not an error.
    async fn del(&self, key: &HookKey) -> Result<()>;
}

/// Hooks kept in Claude Code's `settings.json`
#[derive(Debug, Clone)]
pub struct ClaudeCodeHooks {
    store: SettingsStore,
}

impl ClaudeCodeHooks {
    pub const SLUG: &'static str = "claude-code";

    /// Project-local settings under `<repo>/.claude/`
    pub fn for_repo(repo_path: &Path) -> Self {
        Self {
            store: SettingsStore::for_repo(repo_path),
        }
    }

    pub fn with_settings_path(path: PathBuf) -> Self {
        Self {
            store: SettingsStore::new(path),
        }
    }

    pub fn settings_path(&self) -> &Path {
        self.store.path()
    }
}

#[async_trait]
impl BrainHooksAdapter for ClaudeCodeHooks {
    fn slug(&self) -> &str {
        Self::SLUG
    }

    async fn get_all(&self, query: &HookQuery) -> Result<Vec<BrainHook>> {
        let document = self.store.read().await?;
        collect_hooks(&document, query)
    }

    async fn get_one(&self, key: &HookKey) -> Result<Option<BrainHook>> {
        let document = self.store.read().await?;
        find_hook(&document, key)
    }

    async fn upsert(&self, hook: BrainHook) -> Result<()> {
        let mut document = self.store.read().await?;
        let outcome = upsert_hook(&mut document, &hook)?;
        self.store.write(&document).await?;

        info!(
            author = %hook.author,
            event = %hook.event,
            command = %hook.command,
            orphans_removed = outcome.orphans_removed,
            updated = outcome.updated_in_place,
            path = ?self.store.path(),
            "Upserted hook"
        );
        Ok(())
    }

    async fn del(&self, key: &HookKey) -> Result<()> {
        let mut document = self.store.read().await?;
        if !delete_hook(&mut document, key)? {
            debug!(
                author = %key.author,
                event = %key.event,
                command = %key.command,
                "Hook not present, nothing to delete"
            );
            return Ok(());
        }
        self.store.write(&document).await?;

        info!(
            author = %key.author,
            event = %key.event,
            command = %key.command,
            path = ?self.store.path(),
            "Deleted hook"
        );
        Ok(())
    }
}

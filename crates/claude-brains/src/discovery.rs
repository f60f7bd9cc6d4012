use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::hooks::{BrainHooksAdapter, ClaudeCodeHooks};

/// Whether a brain specifier names a Claude brain
pub fn is_claude_specifier(specifier: &str) -> bool {
    matches!(specifier, "claude" | "claude-code") || specifier.starts_with("anthropic/")
}

/// Hooks adapter for `specifier`, or `None` when it isn't a Claude brain
pub fn get_brain_hooks(specifier: &str, repo_path: &Path) -> Option<ClaudeCodeHooks> {
    is_claude_specifier(specifier).then(|| ClaudeCodeHooks::for_repo(repo_path))
}

/// Produces hooks adapters for the specifiers it recognizes
pub trait BrainHooksSupplier: Send + Sync {
    /// Supplier name (must be unique within a registry)
    fn name(&self) -> &str;

    /// `None` means "not handled here"
    fn supply(&self, specifier: &str, repo_path: &Path) -> Option<Arc<dyn BrainHooksAdapter>>;
}

/// Supplier for Claude Code's project settings
pub struct ClaudeCodeSupplier;

impl BrainHooksSupplier for ClaudeCodeSupplier {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn supply(&self, specifier: &str, repo_path: &Path) -> Option<Arc<dyn BrainHooksAdapter>> {
        get_brain_hooks(specifier, repo_path)
            .map(|hooks| Arc::new(hooks) as Arc<dyn BrainHooksAdapter>)
    }
}

/// Suppliers from any number of vendors, in registration order.
/// The first supplier that accepts a specifier wins.
pub struct BrainRegistry {
    suppliers: RwLock<Vec<Arc<dyn BrainHooksSupplier>>>,
}

impl BrainRegistry {
    pub fn new() -> Self {
        Self {
            suppliers: RwLock::new(Vec::new()),
        }
    }

    /// Registry with the suppliers this crate ships
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(ClaudeCodeSupplier));
        registry
    }

    /// Register a supplier. One with the same name is replaced in its original slot.
    pub fn register(&self, supplier: Arc<dyn BrainHooksSupplier>) {
        let mut suppliers = self.suppliers.write().unwrap_or_else(PoisonError::into_inner);
        match suppliers.iter().position(|s| s.name() == supplier.name()) {
            Some(idx) => suppliers[idx] = supplier,
            None => suppliers.push(supplier),
        }
    }

    pub fn lookup_hooks(
        &self,
        specifier: &str,
        repo_path: &Path,
    ) -> Option<Arc<dyn BrainHooksAdapter>> {
        let suppliers = self.suppliers.read().unwrap_or_else(PoisonError::into_inner);
        let found = suppliers.iter().find_map(|supplier| {
            supplier
                .supply(specifier, repo_path)
                .map(|adapter| (supplier.name().to_string(), adapter))
        });
        match found {
            Some((supplier, adapter)) => {
                debug!(
                    specifier,
                    supplier = %supplier,
                    brain = adapter.slug(),
                    "Resolved brain hooks adapter"
                );
                Some(adapter)
            }
            None => {
                debug!(specifier, "No supplier handles brain specifier");
                None
            }
        }
    }

    pub fn supplier_names(&self) -> Vec<String> {
        self.suppliers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }
}

impl Default for BrainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

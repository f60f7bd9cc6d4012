use crate::cli::{HookCommands, HookKeyArgs};
use crate::config::Config;
use anyhow::{anyhow, Result};
use claude_brains::{
    is_claude_specifier, parse_timeout, BrainHook, BrainHooksAdapter, BrainRegistry,
    ClaudeCodeHooks, HookEvent, HookFilter, HookKey, HookQuery,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub async fn execute(
    action: HookCommands,
    specifier: &str,
    repo: &Path,
    config: &Config,
) -> Result<()> {
    let adapter = resolve_adapter(specifier, repo, config)?;
    info!(brain = adapter.slug(), repo = ?repo, "Managing brain hooks");

    match action {
        HookCommands::List {
            author,
            event,
            command,
        } => {
            let query = HookQuery {
                author,
                event: event.as_deref().map(str::parse::<HookEvent>).transpose()?,
                command,
            };
            let hooks = adapter.get_all(&query).await?;
            println!("{}", serde_json::to_string_pretty(&hooks)?);
        }
        HookCommands::Get(key) => {
            let hook = adapter.get_one(&parse_key(&key)?).await?;
            println!("{}", serde_json::to_string_pretty(&hook)?);
        }
        HookCommands::Set {
            key,
            timeout,
            filter,
        } => {
            let key = parse_key(&key)?;
            let hook = BrainHook {
                author: key.author,
                event: key.event,
                command: key.command,
                timeout: parse_timeout(&timeout)?,
                filter: filter.as_deref().map(HookFilter::what),
            };
            adapter.upsert(hook).await?;
        }
        HookCommands::Del(key) => {
            adapter.del(&parse_key(&key)?).await?;
        }
    }

    Ok(())
}

fn parse_key(args: &HookKeyArgs) -> Result<HookKey> {
    Ok(HookKey::new(&args.author, args.event.parse()?, &args.command))
}

/// Adapter for `specifier`; a configured settings path applies to Claude brains only
fn resolve_adapter(
    specifier: &str,
    repo: &Path,
    config: &Config,
) -> Result<Arc<dyn BrainHooksAdapter>> {
    if let Some(ref settings_path) = config.hooks.settings_path {
        if is_claude_specifier(specifier) {
            let expanded = shellexpand::tilde(&settings_path.to_string_lossy()).to_string();
            return Ok(Arc::new(ClaudeCodeHooks::with_settings_path(repo.join(expanded))));
        }
    }

    BrainRegistry::with_defaults()
        .lookup_hooks(specifier, repo)
        .ok_or_else(|| anyhow!("no brain adapter handles '{}'", specifier))
}

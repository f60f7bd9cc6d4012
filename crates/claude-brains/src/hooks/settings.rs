use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::translate::UNKNOWN_AUTHOR;

/// Matcher used when a group applies to every tool
pub const WILDCARD_MATCHER: &str = "*";

const HOOKS_KEY: &str = "hooks";

// ============================================================================
// Document model
// ============================================================================

/// Claude Code settings document.
///
/// Only `hooks.<VendorEvent>` is interpreted; every other key (at the top
/// level, on groups, and on records) is carried through untouched and in
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument {
    root: Map<String, Value>,
}

/// One grouping entry under a vendor event: a matcher and its command hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,
    #[serde(default)]
    pub hooks: Vec<CommandHook>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A vendor hook record. `author` is ours; Claude Code ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandHook {
    #[serde(rename = "type", default = "command_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

fn command_kind() -> String {
    "command".to_string()
}

impl MatcherGroup {
    pub fn new(matcher: &str, hooks: Vec<CommandHook>) -> Self {
        Self {
            matcher: Some(matcher.to_string()),
            hooks,
            rest: Map::new(),
        }
    }

    /// Effective matcher; a group without one applies to everything
    pub fn matcher(&self) -> &str {
        self.matcher.as_deref().unwrap_or(WILDCARD_MATCHER)
    }
}

impl CommandHook {
    pub fn command(command: &str) -> Self {
        Self {
            kind: command_kind(),
            command: Some(command.to_string()),
            timeout: None,
            author: None,
            rest: Map::new(),
        }
    }

    /// Whether this record is the persisted form of `(author, command)`.
    /// A record without an author belongs to [`UNKNOWN_AUTHOR`], as it reads back.
    pub fn is_for(&self, author: &str, command: &str) -> bool {
        self.author.as_deref().unwrap_or(UNKNOWN_AUTHOR) == author
            && self.command.as_deref() == Some(command)
    }
}

impl SettingsDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(anyhow!("settings document must be a JSON object, got {}", other)),
        }
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    fn hooks_object(&self) -> Result<Option<&Map<String, Value>>> {
        match self.root.get(HOOKS_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(hooks)) => Ok(Some(hooks)),
            Some(_) => Err(anyhow!("settings field 'hooks' must be an object")),
        }
    }

    /// Vendor event keys present under `hooks`, in document order
    pub fn vendor_events(&self) -> Result<Vec<String>> {
        Ok(self
            .hooks_object()?
            .map(|hooks| hooks.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Grouping entries under a vendor event; empty when the event is absent
    pub fn groups(&self, vendor_event: &str) -> Result<Vec<MatcherGroup>> {
        let Some(raw) = self.hooks_object()?.and_then(|h| h.get(vendor_event)) else {
            return Ok(Vec::new());
        };
        serde_json::from_value(raw.clone())
            .with_context(|| format!("parsing hooks.{}", vendor_event))
    }

    /// Replace the grouping entries of a vendor event. An empty list removes the event key.
    pub fn set_groups(&mut self, vendor_event: &str, groups: Vec<MatcherGroup>) -> Result<()> {
        let hooks = self
            .root
            .entry(HOOKS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if hooks.is_null() {
            *hooks = Value::Object(Map::new());
        }
        let hooks = hooks
            .as_object_mut()
            .ok_or_else(|| anyhow!("settings field 'hooks' must be an object"))?;

        if groups.is_empty() {
            hooks.shift_remove(vendor_event);
        } else {
            let value = serde_json::to_value(groups)
                .with_context(|| format!("serializing hooks.{}", vendor_event))?;
            hooks.insert(vendor_event.to_string(), value);
        }
        Ok(())
    }

    /// Pretty JSON with 2-space indent and one trailing newline
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.root).context("serializing settings")?;
        out.push('\n');
        Ok(out)
    }
}

// ============================================================================
// Store
// ============================================================================

/// Reads and writes one settings file. No caching: every call hits the disk.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Project-local settings: `<repo>/.claude/settings.json`
    pub fn for_repo(repo_path: &Path) -> Self {
        Self::new(repo_path.join(".claude").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. A missing file or directory yields an empty document.
    pub async fn read(&self) -> Result<SettingsDocument> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "No settings file yet");
                return Ok(SettingsDocument::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(SettingsDocument::new());
        }

        serde_json::from_str(&content).with_context(|| format!("parsing {}", self.path.display()))
    }

    /// Overwrite the whole file, creating the parent directory if needed
    pub async fn write(&self, document: &SettingsDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = document.to_pretty_string()?;
        tokio::fs::write(&self.path, content).await?;
        debug!(path = ?self.path, "Wrote settings");
        Ok(())
    }
}

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use super::events::HookEvent;

/// Fallback timeout for records persisted without one
pub const DEFAULT_HOOK_TIMEOUT: Duration = Duration::from_secs(30);

/// Secondary selector for a hook (e.g. restrict to a named tool).
/// Not part of the hook's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookFilter {
    pub what: String,
}

impl HookFilter {
    pub fn what(what: &str) -> Self {
        Self {
            what: what.to_string(),
        }
    }
}

/// Vendor-neutral hook declared by a brain author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainHook {
    /// Declaring entity, e.g. `repo=ehmpathy/role=mechanic`
    pub author: String,
    pub event: HookEvent,
    /// Shell command to run
    pub command: String,
    #[serde(with = "timeout_secs", default = "default_timeout")]
    pub timeout: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<HookFilter>,
}

fn default_timeout() -> Duration {
    DEFAULT_HOOK_TIMEOUT
}

impl BrainHook {
    pub fn new(author: &str, event: HookEvent, command: &str) -> Self {
        Self {
            author: author.to_string(),
            event,
            command: command.to_string(),
            timeout: DEFAULT_HOOK_TIMEOUT,
            filter: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_filter(mut self, what: &str) -> Self {
        self.filter = Some(HookFilter::what(what));
        self
    }

    /// Identity of this hook: `(author, event, command)`
    pub fn key(&self) -> HookKey {
        HookKey {
            author: self.author.clone(),
            event: self.event,
            command: self.command.clone(),
        }
    }
}

/// Unique key of a hook. The filter is deliberately excluded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HookKey {
    pub author: String,
    pub event: HookEvent,
    pub command: String,
}

impl HookKey {
    pub fn new(author: &str, event: HookEvent, command: &str) -> Self {
        Self {
            author: author.to_string(),
            event,
            command: command.to_string(),
        }
    }
}

/// Equality filter over hooks; every supplied field must match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookQuery {
    pub author: Option<String>,
    pub event: Option<HookEvent>,
    pub command: Option<String>,
}

impl HookQuery {
    pub fn by_author(author: &str) -> Self {
        Self {
            author: Some(author.to_string()),
            ..Default::default()
        }
    }

    pub fn with_event(mut self, event: HookEvent) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_command(mut self, command: &str) -> Self {
        self.command = Some(command.to_string());
        self
    }

    pub fn matches(&self, hook: &BrainHook) -> bool {
        self.author.as_ref().map_or(true, |a| *a == hook.author)
            && self.event.map_or(true, |e| e == hook.event)
            && self.command.as_ref().map_or(true, |c| *c == hook.command)
    }
}

impl From<&HookKey> for HookQuery {
    fn from(key: &HookKey) -> Self {
        Self {
            author: Some(key.author.clone()),
            event: Some(key.event),
            command: Some(key.command.clone()),
        }
    }
}

/// Parse a timeout such as `30s`, `1500ms`, `2m`, or a bare number of seconds
pub fn parse_timeout(input: &str) -> Result<Duration> {
    let input = input.trim();
    let (digits, unit) = match input.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => input.split_at(idx),
        None => (input, "s"),
    };
    let value: u64 = digits
        .parse()
        .with_context(|| format!("invalid timeout '{}'", input))?;
    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => value
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| anyhow!("timeout '{}' is too large", input)),
        other => Err(anyhow!("unknown timeout unit '{}' in '{}'", other, input)),
    }
}

/// Serialize durations as whole seconds, the same unit the settings file uses
mod timeout_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs_f64().round() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

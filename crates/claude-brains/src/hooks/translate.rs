//! Mapping between canonical [`BrainHook`]s and Claude Code's matcher-grouped records.
//!
//! Timeouts are persisted in whole seconds, so sub-second precision is lost
//! on the way through.

use std::time::Duration;

use super::events::HookEvent;
use super::hook::{BrainHook, HookFilter, DEFAULT_HOOK_TIMEOUT};
use super::settings::{CommandHook, MatcherGroup, WILDCARD_MATCHER};

/// Author recorded for hooks that were not written by us
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Where and how a hook lands in the settings document
#[derive(Debug, Clone, PartialEq)]
pub struct VendorPlacement {
    pub event: &'static str,
    pub matcher: String,
    pub record: CommandHook,
}

pub fn to_vendor(hook: &BrainHook) -> VendorPlacement {
    let matcher = hook
        .filter
        .as_ref()
        .map(|f| f.what.clone())
        .unwrap_or_else(|| WILDCARD_MATCHER.to_string());

    let seconds = hook.timeout.as_secs_f64().round() as u64;

    let mut record = CommandHook::command(&hook.command);
    record.timeout = (seconds > 0).then_some(seconds);
    record.author = Some(hook.author.clone());

    VendorPlacement {
        event: hook.event.vendor_name(),
        matcher,
        record,
    }
}

/// Every command record in `group`, as canonical hooks. Unmanaged vendor events yield nothing.
pub fn from_vendor(vendor_event: &str, group: &MatcherGroup) -> Vec<BrainHook> {
    let Some(event) = HookEvent::from_vendor_name(vendor_event) else {
        return Vec::new();
    };

    let filter = match group.matcher() {
        WILDCARD_MATCHER => None,
        what => Some(HookFilter::what(what)),
    };

    group
        .hooks
        .iter()
        .filter_map(|record| {
            // Non-command records (e.g. prompt hooks) have no canonical form
            let command = record.command.as_ref()?;
            Some(BrainHook {
                author: record
                    .author
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                event,
                command: command.clone(),
                timeout: record
                    .timeout
                    .map(Duration::from_secs)
                    .unwrap_or(DEFAULT_HOOK_TIMEOUT),
                filter: filter.clone(),
            })
        })
        .collect()
}

//! In-memory reconciliation of one hook against a settings document.
//!
//! Claude Code groups records by `matcher`, which we derive from the hook's
//! mutable filter. A record can therefore be stranded under any matcher it
//! ever had, so both operations scan every group of the event instead of
//! trusting the current matcher to say where the hook lives.

use anyhow::Result;
use tracing::debug;

use super::hook::{BrainHook, HookKey};
use super::settings::{CommandHook, MatcherGroup, SettingsDocument};
use super::translate::to_vendor;

/// What an upsert did to the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// Stale records removed from groups with another matcher
    pub orphans_removed: usize,
    /// The record already existed under the target matcher
    pub updated_in_place: bool,
}

/// Make `hook` the single representation of its key inside `document`
pub fn upsert_hook(document: &mut SettingsDocument, hook: &BrainHook) -> Result<UpsertOutcome> {
    let placement = to_vendor(hook);
    let (author, command) = (hook.author.as_str(), hook.command.as_str());
    let mut groups = document.groups(placement.event)?;
    let mut outcome = UpsertOutcome::default();

    let target = groups.iter().position(|g| g.matcher() == placement.matcher);

    // Orphan cleanup runs on every upsert, moved or not
    let mut emptied = vec![false; groups.len()];
    for (idx, group) in groups.iter_mut().enumerate() {
        if Some(idx) == target {
            continue;
        }
        let removed = remove_records(group, author, command);
        if removed > 0 {
            debug!(
                author,
                command,
                matcher = group.matcher(),
                removed,
                "Removed orphaned hook records"
            );
            outcome.orphans_removed += removed;
            emptied[idx] = group.hooks.is_empty();
        }
    }

    match target {
        Some(idx) => {
            outcome.updated_in_place =
                place_record(&mut groups[idx], placement.record, author, command);
        }
        None => groups.push(MatcherGroup::new(&placement.matcher, vec![placement.record])),
    }

    let mut emptied = emptied.into_iter();
    groups.retain(|_| !emptied.next().unwrap_or(false));

    document.set_groups(placement.event, groups)?;
    Ok(outcome)
}

/// Remove every record of `key` from every group of its event.
/// Returns whether the document changed.
pub fn delete_hook(document: &mut SettingsDocument, key: &HookKey) -> Result<bool> {
    let vendor_event = key.event.vendor_name();
    let mut groups = document.groups(vendor_event)?;
    let mut removed = 0;

    groups.retain_mut(|group| {
        let count = remove_records(group, &key.author, &key.command);
        removed += count;
        !(count > 0 && group.hooks.is_empty())
    });

    if removed == 0 {
        return Ok(false);
    }

    debug!(author = %key.author, command = %key.command, removed, "Removed hook records");
    document.set_groups(vendor_event, groups)?;
    Ok(true)
}

fn remove_records(group: &mut MatcherGroup, author: &str, command: &str) -> usize {
    let before = group.hooks.len();
    group.hooks.retain(|record| !record.is_for(author, command));
    before - group.hooks.len()
}

/// Replace the first matching record in place (keeping fields we don't
/// manage) or append. Later duplicates in the same group are dropped.
fn place_record(
    group: &mut MatcherGroup,
    mut record: CommandHook,
    author: &str,
    command: &str,
) -> bool {
    let Some(pos) = group.hooks.iter().position(|r| r.is_for(author, command)) else {
        group.hooks.push(record);
        return false;
    };

    record.rest = std::mem::take(&mut group.hooks[pos].rest);
    group.hooks[pos] = record;

    let mut idx = pos + 1;
    while idx < group.hooks.len() {
        if group.hooks[idx].is_for(author, command) {
            group.hooks.remove(idx);
        } else {
            idx += 1;
        }
    }
    true
}

use anyhow::Result;

use super::events::HookEvent;
use super::hook::{BrainHook, HookKey, HookQuery};
use super::settings::SettingsDocument;
use super::translate::from_vendor;

/// Canonical view of every managed hook in `document` that satisfies `query`.
/// Follows the document's own event and group order.
pub fn collect_hooks(document: &SettingsDocument, query: &HookQuery) -> Result<Vec<BrainHook>> {
    let mut hooks = Vec::new();

    for vendor_event in document.vendor_events()? {
        let Some(event) = HookEvent::from_vendor_name(&vendor_event) else {
            continue;
        };
        if query.event.is_some_and(|wanted| wanted != event) {
            continue;
        }
        for group in document.groups(&vendor_event)? {
            hooks.extend(from_vendor(&vendor_event, &group));
        }
    }

    hooks.retain(|hook| query.matches(hook));
    Ok(hooks)
}

pub fn find_hook(document: &SettingsDocument, key: &HookKey) -> Result<Option<BrainHook>> {
    Ok(collect_hooks(document, &HookQuery::from(key))?.into_iter().next())
}

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Vendor event fired when a Claude Code session boots
pub const VENDOR_SESSION_START: &str = "SessionStart";
/// Vendor event fired before each tool invocation
pub const VENDOR_PRE_TOOL_USE: &str = "PreToolUse";
/// Vendor event fired after each tool invocation. Recognized, never managed.
pub const VENDOR_POST_TOOL_USE: &str = "PostToolUse";
/// Vendor event fired when the agent stops
pub const VENDOR_STOP: &str = "Stop";

/// Lifecycle moments a brain hook can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HookEvent {
    /// Brain session boots
    OnBoot,
    /// Brain is about to invoke a tool
    OnTool,
    /// Brain stops
    OnStop,
}

impl HookEvent {
    pub const ALL: [HookEvent; 3] = [HookEvent::OnBoot, HookEvent::OnTool, HookEvent::OnStop];

    /// Vendor event key this event is persisted under
    pub fn vendor_name(self) -> &'static str {
        match self {
            HookEvent::OnBoot => VENDOR_SESSION_START,
            HookEvent::OnTool => VENDOR_PRE_TOOL_USE,
            HookEvent::OnStop => VENDOR_STOP,
        }
    }

    /// Reverse of [`HookEvent::vendor_name`]; `None` for vendor events we don't manage
    pub fn from_vendor_name(name: &str) -> Option<Self> {
        match name {
            VENDOR_SESSION_START => Some(HookEvent::OnBoot),
            VENDOR_PRE_TOOL_USE => Some(HookEvent::OnTool),
            VENDOR_STOP => Some(HookEvent::OnStop),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HookEvent::OnBoot => "onBoot",
            HookEvent::OnTool => "onTool",
            HookEvent::OnStop => "onStop",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        HookEvent::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow!("unknown hook event '{}' (expected onBoot, onTool or onStop)", s)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_names_round_trip() {
        for event in HookEvent::ALL {
            assert_eq!(HookEvent::from_vendor_name(event.vendor_name()), Some(event));
        }
    }

    #[test]
    fn test_post_tool_use_is_not_managed() {
        assert_eq!(HookEvent::from_vendor_name(VENDOR_POST_TOOL_USE), None);
        assert_eq!(HookEvent::from_vendor_name("Notification"), None);
    }

    #[test]
    fn test_parse_event() {
        assert_eq!("onTool".parse::<HookEvent>().unwrap(), HookEvent::OnTool);
        assert_eq!("onstop".parse::<HookEvent>().unwrap(), HookEvent::OnStop);
        assert!("onCrash".parse::<HookEvent>().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&HookEvent::OnBoot).unwrap();
        assert_eq!(json, "\"onBoot\"");
    }
}

use std::path::Path;
use std::time::Duration;

use claude_brains::{
    get_brain_hooks, BrainHook, BrainHooksAdapter, BrainRegistry, ClaudeCodeHooks, HookEvent,
    HookKey, HookQuery,
};
use serde_json::{json, Value};

const MECHANIC: &str = "repo=ehmpathy/role=mechanic";
const REVIEWER: &str = "repo=ehmpathy/role=reviewer";

fn settings_path(repo: &Path) -> std::path::PathBuf {
    repo.join(".claude").join("settings.json")
}

fn read_settings(repo: &Path) -> Value {
    let content = std::fs::read_to_string(settings_path(repo)).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn write_settings(repo: &Path, value: &Value) {
    let path = settings_path(repo);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap() + "\n").unwrap();
}

#[tokio::test]
async fn test_scenario_four_hooks_then_delete() {
    let dir = tempfile::tempdir().unwrap();
    let hooks = get_brain_hooks("claude-code", dir.path()).unwrap();

    hooks
        .upsert(BrainHook::new(MECHANIC, HookEvent::OnBoot, "echo boot"))
        .await
        .unwrap();
    hooks
        .upsert(BrainHook::new(MECHANIC, HookEvent::OnTool, "echo tool").with_filter("Bash"))
        .await
        .unwrap();
    hooks
        .upsert(BrainHook::new(REVIEWER, HookEvent::OnBoot, "echo ready"))
        .await
        .unwrap();
    hooks
        .upsert(BrainHook::new(REVIEWER, HookEvent::OnStop, "echo done"))
        .await
        .unwrap();

    assert_eq!(hooks.get_all(&HookQuery::default()).await.unwrap().len(), 4);

    let boot = HookKey::new(MECHANIC, HookEvent::OnBoot, "echo boot");
    hooks.del(&boot).await.unwrap();

    assert_eq!(hooks.get_all(&HookQuery::default()).await.unwrap().len(), 3);
    assert_eq!(hooks.get_one(&boot).await.unwrap(), None);
}

#[tokio::test]
async fn test_filtering_by_author_and_event() {
    let dir = tempfile::tempdir().unwrap();
    let hooks = ClaudeCodeHooks::for_repo(dir.path());

    for hook in [
        BrainHook::new(MECHANIC, HookEvent::OnBoot, "echo boot"),
        BrainHook::new(MECHANIC, HookEvent::OnTool, "echo tool").with_filter("Bash"),
        BrainHook::new(REVIEWER, HookEvent::OnBoot, "echo ready"),
        BrainHook::new(REVIEWER, HookEvent::OnStop, "echo done"),
    ] {
        hooks.upsert(hook).await.unwrap();
    }

    let mechanic = hooks.get_all(&HookQuery::by_author(MECHANIC)).await.unwrap();
    assert_eq!(mechanic.len(), 2);
    assert!(mechanic.iter().all(|h| h.author == MECHANIC));

    let narrowed = hooks
        .get_all(&HookQuery::by_author(MECHANIC).with_event(HookEvent::OnBoot))
        .await
        .unwrap();
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].command, "echo boot");

    let empty = hooks
        .get_all(&HookQuery::by_author(REVIEWER).with_event(HookEvent::OnTool))
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_identity_stable_under_filter_change() {
    let dir = tempfile::tempdir().unwrap();
    let hooks = ClaudeCodeHooks::for_repo(dir.path());
    let hook = BrainHook::new(MECHANIC, HookEvent::OnTool, "npx format");

    hooks.upsert(hook.clone().with_filter("Write")).await.unwrap();
    hooks.upsert(hook.clone().with_filter("Write|Edit")).await.unwrap();

    let all = hooks.get_all(&HookQuery::default()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].filter.as_ref().unwrap().what, "Write|Edit");

    let settings = read_settings(dir.path());
    let groups = settings["hooks"]["PreToolUse"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["matcher"], "Write|Edit");
}

#[tokio::test]
async fn test_upsert_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let hooks = ClaudeCodeHooks::for_repo(dir.path());
    let hook = BrainHook::new(MECHANIC, HookEvent::OnTool, "npx lint")
        .with_filter("Edit")
        .with_timeout(Duration::from_millis(12_400));

    hooks.upsert(hook.clone()).await.unwrap();
    let once = std::fs::read_to_string(settings_path(dir.path())).unwrap();
    hooks.upsert(hook).await.unwrap();
    let twice = std::fs::read_to_string(settings_path(dir.path())).unwrap();

    assert_eq!(once, twice);
    assert!(once.ends_with("}\n"));
    assert!(once.contains("\n  \"hooks\": {"));
    assert!(once.contains("\"timeout\": 12"));
}

#[tokio::test]
async fn test_delete_removes_drifted_copies_across_matchers() {
    let dir = tempfile::tempdir().unwrap();
    let record = json!({
        "type": "command",
        "command": "npx lint",
        "timeout": 30,
        "author": MECHANIC
    });
    write_settings(
        dir.path(),
        &json!({
            "hooks": {
                "PreToolUse": [
                    {"matcher": "Write", "hooks": [record.clone()]},
                    {"matcher": "Edit", "hooks": [record.clone()]},
                    {"matcher": "Write|Edit", "hooks": [record]}
                ]
            }
        }),
    );
    let hooks = ClaudeCodeHooks::for_repo(dir.path());
    assert_eq!(hooks.get_all(&HookQuery::default()).await.unwrap().len(), 3);

    hooks
        .del(&HookKey::new(MECHANIC, HookEvent::OnTool, "npx lint"))
        .await
        .unwrap();

    assert!(hooks.get_all(&HookQuery::default()).await.unwrap().is_empty());
    let settings = read_settings(dir.path());
    assert!(settings["hooks"].get("PreToolUse").is_none());
}

#[tokio::test]
async fn test_unrelated_fields_survive_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let original = r#"{
  "permissions": {
    "allow": [
      "Bash(npm test:*)",
      "Read(~/.zshrc)"
    ],
    "deny": []
  },
  "hooks": {
    "PostToolUse": [
      {
        "matcher": "Write",
        "hooks": [
          {
            "type": "command",
            "command": "prettier --write"
          }
        ]
      }
    ]
  },
  "env": {
    "FOO": "bar"
  }
}
"#;
    let path = settings_path(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, original).unwrap();

    let hooks = ClaudeCodeHooks::for_repo(dir.path());
    let hook = BrainHook::new(MECHANIC, HookEvent::OnStop, "echo done");
    hooks.upsert(hook.clone()).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let permissions_block = &original[..original.find("  \"hooks\"").unwrap()];
    assert!(written.starts_with(permissions_block));
    assert!(written.ends_with("  \"env\": {\n    \"FOO\": \"bar\"\n  }\n}\n"));

    let settings: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(settings["hooks"]["PostToolUse"][0]["hooks"][0]["command"], "prettier --write");

    hooks.del(&hook.key()).await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[tokio::test]
async fn test_foreign_hooks_are_listed_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_settings(
        dir.path(),
        &json!({"hooks": {"SessionStart": [{
            "hooks": [{"type": "command", "command": "hand-written"}]
        }]}}),
    );

    let hooks = ClaudeCodeHooks::for_repo(dir.path());
    let all = hooks.get_all(&HookQuery::default()).await.unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].author, "unknown");
    assert_eq!(all[0].timeout, Duration::from_secs(30));
    assert_eq!(all[0].filter, None);
}

#[tokio::test]
async fn test_authorless_hook_keeps_a_single_identity() {
    let dir = tempfile::tempdir().unwrap();
    write_settings(
        dir.path(),
        &json!({"hooks": {"Stop": [{
            "matcher": "*",
            "hooks": [{"type": "command", "command": "echo x"}]
        }]}}),
    );
    let hooks = ClaudeCodeHooks::for_repo(dir.path());
    let key = HookKey::new("unknown", HookEvent::OnStop, "echo x");

    assert!(hooks.get_one(&key).await.unwrap().is_some());
    hooks.del(&key).await.unwrap();
    assert!(hooks.get_one(&key).await.unwrap().is_none());

    write_settings(
        dir.path(),
        &json!({"hooks": {"Stop": [{
            "matcher": "*",
            "hooks": [{"type": "command", "command": "echo x"}]
        }]}}),
    );
    hooks
        .upsert(BrainHook::new("unknown", HookEvent::OnStop, "echo x"))
        .await
        .unwrap();
    let matching = hooks.get_all(&HookQuery::from(&key)).await.unwrap();
    assert_eq!(matching.len(), 1);
}

#[tokio::test]
async fn test_malformed_settings_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_path(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{\"hooks\": ").unwrap();

    let hooks = ClaudeCodeHooks::for_repo(dir.path());
    assert!(hooks.get_all(&HookQuery::default()).await.is_err());
    assert!(hooks
        .upsert(BrainHook::new(MECHANIC, HookEvent::OnBoot, "x"))
        .await
        .is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"hooks\": ");
}

#[tokio::test]
async fn test_registry_adapter_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let registry = BrainRegistry::with_defaults();
    let hooks = registry.lookup_hooks("anthropic/claude/code", dir.path()).unwrap();

    hooks
        .upsert(BrainHook::new(REVIEWER, HookEvent::OnStop, "echo done"))
        .await
        .unwrap();

    let one = hooks
        .get_one(&HookKey::new(REVIEWER, HookEvent::OnStop, "echo done"))
        .await
        .unwrap();
    assert!(one.is_some());
    assert!(registry.lookup_hooks("openai/codex", dir.path()).is_none());
}

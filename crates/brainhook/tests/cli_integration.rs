use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn brainhook(repo: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_brainhook"))
        .arg("--repo")
        .arg(repo)
        .args(args)
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_brainhook_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_brainhook"))
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_hooks_set_list_get_del() {
    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path();
    let key = [
        "--author",
        "repo=acme/role=mechanic",
        "--event",
        "onTool",
        "--command",
        "npx lint",
    ];

    let mut set = vec!["hooks", "set"];
    set.extend(key);
    set.extend(["--filter", "Write", "--timeout", "45s"]);
    assert!(brainhook(repo, &set).status.success());

    // Move the hook to a new matcher
    set.pop();
    set.pop();
    set.pop();
    set.pop();
    set.extend(["--filter", "Write|Edit"]);
    assert!(brainhook(repo, &set).status.success());

    let listed = stdout_json(&brainhook(repo, &["hooks", "list"]));
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["filter"]["what"], "Write|Edit");
    assert_eq!(listed[0]["timeout"], 30);

    let mut get = vec!["hooks", "get"];
    get.extend(key);
    assert_eq!(stdout_json(&brainhook(repo, &get))["command"], "npx lint");

    let mut del = vec!["hooks", "del"];
    del.extend(key);
    assert!(brainhook(repo, &del).status.success());
    assert!(brainhook(repo, &del).status.success());

    assert_eq!(stdout_json(&brainhook(repo, &get)), Value::Null);
}

#[test]
fn test_hooks_list_filters_by_event() {
    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path();
    for (event, command) in [("onBoot", "echo boot"), ("onStop", "echo done")] {
        let output = brainhook(
            repo,
            &["hooks", "set", "--author", "me", "--event", event, "--command", command],
        );
        assert!(output.status.success());
    }

    let stops = stdout_json(&brainhook(repo, &["hooks", "list", "--event", "onStop"]));
    assert_eq!(stops.as_array().unwrap().len(), 1);
    assert_eq!(stops[0]["command"], "echo done");
}

#[test]
fn test_unknown_brain_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = brainhook(dir.path(), &["--brain", "openai/codex", "hooks", "list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no brain adapter handles 'openai/codex'"));
}

use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# brainhook configuration

[brain]
# Which brain's hooks to manage: claude, claude-code, or anthropic/...
specifier = "claude-code"

[hooks]
# Settings file to manage; defaults to <repo>/.claude/settings.json
# settings_path = "~/.claude/settings.json"

[llm]
model = "claude/sonnet"
api_key_env = "ANTHROPIC_API_KEY"
max_tokens = 4096
temperature = 0.0
"#;

/// Initialize a new config file
pub fn run_init(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Config already exists at {:?}", path);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    println!("Created config at {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("brainhook.toml");

        run_init(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert!(run_init(&path).is_err());
    }
}

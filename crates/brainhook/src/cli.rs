use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brainhook")]
#[command(about = "Manage Claude brain hooks and run brain atoms", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Repository whose brain settings are managed
    #[arg(long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Brain specifier (overrides config), e.g. claude-code
    #[arg(long, global = true)]
    pub brain: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new config file
    Init {
        /// Path for new config file
        #[arg(default_value = "brainhook.toml")]
        path: PathBuf,
    },
    /// Inspect and edit brain hooks
    Hooks {
        #[command(subcommand)]
        action: HookCommands,
    },
    /// Ask a brain atom a single question
    Ask {
        /// Prompt text
        #[arg(long)]
        prompt: String,
        /// System prompt
        #[arg(long)]
        system: Option<String>,
        /// JSON Schema file the answer must satisfy
        #[arg(long)]
        schema: Option<PathBuf>,
        /// Model slug (overrides config), e.g. claude/haiku
        #[arg(long)]
        model: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum HookCommands {
    /// List hooks as JSON
    List {
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        event: Option<String>,
        #[arg(long)]
        command: Option<String>,
    },
    /// Print one hook as JSON (null when absent)
    Get(HookKeyArgs),
    /// Create or update a hook
    Set {
        #[command(flatten)]
        key: HookKeyArgs,
        /// Timeout, e.g. 30s, 1500ms, 2m
        #[arg(long, default_value = "30s")]
        timeout: String,
        /// Tool matcher, e.g. Bash or Write|Edit
        #[arg(long)]
        filter: Option<String>,
    },
    /// Delete a hook (no-op when absent)
    Del(HookKeyArgs),
}

#[derive(Args, Clone, Debug)]
pub struct HookKeyArgs {
    /// Declaring entity, e.g. repo=acme/role=mechanic
    #[arg(long)]
    pub author: String,
    /// onBoot, onTool or onStop
    #[arg(long)]
    pub event: String,
    /// Shell command the hook runs
    #[arg(long)]
    pub command: String,
}

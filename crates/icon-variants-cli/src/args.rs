use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "icon-variants")]
#[command(about = "Group Iconify icon collections into stylistic variants")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.icon-variants)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the variant groups of icon collections
    Classify {
        /// Iconify JSON files
        #[arg(required_unless_present = "names")]
        files: Vec<PathBuf>,

        /// Collection id selecting the rule table (default: the file's prefix)
        #[arg(short, long)]
        collection: Option<String>,

        /// Classify these icon names instead of files (e.g., "sun-outline,moon")
        #[arg(long, value_delimiter = ',', conflicts_with = "files", requires = "collection")]
        names: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect variant rules
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum RulesAction {
    /// List effective rules
    List {
        /// Show the rules used for this collection
        #[arg(short, long)]
        collection: Option<String>,
    },

    /// List collections with an explicit rule table
    Collections,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., variants.fallback.enabled)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., variants.fallback.enabled)
        key: String,

        /// Value to set (e.g., "false")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}

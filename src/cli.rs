use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::paths::ENV_APPLICATIONS_DIR;

#[derive(Parser)]
#[command(name = "zaap")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "macOS application cleanup utility", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// List applications only
    #[arg(short, long, conflicts_with = "delete")]
    pub list: bool,

    /// Delete a specific app by name
    #[arg(short, long, value_name = "NAME")]
    pub delete: Option<String>,

    /// Show what would be deleted without actually deleting
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip confirmation prompts (with --delete)
    #[arg(short, long)]
    pub yes: bool,

    /// Directory holding installed applications
    #[arg(long, value_name = "DIR", env = ENV_APPLICATIONS_DIR)]
    pub apps_dir: Option<PathBuf>,

    /// Print machine-readable JSON (with --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

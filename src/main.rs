mod cli;
mod commands;
mod config;
mod paths;
mod progress;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::Cli;
use leftovers::{ScanConfig, Scanner};
use std::io;
use std::path::PathBuf;

use config::Config;

/// Global context for the application
pub struct Context {
    pub quiet: bool,
    pub dry_run: bool,
    pub yes: bool,
    pub apps_dir: PathBuf,
    pub scan_config: ScanConfig,
}

impl Context {
    /// Scanner using the default identifier lookup chain
    pub fn scanner(&self) -> Scanner {
        Scanner::new(
            self.scan_config.clone(),
            Box::new(leftovers::backend::default_resolver()),
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "zaap", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let ctx = Context {
        quiet: cli.quiet,
        dry_run: cli.dry_run,
        yes: cli.yes,
        apps_dir: paths::applications_dir(cli.apps_dir, &config),
        scan_config: config.scan_config(cli.verbose > 0)?,
    };
    log::debug!("Applications directory: {}", ctx.apps_dir.display());

    if cli.list {
        return commands::list::run(&ctx, cli.json);
    }

    let summary = match cli.delete.as_deref() {
        Some(name) => commands::delete::run(&ctx, name)?,
        None => commands::interactive::run(&ctx)?,
    };

    if !summary.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

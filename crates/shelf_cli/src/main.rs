//! Shelf terminal entry point.
//!
//! # Responsibility
//! - Parse flags, start file logging, and run the catalog menu on stdio.
//! - Map session outcome to a process exit code.

mod menu;
mod render;

use clap::Parser;
use log::{error, info};
use menu::Menu;
use shelf_core::{core_version, default_log_level, init_logging, CatalogService, LoggingError};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "shelf", version, about = "In-memory library catalog with a text menu")]
struct Args {
    /// Log level; defaults to `debug` in debug builds and `info` otherwise.
    #[arg(long, value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, value_name = "ABS_PATH")]
    log_dir: Option<PathBuf>,

    /// Skip file logging entirely.
    #[arg(long, conflicts_with_all = ["log_level", "log_dir"])]
    no_log: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if !args.no_log {
        if let Err(err) = start_logging(&args) {
            eprintln!("shelf: file logging disabled: {err}");
        }
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(CatalogService::in_memory(), stdin.lock(), stdout.lock());

    match menu.run() {
        Ok(()) => {
            info!(
                "event=cli_exit module=cli status=ok size={}",
                menu.catalog().len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("shelf: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging(args: &Args) -> Result<(), LoggingError> {
    let level = args.log_level.as_deref().unwrap_or(default_log_level());
    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    init_logging(level, &log_dir.to_string_lossy())
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("shelf").join("logs")
}

#[cfg(test)]
mod tests {
    use super::{default_log_dir, Args};
    use clap::Parser;

    #[test]
    fn default_log_dir_is_absolute() {
        assert!(default_log_dir().is_absolute());
    }

    #[test]
    fn args_accept_known_levels_and_reject_others() {
        let args = Args::try_parse_from(["shelf", "--log-level", "warn"]).unwrap();
        assert_eq!(args.log_level.as_deref(), Some("warn"));
        assert!(!args.no_log);

        assert!(Args::try_parse_from(["shelf", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn no_log_conflicts_with_log_options() {
        assert!(Args::try_parse_from(["shelf", "--no-log"]).unwrap().no_log);
        assert!(Args::try_parse_from(["shelf", "--no-log", "--log-dir", "/tmp/x"]).is_err());
    }
}

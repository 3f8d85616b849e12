//! Binary entrypoint for the winlay window-layout tool.

use std::{path::PathBuf, process};

use clap::Parser;
use logging as logshared;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*};
use win_winops::RealWinOps;
use winlay_engine::{CaptureFilter, MatchMode, capture_and_save, load_and_restore};

/// Default snapshot file, relative to the working directory.
const DEFAULT_SNAPSHOT_FILE: &str = "InfoWindows.json";

#[derive(Parser, Debug)]
#[command(
    name = "winlay",
    about = "Capture and restore the layout of top-level windows",
    version
)]
/// Command-line interface for the `winlay` binary.
struct Cli {
    /// Operation selector: -save/-s captures the current layout,
    /// -restore/-r re-applies the saved one; anything else is a no-op.
    #[arg(value_name = "MODE", allow_hyphen_values = true)]
    mode: Option<String>,

    /// Snapshot file path
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Additional window title to ignore during capture (exact match; repeatable)
    #[arg(long, value_name = "TITLE")]
    ignore: Vec<String>,

    /// Match windows by title alone instead of title+class+process
    #[arg(long)]
    match_title_only: bool,

    /// Logging controls
    #[command(flatten)]
    log: logshared::LogArgs,
}

/// The two operations the tool performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Capture the current layout and persist it.
    Save,
    /// Load the persisted layout and re-apply it.
    Restore,
}

/// Map the raw positional argument to an operation, case-insensitively.
/// Unrecognized values select nothing: the tool exits cleanly without
/// acting.
fn parse_mode(raw: &str) -> Option<Mode> {
    match raw.to_ascii_lowercase().as_str() {
        "-save" | "-s" => Some(Mode::Save),
        "-restore" | "-r" => Some(Mode::Restore),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();

    let spec = logshared::compute_spec(
        cli.log.trace,
        cli.log.debug,
        cli.log.log_level.as_deref(),
        cli.log.log_filter.as_deref(),
    );
    tracing_subscriber::registry()
        .with(logshared::env_filter_from_spec(&spec))
        .with(fmt::layer().without_time())
        .try_init()
        .ok();

    let Some(mode) = cli.mode.as_deref().and_then(parse_mode) else {
        debug!("no operation selected");
        return;
    };
    let path = cli
        .file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_FILE));

    let ops = RealWinOps;
    let result = match mode {
        Mode::Save => {
            let filter = CaptureFilter::default().with_extra_titles(cli.ignore);
            capture_and_save(&ops, &filter, &path)
        }
        Mode::Restore => {
            let match_mode = if cli.match_title_only {
                MatchMode::TitleOnly
            } else {
                MatchMode::Strict
            };
            load_and_restore(&ops, match_mode, &path)
        }
    };
    match result {
        Ok(count) => debug!(count, file = %path.display(), "done"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selectors_are_case_insensitive() {
        assert_eq!(parse_mode("-save"), Some(Mode::Save));
        assert_eq!(parse_mode("-s"), Some(Mode::Save));
        assert_eq!(parse_mode("-restore"), Some(Mode::Restore));
        assert_eq!(parse_mode("-R"), Some(Mode::Restore));
        assert_eq!(parse_mode("-SAVE"), Some(Mode::Save));
    }

    #[test]
    fn unknown_modes_select_nothing() {
        assert_eq!(parse_mode("save"), None);
        assert_eq!(parse_mode("-x"), None);
        assert_eq!(parse_mode(""), None);
    }

    #[test]
    fn cli_accepts_hyphenated_mode_and_options() {
        let cli = Cli::try_parse_from([
            "winlay",
            "-save",
            "--file",
            "custom.json",
            "--ignore",
            "Scratch",
            "--ignore",
            "Overlay",
        ])
        .unwrap();
        assert_eq!(cli.mode.as_deref(), Some("-save"));
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("custom.json")));
        assert_eq!(cli.ignore, vec!["Scratch", "Overlay"]);
        assert!(!cli.match_title_only);
    }

    #[test]
    fn cli_without_arguments_selects_no_mode() {
        let cli = Cli::try_parse_from(["winlay"]).unwrap();
        assert_eq!(cli.mode, None);
    }
}

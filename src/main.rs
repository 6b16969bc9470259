//! Application entry point: replays recognitions from stdin.
//!
//! # Startup sequence
//!
//! 1. Parse command-line flags ([`Cli`]).
//! 2. Load [`AppConfig`] (default on first run, or from `--config <path>`).
//! 3. Initialise logging at the configured level (`RUST_LOG` wins).
//! 4. [`initialize`] the grammar.
//! 5. Replay each stdin line (see [`multi_edit::replay`]) through the
//!    chosen executor until EOF.
//! 6. [`shutdown`] the grammar.
//!
//! # Usage
//!
//! ```bash
//! # Replay recognitions as a VIM window would receive them
//! echo 'file top; say camel get value' | multi-edit --window "notes.txt - GVIM"
//!
//! # Print resolved steps as JSON
//! echo 'deaf; say snakeword parse args; circle' | multi-edit --json
//!
//! # Show the loaded command table
//! multi-edit --list
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use multi_edit::{
    config::AppConfig,
    context::EditorContext,
    execute::{ActionExecutor, LogExecutor, RecordingExecutor},
    grammar::{initialize, shutdown, GrammarHandle},
    replay::{parse_line, Replay},
};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "multi-edit")]
#[command(version)]
#[command(about = "Replay voice-command recognitions as keystrokes and typed text")]
#[command(long_about = None)]
struct Cli {
    /// Foreground window title used to pick the normal or VIM templates
    #[arg(long, env = "MULTI_EDIT_WINDOW")]
    window: Option<String>,

    /// Force the VIM templates regardless of the window title
    #[arg(long)]
    vim: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print each line's steps as JSON instead of logging them
    #[arg(long)]
    json: bool,

    /// Print the command table and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn context(&self, handle: &GrammarHandle) -> EditorContext {
        if self.vim {
            EditorContext::Vim
        } else {
            self.window
                .as_deref()
                .map(|title| handle.context_for(title))
                .unwrap_or_default()
        }
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

fn print_table(handle: &GrammarHandle) {
    for entry in handle.commands().iter() {
        let count = if entry.takes_count { " [<n>]" } else { "" };
        if entry.has_vim_override() {
            println!("{}{count}\t{}\tvim: {}", entry.phrase, entry.normal, entry.vim);
        } else {
            println!("{}{count}\t{}", entry.phrase, entry.normal);
        }
    }
}

/// Replay one line into `executor`.
fn replay_line(
    handle: &GrammarHandle,
    line: &str,
    context: EditorContext,
    executor: &mut dyn ActionExecutor,
) -> Result<bool> {
    match parse_line(line)? {
        None => Ok(false),
        Some(Replay::Literal(words)) => {
            handle.dispatch_literal(words.as_slice(), executor)?;
            Ok(true)
        }
        Some(Replay::Recognition(rec)) => {
            handle.dispatch(&rec, context, executor)?;
            Ok(true)
        }
    }
}

fn run(handle: &GrammarHandle, cli: &Cli) -> Result<()> {
    let context = cli.context(handle);
    log::info!("Replaying stdin in {context:?} context");

    let mut log_exec = LogExecutor::new();
    for (lineno, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;

        if cli.json {
            let mut recorder = RecordingExecutor::new();
            match replay_line(handle, &line, context, &mut recorder) {
                Ok(true) => println!("{}", recorder.to_json()?),
                Ok(false) => {}
                Err(e) => log::warn!("line {}: {e:#}", lineno + 1),
            }
        } else if let Err(e) = replay_line(handle, &line, context, &mut log_exec) {
            log::warn!("line {}: {e:#}", lineno + 1);
        }
    }

    if !cli.json {
        log::info!("{} steps executed", log_exec.executed());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration is read before logging so its level can seed the filter.
    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();
    log::info!("multi-edit starting up");
    if let Some(e) = load_error {
        log::warn!("Failed to load config ({e:#}); using defaults");
    }

    let handle = initialize(&config).context("failed to load grammar")?;

    let result = if cli.list {
        print_table(&handle);
        Ok(())
    } else {
        run(&handle, &cli)
    };

    shutdown(handle);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "multi-edit",
            "--window",
            "main.rs - GVIM",
            "--config",
            "/tmp/settings.toml",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.window.as_deref(), Some("main.rs - GVIM"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/settings.toml")));
        assert!(cli.json);
        assert!(!cli.vim && !cli.list);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["multi-edit", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["multi-edit", "--window"]).is_err());
    }

    #[test]
    fn context_from_flags() {
        let handle = initialize(&AppConfig::default()).unwrap();

        let cli = Cli::try_parse_from(["multi-edit", "--vim"]).unwrap();
        assert_eq!(cli.context(&handle), EditorContext::Vim);

        let cli = Cli::try_parse_from(["multi-edit", "--window", "notes - GVIM"]).unwrap();
        assert_eq!(cli.context(&handle), EditorContext::Vim);

        let cli = Cli::try_parse_from(["multi-edit", "--window", "Visual Studio Code"]).unwrap();
        assert_eq!(cli.context(&handle), EditorContext::Normal);
    }
}

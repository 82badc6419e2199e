//! Kivaw CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`kivaw_engine`] (wizard state) and [`kivaw_tui`] (rendering),
//! providing RAII-based terminal management with guaranteed cleanup. The
//! `lookup` and `table` subcommands print straight from the recommendation
//! table and never touch the terminal mode.
//!
//! ```text
//! main() -> Cli::parse() -> lookup | table -> output::write_*
//!                        \-> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! Fixed 8ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`kivaw_tui::InputPump`])
//! 3. Advance animations (`app.tick()`)
//! 4. Render frame

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kivaw_config::{KivawConfig, kivaw_dir, ui_options_from_env};
use kivaw_engine::{App, Focus, State, UiOptions};
use kivaw_tui::{InputPump, draw, handle_events};

#[derive(Debug, Parser)]
#[command(
    name = "kivaw",
    version,
    about = "Find what fits your mood.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// ASCII glyphs and labels instead of Unicode and emoji
    #[arg(long)]
    ascii: bool,

    /// High-contrast 16-colour palette
    #[arg(long)]
    high_contrast: bool,

    /// Disable the screen fade-in
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the recommendation for one state and focus
    Lookup {
        /// minimizer, destructivist, expansivist or blank
        state: State,
        /// music, logic, art, faith, movement or beauty
        focus: Focus,
        #[arg(long)]
        json: bool,
    },
    /// Print every recommendation
    Table {
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Only the wizard draws the terminal and writes the log file.
    fn is_interactive(&self) -> bool {
        self.command.is_none()
    }

    fn flag_options(&self) -> UiOptions {
        UiOptions {
            ascii_only: self.ascii,
            high_contrast: self.high_contrast,
            reduced_motion: self.reduced_motion,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_kivaw_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: drop logs rather than draw over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_kivaw_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in kivaw_log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn kivaw_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.kivaw/logs/kivaw.log
    if let Some(dir) = kivaw_dir() {
        candidates.push(dir.join("logs").join("kivaw.log"));
    }

    // Fallback: ./.kivaw/logs/kivaw.log
    candidates.push(PathBuf::from(".kivaw").join("logs").join("kivaw.log"));

    candidates
}

/// Flags, config file and environment combined; a flag set anywhere wins.
fn resolve_ui_options(flags: UiOptions) -> UiOptions {
    let from_config = match KivawConfig::load() {
        Ok(Some(config)) => config.ui_options(),
        Ok(None) => UiOptions::default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            UiOptions::default()
        }
    };
    flags.merge(from_config).merge(ui_options_from_env())
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are entered in [`TerminalSession::new`]
/// and restored on drop, so the shell is usable again after early returns
/// and errors.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err).context("create terminal");
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.is_interactive() {
        init_tracing();
    }

    match cli.command {
        Some(Command::Lookup { state, focus, json }) => {
            output::write_lookup(&mut stdout().lock(), state, focus, json)
        }
        Some(Command::Table { json }) => output::write_table(&mut stdout().lock(), json),
        None => {
            let ui_options = resolve_ui_options(cli.flag_options());
            tracing::info!(?ui_options, "Starting wizard");
            let mut app = App::new(ui_options);

            let result = {
                let mut session = TerminalSession::new()?;
                run_app(&mut session.terminal, &mut app).await
            };
            if let Err(err) = &result {
                tracing::error!("{err:?}");
            }
            result
        }
    }
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        match handle_events(app, &mut input) {
            Ok(true) => break Ok(()),
            Ok(false) => {}
            Err(e) => break Err(e),
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use kivaw_engine::{Focus, State};

    use super::{Cli, Command, kivaw_log_file_candidates};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_runs_the_wizard() {
        let cli = Cli::try_parse_from(["kivaw", "--ascii"]).unwrap();
        assert!(cli.command.is_none());
        let flags = cli.flag_options();
        assert!(flags.ascii_only);
        assert!(!flags.high_contrast);
        assert!(!flags.reduced_motion);
    }

    #[test]
    fn lookup_parses_names_case_insensitively() {
        let cli = Cli::try_parse_from(["kivaw", "lookup", "Minimizer", "LOGIC", "--json"]).unwrap();
        match cli.command {
            Some(Command::Lookup { state, focus, json }) => {
                assert_eq!(state, State::Minimizer);
                assert_eq!(focus, Focus::Logic);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        assert!(Cli::try_parse_from(["kivaw", "lookup", "sleepy", "music"]).is_err());
        assert!(Cli::try_parse_from(["kivaw", "lookup", "blank", "cooking"]).is_err());
    }

    #[test]
    fn display_flags_only_apply_to_the_wizard() {
        assert!(Cli::try_parse_from(["kivaw", "table", "--reduced-motion"]).is_err());
        assert!(Cli::try_parse_from(["kivaw", "--ascii", "table"]).is_err());
        assert!(Cli::try_parse_from(["kivaw", "lookup", "blank", "art", "--high-contrast"]).is_err());

        let cli = Cli::try_parse_from(["kivaw", "--reduced-motion", "--high-contrast"]).unwrap();
        assert!(cli.flag_options().reduced_motion);
        assert!(cli.flag_options().high_contrast);
    }

    #[test]
    fn subcommands_skip_the_log_file() {
        let table = Cli::try_parse_from(["kivaw", "table"]).unwrap();
        assert!(!table.is_interactive());
        let lookup = Cli::try_parse_from(["kivaw", "lookup", "blank", "art", "--json"]).unwrap();
        assert!(!lookup.is_interactive());
        let wizard = Cli::try_parse_from(["kivaw"]).unwrap();
        assert!(wizard.is_interactive());
    }

    #[test]
    fn log_file_falls_back_to_working_directory() {
        let candidates = kivaw_log_file_candidates();
        let last = candidates.last().unwrap();
        assert!(last.ends_with(".kivaw/logs/kivaw.log"));
    }
}

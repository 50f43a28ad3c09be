//! user-roster CLI
//!
//! Manage an in-memory user roster from the terminal: an interactive list
//! with add/edit/delete and a light/dark theme, plus a non-interactive
//! roster file checker.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use user_roster::report::{CheckReport, format_report};
use user_roster::seed::load_roster;
use user_roster::store::{Store, StoreOp};
use user_roster::tui;
use user_roster::types::{OutputFormat, Theme};

#[derive(Parser)]
#[command(name = "user-roster")]
#[command(about = "Manage a user roster from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive roster (add, edit, delete, theme toggle)
    Run {
        /// Starting color scheme
        #[arg(long, value_enum, default_value = "light")]
        theme: ThemeArg,

        /// JSON roster file to pre-populate the list
        #[arg(long)]
        load: Option<PathBuf>,
    },

    /// Validate a roster file and report per-record problems
    Check {
        /// JSON roster file to check
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { theme, load } => cmd_run(theme.into(), load),
        Commands::Check { file, format } => cmd_check(&file, format.into()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(theme: Theme, load: Option<PathBuf>) -> Result<ExitCode, String> {
    let mut store = Store::new(theme);

    if let Some(path) = load {
        let roster = load_roster(&path).map_err(|e| e.to_string())?;
        for record in roster {
            store.dispatch(StoreOp::AddUser(record));
        }
    }

    tui::run::run(&mut store).map_err(|e| e.to_string())?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(file: &Path, format: OutputFormat) -> Result<ExitCode, String> {
    let roster = load_roster(file).map_err(|e| e.to_string())?;
    let report = CheckReport::from_roster(&roster);

    print!("{}", format_report(&report, format));

    // Nonzero exit when any record fails, for scripting
    Ok(if report.all_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

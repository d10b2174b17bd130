//! UiSmith CLI - theme palette accessibility tooling
//!
//! Commands:
//! - `check`: report contrast issues for the saved theme (exit code 1 when any)
//! - `fix`: adjust failing colors and optionally save the result
//! - `generate`: seed a new dark theme, keeping locked fields
//! - `shadow`: print the CSS box-shadow for a shadow strength
//! - `presets`: list built-in themes
//! - `init`: write a default uismith.toml

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use uismith_theme::{ThemeField, ThemePreset};

use crate::config::OutputFormat;

/// Check, fix and generate accessible UiSmith themes
#[derive(Parser, Debug)]
#[command(name = "uismith")]
#[command(about = "Check, fix and generate accessible UiSmith themes")]
#[command(version)]
struct Cli {
    /// Directory containing uismith.toml, or the config file itself
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Where to read the working theme from.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ThemeSource {
    /// Theme JSON file (defaults to the configured path)
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Start from a built-in preset instead of the saved theme
    #[arg(long, conflicts_with = "theme")]
    pub preset: Option<ThemePreset>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report contrast issues
    Check {
        #[command(flatten)]
        source: ThemeSource,
    },

    /// Adjust failing colors until every check passes
    Fix {
        #[command(flatten)]
        source: ThemeSource,

        /// Save the fixed theme back to the theme file
        #[arg(long)]
        write: bool,

        /// Fail if a requirement cannot be met
        #[arg(long)]
        strict: bool,
    },

    /// Generate a new dark theme
    Generate {
        #[command(flatten)]
        source: ThemeSource,

        /// PRNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Keep this field from the current theme (repeatable)
        #[arg(long = "lock", value_name = "FIELD")]
        locks: Vec<ThemeField>,

        /// Save the generated theme to the theme file
        #[arg(long)]
        write: bool,
    },

    /// Print the CSS box-shadow for a shadow strength
    Shadow {
        /// Slider value, typically 0-40
        strength: f64,
    },

    /// List built-in presets
    Presets,

    /// Write a default uismith.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "uismith=info,uismith_theme=info",
        1 => "uismith=debug,uismith_theme=debug",
        _ => "uismith=trace,uismith_theme=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Command::Init { path, force } = &cli.command {
        commands::init(path, *force)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = config::UiSmithConfig::load_from_dir(&cli.config)?;

    match cli.command {
        Command::Check { source } => commands::check(&config, &source),
        Command::Fix {
            source,
            write,
            strict,
        } => commands::fix(&config, &source, write, strict),
        Command::Generate {
            source,
            seed,
            locks,
            write,
        } => commands::generate(&config, &source, seed, &locks, write),
        Command::Shadow { strength } => {
            commands::shadow(strength);
            Ok(ExitCode::SUCCESS)
        }
        Command::Presets => {
            commands::presets();
            Ok(ExitCode::SUCCESS)
        }
        Command::Init { .. } => Ok(ExitCode::SUCCESS),
    }
}

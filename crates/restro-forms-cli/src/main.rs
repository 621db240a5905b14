mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "restro-forms")]
#[command(version, about = "Validate restaurant site form submissions", long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON submission against one of the site forms
    Validate {
        /// Form name: registration, login or contact
        form: String,

        /// JSON file with field values (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Rule configuration (defaults to ./restro-forms.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Evaluate date rules as of this day (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<String>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the display text for a failure reason
    Message {
        /// Reason key, e.g. too-short or passwordMismatch
        reason: String,

        /// Template parameter as name=value (repeatable)
        #[arg(short, long = "param")]
        params: Vec<String>,
    },

    /// List the registered field patterns
    Patterns,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Validate {
            form,
            input,
            config,
            today,
            json,
        } => commands::validate::execute(
            &form,
            input.as_deref(),
            config.as_deref(),
            today.as_deref(),
            json,
        ),
        Commands::Message { reason, params } => {
            commands::message::execute(&reason, &params)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Patterns => {
            commands::patterns::execute();
            Ok(ExitCode::SUCCESS)
        }
    }
}

//! PROMETHEE Gamma command line.
//!
//! Replays recorded elicitation sessions and prints the resulting threshold
//! ranges. Logs go to stderr; results go to stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use promethee_gamma::application::{
    ReplayTranscriptCommand, ReplayTranscriptHandler, ReplayTranscriptResult, Transcript,
};
use promethee_gamma::config::{AppConfig, LogFormat, LoggingConfig};

#[derive(Debug, Parser)]
#[command(name = "promethee-gamma", version, about = "PROMETHEE Gamma threshold elicitation")]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(long, global = true, env = "PROMETHEE_GAMMA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a transcript and print the I, J and P ranges
    Replay {
        /// Transcript file (JSON)
        transcript: PathBuf,
    },
    /// Replay a transcript, then print I and J of every question at a candidate P
    Evaluate {
        /// Transcript file (JSON)
        transcript: PathBuf,
        /// Candidate value of the preference parameter
        #[arg(long)]
        p: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = run(cli, config) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, promethee_gamma::config::ConfigError> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_ansi(false).init(),
    }
}

fn run(cli: Cli, config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let handler = ReplayTranscriptHandler::new(config.elicitation);

    match cli.command {
        Command::Replay { transcript } => {
            let result = replay(&handler, &transcript)?;
            println!("{}", result.summary());
            for rejected in &result.rejected {
                println!(
                    "rejected #{} ({} vs {}): {}",
                    rejected.index, rejected.left, rejected.right, rejected.reason
                );
            }
        }
        Command::Evaluate { transcript, p } => {
            let result = replay(&handler, &transcript)?;
            if !result.tracker.accepts(p) {
                tracing::warn!(p, p_range = %result.tracker.p_range(), "Candidate P outside feasible range");
            }
            let values = result.tracker.thresholds_at(p)?;
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
    }

    Ok(())
}

fn replay(
    handler: &ReplayTranscriptHandler,
    path: &std::path::Path,
) -> Result<ReplayTranscriptResult, Box<dyn std::error::Error>> {
    tracing::info!(path = %path.display(), "Replaying transcript");
    let transcript = Transcript::from_path(path)?;
    Ok(handler.handle(ReplayTranscriptCommand { transcript })?)
}

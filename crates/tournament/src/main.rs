//! Tournament CLI
//!
//! Assign rounds to match logs and report on them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tournament::{generate_summary, MatchLog, OnInconsistency, RoundsConfig, RoundsRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", version, about = "Infer tournament rounds from match logs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assign rounds and write the annotated log
    Assign {
        /// JSON match log
        input: PathBuf,
        /// Where to write the annotated log (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// TOML config with corrections and round-robin events
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the rounds of an annotated log
    Report {
        /// Annotated JSON match log
        input: PathBuf,
    },
    /// Print one line per tournament with its inferred bracket
    Summary {
        /// JSON match log
        input: PathBuf,
        /// TOML config with corrections and round-robin events
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<RoundsConfig> {
    match path {
        Some(path) => RoundsConfig::load(path)
            .with_context(|| format!("Failed to load config: {:?}", path)),
        None => Ok(RoundsConfig::default()),
    }
}

fn load_log(path: &Path) -> Result<MatchLog> {
    MatchLog::load(path).with_context(|| format!("Failed to load match log: {:?}", path))
}

fn assign(input: &Path, output: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let runner = RoundsRunner::new(load_config(config)?);
    let mut log = load_log(input)?;
    info!(
        records = log.records.len(),
        policy = ?runner.config().on_inconsistency,
        "loaded match log"
    );

    let report = runner.run(&mut log.records)?;
    for err in &report.run.failed {
        eprintln!("Skipped: {}", err);
    }

    match output {
        Some(path) => {
            log.save(path)?;
            info!(path = %path.display(), "wrote annotated log");
        }
        None => println!("{}", log.to_json()?),
    }
    Ok(())
}

fn summary(input: &Path, config: Option<&Path>) -> Result<()> {
    let config = RoundsConfig {
        on_inconsistency: OnInconsistency::Skip,
        ..load_config(config)?
    };
    let mut log = load_log(input)?;
    let report = RoundsRunner::new(config).run(&mut log.records)?;
    print!("{}", generate_summary(&report.run.assigned, &report.run.failed));
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Assign {
            input,
            output,
            config,
        } => assign(&input, output.as_deref(), config.as_deref()),
        Command::Report { input } => {
            load_log(&input)?.print_report();
            Ok(())
        }
        Command::Summary { input, config } => summary(&input, config.as_deref()),
    }
}

//! Clipline CLI - step timelines headlessly
//!
//! Loads a timeline description from `clipline.toml`, advances it with a
//! fixed delta per tick, and prints what each section would show:
//! - status, run time and run count
//! - normalized progress
//! - the interpolated point, when the section has `from`/`to` set

mod config;
mod simulate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{ClipConfig, CONFIG_FILE};
use crate::simulate::SimulationOptions;

/// Step clip timelines and report section progress
#[derive(Parser, Debug)]
#[command(name = "clipline")]
#[command(about = "Step clip timelines and report section progress")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Advance a timeline until it completes and print every tick
    Simulate {
        /// Config file, or a directory containing clipline.toml
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Time added per tick (overrides timeline.delta)
        #[arg(short, long)]
        delta: Option<f64>,

        /// Maximum number of ticks (overrides timeline.max_ticks)
        #[arg(short, long)]
        max_ticks: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate a config file
    Check {
        /// Config file, or a directory containing clipline.toml
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a sample clipline.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    /// One JSON object per line
    Json,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Simulate {
            path,
            delta,
            max_ticks,
            format,
        } => cmd_simulate(&path, delta, max_ticks, format),
        Commands::Check { path } => cmd_check(&path),
        Commands::Init { path, force } => cmd_init(&path, force),
    }
}

fn cmd_simulate(
    path: &Path,
    delta: Option<f64>,
    max_ticks: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let config = ClipConfig::load(path)?;

    let mut options = SimulationOptions::from_config(&config);
    if let Some(delta) = delta {
        if !delta.is_finite() || delta <= 0.0 {
            anyhow::bail!("--delta must be a positive number, got {delta}");
        }
        options.delta = delta;
    }
    if let Some(max_ticks) = max_ticks {
        options.max_ticks = max_ticks;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = simulate::run(&config, options, |report| {
        match format {
            OutputFormat::Text => writeln!(out, "{report}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, report)?;
                writeln!(out)?;
            }
        }
        Ok(())
    })?;

    if !summary.completed {
        tracing::warn!(
            ticks = summary.ticks,
            "timeline did not complete within the tick limit"
        );
    }
    Ok(())
}

fn cmd_check(path: &Path) -> Result<()> {
    let config = ClipConfig::load(path)?;
    let params = config.params()?;

    println!(
        "{}: {} section(s), delta {}, max {} ticks",
        config.timeline.name,
        params.len(),
        config.timeline.delta,
        config.timeline.max_ticks
    );
    let sections = config.sections.iter().zip(params.sections());
    for (index, (section, section_params)) in sections.enumerate() {
        println!(
            "  {:<10} {:?} [{}, {}]",
            section.label(index),
            section_params.run_type(),
            section_params.start(),
            section_params.end()
        );
    }
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))?;

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, ClipConfig::sample().to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!("Created {}", config_path.display());
    Ok(())
}

//! Weighted sampler CLI built on the seqkit combinators.
//!
//! Reads a TOML table of weighted choices (`seqkit.toml` by default) and
//! draws from it with cumulative-distribution inversion.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seqkit::exit_codes;
use seqkit::io::config::{DEFAULT_CONFIG_FILE, SamplerConfig, load_config, write_config};
use seqkit::sampling::{DrawOverrides, DrawReport, draw_from_path, weight_summary};
use tracing::debug;

#[derive(Parser)]
#[command(name = "seqkit", version, about = "Weighted sampler over a TOML choice table")]
struct Cli {
    /// Path to the sampler config.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config if missing.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config and print a weight summary.
    Check,
    /// Draw weighted selections and print tallies.
    Draw {
        /// Override the configured number of draws.
        #[arg(short = 'n', long)]
        draws: Option<u32>,
        /// Override the configured seed.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    seqkit::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Check => cmd_check(&cli.config),
        Command::Draw { draws, seed, json } => {
            cmd_draw(&cli.config, &DrawOverrides { draws, seed }, json)
        }
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        debug!(path = %path.display(), "config exists, leaving it untouched");
        return Ok(exit_codes::OK);
    }
    write_config(path, &SamplerConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    Ok(exit_codes::OK)
}

fn cmd_check(path: &Path) -> Result<i32> {
    let cfg = load_config(path)?;
    let summary = weight_summary(&cfg);
    println!(
        "choices={} total_weight={} max_weight={}",
        summary.choices, summary.total, summary.max
    );
    Ok(exit_codes::OK)
}

fn cmd_draw(path: &Path, overrides: &DrawOverrides, json: bool) -> Result<i32> {
    let report = draw_from_path(path, overrides)?;
    if json {
        let mut payload = serde_json::to_string_pretty(&report).context("serialize report")?;
        payload.push('\n');
        print!("{}", payload);
    } else {
        print_report(&report);
    }
    if report.all_fallback() {
        return Ok(exit_codes::FALLBACK);
    }
    Ok(exit_codes::OK)
}

fn print_report(report: &DrawReport) {
    println!(
        "draw: draws={} fallbacks={} total_weight={}",
        report.draws, report.fallbacks, report.total_weight
    );
    for (value, count) in &report.tallies {
        println!("draw: {} {}", value, count);
    }
    if report.fallbacks > 0 {
        println!("draw: {} (fallback) {}", report.fallback, report.fallbacks);
    }
}

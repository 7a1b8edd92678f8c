//! stowfs command-line packer
//!
//! Embeds files and directory trees into Rust source readable through the
//! `stowfs` runtime. An output path ending in `.rs` produces one filesystem
//! static; any other output produces one source per file.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use stowfs_pack::{PackConfig, PackError, PackReport, Packer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use output::{resolve_color_choice, StyledOutput};

/// Exit code for an output that exists and `--force` was not given.
const EXIT_ALREADY_EXISTS: u8 = 3;

#[derive(Parser)]
#[command(name = "stowfs")]
#[command(about = "Embed files into Rust source as a read-only filesystem", long_about = None)]
#[command(version)]
struct Cli {
    /// Files or directories to embed
    inputs: Vec<PathBuf>,

    /// Additional input (repeatable)
    #[arg(short, long = "input", value_name = "PATH")]
    input: Vec<PathBuf>,

    /// Output file (`.rs`) or directory; empty writes beside each input
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Path of the runtime crate in generated sources
    #[arg(long, value_name = "PATH")]
    import: Option<String>,

    /// Static name, or name prefix for per-file output
    #[arg(long, value_name = "NAME")]
    var: Option<String>,

    /// Exclude paths matching this regex (repeatable; replaces the defaults)
    #[arg(short, long, value_name = "REGEX")]
    exclude: Vec<String>,

    /// Overwrite existing output files
    #[arg(short, long)]
    force: bool,

    /// Verbose diagnostics
    #[arg(short, long)]
    verbose: bool,

    /// Read options from a TOML file; flags override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_name = "WHEN", value_parser = ["auto", "always", "never"])]
    color: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let loaded = load_config(&cli);

    let verbose = cli.verbose || loaded.as_ref().is_ok_and(|c| c.verbose);
    init_tracing(verbose);

    let mut out = StyledOutput::new(resolve_color_choice(cli.color.as_deref()));
    match loaded.and_then(run) {
        Ok(report) => {
            out.success("Packed");
            out.line(&format!(
                " {} entries into {} file(s)",
                report.entries,
                report.written.len()
            ));
            out.flush();
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            if let Some(PackError::AlreadyExists(_)) = e.downcast_ref::<PackError>() {
                out.warning("hint:");
                out.line(" output file already exists, pass --force/-f to overwrite");
                out.flush();
                return ExitCode::from(EXIT_ALREADY_EXISTS);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter)
        .init();
}

/// The config file (if any) with command-line flags layered on top.
fn load_config(cli: &Cli) -> Result<PackConfig> {
    let mut config = match &cli.config {
        Some(path) => PackConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => PackConfig::default(),
    };

    let inputs: Vec<PathBuf> = cli.inputs.iter().chain(&cli.input).cloned().collect();
    if !inputs.is_empty() {
        config.inputs = inputs;
    }
    if let Some(out) = &cli.out {
        config.out = out.clone();
    }
    if let Some(import) = &cli.import {
        config.import = import.clone();
    }
    if let Some(var) = &cli.var {
        config.var = var.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude = cli.exclude.clone();
    }
    config.force |= cli.force;
    config.verbose |= cli.verbose;
    Ok(config)
}

fn run(config: PackConfig) -> Result<PackReport> {
    if config.inputs.is_empty() {
        bail!("no inputs given");
    }
    let packer = Packer::new(config)?;
    Ok(packer.run()?)
}

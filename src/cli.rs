//! CLI argument parsing for resumake.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resumake: interactive resume builder.
///
/// Walks you through a sequence of prompts, renders the answers into a
/// LaTeX document via a template, and optionally compiles it to PDF.
#[derive(Parser, Debug)]
#[command(name = "resumake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for resumake.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a resume interactively.
    ///
    /// Collects your details over stdin, renders them against the template,
    /// writes the .tex file to the output directory, and offers to compile
    /// it to PDF.
    Build(BuildArgs),

    /// Check the environment.
    ///
    /// Verifies that the template parses, reports the output directory
    /// state, and probes for the configured compiler.
    Check(CheckArgs),
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Path to the template file (overrides config).
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Directory the rendered document is written to (overrides config).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Compile the rendered document without asking.
    #[arg(long, conflicts_with = "no_compile")]
    pub compile: bool,

    /// Skip PDF compilation without asking.
    #[arg(long)]
    pub no_compile: bool,

    /// Path to the config file.
    #[arg(long, default_value = "resumake.yaml")]
    pub config: PathBuf,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the template file (overrides config).
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Directory the rendered document is written to (overrides config).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Path to the config file.
    #[arg(long, default_value = "resumake.yaml")]
    pub config: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

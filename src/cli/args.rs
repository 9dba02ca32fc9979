//! Command line argument parsing for the wordgrep CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// wordgrep - search a word list with regular expressions
#[derive(Parser, Debug, Clone)]
#[command(name = "wordgrep")]
#[command(about = "Search a word list with regular expressions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordgrepArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDGREP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordgrepArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the word list
    Search(SearchArgs),

    /// Show word list statistics
    Stats(StatsArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Pattern to search for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Word list file (overrides the configuration)
    #[arg(short, long, value_name = "WORD_FILE")]
    pub words: Option<PathBuf>,

    /// Split results around the first match
    #[arg(long)]
    pub highlight: bool,

    /// Match case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Pattern syntax
    #[arg(short = 's', long, default_value = "regex")]
    pub syntax: PatternSyntax,

    /// Enable parallel search processing
    #[arg(long)]
    pub parallel: bool,

    /// Only print the number of matches
    #[arg(long)]
    pub count: bool,
}

/// Arguments for word list statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list file (overrides the configuration)
    #[arg(short, long, value_name = "WORD_FILE")]
    pub words: Option<PathBuf>,
}

/// Pattern syntaxes available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSyntax {
    /// Regular expression
    Regex,
    /// Shell-style wildcard (`*`, `?`), matching whole words
    Wildcard,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

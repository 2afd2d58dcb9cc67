//! Command line argument parsing for Spellbound CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

/// Spellbound - edit-distance spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "spellbound")]
#[command(about = "Suggest corrections for misspelled words from a ranked dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellboundArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "tsv", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellboundArgs {
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
    /// Report typos found in text files (or standard input)
    Check(CheckArgs),

    /// Suggest corrections for the given words
    Correct(CorrectArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Corrector settings shared by the commands that correct words
#[derive(Args, Debug, Clone, Default)]
pub struct CorrectorArgs {
    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Correct on the calling thread only
    #[arg(long, conflicts_with = "threads")]
    pub sequential: bool,

    /// Maximum number of suggestions per word
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for checking text
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Tab-delimited word/rank dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Text files to check, read in order (standard input when omitted)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Give up on a word whose two-edit search exceeds this many milliseconds
    #[arg(long, value_name = "MILLIS")]
    pub timeout_ms: Option<u64>,

    #[command(flatten)]
    pub corrector: CorrectorArgs,
}

/// Arguments for correcting individual words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Tab-delimited word/rank dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub corrector: CorrectorArgs,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Tab-delimited word/rank dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `word<TAB>suggestion,suggestion` line per typo
    Tsv,
    /// JSON output
    Json,
}

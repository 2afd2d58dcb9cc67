//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, SpellboundArgs};
use crate::error::Result;
use crate::spelling::{Correction, DictionaryStats, TypoReport};

/// Result structure for a single corrected word.
#[derive(Debug, Clone, Serialize)]
pub struct WordCorrection {
    pub word: String,
    #[serde(flatten)]
    pub correction: Correction,
}

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl From<&SpellboundArgs> for OutputOptions {
    fn from(args: &SpellboundArgs) -> Self {
        OutputOptions {
            format: args.output_format,
            pretty: args.pretty,
        }
    }
}

/// Write typo reports, one `word<TAB>s1,s2,...` line each in TSV.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[TypoReport],
    options: OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Tsv => {
            for report in reports {
                write_tsv_line(out, &report.word, &report.suggestions)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, reports, options),
    }
}

/// Write per-word corrections.
///
/// TSV leaves out known words, which have no suggestion list; JSON keeps
/// them with their `known` outcome.
pub fn write_corrections<W: Write>(
    out: &mut W,
    corrections: &[WordCorrection],
    options: OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Tsv => {
            for entry in corrections {
                if let Some(suggestions) = entry.correction.suggestions() {
                    write_tsv_line(out, &entry.word, suggestions)?;
                }
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, corrections, options),
    }
}

/// Write dictionary statistics.
pub fn write_stats<W: Write>(
    out: &mut W,
    stats: &DictionaryStats,
    options: OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Tsv => {
            writeln!(out, "words\t{}", stats.words)?;
            writeln!(out, "best_rank\t{}", stats.best_rank)?;
            writeln!(out, "worst_rank\t{}", stats.worst_rank)?;
            writeln!(out, "longest_word\t{}", stats.longest_word)?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, stats, options),
    }
}

fn write_tsv_line<W: Write>(out: &mut W, word: &str, suggestions: &[String]) -> Result<()> {
    writeln!(out, "{word}\t{}", suggestions.join(","))?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    options: OutputOptions,
) -> Result<()> {
    if options.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

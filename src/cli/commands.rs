//! Command implementations for Spellbound CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SpellboundError};
use crate::spelling::*;

/// Execute a CLI command, writing results to standard output.
pub fn execute_command(args: SpellboundArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command, writing results to `out`.
pub fn execute_command_to<W: Write>(args: &SpellboundArgs, out: &mut W) -> Result<()> {
    let options = OutputOptions::from(args);
    match &args.command {
        Command::Check(check_args) => check_text(check_args, options, out),
        Command::Correct(correct_args) => correct_words(correct_args, options, out),
        Command::Stats(stats_args) => show_stats(stats_args, options, out),
    }
}

/// Report the typos found in the input files.
fn check_text<W: Write>(args: &CheckArgs, options: OutputOptions, out: &mut W) -> Result<()> {
    let corrector = build_corrector(&args.dictionary, &args.corrector)?;

    let lines = read_input_lines(&args.files)?;
    let words = extract_words(&lines);
    info!("Checking {} distinct words", words.len());

    let start_time = Instant::now();
    let timeout = args.timeout_ms.map(Duration::from_millis);
    let reports = find_typos(&corrector, &words, timeout)?;
    info!(
        "Found {} typos in {}ms",
        reports.len(),
        start_time.elapsed().as_millis()
    );

    write_reports(out, &reports, options)
}

/// Correct the words given on the command line.
fn correct_words<W: Write>(args: &CorrectArgs, options: OutputOptions, out: &mut W) -> Result<()> {
    let corrector = build_corrector(&args.dictionary, &args.corrector)?;

    let corrections = args
        .words
        .iter()
        .map(|word| {
            let correction = corrector.corrections(word)?;
            debug!("{word}: {correction:?}");
            Ok(WordCorrection {
                word: word.clone(),
                correction,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    write_corrections(out, &corrections, options)
}

/// Show dictionary statistics.
fn show_stats<W: Write>(args: &StatsArgs, options: OutputOptions, out: &mut W) -> Result<()> {
    let dictionary = Dictionary::load_from_rank_file(&args.dictionary)?;
    write_stats(out, &dictionary.stats(), options)
}

/// Build a corrector from a dictionary file and the corrector flags.
///
/// Flags override values read from the configuration file.
pub fn build_corrector(dictionary: &Path, args: &CorrectorArgs) -> Result<SpellingCorrector> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading corrector config from: {}", path.display());
            CorrectorConfig::load_from_file(path)?
        }
        None => CorrectorConfig::default(),
    };

    if args.sequential {
        config.parallel = false;
    }
    if let Some(threads) = args.threads {
        config.parallel = true;
        config.thread_pool_size = Some(threads);
    }
    if let Some(limit) = args.limit {
        config.max_suggestions = Some(limit);
    }

    let dictionary = Dictionary::load_from_rank_file(dictionary)?;
    SpellingCorrector::with_config(dictionary, config)
}

/// Read every line of the given files in order, or of standard input when
/// no file is given.
pub fn read_input_lines(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        debug!("Reading text from standard input");
        return read_lines(io::stdin().lock());
    }

    let mut lines = Vec::new();
    for path in files {
        debug!("Reading text from: {}", path.display());
        let file = File::open(path).map_err(|e| {
            SpellboundError::other(format!("unable to open {}: {e}", path.display()))
        })?;
        lines.extend(read_lines(BufReader::new(file))?);
    }
    Ok(lines)
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<io::Result<Vec<_>>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn run(argv: &[&str]) -> Result<String> {
        let args = SpellboundArgs::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        execute_command_to(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_build_corrector_flag_overrides() {
        let dir = TempDir::new().unwrap();
        let dictionary = write_file(&dir, "words.tsv", "spelling\t7302\n");
        let config = write_file(&dir, "config.json", r#"{"parallel": true, "max_suggestions": 9}"#);

        let args = CorrectorArgs {
            config: Some(config),
            sequential: true,
            limit: Some(2),
            ..Default::default()
        };
        let corrector = build_corrector(&dictionary, &args).unwrap();
        assert!(!corrector.config().parallel);
        assert_eq!(corrector.config().max_suggestions, Some(2));
    }

    #[test]
    fn test_read_input_lines_concatenates_files() {
        let dir = TempDir::new().unwrap();
        let first = write_file(&dir, "a.txt", "one two\n");
        let second = write_file(&dir, "b.txt", "three\nfour\n");

        let lines = read_input_lines(&[first, second]).unwrap();
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_check_and_correct_commands() {
        let dir = TempDir::new().unwrap();
        let dictionary = write_file(
            &dir,
            "words.tsv",
            "spelling\t7302\nspewing\t41780\nspiling\t1000000\nis\t10\n",
        );
        let text = write_file(&dir, "text.txt", "speling is speling\n");
        let dictionary = dictionary.to_str().unwrap();

        let output = run(&["spellbound", "check", dictionary, text.to_str().unwrap()]).unwrap();
        assert_eq!(output, "speling\tspelling,spewing,spiling\n");

        let output = run(&["spellbound", "correct", dictionary, "is", "speling", "--limit", "1"])
            .unwrap();
        assert_eq!(output, "speling\tspelling\n");

        let err = run(&["spellbound", "correct", dictionary, "!@#$"]).unwrap_err();
        assert!(err.is_invalid_input());

        let output = run(&["spellbound", "stats", dictionary]).unwrap();
        assert!(output.starts_with("words\t4\n"));
    }

    #[test]
    fn test_check_timeout_skips_two_edit_words() {
        let dir = TempDir::new().unwrap();
        let dictionary = write_file(
            &dir,
            "words.tsv",
            "spelling\t7302\nspewing\t41780\nspiling\t1000000\nricksha\t50000\n",
        );
        let text = write_file(&dir, "text.txt", "speling rcksa\n");
        let dictionary = dictionary.to_str().unwrap();
        let text = text.to_str().unwrap();

        let output = run(&["spellbound", "check", dictionary, text]).unwrap();
        assert_eq!(output, "speling\tspelling,spewing,spiling\nrcksa\tricksha\n");

        let output = run(&["spellbound", "check", dictionary, text, "--timeout-ms", "0"]).unwrap();
        assert_eq!(output, "speling\tspelling,spewing,spiling\n");
    }
}

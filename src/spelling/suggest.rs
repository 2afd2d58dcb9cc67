//! Typo extraction from free text.
//!
//! This is the glue between arbitrary input lines and the corrector: lines
//! are cut into whitespace-delimited words, non-alphabetic tokens dropped,
//! duplicates removed, and each remaining word corrected in turn.

use std::time::Duration;

use ahash::AHashSet;
use log::{debug, warn};
use serde::Serialize;

use crate::error::{Result, SpellboundError};
use crate::spelling::cancel::CancellationToken;
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::normalize::is_alphabetic;

/// A word missing from the dictionary together with its ranked suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypoReport {
    /// The word as it appeared in the input.
    pub word: String,
    /// Suggested corrections, most frequent first. Empty when nothing is in
    /// reach.
    pub suggestions: Vec<String>,
}

/// Extract the distinct alphabetic words of some lines, in order of first
/// appearance.
pub fn extract_words<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = AHashSet::new();
    let mut words = Vec::new();

    for line in lines {
        for word in line.as_ref().split_whitespace() {
            if is_alphabetic(word) && seen.insert(word.to_string()) {
                words.push(word.to_string());
            }
        }
    }

    words
}

/// Correct every word, keeping only those the dictionary does not know.
///
/// With a `search_timeout`, each word's search gets its own deadline; a word
/// whose search runs out of time is reported in the log and left out.
pub fn find_typos(
    corrector: &SpellingCorrector,
    words: &[String],
    search_timeout: Option<Duration>,
) -> Result<Vec<TypoReport>> {
    let mut reports = Vec::new();

    for word in words {
        let cancel = match search_timeout {
            Some(timeout) => CancellationToken::with_timeout(timeout),
            None => CancellationToken::new(),
        };

        match corrector.corrections_with_cancel(word, &cancel) {
            Ok(correction) => {
                if let Some(suggestions) = correction.into_suggestions() {
                    debug!("{word}: {} suggestions", suggestions.len());
                    reports.push(TypoReport {
                        word: word.clone(),
                        suggestions,
                    });
                }
            }
            Err(SpellboundError::OperationCancelled(reason)) => {
                warn!("Skipping {word:?}: {reason}");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::corrector::CorrectorConfig;
    use crate::spelling::dictionary::Dictionary;

    fn corrector() -> SpellingCorrector {
        let dictionary = Dictionary::from_entries([
            ("spelling", 7302),
            ("spewing", 41780),
            ("spiling", 1000000),
            ("is", 10),
            ("hard", 800),
        ])
        .unwrap();
        SpellingCorrector::with_config(dictionary, CorrectorConfig::sequential()).unwrap()
    }

    #[test]
    fn test_extract_words() {
        let lines = ["Speling is  hard,\tspeling is", "r2d2 is 42 hard", ""];
        assert_eq!(extract_words(lines), vec!["Speling", "is", "speling", "hard"]);
    }

    #[test]
    fn test_find_typos_suppresses_known_words() {
        let words = extract_words(["speling is hard xwphjwl"]);
        let reports = find_typos(&corrector(), &words, None).unwrap();

        assert_eq!(
            reports,
            vec![
                TypoReport {
                    word: "speling".to_string(),
                    suggestions: vec![
                        "spelling".to_string(),
                        "spewing".to_string(),
                        "spiling".to_string()
                    ],
                },
                TypoReport {
                    word: "xwphjwl".to_string(),
                    suggestions: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_find_typos_skips_timed_out_words() {
        let words = vec!["xwphjwl".to_string(), "speling".to_string()];
        let reports = find_typos(&corrector(), &words, Some(Duration::ZERO)).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].word, "speling");
    }

    #[test]
    fn test_find_typos_propagates_invalid_input() {
        let words = vec!["non-alpha".to_string()];
        let err = find_typos(&corrector(), &words, None).unwrap_err();
        assert!(err.is_invalid_input());
    }
}

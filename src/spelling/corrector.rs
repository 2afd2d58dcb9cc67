//! Spelling corrector: dictionary lookup, then one-edit, then two-edit search.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellboundError};
use crate::spelling::cancel::CancellationToken;
use crate::spelling::dictionary::Dictionary;
use crate::spelling::edits;
use crate::spelling::known::known;
use crate::spelling::normalize::normalize;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Run candidate generation on a dedicated thread pool.
    pub parallel: bool,
    /// Number of worker threads (defaults to the number of CPUs).
    pub thread_pool_size: Option<usize>,
    /// Maximum number of suggestions to return (unbounded when unset).
    pub max_suggestions: Option<usize>,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            parallel: true,
            thread_pool_size: None,
            max_suggestions: None,
        }
    }
}

impl CorrectorConfig {
    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        CorrectorConfig {
            parallel: false,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SpellboundError::configuration(format!(
                "unable to open config {}: {e}",
                path.display()
            ))
        })?;
        let config: CorrectorConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the corrector cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.thread_pool_size == Some(0) {
            return Err(SpellboundError::configuration(
                "thread_pool_size must be at least 1",
            ));
        }
        if self.max_suggestions == Some(0) {
            return Err(SpellboundError::configuration(
                "max_suggestions must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Outcome of correcting one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "suggestions", rename_all = "snake_case")]
pub enum Correction {
    /// The word is in the dictionary; no suggestions apply.
    Known,
    /// Dictionary words within two edits, most frequent first. Never empty.
    Suggestions(Vec<String>),
    /// The word is a typo but no dictionary word lies within two edits.
    NoSuggestions,
}

impl Correction {
    /// Check if the word was found in the dictionary.
    pub fn is_known(&self) -> bool {
        matches!(self, Correction::Known)
    }

    /// Ranked suggestions, or `None` when the word needs no correction.
    ///
    /// A typo with nothing in reach yields `Some(&[])`.
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Correction::Known => None,
            Correction::Suggestions(words) => Some(words.as_slice()),
            Correction::NoSuggestions => Some(&[][..]),
        }
    }

    /// Owned variant of [`Correction::suggestions`].
    pub fn into_suggestions(self) -> Option<Vec<String>> {
        match self {
            Correction::Known => None,
            Correction::Suggestions(words) => Some(words),
            Correction::NoSuggestions => Some(Vec::new()),
        }
    }

    fn from_ranked(words: Vec<String>) -> Self {
        if words.is_empty() {
            Correction::NoSuggestions
        } else {
            Correction::Suggestions(words)
        }
    }
}

/// Edit-distance spelling corrector over an immutable ranked dictionary.
///
/// Correcting a word runs through:
///
/// 1. normalization (trim, lowercase, alphabetic check);
/// 2. dictionary lookup, answering [`Correction::Known`] on a hit;
/// 3. every dictionary word one edit away;
/// 4. only if step 3 found nothing, every dictionary word two edits away.
///
/// The two-edit pass re-expands the whole one-edit candidate set, not just
/// its dictionary words, so it reaches every word within distance two.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    dictionary: Arc<Dictionary>,
    config: CorrectorConfig,
    thread_pool: Option<Arc<ThreadPool>>,
}

impl SpellingCorrector {
    /// Create a corrector with the default configuration.
    pub fn new(dictionary: Dictionary) -> Result<Self> {
        Self::with_config(dictionary, CorrectorConfig::default())
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(dictionary: Dictionary, config: CorrectorConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.parallel {
            let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
            let pool = ThreadPoolBuilder::new()
                .num_threads(thread_pool_size)
                .thread_name(|i| format!("spellbound-{i}"))
                .build()
                .map_err(|e| {
                    SpellboundError::internal(format!("Failed to create thread pool: {e}"))
                })?;
            Some(Arc::new(pool))
        } else {
            None
        };

        Ok(SpellingCorrector {
            dictionary: Arc::new(dictionary),
            config,
            thread_pool,
        })
    }

    /// Create a corrector straight from a word-to-rank map.
    pub fn from_ranks(ranks: HashMap<String, u32>) -> Result<Self> {
        Self::new(Dictionary::new(ranks)?)
    }

    /// The dictionary suggestions are drawn from.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The active configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Check if a word is correctly spelled.
    pub fn is_correct(&self, word: &str) -> Result<bool> {
        Ok(self.dictionary.contains(&normalize(word)?))
    }

    /// Correct a word.
    ///
    /// Fails with [`SpellboundError::InvalidInput`] if the word is not
    /// alphabetic once trimmed.
    pub fn corrections(&self, word: &str) -> Result<Correction> {
        self.corrections_with_cancel(word, &CancellationToken::new())
    }

    /// Correct a word, abandoning the two-edit pass once `cancel` fires.
    pub fn corrections_with_cancel(
        &self,
        word: &str,
        cancel: &CancellationToken,
    ) -> Result<Correction> {
        let word = normalize(word)?;
        if self.dictionary.contains(&word) {
            return Ok(Correction::Known);
        }

        self.run(|| -> Result<Correction> {
            let candidates = self.one_edit_candidates(&word);
            let mut suggestions = known(&self.dictionary, &candidates);
            if suggestions.is_empty() {
                suggestions = self.search_two_edits(&word, candidates, cancel)?;
            }
            Ok(Correction::from_ranked(self.truncate(suggestions)))
        })
    }

    /// Ranked dictionary words exactly one edit away from `typo`.
    pub fn known_edits1(&self, typo: &str) -> Result<Vec<String>> {
        let typo = normalize(typo)?;
        Ok(self.run(|| self.search_one_edit(&typo)))
    }

    /// Ranked dictionary words at most two edits away from `typo`.
    pub fn known_edits2(&self, typo: &str, cancel: &CancellationToken) -> Result<Vec<String>> {
        let typo = normalize(typo)?;
        self.run(|| self.search_two_edits(&typo, self.one_edit_candidates(&typo), cancel))
    }

    fn run<T, F>(&self, op: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        match &self.thread_pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    fn one_edit_candidates(&self, word: &str) -> Vec<String> {
        if self.config.parallel {
            edits::par_edits1(word)
        } else {
            edits::edits1(word)
        }
    }

    fn search_one_edit(&self, word: &str) -> Vec<String> {
        known(&self.dictionary, self.one_edit_candidates(word))
    }

    /// Expand every raw one-edit candidate of `word` by one more edit.
    fn search_two_edits(
        &self,
        word: &str,
        one_edit: Vec<String>,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        // Repeated sources only re-yield words already reached; drop them.
        let mut seen = AHashSet::new();
        let sources: Vec<String> = one_edit
            .into_iter()
            .filter(|candidate| seen.insert(candidate.clone()))
            .collect();

        let dictionary = self.dictionary.as_ref();
        let expand = |source: &String| -> Result<Vec<String>> {
            if cancel.is_cancelled() {
                return Err(SpellboundError::cancelled(format!(
                    "two-edit search for {word:?}"
                )));
            }
            Ok(edits::edits1(source)
                .into_iter()
                .filter(|candidate| dictionary.contains(candidate))
                .collect())
        };

        // Both branches keep source order, so ties rank identically.
        let reached: Vec<Vec<String>> = if self.config.parallel {
            sources.par_iter().map(expand).collect::<Result<_>>()?
        } else {
            sources.iter().map(expand).collect::<Result<_>>()?
        };

        Ok(known(dictionary, reached.into_iter().flatten()))
    }

    fn truncate(&self, mut suggestions: Vec<String>) -> Vec<String> {
        if let Some(max) = self.config.max_suggestions {
            suggestions.truncate(max);
        }
        suggestions
    }
}

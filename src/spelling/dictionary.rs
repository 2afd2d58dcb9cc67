//! Ranked dictionary backing the spelling corrector.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::{debug, info};
use serde::Serialize;

use crate::error::{Result, SpellboundError};
use crate::spelling::normalize::{is_alphabetic, is_normalized};

/// An immutable mapping from normalized word to rank.
///
/// The lower the rank, the more commonly used the word: `the` would have
/// rank `1` while `triose` would sit somewhere past `100000`. A dictionary is
/// never empty, every key is lowercase ASCII alphabetic and every rank is
/// positive.
#[derive(Debug, Clone)]
pub struct Dictionary {
    ranks: AHashMap<String, u32>,
}

impl Dictionary {
    /// Create a dictionary from a word-to-rank map.
    ///
    /// Fails with a configuration error if the map is empty, if a word is not
    /// lowercase alphabetic or if a rank is zero.
    pub fn new(ranks: HashMap<String, u32>) -> Result<Self> {
        if ranks.is_empty() {
            return Err(SpellboundError::configuration("dictionary is empty"));
        }
        let mut validated = AHashMap::with_capacity(ranks.len());
        for (word, rank) in ranks {
            Self::validate_entry(&word, rank)?;
            validated.insert(word, rank);
        }
        Ok(Dictionary { ranks: validated })
    }

    /// Create a dictionary from `(word, rank)` pairs.
    ///
    /// A word listed more than once keeps its lowest rank.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut ranks: AHashMap<String, u32> = AHashMap::new();
        for (word, rank) in entries {
            let word = word.into();
            Self::validate_entry(&word, rank)?;
            ranks
                .entry(word)
                .and_modify(|existing| *existing = (*existing).min(rank))
                .or_insert(rank);
        }
        if ranks.is_empty() {
            return Err(SpellboundError::configuration("dictionary is empty"));
        }
        Ok(Dictionary { ranks })
    }

    /// Parse tab-delimited `word<TAB>rank` records.
    ///
    /// Words are trimmed and lowercased. Records with a non-alphabetic word or
    /// a rank below one are skipped; blank lines are ignored. A record without
    /// a tab or with a rank that is not an integer is an error.
    pub fn from_rank_lines<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let (word, rank) = line.split_once('\t').ok_or_else(|| {
                SpellboundError::dictionary(format!(
                    "line {line_number}: expected word<TAB>rank, got {line:?}"
                ))
            })?;
            let rank: i64 = rank.trim().parse().map_err(|e| {
                SpellboundError::dictionary(format!(
                    "line {line_number}: invalid rank {rank:?}: {e}"
                ))
            })?;

            let word = word.trim().to_ascii_lowercase();
            if !is_alphabetic(&word) || rank <= 0 {
                debug!("Skipping dictionary line {line_number}: {line:?}");
                skipped += 1;
                continue;
            }
            let rank = u32::try_from(rank).map_err(|_| {
                SpellboundError::dictionary(format!(
                    "line {line_number}: rank {rank} out of range"
                ))
            })?;
            entries.push((word, rank));
        }

        if skipped > 0 {
            info!("Skipped {skipped} invalid dictionary records");
        }
        Self::from_entries(entries)
    }

    /// Load a dictionary from a tab-delimited rank file.
    ///
    /// A file that cannot be opened is a configuration error: there is no
    /// dictionary to correct against.
    pub fn load_from_rank_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SpellboundError::configuration(format!(
                "unable to open dictionary {}: {e}",
                path.display()
            ))
        })?;

        let dictionary = Self::from_rank_lines(BufReader::new(file))?;
        info!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    fn validate_entry(word: &str, rank: u32) -> Result<()> {
        if !is_normalized(word) {
            return Err(SpellboundError::configuration(format!(
                "dictionary word {word:?} is not lowercase alphabetic"
            )));
        }
        if rank == 0 {
            return Err(SpellboundError::configuration(format!(
                "dictionary word {word:?} has non-positive rank"
            )));
        }
        Ok(())
    }

    /// Check if a normalized word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    /// Get the rank of a normalized word.
    pub fn rank(&self, word: &str) -> Option<u32> {
        self.ranks.get(word).copied()
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check if the dictionary has no words. Constructors reject empty input.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Iterate over `(word, rank)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ranks.iter().map(|(word, rank)| (word.as_str(), *rank))
    }

    /// Summary statistics.
    pub fn stats(&self) -> DictionaryStats {
        let best_rank = self.ranks.values().copied().min().unwrap_or_default();
        let worst_rank = self.ranks.values().copied().max().unwrap_or_default();
        let longest_word = self.ranks.keys().map(String::len).max().unwrap_or_default();

        DictionaryStats {
            words: self.len(),
            best_rank,
            worst_rank,
            longest_word,
        }
    }
}

/// Statistics about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    /// Number of words.
    pub words: usize,
    /// Lowest (most frequent) rank.
    pub best_rank: u32,
    /// Highest (least frequent) rank.
    pub worst_rank: u32,
    /// Length of the longest word.
    pub longest_word: usize,
}

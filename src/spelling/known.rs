//! Reduction of raw edit candidates to a ranked suggestion list.

use ahash::AHashSet;

use crate::spelling::dictionary::Dictionary;

/// Reduce candidates to the dictionary words among them.
///
/// Duplicates are coalesced, non-dictionary strings dropped and survivors
/// sorted by ascending rank, most frequent first. Words sharing a rank keep
/// the order in which they were first generated.
pub fn known<I, S>(dictionary: &Dictionary, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
{
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut ranked: Vec<(u32, String)> = Vec::new();

    for candidate in candidates {
        let Some(rank) = dictionary.rank(candidate.as_ref()) else {
            continue;
        };
        if seen.contains(candidate.as_ref()) {
            continue;
        }
        let word: String = candidate.into();
        seen.insert(word.clone());
        ranked.push((rank, word));
    }

    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, word)| word).collect()
}

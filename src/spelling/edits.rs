//! Single-edit candidate generation.
//!
//! A word of length `n` is cut into its `n + 1` [`WordSplit`]s and each of
//! the four edits (delete, transpose, replace, insert) is applied at every
//! split. The letters used by replaces and inserts are the 26 lowercase ASCII
//! letters in alphabetical order, so generation order is fully determined by
//! the input word.
//!
//! All functions expect a normalized word (lowercase ASCII letters only).

/// Letters used by replaces and inserts, in generation order.
pub const LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A word cut in two at one boundary position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordSplit<'a> {
    /// The (possibly empty) left fragment.
    pub left: &'a str,
    /// The (possibly empty) right fragment.
    pub right: &'a str,
}

impl<'a> WordSplit<'a> {
    /// Create a split from its two fragments.
    pub fn new(left: &'a str, right: &'a str) -> Self {
        WordSplit { left, right }
    }
}

/// All splits of a word, ordered by increasing left length.
///
/// The first split is `("", word)` and the last is `(word, "")`.
pub fn word_splits(word: &str) -> Vec<WordSplit<'_>> {
    (0..=word.len())
        .map(|i| {
            let (left, right) = word.split_at(i);
            WordSplit { left, right }
        })
        .collect()
}

/// Remove one character at every split: `n` candidates.
pub fn deletes(splits: &[WordSplit<'_>]) -> Vec<String> {
    splits
        .iter()
        .filter(|split| !split.right.is_empty())
        .map(|split| concat(&[split.left, &split.right[1..]]))
        .collect()
}

/// Swap the two characters after every split: `n - 1` candidates.
pub fn transposes(splits: &[WordSplit<'_>]) -> Vec<String> {
    splits
        .iter()
        .filter(|split| split.right.len() > 1)
        .map(|split| {
            let right = split.right;
            concat(&[split.left, &right[1..2], &right[0..1], &right[2..]])
        })
        .collect()
}

/// Replace the character after every split with every letter: `26 * n`
/// candidates.
pub fn replaces(splits: &[WordSplit<'_>]) -> Vec<String> {
    let mut candidates = Vec::with_capacity(LETTERS.len() * splits.len());
    for split in splits.iter().filter(|split| !split.right.is_empty()) {
        for letter in LETTERS {
            candidates.push(with_letter(split.left, letter, &split.right[1..]));
        }
    }
    candidates
}

/// Insert every letter at every split: `26 * (n + 1)` candidates.
pub fn inserts(splits: &[WordSplit<'_>]) -> Vec<String> {
    let mut candidates = Vec::with_capacity(LETTERS.len() * splits.len());
    for split in splits {
        for letter in LETTERS {
            candidates.push(with_letter(split.left, letter, split.right));
        }
    }
    candidates
}

fn concat(parts: &[&str]) -> String {
    let mut s = String::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        s.push_str(part);
    }
    s
}

fn with_letter(left: &str, letter: char, right: &str) -> String {
    let mut s = String::with_capacity(left.len() + 1 + right.len());
    s.push_str(left);
    s.push(letter);
    s.push_str(right);
    s
}

/// The closed set of single edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Delete,
    Transpose,
    Replace,
    Insert,
}

impl EditKind {
    /// Every edit, in the order their candidates are concatenated.
    pub const ALL: [EditKind; 4] = [
        EditKind::Delete,
        EditKind::Transpose,
        EditKind::Replace,
        EditKind::Insert,
    ];

    /// Apply this edit at every split.
    pub fn apply(self, splits: &[WordSplit<'_>]) -> Vec<String> {
        match self {
            EditKind::Delete => deletes(splits),
            EditKind::Transpose => transposes(splits),
            EditKind::Replace => replaces(splits),
            EditKind::Insert => inserts(splits),
        }
    }

    /// Number of candidates this edit yields for a word of `len` characters.
    pub fn candidate_count(self, len: usize) -> usize {
        match self {
            EditKind::Delete => len,
            EditKind::Transpose => len.saturating_sub(1),
            EditKind::Replace => LETTERS.len() * len,
            EditKind::Insert => LETTERS.len() * (len + 1),
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            EditKind::Delete => "delete",
            EditKind::Transpose => "transpose",
            EditKind::Replace => "replace",
            EditKind::Insert => "insert",
        }
    }
}

/// Every candidate one edit away from `word`: deletes, transposes, replaces
/// then inserts. Duplicates are kept.
pub fn edits1(word: &str) -> Vec<String> {
    let splits = word_splits(word);
    let total = EditKind::ALL
        .iter()
        .map(|edit| edit.candidate_count(word.len()))
        .sum();

    let mut candidates = Vec::with_capacity(total);
    for edit in EditKind::ALL {
        candidates.extend(edit.apply(&splits));
    }
    candidates
}

/// Same sequence as [`edits1`], with the four edits forked onto the current
/// rayon pool.
pub fn par_edits1(word: &str) -> Vec<String> {
    let splits = word_splits(word);
    let ((mut candidates, transposed), (replaced, inserted)) = rayon::join(
        || rayon::join(|| deletes(&splits), || transposes(&splits)),
        || rayon::join(|| replaces(&splits), || inserts(&splits)),
    );

    candidates.reserve(transposed.len() + replaced.len() + inserted.len());
    candidates.extend(transposed);
    candidates.extend(replaced);
    candidates.extend(inserted);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dilbert_splits() -> Vec<WordSplit<'static>> {
        vec![
            WordSplit::new("", "dilbert"),
            WordSplit::new("d", "ilbert"),
            WordSplit::new("di", "lbert"),
            WordSplit::new("dil", "bert"),
            WordSplit::new("dilb", "ert"),
            WordSplit::new("dilbe", "rt"),
            WordSplit::new("dilber", "t"),
            WordSplit::new("dilbert", ""),
        ]
    }

    #[test]
    fn test_word_splits() {
        assert_eq!(word_splits("dilbert"), dilbert_splits());
        assert_eq!(word_splits(""), vec![WordSplit::new("", "")]);

        for split in word_splits("speling") {
            assert_eq!(format!("{}{}", split.left, split.right), "speling");
        }
    }

    #[test]
    fn test_deletes() {
        assert_eq!(
            deletes(&dilbert_splits()),
            vec!["ilbert", "dlbert", "dibert", "dilert", "dilbrt", "dilbet", "dilber"]
        );
    }

    #[test]
    fn test_transposes() {
        assert_eq!(
            transposes(&dilbert_splits()),
            vec!["idlbert", "dlibert", "diblert", "dilebrt", "dilbret", "dilbetr"]
        );
        assert!(transposes(&word_splits("a")).is_empty());
    }

    #[test]
    fn test_replaces() {
        let replaced = replaces(&dilbert_splits());
        assert_eq!(replaced.len(), 26 * 7);
        assert_eq!(&replaced[..4], ["ailbert", "bilbert", "cilbert", "dilbert"]);
        assert_eq!(replaced[26], "dalbert");
        assert_eq!(replaced.last().map(String::as_str), Some("dilberz"));
    }

    #[test]
    fn test_inserts() {
        let inserted = inserts(&dilbert_splits());
        assert_eq!(inserted.len(), 26 * 8);
        assert_eq!(&inserted[..3], ["adilbert", "bdilbert", "cdilbert"]);
        assert_eq!(inserted[26], "dailbert");
        assert_eq!(inserted.last().map(String::as_str), Some("dilbertz"));
    }

    #[test]
    fn test_candidate_counts() {
        for word in ["a", "ab", "speling", "dilbert", "xwphjwl"] {
            let splits = word_splits(word);
            let n = word.len();
            assert_eq!(splits.len(), n + 1);
            for edit in EditKind::ALL {
                assert_eq!(
                    edit.apply(&splits).len(),
                    edit.candidate_count(n),
                    "{} of {word}",
                    edit.name()
                );
            }
            assert_eq!(deletes(&splits).len(), n);
            assert_eq!(transposes(&splits).len(), n - 1);
            assert_eq!(replaces(&splits).len(), 26 * n);
            assert_eq!(inserts(&splits).len(), 26 * (n + 1));
        }
    }

    #[test]
    fn test_edits1_order() {
        let candidates = edits1("ab");
        // deletes, transposes, replaces, inserts
        assert_eq!(&candidates[..3], ["b", "a", "ba"]);
        assert_eq!(candidates[3], "ab");
        assert_eq!(candidates[3 + 52], "aab");
        assert_eq!(candidates.len(), 2 + 1 + 52 + 78);
    }

    #[test]
    fn test_par_edits1_matches_sequential() {
        for word in ["a", "speling", "dilbert"] {
            assert_eq!(par_edits1(word), edits1(word));
        }
    }
}

//! Word normalization shared by the dictionary and the corrector.

use crate::error::{Result, SpellboundError};

/// Check whether a word is non-empty and made only of ASCII letters.
pub fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Trim surrounding whitespace, lowercase and validate a word.
///
/// The result is always a non-empty string of lowercase ASCII letters, the
/// same form dictionary keys are stored in.
pub fn normalize(word: &str) -> Result<String> {
    let normalized = word.trim().to_ascii_lowercase();
    if !is_alphabetic(&normalized) {
        return Err(SpellboundError::invalid_input(format!(
            "Non-alpha word: {word:?}"
        )));
    }
    Ok(normalized)
}

/// Check whether a word is already in normalized form.
pub(crate) fn is_normalized(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alphabetic() {
        assert!(is_alphabetic("word"));
        assert!(is_alphabetic("Word"));
        assert!(!is_alphabetic(""));
        assert!(!is_alphabetic("non-alpha"));
        assert!(!is_alphabetic("r2d2"));
        assert!(!is_alphabetic(" word"));
        assert!(!is_alphabetic("café"));
    }

    #[test]
    fn test_normalize_whitespace_and_case() {
        assert_eq!(normalize(" Neo\t\n").unwrap(), "neo");
        assert_eq!(normalize(" \tword\r\n").unwrap(), "word");
        assert_eq!(normalize("SPELLING").unwrap(), "spelling");
    }

    #[test]
    fn test_normalize_rejects_non_alphabetic() {
        for word in ["!@#$", "non-alpha", "", "   ", "two words", "42"] {
            let err = normalize(word).unwrap_err();
            assert!(err.is_invalid_input(), "{word:?} should be rejected");
        }
    }

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized("spelling"));
        assert!(!is_normalized("Spelling"));
        assert!(!is_normalized(""));
    }
}

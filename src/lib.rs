//! # Spellbound
//!
//! A "did you mean" spelling corrector in the style of Peter Norvig's, driven
//! by a ranked dictionary rather than a trained model.
//!
//! ## Features
//!
//! - Immutable word-to-rank dictionary loaded from tab-delimited files
//! - Delete, transpose, replace and insert candidate generation
//! - One-edit search with a full two-edit fallback
//! - Rank-ordered, deterministic suggestion lists
//! - Parallel candidate expansion with cooperative cancellation
//!
//! ```
//! use spellbound::spelling::{Correction, Dictionary, SpellingCorrector};
//!
//! let dictionary = Dictionary::from_entries([
//!     ("spelling", 7302),
//!     ("spewing", 41780),
//!     ("spiling", 1000000),
//! ])?;
//! let corrector = SpellingCorrector::new(dictionary)?;
//!
//! assert_eq!(corrector.corrections("spelling")?, Correction::Known);
//! assert_eq!(
//!     corrector.corrections("speling")?.suggestions(),
//!     Some(&["spelling".to_string(), "spewing".to_string(), "spiling".to_string()][..])
//! );
//! # Ok::<(), spellbound::error::SpellboundError>(())
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

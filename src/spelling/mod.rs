//! Spelling correction for Spellbound.
//!
//! This module provides the ranked dictionary, single-edit candidate
//! generation, the rank-ordered candidate reduction and the two-round
//! corrector built on top of them, plus the helpers that pull typos out of
//! free text.

pub mod cancel;
pub mod corrector;
pub mod dictionary;
pub mod edits;
pub mod known;
pub mod normalize;
pub mod suggest;

// Re-export commonly used types
pub use cancel::*;
pub use corrector::*;
pub use dictionary::*;
pub use known::*;
pub use normalize::*;
pub use suggest::*;

//! Cooperative cancellation for long-running searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// A cloneable flag a caller can raise to abandon a search, optionally tied
/// to a deadline.
///
/// Clones share the same flag. The corrector polls it between units of work,
/// so cancellation takes effect at the next poll rather than immediately.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Create a token that is only cancelled explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that also cancels itself once `timeout` has elapsed.
    pub fn with_timeout(timeout: Duration) -> Self {
        CancellationToken {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Cancel every clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if the token was cancelled or its deadline has passed.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

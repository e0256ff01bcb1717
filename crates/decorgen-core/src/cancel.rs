//! Cooperative cancellation.
//!
//! Long enumerations (walking interface member lists, iterating candidates)
//! poll a [`CancellationToken`] between items and abandon the current
//! computation with [`Error::Cancelled`](crate::Error::Cancelled).

use crate::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Shared, cloneable cancellation flag.
///
/// Clones observe the same flag, so a host can hand a clone to the pipeline
/// and cancel it from another thread.
///
/// # Examples
///
/// ```
/// use decorgen_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// let observer = token.clone();
/// assert!(observer.check("extract").is_ok());
///
/// token.cancel();
/// assert!(observer.is_cancelled());
/// assert!(observer.check("extract").unwrap_err().is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    budget: Option<Arc<AtomicUsize>>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a token that cancels itself once `checks` calls to
    /// [`check`](Self::check) have passed.
    ///
    /// Clones share the budget. Useful to bound the work of a single pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_core::CancellationToken;
    ///
    /// let token = CancellationToken::after_checks(2);
    /// assert!(token.check("first").is_ok());
    /// assert!(token.check("second").is_ok());
    /// assert!(token.check("third").is_err());
    /// assert!(token.is_cancelled());
    /// ```
    #[must_use]
    pub fn after_checks(checks: usize) -> Self {
        Self {
            cancelled: Arc::default(),
            budget: Some(Arc::new(AtomicUsize::new(checks))),
        }
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Returns `Err(Error::Cancelled)` if cancellation was requested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] naming `operation` when the token is cancelled.
    pub fn check(&self, operation: &str) -> Result<()> {
        if let Some(budget) = &self.budget {
            let exhausted = budget
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| left.checked_sub(1))
                .is_err();
            if exhausted {
                self.cancel();
            }
        }
        if self.is_cancelled() {
            return Err(Error::cancelled(operation));
        }
        Ok(())
    }
}

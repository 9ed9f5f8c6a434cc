//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SumError;

/// Cooperative cancellation token shared between the dispatcher and a
/// signal handler. Clones observe the same flag.
///
/// # Example
/// ```
/// use benchtop_core::cancel::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Checkpoint: return `Err(SumError::Cancelled)` once cancelled.
    pub fn check(&self) -> Result<(), SumError> {
        if self.is_cancelled() {
            Err(SumError::Cancelled)
        } else {
            Ok(())
        }
    }
}

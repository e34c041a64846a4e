//! Cooperative cancellation for long candidate expansions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SpellfixError};

/// A cloneable flag shared between the caller and a running computation.
///
/// Cancellation is best effort: computations poll the token between stages
/// and stop with [`SpellfixError::OperationCancelled`] once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Return an error naming `stage` if cancellation was requested.
    pub fn check(&self, stage: &str) -> Result<()> {
        if self.is_cancelled() {
            Err(SpellfixError::cancelled(stage))
        } else {
            Ok(())
        }
    }
}

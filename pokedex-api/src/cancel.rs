//! Explicit cancellation for multi-stage fetch operations.
//!
//! The web client this replaces relied on component unmount to "cancel"
//! in-flight requests, which only discards results racily. A [`CancelToken`]
//! makes that explicit: the caller keeps one handle, passes a clone into the
//! operation, and flips it when the result is no longer wanted. Operations
//! check the token at every stage boundary and return
//! [`ApiError::Cancelled`](crate::ApiError::Cancelled) instead of a stale
//! result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{ApiError, Result};

/// A cloneable cancellation flag shared between a caller and an in-flight
/// operation.
///
/// Clones share state: cancelling any handle cancels them all.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation to every holder of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been signalled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Bail out with [`ApiError::Cancelled`] if cancellation was signalled.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Cancelled`] when the token has been cancelled.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(ApiError::Cancelled)
        } else {
            Ok(())
        }
    }
}

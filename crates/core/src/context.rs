//! Per-request execution context
//!
//! Every cursor call carries an [`ExecContext`] so that lookups against
//! storage honour the request's deadline and can be cancelled from the
//! session layer. The context is cheap to clone; clones share the same
//! cancellation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{VindexError, VindexResult};

/// Shared cancellation flag
///
/// Cancelling any clone cancels all of them. Cancellation is one-way.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create an uncancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every context holding this token
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether `cancel` has been called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Deadline and cancellation for one routing request
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    deadline: Option<Instant>,
    cancel: CancelToken,
}

impl ExecContext {
    /// Context with no deadline that is never cancelled unless asked to
    pub fn background() -> Self {
        Self::default()
    }

    /// Set an absolute deadline
    ///
    /// An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Set a deadline relative to now
    ///
    /// A timeout too large to represent as an `Instant` (e.g.
    /// `Duration::MAX`) sets no deadline and keeps any existing one.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Replace the cancellation token
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// The deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` if there is no deadline
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// The token cancelling this context
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Whether this context has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Fail fast if the request can no longer make progress
    ///
    /// # Errors
    ///
    /// `Cancelled` if the token fired, `DeadlineExceeded` if the deadline
    /// has passed. Cancellation is reported first.
    pub fn check(&self) -> VindexResult<()> {
        if self.is_cancelled() {
            return Err(VindexError::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(VindexError::DeadlineExceeded);
            }
        }
        Ok(())
    }
}

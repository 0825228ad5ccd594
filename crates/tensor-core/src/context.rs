//! Per-call deadlines and cancellation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::error::NetworkCause;

/// Cancellation signal shared between a caller and in-flight calls.
///
/// Clones observe the same signal. Once cancelled, a token stays cancelled.
#[derive(Debug, Clone)]
pub struct CancelToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    /// Create a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Cancel every call observing this token.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves when the token is cancelled.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so the wait cannot fail.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

/// Deadline and cancellation attached to a single call.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: Option<CancelToken>,
}

impl RequestContext {
    /// A context with no deadline and no cancellation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new().deadline(Instant::now() + timeout)
    }

    /// Set an absolute deadline.
    #[must_use]
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Attach a cancel token.
    #[must_use]
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// A context observing `token`.
    #[must_use]
    pub fn with_cancel(token: CancelToken) -> Self {
        Self::new().cancel_token(token)
    }

    /// The deadline, if one was set.
    #[must_use]
    pub fn deadline_at(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true if the context is already cancelled or past its deadline.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Run `fut` until it completes, the token fires, or the deadline passes.
    ///
    /// Cancellation is checked first so an already-cancelled context never
    /// polls `fut`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkCause::Cancelled`] or [`NetworkCause::DeadlineExceeded`]
    /// when the call is cut short.
    pub async fn guard<F>(&self, fut: F) -> Result<F::Output, NetworkCause>
    where
        F: Future,
    {
        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(NetworkCause::Cancelled),
            () = expired => Err(NetworkCause::DeadlineExceeded),
            out = fut => Ok(out),
        }
    }
}

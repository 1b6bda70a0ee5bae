//! Recompute control: one in-flight computation at a time.
//!
//! Every input event starts a new generation. Starting a generation aborts the
//! task of the previous one, and a task may only render while its generation
//! is still the latest, so a slow superseded computation never overwrites the
//! result of a newer one.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tokio::task::{AbortHandle, JoinHandle};

/// Generation number handed to each recompute task.
pub type Ticket = u64;

/// Tracks the latest generation and the task computing it.
#[derive(Default)]
pub struct Recompute {
    generation: AtomicU64,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl Recompute {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the in-flight task (if any), open a new generation, and spawn
    /// `make(ticket)` as its task. Must be called inside a tokio runtime.
    pub fn start<F, Fut>(&self, make: F) -> JoinHandle<Fut::Output>
    where
        F: FnOnce(Ticket) -> Fut,
        Fut: Future + Send + 'static,
        Fut::Output: Send + 'static,
    {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(prev) = in_flight.take() {
            prev.abort();
        }
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let handle = tokio::spawn(make(ticket));
        *in_flight = Some(handle.abort_handle());
        tracing::trace!(ticket, "recompute started");
        handle
    }

    /// True if no newer generation has started since `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Latest generation started (0 before the first).
    pub fn latest(&self) -> Ticket {
        self.generation.load(Ordering::SeqCst)
    }
}

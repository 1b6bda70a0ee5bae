//! Event-driven verifier session.
//!
//! A `Session` owns the three inputs and is handed a rendering [`Surface`] and
//! a [`Location`] (where the URL fragment lives) at construction. Each input
//! or navigation event schedules one recompute through [`Recompute`]; a newer
//! event cancels the older computation, and only the latest result is
//! rendered and mirrored into the fragment.

use crate::control::{Recompute, Ticket};
use crate::fragment::{parse_fragment, to_fragment};
use crate::verify::{evaluate, Outcome, VerifierInputs};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

/// Display side of the verifier: algorithm, both digests and the status region.
pub trait Surface: Send + 'static {
    fn render(&mut self, outcome: &Outcome);
}

/// Holder of the shareable URL fragment.
pub trait Location: Send + 'static {
    fn set_fragment(&mut self, fragment: &str);
}

struct Inner<S, L> {
    inputs: Mutex<VerifierInputs>,
    surface: Mutex<S>,
    location: Mutex<L>,
    control: Recompute,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: Surface, L: Location> Inner<S, L> {
    /// Render `outcome` if `ticket` is still the latest generation.
    /// Returns whether anything was rendered.
    fn apply(&self, ticket: Ticket, inputs: &VerifierInputs, outcome: &Outcome) -> bool {
        // Checked under the surface lock so a newer render cannot interleave.
        let mut surface = lock(&self.surface);
        if !self.control.is_current(ticket) {
            tracing::debug!(ticket, "dropping stale recompute result");
            return false;
        }
        surface.render(outcome);
        if outcome.is_shareable() {
            lock(&self.location).set_fragment(&to_fragment(inputs));
        }
        true
    }
}

/// The verifier bound to a surface and a location.
pub struct Session<S, L> {
    inner: Arc<Inner<S, L>>,
}

impl<S, L> Clone for Session<S, L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Surface, L: Location> Session<S, L> {
    pub fn new(surface: S, location: L, initial: VerifierInputs) -> Self {
        Self {
            inner: Arc::new(Inner {
                inputs: Mutex::new(initial),
                surface: Mutex::new(surface),
                location: Mutex::new(location),
                control: Recompute::new(),
            }),
        }
    }

    /// Snapshot of the current inputs.
    pub fn inputs(&self) -> VerifierInputs {
        lock(&self.inner.inputs).clone()
    }

    /// Run `f` with the surface, e.g. to read back what was rendered.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&lock(&self.inner.surface))
    }

    /// Run `f` with the location.
    pub fn with_location<R>(&self, f: impl FnOnce(&L) -> R) -> R {
        f(&lock(&self.inner.location))
    }

    /// Algorithm selector changed.
    pub fn set_algorithm(&self, algorithm: impl Into<String>) -> JoinHandle<bool> {
        lock(&self.inner.inputs).algorithm = algorithm.into();
        self.recompute()
    }

    /// Expected digest edited.
    pub fn set_expected(&self, expected: impl Into<String>) -> JoinHandle<bool> {
        lock(&self.inner.inputs).expected = expected.into();
        self.recompute()
    }

    /// Content edited.
    pub fn set_content(&self, content: impl Into<String>) -> JoinHandle<bool> {
        lock(&self.inner.inputs).content = content.into();
        self.recompute()
    }

    /// Page load or fragment change. Populates all three inputs and recomputes
    /// if the fragment carries both `digest` and `content`; otherwise does
    /// nothing and returns `None`.
    pub fn load(&self, fragment: &str) -> Option<JoinHandle<bool>> {
        let parsed = parse_fragment(fragment)?;
        tracing::debug!(algorithm = %parsed.algorithm, "inputs loaded from fragment");
        *lock(&self.inner.inputs) = parsed;
        Some(self.recompute())
    }

    /// Schedule a compute/verify/render cycle for the current inputs,
    /// cancelling any cycle still in flight.
    pub fn recompute(&self) -> JoinHandle<bool> {
        let inputs = self.inputs();
        let inner = Arc::clone(&self.inner);
        self.inner.control.start(move |ticket| async move {
            let job_inputs = inputs.clone();
            let outcome = match tokio::task::spawn_blocking(move || evaluate(&job_inputs)).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("digest task failed: {}", e);
                    Outcome::failed(inputs.algorithm.clone(), e.to_string())
                }
            };
            inner.apply(ticket, &inputs, &outcome)
        })
    }
}

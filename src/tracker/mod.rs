//! Continuous input trackers
//!
//! A tracker turns a high-frequency raw input stream (pointer motion,
//! terminal resizes) into a derived value that the renderer can read.
//! The derivation is pluggable; the pointer and viewport trackers share
//! this one implementation.
//!
//! ```text
//! raw event ──► InputTracker::sample ──► Derivation::derive ──► watch channel
//!                                                                  │
//! frame tick ─► InputTracker::tick ───► Derivation::advance ───────┤
//!                                                                  ▼
//!                                                   Subscription::get (view layer)
//! ```
//!
//! Samples are only delivered while at least one [`Subscription`] is live,
//! which is how a view "registers a listener" for the duration of its mount.

pub mod pointer;
pub mod viewport;

pub use pointer::{Point, PointerSpring};
pub use viewport::{FontScale, TextScale, Viewport};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Turns raw samples into the value published to subscribers
pub trait Derivation {
    type Raw: Copy;
    type Output: Copy + PartialEq;

    /// Recompute from a fresh raw sample
    fn derive(&mut self, raw: Self::Raw) -> Self::Output;

    /// Advance time-based smoothing. `None` means the value did not move.
    fn advance(&mut self, _dt: Duration) -> Option<Self::Output> {
        None
    }
}

/// Samples a raw source and publishes the derived value
pub struct InputTracker<D: Derivation> {
    derivation: D,
    tx: watch::Sender<D::Output>,
    listeners: Arc<AtomicUsize>,
}

impl<D: Derivation> InputTracker<D> {
    /// Create a tracker, deriving the initial value synchronously so the
    /// first frame never renders a placeholder.
    pub fn new(mut derivation: D, initial: D::Raw) -> Self {
        let value = derivation.derive(initial);
        let (tx, _rx) = watch::channel(value);
        Self {
            derivation,
            tx,
            listeners: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Register a listener. The registration lasts until the returned
    /// subscription is dropped or explicitly unsubscribed.
    pub fn subscribe(&self) -> Subscription<D::Output> {
        self.listeners.fetch_add(1, Ordering::AcqRel);
        Subscription {
            rx: self.tx.subscribe(),
            registration: Some(Arc::clone(&self.listeners)),
        }
    }

    /// Number of live registrations
    pub fn listener_count(&self) -> usize {
        self.listeners.load(Ordering::Acquire)
    }

    /// Feed a raw sample. Returns false when nobody is listening and the
    /// sample was dropped.
    pub fn sample(&mut self, raw: D::Raw) -> bool {
        if self.listener_count() == 0 {
            return false;
        }
        let value = self.derivation.derive(raw);
        self.publish(value);
        true
    }

    /// Advance time-based smoothing by one frame
    pub fn tick(&mut self, dt: Duration) {
        if self.listener_count() == 0 {
            return;
        }
        if let Some(value) = self.derivation.advance(dt) {
            self.publish(value);
        }
    }

    pub fn derivation(&self) -> &D {
        &self.derivation
    }

    pub fn derivation_mut(&mut self) -> &mut D {
        &mut self.derivation
    }

    fn publish(&self, value: D::Output) {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }
}

/// Scoped listener registration on an [`InputTracker`]
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
    registration: Option<Arc<AtomicUsize>>,
}

impl<T: Copy> Subscription<T> {
    /// Latest derived value
    pub fn get(&self) -> T {
        *self.rx.borrow()
    }

    /// Whether a new value was published since the last `mark_seen`
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    pub fn mark_seen(&mut self) {
        let _ = self.rx.borrow_and_update();
    }
}

impl<T> Subscription<T> {
    /// Remove the registration. Safe to call more than once.
    pub fn unsubscribe(&mut self) {
        if let Some(listeners) = self.registration.take() {
            listeners.fetch_sub(1, Ordering::AcqRel);
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

//! Host lifecycle notifications.
//!
//! A [`Signal`] is a list of callbacks the host fires when the timer changes
//! phase. Subscribing hands back a [`Subscription`]; the callback stays
//! registered exactly as long as that handle is alive. Dropping the handle,
//! or calling [`Subscription::cancel`], deregisters it, so a signal never
//! calls into a component that has gone away.

use std::fmt;

use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::trace;

use crate::types::{Run, TimerPhase};

type Callback<A> = Box<dyn FnMut(&mut Run, A) + Send>;

struct Handler<A> {
    token: CancellationToken,
    callback: Callback<A>,
}

/// Callbacks fired by the host with mutable access to the active run
pub struct Signal<A> {
    handlers: Vec<Handler<A>>,
}

impl<A: Copy> Signal<A> {
    /// Create a signal with no subscribers
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Register `callback`, returning the handle that keeps it registered
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&mut Run, A) + Send + 'static,
    {
        let token = CancellationToken::new();
        self.handlers.push(Handler { token: token.clone(), callback: Box::new(callback) });
        Subscription::new(token)
    }

    /// Fire the signal, calling every live subscriber in subscription order
    pub fn emit(&mut self, run: &mut Run, arg: A) {
        self.handlers.retain(|handler| !handler.token.is_cancelled());
        trace!("Emitting signal to {} subscribers", self.handlers.len());

        for handler in &mut self.handlers {
            (handler.callback)(run, arg);
        }
    }

    /// Number of subscribers whose handles are still alive
    pub fn subscriber_count(&self) -> usize {
        self.handlers.iter().filter(|handler| !handler.token.is_cancelled()).count()
    }
}

impl<A: Copy> Default for Signal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Signal<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("handlers", &self.handlers.len()).finish()
    }
}

/// Scoped registration of a signal callback.
///
/// The callback is deregistered when this handle is dropped.
#[derive(Debug)]
#[must_use = "dropping a Subscription immediately deregisters its callback"]
pub struct Subscription {
    token: CancellationToken,
    _guard: DropGuard,
}

impl Subscription {
    fn new(token: CancellationToken) -> Self {
        let _guard = token.clone().drop_guard();
        Self { token, _guard }
    }

    /// Check if the callback is still registered
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Deregister the callback now
    pub fn cancel(self) {
        self.token.cancel();
    }
}

/// The set of notifications a timer raises over an attempt
#[derive(Debug, Default)]
pub struct TimerEvents {
    /// A new attempt started
    pub on_start: Signal<()>,
    /// The current segment was split
    pub on_split: Signal<()>,
    /// The current segment was skipped
    pub on_skip_split: Signal<()>,
    /// The previous split was undone
    pub on_undo_split: Signal<()>,
    /// The timer was paused
    pub on_pause: Signal<()>,
    /// The timer was resumed after a pause
    pub on_resume: Signal<()>,
    /// The attempt was reset; carries the phase the timer was in beforehand
    pub on_reset: Signal<TimerPhase>,
}

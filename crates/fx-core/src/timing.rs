//! Rate-limiting gates for event handlers.
//!
//! Both gates are driven by explicit timestamps. A caller hands each event to
//! `call` and runs its handler with whatever comes back; pending (deferred)
//! invocations are released by `poll` once their deadline passes, or by the
//! next `call` if that arrives first. This keeps the gates free of closures
//! and timers of their own, so the same code works under
//! `requestAnimationFrame`, a native loop, or a test.

use smallvec::SmallVec;
use std::time::Duration;

/// Invocations a single `Throttle::call` releases, oldest first: an overdue
/// trailing call and/or the new call itself.
pub type Released<A> = SmallVec<[A; 2]>;

/// Leading-edge throttle with a trailing guarantee.
///
/// A call more than `delay` after the last execution runs immediately. Calls
/// inside the window collapse into a single trailing execution at
/// `last_exec + delay`, carrying the most recent argument.
#[derive(Debug)]
pub struct Throttle<A> {
    delay: Duration,
    last_exec: Option<Duration>,
    trailing: Option<(Duration, A)>,
}

impl<A> Throttle<A> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_exec: None,
            trailing: None,
        }
    }

    /// Returns the arguments the handler should run with now, oldest first.
    /// A trailing call whose deadline passed without a `poll` is released
    /// here, stamped as executed at its deadline, before `arg` is judged.
    pub fn call(&mut self, now: Duration, arg: A) -> Released<A> {
        let mut released = Released::new();
        if let Some(overdue) = self.settle(now) {
            released.push(overdue);
        }
        match self.last_exec {
            Some(last) if now.saturating_sub(last) <= self.delay => {
                self.trailing = Some((last + self.delay, arg));
            }
            _ => {
                self.last_exec = Some(now);
                released.push(arg);
            }
        }
        released
    }

    fn settle(&mut self, now: Duration) -> Option<A> {
        match self.trailing.take() {
            Some((due, arg)) if now >= due => {
                self.last_exec = Some(due);
                Some(arg)
            }
            pending => {
                self.trailing = pending;
                None
            }
        }
    }

    /// Releases the trailing call once it is due.
    pub fn poll(&mut self, now: Duration) -> Option<A> {
        match self.trailing.take() {
            Some((due, arg)) if now >= due => {
                self.last_exec = Some(now);
                Some(arg)
            }
            pending => {
                self.trailing = pending;
                None
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.trailing.as_ref().map(|(due, _)| *due)
    }

    pub fn is_pending(&self) -> bool {
        self.trailing.is_some()
    }

    pub fn cancel(&mut self) {
        self.trailing = None;
    }
}

/// Trailing-edge debounce: only the last call in a quiet period of `delay`
/// ever executes.
#[derive(Debug)]
pub struct Debounce<A> {
    delay: Duration,
    pending: Option<(Duration, A)>,
}

impl<A> Debounce<A> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules this call, replacing a pending one that is still inside its
    /// quiet period. A pending call already past its deadline had no
    /// successor in time, so it is returned for the handler to run first.
    pub fn call(&mut self, now: Duration, arg: A) -> Option<A> {
        let overdue = self.poll(now);
        self.pending = Some((now + self.delay, arg));
        overdue
    }

    pub fn poll(&mut self, now: Duration) -> Option<A> {
        match self.pending.take() {
            Some((due, arg)) if now >= due => Some(arg),
            pending => {
                self.pending = pending;
                None
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

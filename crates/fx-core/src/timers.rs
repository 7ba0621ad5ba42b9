//! Deadline-ordered queue of cancellable timers.
//!
//! Each scheduled timer gets a [`TimerId`] handle that the owner stores next
//! to whatever the timer acts on, so cancelling is an explicit call rather
//! than dropping a captured closure.

use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Timers due in one poll; a frame rarely releases more than a handful.
pub type DueTimers<T> = SmallVec<[(TimerId, T); 8]>;

#[derive(Debug)]
pub struct TimerQueue<T> {
    next_id: u64,
    // (deadline, id): ids grow monotonically so equal deadlines fire FIFO
    order: BTreeSet<(Duration, TimerId)>,
    entries: FnvHashMap<TimerId, (Duration, T)>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            order: BTreeSet::new(),
            entries: FnvHashMap::default(),
        }
    }

    pub fn schedule(&mut self, deadline: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.order.insert((deadline, id));
        self.entries.insert(id, (deadline, payload));
        id
    }

    /// Cancels a pending timer. Cancelling a fired or already-cancelled timer
    /// is a no-op and returns `None`.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let (deadline, payload) = self.entries.remove(&id)?;
        self.order.remove(&(deadline, id));
        Some(payload)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.entries.get(&id).map(|(d, _)| *d)
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// in deadline order.
    pub fn pop_due(&mut self, now: Duration) -> DueTimers<T> {
        let mut due = DueTimers::new();
        while let Some(&(deadline, id)) = self.order.first() {
            if deadline > now {
                break;
            }
            self.order.pop_first();
            if let Some((_, payload)) = self.entries.remove(&id) {
                due.push((id, payload));
            }
        }
        due
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.order.first().map(|(d, _)| *d)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

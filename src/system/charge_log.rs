//! Charge log
//!
//! A fixed size observer that queues charge events for a consumer to pick up
//! later, e.g. a display task or a radio link flushing on its own schedule.

use core::fmt::Debug;
use heapless::spsc::Queue;

use crate::system::notification::{Event, Observer};

/// Records up to `N - 1` events, oldest first. When full the oldest event is
/// discarded to make room for the newest one.
pub struct ChargeLog<T, const N: usize> {
    queue: Queue<Event<T>, N>,
    dropped: usize,
}

impl<T, const N: usize> Default for ChargeLog<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> ChargeLog<T, N> {
    /// Creates an empty log
    pub const fn new() -> Self {
        Self {
            queue: Queue::new(),
            dropped: 0,
        }
    }

    /// Number of events waiting to be consumed
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of events held at once
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Events discarded because the log was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Removes and returns the oldest event
    pub fn pop(&mut self) -> Option<Event<T>> {
        self.queue.dequeue()
    }

    /// Iterates the pending events without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &Event<T>> + '_ {
        self.queue.iter()
    }

    /// Consumes the pending events, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = Event<T>> + '_ {
        core::iter::from_fn(move || self.queue.dequeue())
    }

    /// Discards everything, including the drop counter
    pub fn clear(&mut self) {
        while self.queue.dequeue().is_some() {}
        self.dropped = 0;
    }
}

impl<T: Debug, const N: usize> ChargeLog<T, N> {
    fn push(&mut self, event: Event<T>) {
        if self.queue.is_full() {
            if let Some(oldest) = self.queue.dequeue() {
                warn!("Charge log full, dropping {:?}", oldest);
                self.dropped += 1;
            }
        }
        // only fails for a zero sized log
        if let Err(event) = self.queue.enqueue(event) {
            warn!("Charge log has no room, dropping {:?}", event);
            self.dropped += 1;
        }
    }
}

impl<T: Debug, const N: usize> Observer<T> for ChargeLog<T, N> {
    fn notify_recharge(&mut self, charge: T) {
        self.push(Event::Recharged(charge));
    }

    fn notify_drain(&mut self, charge: T) {
        self.push(Event::Drained(charge));
    }
}

//! Notification
//!
//! The observer interface a battery reports charge changes through

/// Receives the post-update charge after every successful mutation.
///
/// Called inline, before the mutating call returns; a slow observer
/// stalls the caller.
pub trait Observer<T> {
    fn notify_recharge(&mut self, charge: T);
    fn notify_drain(&mut self, charge: T);
}

/// Null observer, behaves exactly as if nothing was attached
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct NoObserver;

impl<T> Observer<T> for NoObserver {
    fn notify_recharge(&mut self, _charge: T) {}
    fn notify_drain(&mut self, _charge: T) {}
}

/// Lend an observer to a battery while keeping ownership of it
impl<T, O> Observer<T> for &mut O
where
    O: Observer<T> + ?Sized,
{
    fn notify_recharge(&mut self, charge: T) {
        (**self).notify_recharge(charge)
    }

    fn notify_drain(&mut self, charge: T) {
        (**self).notify_drain(charge)
    }
}

/// A single charge change, as seen by an observer
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event<T> {
    Recharged(T),
    Drained(T),
}

impl<T: Copy> Event<T> {
    /// The charge level after the change
    pub fn charge(&self) -> T {
        match *self {
            Event::Recharged(c) | Event::Drained(c) => c,
        }
    }
}

//! Battery management
//!
//! Tracks the charge held by a battery, clamped to `[0, capacity]`, and
//! reports every change to an optional observer.

use core::fmt;

use crate::system::notification::{NoObserver, Observer};
use crate::system::quantity::Quantity;
use crate::system::BatteryManagement;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum State {
    Draining,
    Charging,
    Charged,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Error {
    /// Capacity must be strictly positive
    InvalidCapacity,
    /// Initial charge outside of `[0, capacity]`
    ChargeOutOfRange,
    /// Amount must be strictly positive
    InvalidAmount,
    /// Recharge requested while already at capacity
    Full,
    /// Drain requested while already empty
    Empty,
}

pub struct BatteryState<T, O = NoObserver> {
    capacity: T,
    charge: T,
    observer: Option<O>,
    state: State,
}

impl<T: Quantity> BatteryState<T> {
    /// Creates a fully charged battery with no observer
    pub fn new(capacity: T) -> Result<Self, Error> {
        Self::with_charge(capacity, capacity)
    }

    /// Creates a battery holding `charge`, useful for fixtures or restoring a
    /// known level
    pub fn with_charge(capacity: T, charge: T) -> Result<Self, Error> {
        if !capacity.is_positive() {
            return Err(Error::InvalidCapacity);
        }
        // written this way round so NaN fails both comparisons
        if !(charge >= T::ZERO && charge <= capacity) {
            return Err(Error::ChargeOutOfRange);
        }
        Ok(Self {
            capacity,
            charge,
            observer: None,
            state: State::Draining,
        })
    }
}

impl<T, O> BatteryState<T, O> {
    /// Hands the battery over to a new observer, possibly of another type.
    /// The current observer, if any, is dropped.
    pub fn observe<P>(self, observer: P) -> BatteryState<T, P> {
        BatteryState {
            capacity: self.capacity,
            charge: self.charge,
            observer: Some(observer),
            state: self.state,
        }
    }
}

impl<T: Quantity, O: Observer<T>> BatteryState<T, O> {
    /// Creates a fully charged battery reporting to `observer`
    pub fn with_observer(capacity: T, observer: O) -> Result<Self, Error> {
        Ok(BatteryState::new(capacity)?.observe(observer))
    }

    pub fn capacity(&self) -> T {
        self.capacity
    }

    pub fn charge(&self) -> T {
        self.charge
    }

    pub fn is_full(&self) -> bool {
        self.charge >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.charge <= T::ZERO
    }

    /// Installs `observer`, returning the one it replaces
    pub fn attach(&mut self, observer: O) -> Option<O> {
        self.observer.replace(observer)
    }

    /// Removes the current observer, if any
    pub fn detach(&mut self) -> Option<O> {
        self.observer.take()
    }

    pub fn observer(&self) -> Option<&O> {
        self.observer.as_ref()
    }

    pub fn observer_mut(&mut self) -> Option<&mut O> {
        self.observer.as_mut()
    }

    /// Adds `amount` of charge, returns `false` if the request was rejected
    pub fn recharge(&mut self, amount: T) -> bool {
        self.try_recharge(amount).is_ok()
    }

    /// Removes `amount` of charge, returns `false` if the request was rejected
    pub fn drain(&mut self, amount: T) -> bool {
        self.try_drain(amount).is_ok()
    }

    /// Adds `amount` of charge, capped at capacity, returning the new level.
    ///
    /// Rejected without any effect when `amount` is not positive or the
    /// battery is already full. Any excess over capacity is discarded.
    pub fn try_recharge(&mut self, amount: T) -> Result<T, Error> {
        if !amount.is_positive() {
            debug!("Rejecting recharge of {:?}", amount);
            return Err(Error::InvalidAmount);
        }
        if self.is_full() {
            debug!("Rejecting recharge, already at capacity {:?}", self.capacity);
            return Err(Error::Full);
        }

        // compare against the headroom rather than summing, the sum may overflow
        let headroom = self.capacity - self.charge;
        self.charge = if amount >= headroom {
            self.capacity
        } else {
            self.charge + amount
        };
        self.state = State::Charging;
        trace!("Recharged by {:?} to {:?}", amount, self.charge);

        if let Some(observer) = self.observer.as_mut() {
            observer.notify_recharge(self.charge);
        }
        Ok(self.charge)
    }

    /// Removes `amount` of charge, floored at zero, returning the new level.
    ///
    /// Rejected without any effect when `amount` is not positive or the
    /// battery is already empty. Any shortfall is discarded.
    pub fn try_drain(&mut self, amount: T) -> Result<T, Error> {
        if !amount.is_positive() {
            debug!("Rejecting drain of {:?}", amount);
            return Err(Error::InvalidAmount);
        }
        if self.is_empty() {
            debug!("Rejecting drain, already empty");
            return Err(Error::Empty);
        }

        self.charge = if amount >= self.charge {
            T::ZERO
        } else {
            self.charge - amount
        };
        self.state = State::Draining;
        trace!("Drained by {:?} to {:?}", amount, self.charge);

        if let Some(observer) = self.observer.as_mut() {
            observer.notify_drain(self.charge);
        }
        Ok(self.charge)
    }

    /// Returns the current state of battery
    pub fn state(&self) -> State {
        if self.is_full() {
            State::Charged
        } else {
            self.state
        }
    }

    /// Returns the current state of charge (%) of the battery
    pub fn soc(&self) -> u16 {
        if self.is_full() {
            100
        } else {
            self.charge.percent_of(self.capacity)
        }
    }
}

impl<T: Quantity, O: Observer<T>> BatteryManagement for BatteryState<T, O> {
    fn state(&self) -> State {
        BatteryState::state(self)
    }

    fn soc(&self) -> u16 {
        BatteryState::soc(self)
    }
}

impl<T: fmt::Display, O> fmt::Display for BatteryState<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.charge, self.capacity)
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BatteryState<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BatteryState")
            .field("capacity", &self.capacity)
            .field("charge", &self.charge)
            .field("state", &self.state)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

//! Battery state
//!
//! A bounded charge model for battery management: recharge and drain requests
//! are clamped to `[0, capacity]` and every accepted change is reported to an
//! optional observer.

#![no_std]

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod system;

pub use crate::system::bms::{BatteryState, Error, State};
pub use crate::system::charge_log::ChargeLog;
pub use crate::system::notification::{Event, NoObserver, Observer};
pub use crate::system::quantity::Quantity;
pub use crate::system::BatteryManagement;

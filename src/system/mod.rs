pub mod bms;
pub mod charge_log;
pub mod notification;
pub mod quantity;

/// What a reporting layer (status bar, radio link) needs to know about a battery
pub trait BatteryManagement {
    fn state(&self) -> self::bms::State;
    fn soc(&self) -> u16;
}

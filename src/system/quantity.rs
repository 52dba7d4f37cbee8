//! Quantity
//!
//! The numeric type a battery stores its charge in. Implemented for all the
//! primitive integers and floats, so a battery can count in raw gauge units,
//! milliamp hours or fractional percentages alike.

use core::fmt::Debug;
use core::ops::{Add, Sub};

pub trait Quantity: Copy + PartialOrd + Debug + Add<Output = Self> + Sub<Output = Self> {
    /// The empty level
    const ZERO: Self;

    /// `self` as a whole percentage of `whole`, floored and clamped to
    /// `0..=100`. A non-positive `whole` gives 0.
    fn percent_of(self, whole: Self) -> u16;

    /// `true` if the value is strictly greater than zero. NaN is never positive.
    fn is_positive(self) -> bool {
        self > Self::ZERO
    }
}

macro_rules! quantity_int {
    ($($t:ty),*) => {
        $(
            impl Quantity for $t {
                const ZERO: Self = 0;

                fn percent_of(self, whole: Self) -> u16 {
                    if !whole.is_positive() {
                        return 0;
                    }
                    // widened so `self * 100` cannot overflow
                    let percent = (self as i128) * 100 / (whole as i128);
                    percent.clamp(0, 100) as u16
                }
            }
        )*
    };
}

macro_rules! quantity_float {
    ($($t:ty),*) => {
        $(
            impl Quantity for $t {
                const ZERO: Self = 0.0;

                fn percent_of(self, whole: Self) -> u16 {
                    if !whole.is_positive() {
                        return 0;
                    }
                    // divide first, scaling up can overflow to infinity
                    let ratio = self as f64 / whole as f64;
                    if ratio.is_nan() {
                        return 0;
                    }
                    (ratio * 100.0).clamp(0.0, 100.0) as u16
                }
            }
        )*
    };
}

quantity_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
quantity_float!(f32, f64);

//! Money and rate value objects (Indonesian Rupiah, percentages).
//!
//! Amounts are exact decimals all the way through the arithmetic and are only
//! floored to whole Rupiah when they are displayed. Arithmetic saturates at
//! `Rupiah::MAX` / `Rupiah::MIN` instead of overflowing.

use core::fmt;
use core::ops::{Add, Sub};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount of Indonesian Rupiah.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupiah(Decimal);

impl ValueObject for Rupiah {}

impl Rupiah {
    pub const ZERO: Rupiah = Rupiah(Decimal::ZERO);
    pub const MAX: Rupiah = Rupiah(Decimal::MAX);
    pub const MIN: Rupiah = Rupiah(Decimal::MIN);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Clamp to zero when negative.
    pub fn non_negative(self) -> Self {
        Self(self.0.max(Decimal::ZERO))
    }

    /// `self - rhs`, clamped to zero.
    pub fn saturating_sub(self, rhs: Rupiah) -> Self {
        (self - rhs).non_negative()
    }

    /// Multiply by a plain factor (quantity, days).
    pub fn times(self, factor: Decimal) -> Self {
        let positive = self.0.is_sign_negative() == factor.is_sign_negative();
        saturate(self.0.checked_mul(factor), positive)
    }

    /// Whole Rupiah, rounded toward negative infinity.
    pub fn whole_units(&self) -> i128 {
        // Every Decimal fits in an i128 once the fraction is gone.
        self.0.floor().to_i128().unwrap_or_default()
    }
}

impl From<u64> for Rupiah {
    fn from(value: u64) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<Decimal> for Rupiah {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Rupiah {
    type Output = Rupiah;

    fn add(self, rhs: Rupiah) -> Rupiah {
        saturate(self.0.checked_add(rhs.0), !self.0.is_sign_negative())
    }
}

impl Sub for Rupiah {
    type Output = Rupiah;

    fn sub(self, rhs: Rupiah) -> Rupiah {
        saturate(self.0.checked_sub(rhs.0), !self.0.is_sign_negative())
    }
}

/// `None` means the operation overflowed in the direction given by `positive`.
fn saturate(result: Option<Decimal>, positive: bool) -> Rupiah {
    match result {
        Some(value) => Rupiah(value),
        None if positive => Rupiah::MAX,
        None => Rupiah::MIN,
    }
}

impl core::iter::Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Self {
        iter.fold(Rupiah::ZERO, Add::add)
    }
}

/// `Rp 1.500.000`: floored, `.` as the thousands separator, no decimals.
impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.whole_units();
        let sign = if units < 0 { "-" } else { "" };
        write!(f, "Rp {sign}{}", group_thousands(units.unsigned_abs()))
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// A percentage in the closed range 0..=100.
///
/// Deserialized values go through [`Percent::clamped`] like every other way in.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Percent(Decimal);

impl ValueObject for Percent {}

impl Percent {
    pub const ZERO: Percent = Percent(Decimal::ZERO);

    /// Build a rate, clamping anything outside 0..=100 to the nearest bound.
    pub fn clamped(value: Decimal) -> Self {
        Self(value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `amount × rate / 100`, exact unless the product itself would overflow;
    /// then the amount is divided first, which cannot overflow since the rate
    /// is at most 100.
    pub fn of(&self, amount: Rupiah) -> Rupiah {
        let value = match amount.0.checked_mul(self.0) {
            Some(product) => product / Decimal::ONE_HUNDRED,
            None => amount.0 / Decimal::ONE_HUNDRED * self.0,
        };
        Rupiah(value)
    }
}

impl From<Decimal> for Percent {
    fn from(value: Decimal) -> Self {
        Self::clamped(value)
    }
}

impl From<Percent> for Decimal {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl From<u32> for Percent {
    fn from(value: u32) -> Self {
        Self::clamped(Decimal::from(value))
    }
}

/// Indonesian notation: `11`, `2,5`.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.normalize().to_string().replace('.', ",");
        f.write_str(&text)
    }
}

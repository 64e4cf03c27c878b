//! Rupiah amount type
//!
//! Amounts are whole rupiah stored as i64; the ledger has no fractional
//! sub-units, and integer storage keeps every sum exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in whole rupiah
///
/// Transaction amounts are strictly positive; derived balances may go
/// negative, so the type itself is signed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupiah(i64);

impl Rupiah {
    /// Create an amount from a whole-rupiah value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the whole-rupiah value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-Rp{}", group_thousands(self.0.unsigned_abs()))
        } else {
            write!(f, "Rp{}", group_thousands(self.0.unsigned_abs()))
        }
    }
}

/// Render a magnitude with `.` thousand-separators, Indonesian style
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

impl Add for Rupiah {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Rupiah {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Rupiah {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Rupiah {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Rupiah {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Rupiah {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rupiah::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        let m = Rupiah::new(5000);
        assert_eq!(m.value(), 5000);
        assert!(m.is_positive());
        assert!(!m.is_zero());
        assert!(Rupiah::zero().is_zero());
        assert!(Rupiah::new(-100).is_negative());
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format!("{}", Rupiah::new(0)), "Rp0");
        assert_eq!(format!("{}", Rupiah::new(999)), "Rp999");
        assert_eq!(format!("{}", Rupiah::new(5000)), "Rp5.000");
        assert_eq!(format!("{}", Rupiah::new(25000)), "Rp25.000");
        assert_eq!(format!("{}", Rupiah::new(5_000_000)), "Rp5.000.000");
        assert_eq!(format!("{}", Rupiah::new(-1500)), "-Rp1.500");
    }

    #[test]
    fn test_arithmetic() {
        let a = Rupiah::new(1000);
        let b = Rupiah::new(400);

        assert_eq!((a + b).value(), 1400);
        assert_eq!((a - b).value(), 600);
        assert_eq!((-a).value(), -1000);

        let mut c = a;
        c += b;
        assert_eq!(c.value(), 1400);
        c -= a;
        assert_eq!(c.value(), 400);
    }

    #[test]
    fn test_comparison() {
        assert!(Rupiah::new(1000) > Rupiah::new(500));
        assert_eq!(Rupiah::new(1000), Rupiah::new(1000));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Rupiah::new(100), Rupiah::new(200), Rupiah::new(300)];
        let total: Rupiah = amounts.into_iter().sum();
        assert_eq!(total.value(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Rupiah::new(25000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "25000");

        let deserialized: Rupiah = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}

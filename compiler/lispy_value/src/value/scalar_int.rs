//! Integer newtype that prevents unchecked arithmetic.
//!
//! `ScalarInt` wraps `i64` and intentionally does NOT implement `Add`, `Sub`,
//! `Mul`, `Div`, or `Neg`. Every fold step in the builtin dispatcher goes
//! through a checked method returning `Option<ScalarInt>`, so an overflow
//! surfaces as an error value instead of a panic or a silent wrap.

use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ScalarInt(i64);

impl ScalarInt {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on overflow.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.0.checked_mul(rhs.0).map(Self)
    }

    /// Truncating division. Returns `None` on division by zero or on
    /// `i64::MIN / -1`.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.0.checked_div(rhs.0).map(Self)
    }

    /// Checked negation. Returns `None` for `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(Self)
    }
}

impl From<i64> for ScalarInt {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ScalarInt> for i64 {
    #[inline]
    fn from(value: ScalarInt) -> Self {
        value.0
    }
}

/// Decimal literal, optionally negative. Out-of-range text is an error, not a
/// clamp.
impl FromStr for ScalarInt {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl fmt::Debug for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_overflow() {
        assert_eq!(
            ScalarInt::new(2).checked_add(ScalarInt::new(3)),
            Some(ScalarInt::new(5))
        );
        assert_eq!(ScalarInt::MAX.checked_add(ScalarInt::ONE), None);
    }

    #[test]
    fn checked_sub_overflow() {
        assert_eq!(ScalarInt::MIN.checked_sub(ScalarInt::ONE), None);
    }

    #[test]
    fn checked_mul_overflow() {
        assert_eq!(ScalarInt::MAX.checked_mul(ScalarInt::new(2)), None);
    }

    #[test]
    fn checked_div_truncates_toward_zero() {
        assert_eq!(
            ScalarInt::new(-7).checked_div(ScalarInt::new(2)),
            Some(ScalarInt::new(-3))
        );
        assert_eq!(ScalarInt::new(7).checked_div(ScalarInt::ZERO), None);
        assert_eq!(ScalarInt::MIN.checked_div(ScalarInt::new(-1)), None);
    }

    #[test]
    fn checked_neg_min_overflow() {
        assert_eq!(ScalarInt::new(5).checked_neg(), Some(ScalarInt::new(-5)));
        assert_eq!(ScalarInt::MIN.checked_neg(), None);
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!("-42".parse::<ScalarInt>(), Ok(ScalarInt::new(-42)));
        assert_eq!(
            "9223372036854775807".parse::<ScalarInt>(),
            Ok(ScalarInt::MAX)
        );
        assert!("9223372036854775808".parse::<ScalarInt>().is_err());
        assert!("-9223372036854775809".parse::<ScalarInt>().is_err());
    }
}

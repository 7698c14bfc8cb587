//! Rational number type for frame rates, frame durations and time values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// A rational number represented as a numerator and denominator.
///
/// Unlike a general purpose rational type, a zero denominator is tolerated and
/// follows floating-point division semantics when resolved with
/// [`Fraction::double_value`] (positive or negative infinity, or NaN for `0/0`).
/// Values are never reduced implicitly; call [`Fraction::reduced`] for the
/// simplest form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Create a new fraction as given, without reduction.
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create a fraction from an integer.
    pub const fn from_int(n: i64) -> Self {
        Self::new(n, 1)
    }

    /// Zero (`0/1`).
    pub const fn zero() -> Self {
        Self::new(0, 1)
    }

    /// Numerator.
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Denominator.
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Resolve the fraction to a floating-point value.
    pub fn double_value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Check if the fraction resolves to zero.
    pub fn is_zero(&self) -> bool {
        self.numerator == 0 && self.denominator != 0
    }

    /// Check if the fraction resolves to a negative value.
    pub fn is_negative(&self) -> bool {
        (self.numerator < 0) != (self.denominator < 0) && self.numerator != 0
    }

    /// Check if the fraction is already in its simplest form.
    pub fn is_simplest_form(&self) -> bool {
        *self == self.reduced()
    }

    /// Reduce the fraction to its simplest form.
    ///
    /// The sign is carried by the numerator. A zero denominator is left alone
    /// apart from normalizing the numerator to `-1`, `0` or `1`.
    pub fn reduced(&self) -> Self {
        if self.denominator == 0 {
            return Self::new(self.numerator.signum(), 0);
        }
        if self.numerator == 0 {
            return Self::zero();
        }
        let g = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        let (num, den) = (self.numerator / g as i64, self.denominator / g as i64);
        if den < 0 {
            Self::new(num.saturating_neg(), den.saturating_neg())
        } else {
            Self::new(num, den)
        }
    }

    /// Move any negative sign onto the numerator without reducing.
    pub fn normalized(&self) -> Self {
        if self.denominator < 0 {
            Self::new(
                self.numerator.saturating_neg(),
                self.denominator.saturating_neg(),
            )
        } else {
            *self
        }
    }

    /// Swap numerator and denominator.
    pub fn inverted(&self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::new(
            self.numerator.saturating_abs(),
            self.denominator.saturating_abs(),
        )
    }

    /// Compare the resolved values of two fractions.
    ///
    /// `1/2` and `2/4` are equal by value although they are different literals.
    pub fn is_equal(&self, other: &Self) -> bool {
        if self.denominator == 0 || other.denominator == 0 {
            let (a, b) = (self.double_value(), other.double_value());
            return a == b || (a.is_nan() && b.is_nan());
        }
        self.numerator as i128 * other.denominator as i128
            == other.numerator as i128 * self.denominator as i128
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(self.numerator.saturating_neg(), self.denominator)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<(i64, i64)> for Fraction {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}

/// Greatest common divisor (Euclid).
pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fraction_not_reduced_implicitly() {
        let f = Fraction::new(4, 8);
        assert_eq!(f.numerator(), 4);
        assert_eq!(f.denominator(), 8);
        assert!(!f.is_simplest_form());
    }

    #[test]
    fn test_fraction_reduced() {
        assert_eq!(Fraction::new(4, 8).reduced(), Fraction::new(1, 2));
        assert_eq!(Fraction::new(1, -2).reduced(), Fraction::new(-1, 2));
        assert_eq!(Fraction::new(-3, -9).reduced(), Fraction::new(1, 3));
        assert_eq!(Fraction::new(0, 5).reduced(), Fraction::zero());
        assert_eq!(Fraction::new(30000, 1001).reduced(), Fraction::new(30000, 1001));
    }

    #[test]
    fn test_fraction_zero_denominator() {
        let f = Fraction::new(5, 0);
        assert_eq!(f.double_value(), f64::INFINITY);
        assert_eq!(Fraction::new(-5, 0).double_value(), f64::NEG_INFINITY);
        assert!(Fraction::new(0, 0).double_value().is_nan());
        assert_eq!(f.reduced(), Fraction::new(1, 0));
    }

    #[test]
    fn test_fraction_sign() {
        assert!(Fraction::new(-1, 2).is_negative());
        assert!(Fraction::new(1, -2).is_negative());
        assert!(!Fraction::new(-1, -2).is_negative());
        assert!(!Fraction::new(0, -2).is_negative());
        assert_eq!(Fraction::new(1, -2).normalized(), Fraction::new(-1, 2));
    }

    #[test]
    fn test_fraction_is_equal() {
        assert!(Fraction::new(1, 2).is_equal(&Fraction::new(2, 4)));
        assert!(Fraction::new(60000, 2002).is_equal(&Fraction::new(30000, 1001)));
        assert!(!Fraction::new(1, 2).is_equal(&Fraction::new(1, 3)));
        assert!(Fraction::new(1, 0).is_equal(&Fraction::new(7, 0)));
        assert_ne!(Fraction::new(1, 2), Fraction::new(2, 4));
    }

    #[test]
    fn test_fraction_display() {
        assert_eq!(Fraction::new(24000, 1001).to_string(), "24000/1001");
        assert_eq!(format!("{:?}", Fraction::new(1, 2)), "Fraction(1/2)");
    }

    #[test]
    fn test_fraction_inverted_and_neg() {
        assert_eq!(Fraction::new(1001, 30000).inverted(), Fraction::new(30000, 1001));
        assert_eq!(-Fraction::new(1, 2), Fraction::new(-1, 2));
        assert_eq!(Fraction::new(-1, -2).abs(), Fraction::new(1, 2));
    }
}

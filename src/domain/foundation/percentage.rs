//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a Percentage from a numerator/denominator pair.
    ///
    /// A zero denominator yields zero percent. The result is truncated,
    /// not rounded, so 1/3 is 33%.
    pub fn from_ratio(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        Self::new(((numerator * 100) / denominator).min(100) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_accepts_valid_values() {
        assert_eq!(Percentage::new(0).value(), 0);
        assert_eq!(Percentage::new(40).value(), 40);
        assert_eq!(Percentage::new(100).value(), 100);
    }

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        let result = Percentage::try_new(101);
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "percentage");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn from_ratio_computes_step_fractions() {
        assert_eq!(Percentage::from_ratio(2, 5).value(), 40);
        assert_eq!(Percentage::from_ratio(0, 5).value(), 0);
        assert_eq!(Percentage::from_ratio(5, 5).value(), 100);
    }

    #[test]
    fn from_ratio_truncates() {
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
    }

    #[test]
    fn from_ratio_zero_denominator_is_zero() {
        assert_eq!(Percentage::from_ratio(3, 0), Percentage::ZERO);
    }

    #[test]
    fn percentage_as_fraction_converts_correctly() {
        assert!((Percentage::new(0).as_fraction() - 0.0).abs() < f64::EPSILON);
        assert!((Percentage::new(40).as_fraction() - 0.4).abs() < f64::EPSILON);
        assert!((Percentage::new(100).as_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }
}

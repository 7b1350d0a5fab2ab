// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Length Measure
//!
//! A millimeter length newtype with a *total* order. Coin diameters and slot
//! size limits are compared constantly during allocation; `f64`'s partial
//! order would force `partial_cmp().unwrap()` at every comparison site, so
//! `Millimeters` fixes the order once via `f64::total_cmp` and validates at
//! construction instead.
//!
//! ## Usage
//!
//! ```rust
//! use numisma_core::measure::Millimeters;
//!
//! let diameter = Millimeters::new(23.25);
//! let limit = Millimeters::new(25.0);
//! assert!(diameter <= limit);
//! assert_eq!(format!("{}", limit), "25 mm");
//! ```

use std::cmp::Ordering;

/// A length in millimeters.
///
/// Wraps an `f64` that is guaranteed finite and non-negative by the checked
/// constructors, and implements `Eq`/`Ord` through `f64::total_cmp` so the
/// type can be sorted and used as an ordering key directly.
///
/// # Examples
///
/// ```rust
/// # use numisma_core::measure::Millimeters;
///
/// let mut sizes = vec![Millimeters::new(34.0), Millimeters::new(17.0)];
/// sizes.sort();
/// assert_eq!(sizes[0], Millimeters::new(17.0));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct Millimeters(f64);

impl Millimeters {
    /// Zero length.
    pub const ZERO: Millimeters = Millimeters(0.0);

    /// Creates a new `Millimeters` from a raw value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative, NaN, or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_core::measure::Millimeters;
    ///
    /// let d = Millimeters::new(44.0);
    /// assert_eq!(d.get(), 44.0);
    /// ```
    #[inline]
    pub fn new(value: f64) -> Self {
        assert!(
            value.is_finite() && value >= 0.0,
            "Invalid length: value must be finite and non-negative"
        );
        Self(value)
    }

    /// Creates a new `Millimeters` if the input is valid.
    ///
    /// Returns `None` if `value` is negative, NaN, or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_core::measure::Millimeters;
    ///
    /// assert!(Millimeters::try_new(17.0).is_some());
    /// assert!(Millimeters::try_new(-1.0).is_none());
    /// assert!(Millimeters::try_new(f64::NAN).is_none());
    /// ```
    #[inline]
    pub fn try_new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the raw value in millimeters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_core::measure::Millimeters;
    ///
    /// let d = Millimeters::new(25.5);
    /// assert_eq!(d.get(), 25.5);
    /// ```
    #[inline(always)]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Millimeters {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Millimeters {}

impl PartialOrd for Millimeters {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Millimeters {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for Millimeters {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // total_cmp equality holds exactly when the bit patterns match, so
        // hashing the bits agrees with Eq.
        state.write_u64(self.0.to_bits());
    }
}

impl std::fmt::Debug for Millimeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Millimeters").field(&self.0).finish()
    }
}

impl std::fmt::Display for Millimeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let d = Millimeters::new(23.25);
        assert_eq!(d.get(), 23.25);
    }

    #[test]
    #[should_panic(expected = "Invalid length")]
    fn test_new_rejects_negative() {
        let _ = Millimeters::new(-0.5);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Millimeters::try_new(17.0), Some(Millimeters::new(17.0)));
        assert_eq!(Millimeters::try_new(f64::NAN), None);
        assert_eq!(Millimeters::try_new(f64::INFINITY), None);
        assert_eq!(Millimeters::try_new(-3.0), None);
    }

    #[test]
    fn test_total_order() {
        let mut sizes = vec![
            Millimeters::new(34.0),
            Millimeters::new(17.0),
            Millimeters::new(25.0),
        ];
        sizes.sort();
        assert_eq!(
            sizes,
            vec![
                Millimeters::new(17.0),
                Millimeters::new(25.0),
                Millimeters::new(34.0),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Millimeters::new(44.0)), "44 mm");
        assert_eq!(format!("{}", Millimeters::new(23.5)), "23.5 mm");
    }

    #[test]
    fn test_zero() {
        assert_eq!(Millimeters::ZERO, Millimeters::new(0.0));
        assert!(Millimeters::ZERO < Millimeters::new(0.1));
    }
}

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

//! # Calendar Day Primitives
//!
//! Strongly typed building blocks for day-granular calendar arithmetic:
//!
//! - `DayPoint<T>`: a specific calendar day, counted in whole days from an
//!   arbitrary caller-chosen epoch.
//! - `DayDelta<T>`: a signed distance between two `DayPoint`s, in whole days.
//!
//! The newtypes keep day counts and day distances apart at compile time:
//! two `DayPoint`s cannot be added, and a `DayDelta` cannot be used where a
//! calendar day is expected. Operator impls use checked arithmetic and panic
//! with a named location on overflow; `checked_*` variants are available
//! where the caller wants to handle overflow itself.

use num_traits::{PrimInt, Signed};
use std::fmt::Display;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A calendar day, stored as a whole-day count from a caller-chosen epoch.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayPoint<T: PrimInt>(T);

/// A signed number of whole days between two `DayPoint`s.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayDelta<T: PrimInt + Signed>(T);

impl<T: PrimInt> DayPoint<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        DayPoint(value)
    }

    #[inline]
    pub fn zero() -> Self {
        DayPoint(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }
}

impl<T: PrimInt + Signed> DayPoint<T> {
    #[inline]
    pub fn checked_add(self, delta: DayDelta<T>) -> Option<Self> {
        self.0.checked_add(&delta.0).map(DayPoint)
    }

    #[inline]
    pub fn checked_sub(self, delta: DayDelta<T>) -> Option<Self> {
        self.0.checked_sub(&delta.0).map(DayPoint)
    }
}

impl<T: PrimInt + Signed> DayDelta<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline]
    pub fn zero() -> Self {
        Self(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn checked_add(self, rhs: DayDelta<T>) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(DayDelta)
    }

    #[inline]
    pub fn checked_sub(self, rhs: DayDelta<T>) -> Option<Self> {
        self.0.checked_sub(&rhs.0).map(DayDelta)
    }
}

/// Day-count separation between the end of one span and the start of a later
/// one: `later_start - earlier_end`.
///
/// Negative when the later span starts before the earlier one ends
/// (overlap), zero when it starts on the same day, `1` when the spans sit on
/// adjacent days.
#[inline]
pub fn gap_between<T: PrimInt + Signed>(
    earlier_end: DayPoint<T>,
    later_start: DayPoint<T>,
) -> DayDelta<T> {
    later_start - earlier_end
}

impl<T: PrimInt> Default for DayPoint<T> {
    #[inline]
    fn default() -> Self {
        DayPoint(T::zero())
    }
}

impl<T: PrimInt + Signed> Default for DayDelta<T> {
    #[inline]
    fn default() -> Self {
        DayDelta::zero()
    }
}

impl<T: PrimInt + Display> Display for DayPoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DayPoint({})", self.value())
    }
}

impl<T: PrimInt + Signed + Display> Display for DayDelta<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DayDelta({})", self.0)
    }
}

impl<T: PrimInt> From<T> for DayPoint<T> {
    #[inline]
    fn from(v: T) -> Self {
        DayPoint(v)
    }
}

impl<T: PrimInt + Signed> From<T> for DayDelta<T> {
    #[inline]
    fn from(v: T) -> Self {
        DayDelta(v)
    }
}

impl<T: PrimInt + Signed> Add<DayDelta<T>> for DayPoint<T> {
    type Output = DayPoint<T>;

    #[inline]
    fn add(self, rhs: DayDelta<T>) -> Self::Output {
        DayPoint(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in DayPoint + DayDelta"),
        )
    }
}

impl<T: PrimInt + Signed> AddAssign<DayDelta<T>> for DayPoint<T> {
    fn add_assign(&mut self, rhs: DayDelta<T>) {
        self.0 = self
            .0
            .checked_add(&rhs.0)
            .expect("overflow in DayPoint += DayDelta");
    }
}

impl<T: PrimInt + Signed> Sub<DayDelta<T>> for DayPoint<T> {
    type Output = DayPoint<T>;

    #[inline]
    fn sub(self, rhs: DayDelta<T>) -> Self::Output {
        DayPoint(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in DayPoint - DayDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Sub<DayPoint<T>> for DayPoint<T> {
    type Output = DayDelta<T>;

    #[inline]
    fn sub(self, rhs: DayPoint<T>) -> Self::Output {
        DayDelta::new(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in DayPoint - DayPoint"),
        )
    }
}

impl<T: PrimInt + Signed> Add for DayDelta<T> {
    type Output = DayDelta<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        DayDelta(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in DayDelta + DayDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Sub for DayDelta<T> {
    type Output = DayDelta<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        DayDelta(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in DayDelta - DayDelta"),
        )
    }
}

impl<T: PrimInt + Signed> AddAssign for DayDelta<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(&rhs.0)
            .expect("overflow in DayDelta += DayDelta");
    }
}

impl<T: PrimInt + Signed> SubAssign for DayDelta<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_sub(&rhs.0)
            .expect("underflow in DayDelta -= DayDelta");
    }
}

impl<T: PrimInt + Signed> Neg for DayDelta<T> {
    type Output = DayDelta<T>;

    fn neg(self) -> Self::Output {
        DayDelta::new(
            T::zero()
                .checked_sub(&self.0)
                .expect("underflow in -DayDelta"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_point_creation() {
        let d = DayPoint::new(42);
        assert_eq!(d.value(), 42);
    }

    #[test]
    fn test_day_point_display() {
        let d = DayPoint::new(42);
        assert_eq!(format!("{}", d), "DayPoint(42)");
    }

    #[test]
    fn test_day_point_from() {
        let d: DayPoint<i64> = 7i64.into();
        assert_eq!(d.value(), 7);
    }

    #[test]
    fn test_day_point_default_is_epoch() {
        let d: DayPoint<i32> = DayPoint::default();
        assert_eq!(d, DayPoint::zero());
    }

    #[test]
    fn test_day_delta_creation() {
        let d = DayDelta::new(-3);
        assert_eq!(d.value(), -3);
    }

    #[test]
    fn test_day_delta_display() {
        let d = DayDelta::new(-3);
        assert_eq!(format!("{}", d), "DayDelta(-3)");
    }

    #[test]
    fn test_day_delta_abs() {
        assert_eq!(DayDelta::new(-5).abs(), DayDelta::new(5));
        assert_eq!(DayDelta::new(5).abs(), DayDelta::new(5));
    }

    #[test]
    fn test_day_delta_sign_predicates() {
        assert!(DayDelta::new(-1).is_negative());
        assert!(DayDelta::new(1).is_positive());
        assert!(DayDelta::new(0).is_zero());
        assert!(!DayDelta::new(0).is_negative());
        assert!(!DayDelta::new(0).is_positive());
    }

    #[test]
    fn test_day_point_plus_delta() {
        assert_eq!(DayPoint::new(10) + DayDelta::new(5), DayPoint::new(15));
    }

    #[test]
    fn test_day_point_minus_delta() {
        assert_eq!(DayPoint::new(10) - DayDelta::new(5), DayPoint::new(5));
    }

    #[test]
    fn test_day_point_add_assign() {
        let mut d = DayPoint::new(10);
        d += DayDelta::new(2);
        assert_eq!(d, DayPoint::new(12));
    }

    #[test]
    fn test_day_point_minus_day_point_is_delta() {
        assert_eq!(DayPoint::new(20) - DayPoint::new(13), DayDelta::new(7));
        assert_eq!(DayPoint::new(13) - DayPoint::new(20), DayDelta::new(-7));
    }

    #[test]
    fn test_day_delta_arithmetic() {
        assert_eq!(DayDelta::new(4) + DayDelta::new(3), DayDelta::new(7));
        assert_eq!(DayDelta::new(4) - DayDelta::new(3), DayDelta::new(1));
        assert_eq!(-DayDelta::new(4), DayDelta::new(-4));
    }

    #[test]
    fn test_day_delta_assign_ops() {
        let mut d = DayDelta::new(1);
        d += DayDelta::new(2);
        d -= DayDelta::new(4);
        assert_eq!(d, DayDelta::new(-1));
    }

    #[test]
    fn test_checked_add_overflow_is_none() {
        let d = DayPoint::new(i32::MAX);
        assert_eq!(d.checked_add(DayDelta::new(1)), None);
        assert_eq!(d.checked_sub(DayDelta::new(-1)), None);
    }

    #[test]
    fn test_checked_delta_ops() {
        let d = DayDelta::new(i32::MAX);
        assert_eq!(d.checked_add(DayDelta::new(1)), None);
        assert_eq!(
            DayDelta::new(1i32).checked_sub(DayDelta::new(2)),
            Some(DayDelta::new(-1))
        );
    }

    #[test]
    #[should_panic(expected = "overflow in DayPoint + DayDelta")]
    fn test_day_point_add_panics_on_overflow() {
        let _ = DayPoint::new(i32::MAX) + DayDelta::new(1);
    }

    #[test]
    #[should_panic(expected = "underflow in DayPoint - DayPoint")]
    fn test_day_point_sub_panics_on_underflow() {
        let _ = DayPoint::new(i32::MIN) - DayPoint::new(1);
    }

    #[test]
    fn test_gap_between_adjacent_days_is_one() {
        let end = DayPoint::new(10);
        let start = DayPoint::new(11);
        assert_eq!(gap_between(end, start), DayDelta::new(1));
    }

    #[test]
    fn test_gap_between_same_day_is_zero() {
        let d = DayPoint::new(10);
        assert_eq!(gap_between(d, d), DayDelta::new(0));
    }

    #[test]
    fn test_gap_between_overlap_is_negative() {
        let end = DayPoint::new(10);
        let start = DayPoint::new(7);
        assert_eq!(gap_between(end, start), DayDelta::new(-3));
    }
}

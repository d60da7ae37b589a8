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

//! Closed calendar spans.
//!
//! A `DaySpan` covers every day from `from` through `to`, both ends
//! inclusive. Calendar records ("active from Jan 3 to Jan 7") are naturally
//! closed, so the comparisons here differ from half-open interval math:
//! two spans overlap when neither ends before the other starts, and two
//! spans on adjacent days have a gap of exactly one.

use crate::day::{gap_between, DayDelta, DayPoint};
use num_traits::{PrimInt, Signed};
use std::fmt;

/// A closed day span `[from, to]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DaySpan<T: PrimInt> {
    from: DayPoint<T>,
    to: DayPoint<T>,
}

impl<T: PrimInt> DaySpan<T> {
    /// Creates a span covering `a` through `b` inclusive.
    ///
    /// Reversed bounds are swapped, so `from <= to` always holds.
    #[inline]
    pub fn new(a: DayPoint<T>, b: DayPoint<T>) -> Self {
        let (from, to) = if b < a { (b, a) } else { (a, b) };
        Self { from, to }
    }

    #[inline]
    pub fn from(&self) -> DayPoint<T> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> DayPoint<T> {
        self.to
    }

    /// `true` when `day` lies within the span, ends included.
    #[inline]
    pub fn contains_day(&self, day: DayPoint<T>) -> bool {
        self.from <= day && day <= self.to
    }

    /// `true` when the spans share at least one day.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// `true` when `other` lies entirely within this span.
    #[inline]
    pub fn covers(&self, other: &Self) -> bool {
        self.from <= other.from && other.to <= self.to
    }
}

impl<T: PrimInt + Signed> DaySpan<T> {
    /// Day-count separation from the end of this span to the start of
    /// `later`: negative on overlap, zero when `later` starts the day this
    /// span ends, one when the spans sit on adjacent days.
    #[inline]
    pub fn gap_to(&self, later: &Self) -> DayDelta<T> {
        gap_between(self.to, later.from)
    }

    /// Distance from the first to the last covered day. A single-day span
    /// has extent zero.
    #[inline]
    pub fn extent(&self) -> DayDelta<T> {
        self.to - self.from
    }
}

impl<T: PrimInt + fmt::Display> fmt::Display for DaySpan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

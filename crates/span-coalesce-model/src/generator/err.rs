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

use span_coalesce_core::{day::DayDelta, CalendarUnit};
use std::fmt::Display;

/// The break gap range does not clear the coalescable gap range, so the
/// generated instances would contain no genuine splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakGapWithinToleranceError<T: CalendarUnit> {
    coalescable_gap_max: DayDelta<T>,
    break_gap_min: DayDelta<T>,
}

impl<T: CalendarUnit> BreakGapWithinToleranceError<T> {
    #[inline]
    pub fn new(coalescable_gap_max: DayDelta<T>, break_gap_min: DayDelta<T>) -> Self {
        Self {
            coalescable_gap_max,
            break_gap_min,
        }
    }

    #[inline]
    pub fn coalescable_gap_max(&self) -> DayDelta<T> {
        self.coalescable_gap_max
    }

    #[inline]
    pub fn break_gap_min(&self) -> DayDelta<T> {
        self.break_gap_min
    }
}

impl<T: CalendarUnit> Display for BreakGapWithinToleranceError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Break gap minimum {} does not exceed coalescable gap maximum {}",
            self.break_gap_min, self.coalescable_gap_max
        )
    }
}

impl<T: CalendarUnit> std::error::Error for BreakGapWithinToleranceError<T> {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FragmentGenConfigBuildError<T: CalendarUnit> {
    InvalidFragmentRange { min: usize, max: usize },
    InvalidExtentRange { min: DayDelta<T>, max: DayDelta<T> },
    InvalidCoalescableGapRange { min: DayDelta<T>, max: DayDelta<T> },
    InvalidBreakGapRange { min: DayDelta<T>, max: DayDelta<T> },
    InvalidBreakProbability(f64),
    BreakGapWithinTolerance(BreakGapWithinToleranceError<T>),
}

impl<T: CalendarUnit> Display for FragmentGenConfigBuildError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use FragmentGenConfigBuildError::*;
        match self {
            InvalidFragmentRange { min, max } => {
                write!(f, "Invalid fragment count range: {min}..={max}")
            }
            InvalidExtentRange { min, max } => {
                write!(f, "Invalid span extent range: {min}..={max}")
            }
            InvalidCoalescableGapRange { min, max } => {
                write!(f, "Invalid coalescable gap range: {min}..={max}")
            }
            InvalidBreakGapRange { min, max } => {
                write!(f, "Invalid break gap range: {min}..={max}")
            }
            InvalidBreakProbability(p) => {
                write!(f, "Break probability {p} is outside [0, 1]")
            }
            BreakGapWithinTolerance(e) => write!(f, "{e}"),
        }
    }
}

impl<T: CalendarUnit> std::error::Error for FragmentGenConfigBuildError<T> {}

impl<T: CalendarUnit> From<BreakGapWithinToleranceError<T>> for FragmentGenConfigBuildError<T> {
    fn from(err: BreakGapWithinToleranceError<T>) -> Self {
        Self::BreakGapWithinTolerance(err)
    }
}

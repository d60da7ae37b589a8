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

//! Ungrouped coalescing: merge an ordered span series and drop absorbed
//! positions.
//!
//! The pass keeps a marker on the currently open span. A candidate whose
//! start lies within `max_gap` days of the open span's (working) end is
//! absorbed; one further away opens a new span and becomes the marker.
//! Absorption extends the open span's end only when the candidate's end is
//! strictly greater, and end-associated attributes follow that extension,
//! so the surviving row's end attributes describe whichever absorbed row
//! produced the final end (ties keep the earlier row's values).

use crate::mask::KeepMask;
use span_coalesce_core::{
    day::{gap_between, DayDelta, DayPoint},
    CalendarUnit,
};
use span_coalesce_model::series::{AttrColumn, SpanSeries};
use std::fmt::Display;
use tracing::{debug, instrument};

/// A gap tolerance below zero. A tolerance of zero already requires spans to
/// touch; negative values have no meaning for closed day spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeGapToleranceError<T: CalendarUnit> {
    max_gap: DayDelta<T>,
}

impl<T: CalendarUnit> NegativeGapToleranceError<T> {
    #[inline]
    pub fn new(max_gap: DayDelta<T>) -> Self {
        Self { max_gap }
    }

    #[inline]
    pub fn max_gap(&self) -> DayDelta<T> {
        self.max_gap
    }
}

impl<T: CalendarUnit> Display for NegativeGapToleranceError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gap tolerance {} is negative", self.max_gap)
    }
}

impl<T: CalendarUnit> std::error::Error for NegativeGapToleranceError<T> {}

/// Filtered output of the ungrouped pass: kept positions only, in input
/// order, with the merge-extended `to` column and merge-propagated
/// end-associated attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoalescedSeries<T: CalendarUnit, A> {
    from: Vec<DayPoint<T>>,
    to: Vec<DayPoint<T>>,
    start_attrs: Vec<AttrColumn<A>>,
    end_attrs: Vec<AttrColumn<A>>,
    source_len: usize,
}

impl<T: CalendarUnit, A> CoalescedSeries<T, A> {
    /// Number of kept positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.from.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// Number of positions in the input series.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Number of positions absorbed into a kept span.
    #[inline]
    pub fn absorbed_count(&self) -> usize {
        self.source_len - self.from.len()
    }

    #[inline]
    pub fn from_column(&self) -> &[DayPoint<T>] {
        &self.from
    }

    #[inline]
    pub fn to_column(&self) -> &[DayPoint<T>] {
        &self.to
    }

    #[inline]
    pub fn start_attrs(&self) -> &[AttrColumn<A>] {
        &self.start_attrs
    }

    #[inline]
    pub fn end_attrs(&self) -> &[AttrColumn<A>] {
        &self.end_attrs
    }
}

/// Merges an ordered span series under a fixed gap tolerance.
///
/// Spans whose start is separated from the open span's end by at most
/// `max_gap` days are merged into it; a separation of `max_gap + 1` or more
/// opens a new span. Inputs must already be sorted ascending by `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coalescer<T: CalendarUnit> {
    max_gap: DayDelta<T>,
}

impl<T: CalendarUnit> Coalescer<T> {
    /// Creates a coalescer with the given tolerance. Negative tolerances
    /// are rejected.
    pub fn new(max_gap: DayDelta<T>) -> Result<Self, NegativeGapToleranceError<T>> {
        if max_gap.is_negative() {
            return Err(NegativeGapToleranceError::new(max_gap));
        }
        Ok(Self { max_gap })
    }

    #[inline]
    pub fn max_gap(&self) -> DayDelta<T> {
        self.max_gap
    }

    /// Runs the single forward merge-and-filter pass.
    ///
    /// The series' own columns are left untouched; the pass works on owned
    /// copies and returns freshly allocated output.
    #[instrument(skip_all, fields(rows = series.len(), kept = tracing::field::Empty))]
    pub fn coalesce<A: Clone>(&self, series: &SpanSeries<T, A>) -> CoalescedSeries<T, A> {
        let n = series.len();
        let from = series.from_column();
        let mut to = series.to_column().to_vec();
        let mut end_values: Vec<Vec<A>> = series
            .end_attrs()
            .iter()
            .map(|col| col.values().to_vec())
            .collect();

        let mut mask = KeepMask::new(n);
        let mut marker = 0usize;

        for i in 1..n {
            // The working `to[marker]` may already have been extended by an
            // earlier absorption; the gap test runs against that value.
            let gap = gap_between(to[marker], from[i]);
            if gap > self.max_gap {
                mask.mark(i);
                marker = i;
            } else if to[i] > to[marker] {
                to[marker] = to[i];
                for col in end_values.iter_mut() {
                    col[marker] = col[i].clone();
                }
            }
        }

        let kept = mask.kept_count();
        tracing::Span::current().record("kept", kept);
        debug!(absorbed = n - kept, "coalesced span series");

        let start_attrs = series
            .start_attrs()
            .iter()
            .map(|col| AttrColumn::new(col.name(), mask.filter(col.values())))
            .collect();
        let end_attrs = series
            .end_attrs()
            .iter()
            .zip(end_values)
            .map(|(col, values)| AttrColumn::new(col.name(), mask.filter(&values)))
            .collect();

        CoalescedSeries {
            from: mask.filter(from),
            to: mask.filter(&to),
            start_attrs,
            end_attrs,
            source_len: n,
        }
    }
}

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

//! Grouped coalescing: merge within key groups, annotate instead of filter.
//!
//! The merge rule is the same single-pass marker walk as the ungrouped
//! coalescer, restarted at every group boundary. No row is dropped: each
//! row carries its signed gap to the group's open span in a `difference`
//! column, with group-first rows holding the boundary sentinel. Callers
//! filter on `difference` themselves when they want the compacted view.

use crate::coalesce::NegativeGapToleranceError;
use num_traits::FromPrimitive;
use span_coalesce_core::{
    day::{gap_between, DayDelta, DayPoint},
    CalendarUnit,
};
use span_coalesce_model::table::GroupedSpanTable;
use tracing::{debug, instrument};

/// The `difference` value marking a row that opens a new group.
///
/// Gaps between real-world calendar records stay far below this; the value
/// doubles as "no predecessor in this group".
pub fn group_boundary_sentinel<T: CalendarUnit>() -> DayDelta<T> {
    DayDelta::new(FromPrimitive::from_i32(9999).expect("sentinel fits in calendar unit"))
}

/// Full-length output of the grouped pass: every input row, annotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSpanTable<K, T: CalendarUnit, A> {
    id: Vec<K>,
    difference: Vec<DayDelta<T>>,
    from: Vec<DayPoint<T>>,
    to: Vec<DayPoint<T>>,
    begin: Vec<A>,
    end_first: Vec<A>,
    end_second: Vec<A>,
}

impl<K, T: CalendarUnit, A> AnnotatedSpanTable<K, T, A> {
    /// Number of rows; always equals the input row count.
    #[inline]
    pub fn len(&self) -> usize {
        self.id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    #[inline]
    pub fn id_column(&self) -> &[K] {
        &self.id
    }

    /// Signed gap from each row's `from` to its group's open span end, or
    /// the boundary sentinel on group-first rows.
    #[inline]
    pub fn difference_column(&self) -> &[DayDelta<T>] {
        &self.difference
    }

    #[inline]
    pub fn from_column(&self) -> &[DayPoint<T>] {
        &self.from
    }

    /// Merge-extended `to` column.
    #[inline]
    pub fn to_column(&self) -> &[DayPoint<T>] {
        &self.to
    }

    #[inline]
    pub fn begin_column(&self) -> &[A] {
        &self.begin
    }

    #[inline]
    pub fn end_first_column(&self) -> &[A] {
        &self.end_first
    }

    #[inline]
    pub fn end_second_column(&self) -> &[A] {
        &self.end_second
    }
}

/// Merges spans within key groups under a fixed gap tolerance.
///
/// Rows must arrive sorted by group key, then ascending by `from` within
/// each group. The historical tolerance for this table shape is one day;
/// [`Default`] preserves it, the constructor accepts any non-negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedCoalescer<T: CalendarUnit> {
    max_gap: DayDelta<T>,
}

impl<T: CalendarUnit> GroupedCoalescer<T> {
    /// Creates a grouped coalescer with the given tolerance. Negative
    /// tolerances are rejected.
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

    /// Runs the single forward pass and returns the full-length annotated
    /// table. The input table is left untouched.
    #[instrument(skip_all, fields(rows = table.len(), groups = tracing::field::Empty))]
    pub fn coalesce<K, A>(&self, table: &GroupedSpanTable<K, T, A>) -> AnnotatedSpanTable<K, T, A>
    where
        K: PartialEq + Clone,
        A: Clone,
    {
        let n = table.len();
        let id = table.id_column().to_vec();
        let from = table.from_column().to_vec();
        let mut to = table.to_column().to_vec();
        let begin = table.begin_column().to_vec();
        let mut end_first = table.end_first_column().to_vec();
        let mut end_second = table.end_second_column().to_vec();

        let sentinel = group_boundary_sentinel::<T>();
        let mut difference = vec![sentinel; n];
        let mut marker = 0usize;
        let mut groups = usize::from(n > 0);

        for i in 1..n {
            if id[i] != id[i - 1] {
                // New group: reset the marker, leave the sentinel in place.
                marker = i;
                groups += 1;
                continue;
            }
            let gap = gap_between(to[marker], from[i]);
            difference[i] = gap;
            if gap > self.max_gap {
                marker = i;
            } else if to[i] > to[marker] {
                to[marker] = to[i];
                end_first[marker] = end_first[i].clone();
                end_second[marker] = end_second[i].clone();
            }
        }

        tracing::Span::current().record("groups", groups);
        debug!("annotated grouped span table");

        AnnotatedSpanTable {
            id,
            difference,
            from,
            to,
            begin,
            end_first,
            end_second,
        }
    }
}

impl<T: CalendarUnit> Default for GroupedCoalescer<T> {
    /// One day of tolerance: records on adjacent days merge.
    #[inline]
    fn default() -> Self {
        Self {
            max_gap: DayDelta::new(T::one()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use span_coalesce_core::span::DaySpan;
    use span_coalesce_model::table::GroupedSpanTableBuilder;

    fn day(v: i64) -> DayPoint<i64> {
        DayPoint::new(v)
    }

    fn days(vs: &[i64]) -> Vec<DayPoint<i64>> {
        vs.iter().copied().map(DayPoint::new).collect()
    }

    fn span(a: i64, b: i64) -> DaySpan<i64> {
        DaySpan::new(day(a), day(b))
    }

    fn deltas(vs: &[i64]) -> Vec<DayDelta<i64>> {
        vs.iter().copied().map(DayDelta::new).collect()
    }

    #[test]
    fn test_sentinel_value() {
        assert_eq!(group_boundary_sentinel::<i64>(), DayDelta::new(9999));
    }

    #[test]
    fn test_default_tolerance_is_one_day() {
        let c: GroupedCoalescer<i64> = GroupedCoalescer::default();
        assert_eq!(c.max_gap(), DayDelta::new(1));
    }

    #[test]
    fn test_negative_tolerance_is_rejected() {
        assert!(GroupedCoalescer::new(DayDelta::new(-2i64)).is_err());
    }

    #[test]
    fn test_empty_table() {
        let t = GroupedSpanTableBuilder::<char, i64, String>::new()
            .build()
            .unwrap();
        let out = GroupedCoalescer::default().coalesce(&t);
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_row_is_all_sentinel() {
        let t = GroupedSpanTableBuilder::new()
            .row('a', span(1, 3), "b", "x", "y")
            .build()
            .unwrap();
        let out = GroupedCoalescer::default().coalesce(&t);
        assert_eq!(out.len(), 1);
        assert_eq!(out.difference_column(), &deltas(&[9999]));
        assert_eq!(out.to_column(), &days(&[3]));
    }

    #[test]
    fn test_two_groups_with_merge_and_split() {
        // Group 'a' is one contiguous run; group 'b' breaks apart.
        let t = GroupedSpanTableBuilder::new()
            .row('a', span(1, 3), "b0", "x0", "y0")
            .row('a', span(4, 6), "b1", "x1", "y1")
            .row('a', span(7, 9), "b2", "x2", "y2")
            .row('b', span(1, 2), "b3", "x3", "y3")
            .row('b', span(50, 60), "b4", "x4", "y4")
            .build()
            .unwrap();
        let out = GroupedCoalescer::default().coalesce(&t);

        assert_eq!(out.difference_column(), &deltas(&[9999, 1, 1, 9999, 48]));
        // Group 'a' collapsed onto its first row.
        assert_eq!(out.to_column(), &days(&[9, 6, 9, 2, 60]));
        assert_eq!(out.end_first_column()[0], "x2");
        assert_eq!(out.end_second_column()[0], "y2");
        // Group 'b' split, so nothing was carried.
        assert_eq!(out.end_first_column()[3], "x3");
        // The id and begin columns pass through untouched.
        assert_eq!(out.id_column(), t.id_column());
        assert_eq!(out.begin_column(), t.begin_column());
    }

    #[test]
    fn test_marker_resets_at_group_boundary_regardless_of_gap() {
        // Group 'b' starts a day after 'a' ends; without the reset this
        // would read as a merge.
        let t = GroupedSpanTableBuilder::new()
            .row('a', span(1, 4), "b0", "x0", "y0")
            .row('b', span(5, 8), "b1", "x1", "y1")
            .build()
            .unwrap();
        let out = GroupedCoalescer::default().coalesce(&t);
        assert_eq!(out.difference_column(), &deltas(&[9999, 9999]));
        assert_eq!(out.to_column(), &days(&[4, 8]));
    }

    #[test]
    fn test_difference_is_measured_against_extended_end() {
        let t = GroupedSpanTableBuilder::new()
            .row('a', span(1, 3), "b0", "x0", "y0")
            .row('a', span(2, 8), "b1", "x1", "y1")
            .row('a', span(9, 12), "b2", "x2", "y2")
            .build()
            .unwrap();
        let out = GroupedCoalescer::default().coalesce(&t);
        // Row 2 sits 1 day after the extended end 8, not 6 days after the
        // original end 3.
        assert_eq!(out.difference_column(), &deltas(&[9999, -1, 1]));
        assert_eq!(out.to_column(), &days(&[12, 8, 12]));
        assert_eq!(out.end_first_column()[0], "x2");
    }

    #[test]
    fn test_absorbed_row_keeps_its_own_values() {
        let t = GroupedSpanTableBuilder::new()
            .row('a', span(1, 5), "b0", "x0", "y0")
            .row('a', span(3, 4), "b1", "x1", "y1")
            .build()
            .unwrap();
        let out = GroupedCoalescer::default().coalesce(&t);
        // Row 1 is absorbed without extending anything: the marker row keeps
        // its attributes and row 1 keeps its own.
        assert_eq!(out.end_first_column(), &["x0", "x1"]);
        assert_eq!(out.to_column(), &days(&[5, 4]));
        assert_eq!(out.difference_column(), &deltas(&[9999, -2]));
    }

    #[test]
    fn test_split_within_group_moves_marker() {
        let t = GroupedSpanTableBuilder::new()
            .row('a', span(1, 2), "b0", "x0", "y0")
            .row('a', span(40, 45), "b1", "x1", "y1")
            .row('a', span(46, 50), "b2", "x2", "y2")
            .build()
            .unwrap();
        let out = GroupedCoalescer::default().coalesce(&t);
        assert_eq!(out.difference_column(), &deltas(&[9999, 38, 1]));
        // Row 2 merges into row 1, not row 0.
        assert_eq!(out.to_column(), &days(&[2, 50, 50]));
        assert_eq!(out.end_first_column()[1], "x2");
    }

    #[test]
    fn test_custom_tolerance_widens_merges() {
        let t = GroupedSpanTableBuilder::new()
            .row('a', span(1, 2), "b0", "x0", "y0")
            .row('a', span(7, 9), "b1", "x1", "y1")
            .build()
            .unwrap();

        let strict = GroupedCoalescer::default().coalesce(&t);
        assert_eq!(strict.to_column(), &days(&[2, 9]));

        let lenient = GroupedCoalescer::new(DayDelta::new(5)).unwrap().coalesce(&t);
        assert_eq!(lenient.to_column(), &days(&[9, 9]));
        assert_eq!(lenient.end_first_column()[0], "x1");
    }

    #[test]
    fn test_input_table_is_not_mutated() {
        let t = GroupedSpanTableBuilder::new()
            .row('a', span(1, 3), "b0", "x0", "y0")
            .row('a', span(4, 9), "b1", "x1", "y1")
            .build()
            .unwrap();
        let before = t.clone();
        let _ = GroupedCoalescer::default().coalesce(&t);
        assert_eq!(t, before);
    }

    #[test]
    fn test_generic_key_types() {
        let t = GroupedSpanTableBuilder::new()
            .row(String::from("north"), span(1, 3), 10, 20, 30)
            .row(String::from("north"), span(4, 5), 11, 21, 31)
            .row(String::from("south"), span(1, 2), 12, 22, 32)
            .build()
            .unwrap();
        let out = GroupedCoalescer::default().coalesce(&t);
        assert_eq!(out.difference_column(), &deltas(&[9999, 1, 9999]));
        assert_eq!(out.to_column(), &days(&[5, 5, 2]));
        assert_eq!(out.end_first_column(), &[21, 21, 22]);
    }
}

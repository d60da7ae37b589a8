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

//! Ungrouped span input: parallel `from`/`to` columns plus attribute columns.
//!
//! The series is columnar because that is the shape the coalescing pass
//! consumes and produces: the engine reads `from`/`to` as slices, tracks a
//! keep mask over positions, and filters every column by it. Attribute
//! columns come in two roles. Start-associated columns describe a span's
//! beginning and are only ever filtered; end-associated columns describe its
//! end and follow the `to` value when spans merge.
//!
//! Ordering is a caller obligation: spans must already be sorted ascending
//! by `from`. The builder checks column alignment, not ordering.

use crate::err::{ColumnLengthMismatchError, SeriesBuildError};
use num_traits::PrimInt;
use span_coalesce_core::day::DayPoint;
use span_coalesce_core::span::DaySpan;

/// A named attribute column, aligned 1:1 with the span positions of its
/// container. Values are opaque; the workspace only copies and filters them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrColumn<A> {
    name: String,
    values: Vec<A>,
}

impl<A> AttrColumn<A> {
    #[inline]
    pub fn new(name: impl Into<String>, values: Vec<A>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn values(&self) -> &[A] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn into_values(self) -> Vec<A> {
        self.values
    }
}

/// An ordered run of spans with optional attribute columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanSeries<T: PrimInt, A> {
    from: Vec<DayPoint<T>>,
    to: Vec<DayPoint<T>>,
    start_attrs: Vec<AttrColumn<A>>,
    end_attrs: Vec<AttrColumn<A>>,
}

impl<T: PrimInt, A> SpanSeries<T, A> {
    /// Number of span positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.from.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    #[inline]
    pub fn from_column(&self) -> &[DayPoint<T>] {
        &self.from
    }

    #[inline]
    pub fn to_column(&self) -> &[DayPoint<T>] {
        &self.to
    }

    /// Start-associated attribute columns, in insertion order.
    #[inline]
    pub fn start_attrs(&self) -> &[AttrColumn<A>] {
        &self.start_attrs
    }

    /// End-associated attribute columns, in insertion order.
    #[inline]
    pub fn end_attrs(&self) -> &[AttrColumn<A>] {
        &self.end_attrs
    }

    /// The span at position `i`, or `None` past the end.
    #[inline]
    pub fn span_at(&self, i: usize) -> Option<DaySpan<T>> {
        match (self.from.get(i), self.to.get(i)) {
            (Some(&f), Some(&t)) => Some(DaySpan::new(f, t)),
            _ => None,
        }
    }

    /// Iterates the positions as `DaySpan`s, in order.
    #[inline]
    pub fn iter_spans(&self) -> impl Iterator<Item = DaySpan<T>> + '_ {
        self.from
            .iter()
            .zip(self.to.iter())
            .map(|(&f, &t)| DaySpan::new(f, t))
    }

    pub(crate) fn from_parts_unchecked(
        from: Vec<DayPoint<T>>,
        to: Vec<DayPoint<T>>,
        start_attrs: Vec<AttrColumn<A>>,
        end_attrs: Vec<AttrColumn<A>>,
    ) -> Self {
        debug_assert_eq!(from.len(), to.len());
        Self {
            from,
            to,
            start_attrs,
            end_attrs,
        }
    }
}

/// Builder for [`SpanSeries`]. Collects columns, then validates every length
/// against the span count in [`build`](SpanSeriesBuilder::build).
#[derive(Debug, Clone)]
pub struct SpanSeriesBuilder<T: PrimInt, A> {
    from: Vec<DayPoint<T>>,
    to: Vec<DayPoint<T>>,
    start_attrs: Vec<AttrColumn<A>>,
    end_attrs: Vec<AttrColumn<A>>,
}

impl<T: PrimInt, A> SpanSeriesBuilder<T, A> {
    #[inline]
    pub fn new() -> Self {
        Self {
            from: Vec::new(),
            to: Vec::new(),
            start_attrs: Vec::new(),
            end_attrs: Vec::new(),
        }
    }

    /// Appends one span position.
    #[inline]
    pub fn span(mut self, span: DaySpan<T>) -> Self {
        self.from.push(span.from());
        self.to.push(span.to());
        self
    }

    /// Appends a run of span positions.
    #[inline]
    pub fn spans<I: IntoIterator<Item = DaySpan<T>>>(mut self, spans: I) -> Self {
        for s in spans {
            self.from.push(s.from());
            self.to.push(s.to());
        }
        self
    }

    /// Replaces the `from`/`to` columns wholesale. The two lengths are
    /// reconciled at build time.
    #[inline]
    pub fn columns(mut self, from: Vec<DayPoint<T>>, to: Vec<DayPoint<T>>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Adds a start-associated attribute column.
    #[inline]
    pub fn start_attr(mut self, name: impl Into<String>, values: Vec<A>) -> Self {
        self.start_attrs.push(AttrColumn::new(name, values));
        self
    }

    /// Adds an end-associated attribute column.
    #[inline]
    pub fn end_attr(mut self, name: impl Into<String>, values: Vec<A>) -> Self {
        self.end_attrs.push(AttrColumn::new(name, values));
        self
    }

    /// Validates column alignment and constructs the series.
    ///
    /// Every column, `to` included, must have exactly as many entries as
    /// `from`. The first misaligned column is reported; nothing is
    /// constructed on failure.
    pub fn build(self) -> Result<SpanSeries<T, A>, SeriesBuildError> {
        let rows = self.from.len();
        if self.to.len() != rows {
            return Err(ColumnLengthMismatchError::new("to", rows, self.to.len()).into());
        }
        for col in self.start_attrs.iter().chain(self.end_attrs.iter()) {
            if col.len() != rows {
                return Err(
                    ColumnLengthMismatchError::new(col.name(), rows, col.len()).into(),
                );
            }
        }
        Ok(SpanSeries {
            from: self.from,
            to: self.to,
            start_attrs: self.start_attrs,
            end_attrs: self.end_attrs,
        })
    }
}

impl<T: PrimInt, A> Default for SpanSeriesBuilder<T, A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(v: i64) -> DayPoint<i64> {
        DayPoint::new(v)
    }

    fn span(a: i64, b: i64) -> DaySpan<i64> {
        DaySpan::new(day(a), day(b))
    }

    #[test]
    fn test_empty_series_builds() {
        let s: SpanSeries<i64, String> = SpanSeriesBuilder::new().build().unwrap();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_spans_populate_columns() {
        let s: SpanSeries<i64, String> = SpanSeriesBuilder::new()
            .span(span(1, 2))
            .span(span(3, 4))
            .build()
            .unwrap();
        assert_eq!(s.from_column(), &[day(1), day(3)]);
        assert_eq!(s.to_column(), &[day(2), day(4)]);
    }

    #[test]
    fn test_attr_columns_carried() {
        let s: SpanSeries<i64, &str> = SpanSeriesBuilder::new()
            .spans([span(1, 2), span(3, 4)])
            .start_attr("opened_by", vec!["ana", "bo"])
            .end_attr("closed_by", vec!["cy", "dee"])
            .build()
            .unwrap();
        assert_eq!(s.start_attrs().len(), 1);
        assert_eq!(s.end_attrs().len(), 1);
        assert_eq!(s.start_attrs()[0].name(), "opened_by");
        assert_eq!(s.end_attrs()[0].values(), &["cy", "dee"]);
    }

    #[test]
    fn test_no_attrs_is_valid() {
        let s: SpanSeries<i64, String> =
            SpanSeriesBuilder::new().span(span(1, 2)).build().unwrap();
        assert!(s.start_attrs().is_empty());
        assert!(s.end_attrs().is_empty());
    }

    #[test]
    fn test_short_attr_column_is_rejected() {
        let err = SpanSeriesBuilder::new()
            .spans([span(1, 2), span(3, 4)])
            .end_attr("status", vec!["only-one"])
            .build()
            .unwrap_err();
        let SeriesBuildError::ColumnLengthMismatch(e) = err;
        assert_eq!(e.column(), "status");
        assert_eq!(e.expected(), 2);
        assert_eq!(e.actual(), 1);
    }

    #[test]
    fn test_misaligned_to_column_is_rejected() {
        let err: SeriesBuildError = SpanSeriesBuilder::<i64, String>::new()
            .columns(vec![day(1), day(3)], vec![day(2)])
            .build()
            .unwrap_err();
        let SeriesBuildError::ColumnLengthMismatch(e) = err;
        assert_eq!(e.column(), "to");
    }

    #[test]
    fn test_span_at_and_iter_spans() {
        let s: SpanSeries<i64, String> = SpanSeriesBuilder::new()
            .spans([span(1, 2), span(5, 9)])
            .build()
            .unwrap();
        assert_eq!(s.span_at(1), Some(span(5, 9)));
        assert_eq!(s.span_at(2), None);
        let collected: Vec<_> = s.iter_spans().collect();
        assert_eq!(collected, vec![span(1, 2), span(5, 9)]);
    }
}

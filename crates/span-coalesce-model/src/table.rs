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

//! Grouped span input: spans partitioned by a group key.
//!
//! Unlike [`SpanSeries`](crate::series::SpanSeries), the attribute layout is
//! fixed: one begin attribute (left untouched by merging) and exactly two
//! end attributes (carried along when a merge extends a span's end). Rows
//! must arrive sorted by key, then by `from` within each key; the builder
//! checks alignment, not ordering.

use crate::err::{ColumnLengthMismatchError, TableBuildError};
use num_traits::PrimInt;
use span_coalesce_core::day::DayPoint;
use span_coalesce_core::span::DaySpan;

/// Spans partitioned by an equality-comparable group key `K`, with the fixed
/// begin/end attribute layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedSpanTable<K, T: PrimInt, A> {
    id: Vec<K>,
    from: Vec<DayPoint<T>>,
    to: Vec<DayPoint<T>>,
    begin: Vec<A>,
    end_first: Vec<A>,
    end_second: Vec<A>,
}

impl<K, T: PrimInt, A> GroupedSpanTable<K, T, A> {
    /// Number of rows.
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

    #[inline]
    pub fn from_column(&self) -> &[DayPoint<T>] {
        &self.from
    }

    #[inline]
    pub fn to_column(&self) -> &[DayPoint<T>] {
        &self.to
    }

    /// Begin attribute: describes each span's start, never touched by merging.
    #[inline]
    pub fn begin_column(&self) -> &[A] {
        &self.begin
    }

    /// First end attribute: follows the winning `to` value on merge.
    #[inline]
    pub fn end_first_column(&self) -> &[A] {
        &self.end_first
    }

    /// Second end attribute: follows the winning `to` value on merge.
    #[inline]
    pub fn end_second_column(&self) -> &[A] {
        &self.end_second
    }

    /// The span at row `i`, or `None` past the end.
    #[inline]
    pub fn span_at(&self, i: usize) -> Option<DaySpan<T>> {
        match (self.from.get(i), self.to.get(i)) {
            (Some(&f), Some(&t)) => Some(DaySpan::new(f, t)),
            _ => None,
        }
    }

    pub(crate) fn from_parts_unchecked(
        id: Vec<K>,
        from: Vec<DayPoint<T>>,
        to: Vec<DayPoint<T>>,
        begin: Vec<A>,
        end_first: Vec<A>,
        end_second: Vec<A>,
    ) -> Self {
        debug_assert_eq!(id.len(), from.len());
        debug_assert_eq!(id.len(), to.len());
        Self {
            id,
            from,
            to,
            begin,
            end_first,
            end_second,
        }
    }
}

/// Builder for [`GroupedSpanTable`]. Rows can be appended one at a time or
/// the columns replaced wholesale; [`build`](GroupedSpanTableBuilder::build)
/// validates that all six columns are the same length.
#[derive(Debug, Clone)]
pub struct GroupedSpanTableBuilder<K, T: PrimInt, A> {
    id: Vec<K>,
    from: Vec<DayPoint<T>>,
    to: Vec<DayPoint<T>>,
    begin: Vec<A>,
    end_first: Vec<A>,
    end_second: Vec<A>,
}

impl<K, T: PrimInt, A> GroupedSpanTableBuilder<K, T, A> {
    #[inline]
    pub fn new() -> Self {
        Self {
            id: Vec::new(),
            from: Vec::new(),
            to: Vec::new(),
            begin: Vec::new(),
            end_first: Vec::new(),
            end_second: Vec::new(),
        }
    }

    /// Appends one row.
    #[inline]
    pub fn row(mut self, id: K, span: DaySpan<T>, begin: A, end_first: A, end_second: A) -> Self {
        self.id.push(id);
        self.from.push(span.from());
        self.to.push(span.to());
        self.begin.push(begin);
        self.end_first.push(end_first);
        self.end_second.push(end_second);
        self
    }

    /// Replaces all six columns wholesale.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn columns(
        mut self,
        id: Vec<K>,
        from: Vec<DayPoint<T>>,
        to: Vec<DayPoint<T>>,
        begin: Vec<A>,
        end_first: Vec<A>,
        end_second: Vec<A>,
    ) -> Self {
        self.id = id;
        self.from = from;
        self.to = to;
        self.begin = begin;
        self.end_first = end_first;
        self.end_second = end_second;
        self
    }

    /// Validates column alignment and constructs the table.
    pub fn build(self) -> Result<GroupedSpanTable<K, T, A>, TableBuildError> {
        let rows = self.id.len();
        let lengths = [
            ("from", self.from.len()),
            ("to", self.to.len()),
            ("begin", self.begin.len()),
            ("end_first", self.end_first.len()),
            ("end_second", self.end_second.len()),
        ];
        for (name, len) in lengths {
            if len != rows {
                return Err(ColumnLengthMismatchError::new(name, rows, len).into());
            }
        }
        Ok(GroupedSpanTable {
            id: self.id,
            from: self.from,
            to: self.to,
            begin: self.begin,
            end_first: self.end_first,
            end_second: self.end_second,
        })
    }
}

impl<K, T: PrimInt, A> Default for GroupedSpanTableBuilder<K, T, A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

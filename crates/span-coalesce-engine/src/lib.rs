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

//! # Span Coalescing Engine (`span-coalesce-engine`)
//!
//! Single-pass, gap-tolerant merging of ordered span records.
//!
//! Two call surfaces share one merge primitive:
//!
//! - [`coalesce::Coalescer`] merges a flat [`SpanSeries`] and filters
//!   absorbed positions out of every column.
//! - [`grouped::GroupedCoalescer`] merges a [`GroupedSpanTable`] group by
//!   group, annotating every row with its gap to the open span instead of
//!   filtering, and leaving row selection to the caller.
//!
//! Both walk the input once, `O(n)`, against owned working copies; the
//! caller's columns are never mutated. All argument validation happens
//! before a pass begins; a constructed coalescer applied to a built
//! series/table cannot fail.
//!
//! [`SpanSeries`]: span_coalesce_model::series::SpanSeries
//! [`GroupedSpanTable`]: span_coalesce_model::table::GroupedSpanTable

pub mod coalesce;
pub mod grouped;
pub mod mask;

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

//! # Span Coalescing Model (`span-coalesce-model`)
//!
//! Columnar input model for the coalescing engine, built on the typed
//! calendar primitives of `span-coalesce-core`.
//!
//! ## Key Data Structures
//!
//! - **`SpanSeries<T, A>`**: an ordered run of spans as parallel `from`/`to`
//!   columns, with any number of start-associated and end-associated
//!   attribute columns aligned to them.
//!
//! - **`GroupedSpanTable<K, T, A>`**: spans partitioned by a group key, with
//!   one begin attribute and two end attributes per row.
//!
//! - **`EntityId`**: a plain numeric key for generated instances.
//!
//! Both container types are built through validating builders: every column
//! length is checked against the span count before a value is constructed,
//! so downstream passes never index out of bounds. Attribute values are
//! opaque to everything in this workspace; they are only copied and
//! filtered.
//!
//! The `generator` module synthesizes fragmented, noisy span records for
//! demos and benchmarks, deterministically from a seed.

pub mod err;
pub mod generator;
pub mod id;
pub mod series;
pub mod table;

pub mod prelude {
    pub use crate::err::{ColumnLengthMismatchError, SeriesBuildError, TableBuildError};
    pub use crate::generator::{
        FragmentGenConfig, FragmentGenConfigBuilder, FragmentGenerator,
    };
    pub use crate::id::EntityId;
    pub use crate::series::{AttrColumn, SpanSeries, SpanSeriesBuilder};
    pub use crate::table::{GroupedSpanTable, GroupedSpanTableBuilder};
}

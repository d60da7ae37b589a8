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

use std::fmt::Display;

/// A column whose length does not match the span count of its container.
///
/// All length validation happens in the builders, before any value is
/// constructed; a series or table that exists is fully aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLengthMismatchError {
    column: String,
    expected: usize,
    actual: usize,
}

impl ColumnLengthMismatchError {
    #[inline]
    pub fn new(column: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self {
            column: column.into(),
            expected,
            actual,
        }
    }

    #[inline]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    #[inline]
    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl Display for ColumnLengthMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Column '{}' has length {} but {} rows were expected",
            self.column, self.actual, self.expected
        )
    }
}

impl std::error::Error for ColumnLengthMismatchError {}

/// Rejection of an ungrouped series definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesBuildError {
    ColumnLengthMismatch(ColumnLengthMismatchError),
}

impl Display for SeriesBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesBuildError::ColumnLengthMismatch(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SeriesBuildError {}

impl From<ColumnLengthMismatchError> for SeriesBuildError {
    fn from(err: ColumnLengthMismatchError) -> Self {
        Self::ColumnLengthMismatch(err)
    }
}

/// Rejection of a grouped table definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBuildError {
    ColumnLengthMismatch(ColumnLengthMismatchError),
}

impl Display for TableBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableBuildError::ColumnLengthMismatch(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TableBuildError {}

impl From<ColumnLengthMismatchError> for TableBuildError {
    fn from(err: ColumnLengthMismatchError) -> Self {
        Self::ColumnLengthMismatch(err)
    }
}

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

//! Keep mask over span positions.
//!
//! One boolean per input position. Position 0 is kept from the start; the
//! merge pass marks every position that opens a new span. A position that
//! is never marked is absorbed: its values may be pulled into the open span,
//! but the position itself never reappears in filtered output.

/// Boolean keep mask, one entry per span position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepMask {
    kept: Vec<bool>,
}

impl KeepMask {
    /// Creates a mask of `len` positions with only position 0 kept.
    pub fn new(len: usize) -> Self {
        let mut kept = vec![false; len];
        if let Some(first) = kept.first_mut() {
            *first = true;
        }
        Self { kept }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kept.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    /// Marks position `i` as kept.
    #[inline]
    pub fn mark(&mut self, i: usize) {
        self.kept[i] = true;
    }

    #[inline]
    pub fn is_kept(&self, i: usize) -> bool {
        self.kept[i]
    }

    /// Number of kept positions.
    #[inline]
    pub fn kept_count(&self) -> usize {
        self.kept.iter().filter(|&&k| k).count()
    }

    /// Returns the kept entries of `values`, preserving relative order.
    pub fn filter<V: Clone>(&self, values: &[V]) -> Vec<V> {
        debug_assert_eq!(values.len(), self.kept.len());
        self.kept
            .iter()
            .zip(values.iter())
            .filter_map(|(&k, v)| k.then(|| v.clone()))
            .collect()
    }
}

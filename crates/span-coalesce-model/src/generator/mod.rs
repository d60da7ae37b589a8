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

//! Deterministic synthesis of fragmented span records.
//!
//! Real inputs to the coalescers are noisy: activity that is logically one
//! span arrives as several fragments separated by small gaps or overlaps,
//! with occasional genuine breaks. The generator reproduces that shape from
//! a seed, so demos and benchmarks run on stable instances.

pub mod config;
pub mod err;

pub use config::{FragmentGenConfig, FragmentGenConfigBuilder};
pub use err::{BreakGapWithinToleranceError, FragmentGenConfigBuildError};

use crate::id::EntityId;
use crate::series::SpanSeries;
use crate::table::GroupedSpanTable;
use num_traits::NumCast;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use span_coalesce_core::{
    day::{DayDelta, DayPoint},
    CalendarUnit,
};

/// Seeded generator of fragmented span instances.
pub struct FragmentGenerator<T: CalendarUnit> {
    config: FragmentGenConfig<T>,
    rng: ChaCha8Rng,
}

impl<T: CalendarUnit> From<FragmentGenConfig<T>> for FragmentGenerator<T> {
    fn from(config: FragmentGenConfig<T>) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self { config, rng }
    }
}

impl<T: CalendarUnit> FragmentGenerator<T> {
    #[inline]
    pub fn config(&self) -> &FragmentGenConfig<T> {
        &self.config
    }

    fn draw_delta(&mut self, min: DayDelta<T>, max: DayDelta<T>) -> DayDelta<T> {
        let lo = min.value().to_i64().expect("gap bound fits in i64");
        let hi = max.value().to_i64().expect("gap bound fits in i64");
        let v = self.rng.random_range(lo..=hi);
        DayDelta::new(NumCast::from(v).expect("drawn gap fits calendar unit"))
    }

    fn draw_extent(&mut self) -> DayDelta<T> {
        let (min, max) = (self.config.extent_min, self.config.extent_max);
        self.draw_delta(min, max)
    }

    fn draw_gap(&mut self) -> DayDelta<T> {
        if self.rng.random_bool(self.config.break_probability) {
            let (min, max) = (self.config.break_gap_min, self.config.break_gap_max);
            self.draw_delta(min, max)
        } else {
            let (min, max) = (self.config.coalescable_gap_min, self.config.coalescable_gap_max);
            self.draw_delta(min, max)
        }
    }

    /// Generates a grouped table: `entities` groups of fragments, each group
    /// sorted ascending by `from`, groups emitted in key order.
    pub fn generate_grouped(&mut self) -> GroupedSpanTable<EntityId, T, String> {
        let entities = self.config.entities;
        let mut id = Vec::new();
        let mut from = Vec::new();
        let mut to = Vec::new();
        let mut begin = Vec::new();
        let mut end_first = Vec::new();
        let mut end_second = Vec::new();

        for e in 0..entities {
            let fragments = self
                .rng
                .random_range(self.config.fragments_min..=self.config.fragments_max);
            let mut cursor = self.config.start_day;
            for k in 0..fragments {
                let f = cursor;
                let t = f + self.draw_extent();
                id.push(EntityId::new(e as u64));
                from.push(f);
                to.push(t);
                begin.push(format!("open-{e}-{k}"));
                end_first.push(format!("close-{e}-{k}"));
                end_second.push(format!("code-{e}-{k}"));

                let mut next = t + self.draw_gap();
                // An overlap draw must not break the sorted-by-from precondition.
                if next < f {
                    next = f;
                }
                cursor = next;
            }
        }

        GroupedSpanTable::from_parts_unchecked(id, from, to, begin, end_first, end_second)
    }

    /// Generates a flat series of `rows` fragments with one start-associated
    /// and two end-associated attribute columns, sorted ascending by `from`.
    pub fn generate_series(&mut self, rows: usize) -> SpanSeries<T, String> {
        let mut from = Vec::with_capacity(rows);
        let mut to = Vec::with_capacity(rows);
        let mut begin = Vec::with_capacity(rows);
        let mut end_first = Vec::with_capacity(rows);
        let mut end_second = Vec::with_capacity(rows);

        let mut cursor: DayPoint<T> = self.config.start_day;
        for i in 0..rows {
            let f = cursor;
            let t = f + self.draw_extent();
            from.push(f);
            to.push(t);
            begin.push(format!("open-{i}"));
            end_first.push(format!("close-{i}"));
            end_second.push(format!("code-{i}"));

            let mut next = t + self.draw_gap();
            if next < f {
                next = f;
            }
            cursor = next;
        }

        SpanSeries::from_parts_unchecked(
            from,
            to,
            vec![crate::series::AttrColumn::new("begin", begin)],
            vec![
                crate::series::AttrColumn::new("end_first", end_first),
                crate::series::AttrColumn::new("end_second", end_second),
            ],
        )
    }
}

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

use super::err::{BreakGapWithinToleranceError, FragmentGenConfigBuildError};
use num_traits::NumCast;
use span_coalesce_core::{
    day::{DayDelta, DayPoint},
    CalendarUnit,
};

/// Configuration for synthetic fragmented-span instances.
///
/// An instance walks a day cursor per entity: each fragment gets a random
/// extent, and the next fragment starts after a gap drawn either from the
/// coalescable range (small, possibly negative for overlaps) or, with
/// `break_probability`, from the break range (large enough that a coalescer
/// with a tolerance below `break_gap_min` must split there).
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentGenConfig<T: CalendarUnit> {
    pub(crate) entities: usize,
    pub(crate) fragments_min: usize,
    pub(crate) fragments_max: usize,
    pub(crate) extent_min: DayDelta<T>,
    pub(crate) extent_max: DayDelta<T>,
    pub(crate) coalescable_gap_min: DayDelta<T>,
    pub(crate) coalescable_gap_max: DayDelta<T>,
    pub(crate) break_gap_min: DayDelta<T>,
    pub(crate) break_gap_max: DayDelta<T>,
    pub(crate) break_probability: f64,
    pub(crate) start_day: DayPoint<T>,
    pub(crate) seed: u64,
}

impl<T: CalendarUnit> FragmentGenConfig<T> {
    #[inline]
    pub fn entities(&self) -> usize {
        self.entities
    }

    #[inline]
    pub fn fragments_min(&self) -> usize {
        self.fragments_min
    }

    #[inline]
    pub fn fragments_max(&self) -> usize {
        self.fragments_max
    }

    #[inline]
    pub fn extent_min(&self) -> DayDelta<T> {
        self.extent_min
    }

    #[inline]
    pub fn extent_max(&self) -> DayDelta<T> {
        self.extent_max
    }

    #[inline]
    pub fn coalescable_gap_min(&self) -> DayDelta<T> {
        self.coalescable_gap_min
    }

    #[inline]
    pub fn coalescable_gap_max(&self) -> DayDelta<T> {
        self.coalescable_gap_max
    }

    #[inline]
    pub fn break_gap_min(&self) -> DayDelta<T> {
        self.break_gap_min
    }

    #[inline]
    pub fn break_gap_max(&self) -> DayDelta<T> {
        self.break_gap_max
    }

    #[inline]
    pub fn break_probability(&self) -> f64 {
        self.break_probability
    }

    #[inline]
    pub fn start_day(&self) -> DayPoint<T> {
        self.start_day
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<T: CalendarUnit> Default for FragmentGenConfig<T> {
    fn default() -> Self {
        #[inline]
        fn dd<T: CalendarUnit>(v: i64) -> DayDelta<T> {
            DayDelta::new(NumCast::from(v).unwrap())
        }

        Self {
            entities: 25,
            fragments_min: 3,
            fragments_max: 12,
            extent_min: dd(0),
            extent_max: dd(14),
            coalescable_gap_min: dd(-2),
            coalescable_gap_max: dd(1),
            break_gap_min: dd(30),
            break_gap_max: dd(90),
            break_probability: 0.25,
            start_day: DayPoint::zero(),
            seed: 42,
        }
    }
}

/// Builder for [`FragmentGenConfig`]. Starts from the defaults; `build`
/// validates every range.
#[derive(Debug, Clone)]
pub struct FragmentGenConfigBuilder<T: CalendarUnit> {
    config: FragmentGenConfig<T>,
}

impl<T: CalendarUnit> FragmentGenConfigBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            config: FragmentGenConfig::default(),
        }
    }

    #[inline]
    pub fn entities(mut self, entities: usize) -> Self {
        self.config.entities = entities;
        self
    }

    #[inline]
    pub fn fragments(mut self, min: usize, max: usize) -> Self {
        self.config.fragments_min = min;
        self.config.fragments_max = max;
        self
    }

    #[inline]
    pub fn extent(mut self, min: DayDelta<T>, max: DayDelta<T>) -> Self {
        self.config.extent_min = min;
        self.config.extent_max = max;
        self
    }

    #[inline]
    pub fn coalescable_gap(mut self, min: DayDelta<T>, max: DayDelta<T>) -> Self {
        self.config.coalescable_gap_min = min;
        self.config.coalescable_gap_max = max;
        self
    }

    #[inline]
    pub fn break_gap(mut self, min: DayDelta<T>, max: DayDelta<T>) -> Self {
        self.config.break_gap_min = min;
        self.config.break_gap_max = max;
        self
    }

    #[inline]
    pub fn break_probability(mut self, p: f64) -> Self {
        self.config.break_probability = p;
        self
    }

    #[inline]
    pub fn start_day(mut self, day: DayPoint<T>) -> Self {
        self.config.start_day = day;
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Result<FragmentGenConfig<T>, FragmentGenConfigBuildError<T>> {
        let c = &self.config;
        if c.fragments_min < 1 || c.fragments_min > c.fragments_max {
            return Err(FragmentGenConfigBuildError::InvalidFragmentRange {
                min: c.fragments_min,
                max: c.fragments_max,
            });
        }
        if c.extent_min.is_negative() || c.extent_min > c.extent_max {
            return Err(FragmentGenConfigBuildError::InvalidExtentRange {
                min: c.extent_min,
                max: c.extent_max,
            });
        }
        if c.coalescable_gap_min > c.coalescable_gap_max {
            return Err(FragmentGenConfigBuildError::InvalidCoalescableGapRange {
                min: c.coalescable_gap_min,
                max: c.coalescable_gap_max,
            });
        }
        if c.break_gap_min > c.break_gap_max {
            return Err(FragmentGenConfigBuildError::InvalidBreakGapRange {
                min: c.break_gap_min,
                max: c.break_gap_max,
            });
        }
        if !(0.0..=1.0).contains(&c.break_probability) {
            return Err(FragmentGenConfigBuildError::InvalidBreakProbability(
                c.break_probability,
            ));
        }
        if c.break_gap_min <= c.coalescable_gap_max {
            return Err(BreakGapWithinToleranceError::new(
                c.coalescable_gap_max,
                c.break_gap_min,
            )
            .into());
        }
        Ok(self.config)
    }
}

impl<T: CalendarUnit> Default for FragmentGenConfigBuilder<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg: FragmentGenConfig<i64> = FragmentGenConfigBuilder::new().build().unwrap();
        assert_eq!(cfg, FragmentGenConfig::default());
    }

    #[test]
    fn test_builder_overrides_fields() {
        let cfg: FragmentGenConfig<i64> = FragmentGenConfigBuilder::new()
            .entities(3)
            .fragments(2, 4)
            .seed(7)
            .build()
            .unwrap();
        assert_eq!(cfg.entities(), 3);
        assert_eq!(cfg.fragments_min(), 2);
        assert_eq!(cfg.fragments_max(), 4);
        assert_eq!(cfg.seed(), 7);
    }

    #[test]
    fn test_zero_fragments_rejected() {
        let err = FragmentGenConfigBuilder::<i64>::new()
            .fragments(0, 4)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            FragmentGenConfigBuildError::InvalidFragmentRange { min: 0, max: 4 }
        ));
    }

    #[test]
    fn test_negative_extent_rejected() {
        let err = FragmentGenConfigBuilder::<i64>::new()
            .extent(DayDelta::new(-1), DayDelta::new(3))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            FragmentGenConfigBuildError::InvalidExtentRange { .. }
        ));
    }

    #[test]
    fn test_break_probability_out_of_range_rejected() {
        let err = FragmentGenConfigBuilder::<i64>::new()
            .break_probability(1.5)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            FragmentGenConfigBuildError::InvalidBreakProbability(_)
        ));
    }

    #[test]
    fn test_break_gap_overlapping_coalescable_rejected() {
        let err = FragmentGenConfigBuilder::<i64>::new()
            .coalescable_gap(DayDelta::new(0), DayDelta::new(10))
            .break_gap(DayDelta::new(5), DayDelta::new(20))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            FragmentGenConfigBuildError::BreakGapWithinTolerance(_)
        ));
    }
}

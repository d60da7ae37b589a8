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

use serde::Serialize;
use span_coalesce_core::day::DayDelta;
use span_coalesce_engine::{coalesce::Coalescer, grouped::GroupedCoalescer};
use span_coalesce_model::prelude::*;
use std::{fs::File, io::BufWriter, time::Instant};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    entities: usize,
    flat_rows: usize,
    grouped_rows: usize,
    max_gap_days: i64,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    flat_kept_rows: usize,
    flat_absorbed_rows: usize,
    flat_compression: f64,
    flat_elapsed_us: u128,
    grouped_boundary_rows: usize,
    grouped_elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct CoalesceReport {
    description: String,
    instances: Vec<RunResult>,
}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as isize - val0 as isize) * step as isize;
    (val0 as isize + num / (steps as isize - 1)).max(0) as usize
}

fn main() {
    enable_tracing();

    let n_instances = 10usize;

    let min_entities = 50usize;
    let max_entities = 2_000usize;

    let min_flat_rows = 1_000usize;
    let max_flat_rows = 100_000usize;

    let max_gap = DayDelta::new(1i64);
    let sentinel = span_coalesce_engine::grouped::group_boundary_sentinel::<i64>();

    let mut results: Vec<RunResult> = Vec::with_capacity(n_instances);

    for i in 0..n_instances {
        let entities = interpolate_u(min_entities, max_entities, i, n_instances);
        let flat_rows = interpolate_u(min_flat_rows, max_flat_rows, i, n_instances);
        let seed: u64 = 42 + (i as u64);

        let cfg = FragmentGenConfigBuilder::<i64>::new()
            .entities(entities)
            .seed(seed)
            .build()
            .expect("valid generator config");
        let mut generator = FragmentGenerator::from(cfg);

        let series = generator.generate_series(flat_rows);
        let table = generator.generate_grouped();
        let grouped_rows = table.len();

        // Flat pass: filtered output.
        let coalescer = Coalescer::new(max_gap).expect("non-negative tolerance");
        let t0 = Instant::now();
        let coalesced = coalescer.coalesce(&series);
        let flat_elapsed = t0.elapsed();

        // Grouped pass: full-length annotated output.
        let grouped = GroupedCoalescer::new(max_gap).expect("non-negative tolerance");
        let t1 = Instant::now();
        let annotated = grouped.coalesce(&table);
        let grouped_elapsed = t1.elapsed();

        let boundary_rows = annotated
            .difference_column()
            .iter()
            .filter(|&&d| d == sentinel)
            .count();

        let info = InstanceInfo {
            idx: i,
            seed,
            entities,
            flat_rows,
            grouped_rows,
            max_gap_days: max_gap.value(),
        };

        results.push(RunResult {
            instance: info,
            flat_kept_rows: coalesced.len(),
            flat_absorbed_rows: coalesced.absorbed_count(),
            flat_compression: coalesced.len() as f64 / flat_rows.max(1) as f64,
            flat_elapsed_us: flat_elapsed.as_micros(),
            grouped_boundary_rows: boundary_rows,
            grouped_elapsed_us: grouped_elapsed.as_micros(),
        });
    }

    let report = CoalesceReport {
        description:
            "Span coalescing benchmark: 10 instances from small to big; flat filtered pass and grouped annotated pass at 1-day tolerance."
                .into(),
        instances: results,
    };

    let file = File::create("coalesce_results.json").expect("create coalesce_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("=================================================================");
    println!("======================== Coalescing Done ========================");
    println!("=================================================================");
    println!();
    println!("Wrote: coalesce_results.json");
}

//! Wall-clock comparison of the memoization strategies.

use crate::config::BenchConfig;
use crate::error::{Error, Result};
use crate::lru_cache::LruCache;
use crate::splay_tree::SplayMap;
use crate::workload::{
    fibonacci_lru, fibonacci_splay, generate_queries, random_array, run_cached, run_uncached,
    Lookup,
};
use plotters::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Time taken by `repeats` calls for one Fibonacci index, per memoization strategy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FibonacciRow {
    pub n: u64,
    pub lru_secs: f64,
    pub splay_secs: f64,
    pub splay_adaptive_secs: f64,
}

/// Time taken by the range-query simulation with and without the range-sum cache.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RangeRow {
    pub array_len: usize,
    pub query_count: usize,
    pub uncached_secs: f64,
    pub cached_secs: f64,
}

/// Everything measured by one run of the harness.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub fibonacci: Vec<FibonacciRow>,
    pub range: Option<RangeRow>,
}

impl Report {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Report> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }
}

fn time<F>(repeats: usize, mut f: F) -> f64
where
    F: FnMut(),
{
    let start = Instant::now();
    for _ in 0..repeats {
        f();
    }
    start.elapsed().as_secs_f64()
}

/// Times every index of `config.fib_inputs()`. The caches are shared across indices, so each row
/// only pays for the indices not memoized by earlier rows.
pub fn run_fibonacci(config: &BenchConfig) -> Vec<FibonacciRow> {
    // large enough that nothing is ever evicted
    let mut lru = LruCache::new(config.fib_max as usize);
    let mut splay = SplayMap::new();
    let mut splay_adaptive = SplayMap::new();

    config
        .fib_inputs()
        .map(|n| {
            let row = FibonacciRow {
                n,
                lru_secs: time(config.repeats, || {
                    fibonacci_lru(n, &mut lru);
                }),
                splay_secs: time(config.repeats, || {
                    fibonacci_splay(n, &mut splay, Lookup::Index);
                }),
                splay_adaptive_secs: time(config.repeats, || {
                    fibonacci_splay(n, &mut splay_adaptive, Lookup::Splay);
                }),
            };
            info!(
                "fibonacci n={} lru={:.8}s splay={:.8}s splay_adaptive={:.8}s",
                row.n, row.lru_secs, row.splay_secs, row.splay_adaptive_secs,
            );
            row
        })
        .collect()
}

/// Runs the same seeded queries over the same seeded array with and without the range-sum cache.
pub fn run_range(config: &BenchConfig) -> RangeRow {
    let mut rng = config.rng();
    let array = random_array(&mut rng, config.array_len);
    let queries = generate_queries(&mut rng, config.array_len, config.query_count);
    debug!("generated {} queries over {} elements", queries.len(), array.len());

    let mut uncached_array = array.clone();
    let mut uncached_answers = Vec::new();
    let uncached_secs = time(1, || {
        uncached_answers = run_uncached(&mut uncached_array, &queries);
    });
    debug!("uncached run answered {} range queries", uncached_answers.len());

    let mut cached_array = array;
    let mut cache = LruCache::new(config.lru_capacity);
    let mut cached_answers = Vec::new();
    let cached_secs = time(1, || {
        cached_answers = run_cached(&mut cached_array, &queries, &mut cache);
    });
    debug!("cached run finished with {} cached ranges", cache.len());

    if uncached_answers != cached_answers {
        warn!("cached range sums disagree with uncached range sums");
    }

    let row = RangeRow {
        array_len: config.array_len,
        query_count: queries.len(),
        uncached_secs,
        cached_secs,
    };
    info!("range uncached={:.3}s cached={:.3}s", row.uncached_secs, row.cached_secs);
    row
}

pub fn print_fibonacci_table<W: Write>(rows: &[FibonacciRow], out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:<10}{:<20}{:<20}{:<20}",
        "n", "LRU Cache Time (s)", "Splay Tree Time (s)", "Splay Adaptive Time (s)",
    )?;
    writeln!(out, "{}", "-".repeat(70))?;
    for row in rows {
        writeln!(
            out,
            "{:<10}{:<20.8}{:<20.8}{:<20.8}",
            row.n, row.lru_secs, row.splay_secs, row.splay_adaptive_secs,
        )?;
    }
    Ok(())
}

fn plot_error<E: fmt::Display>(err: E) -> Error {
    Error::PlotError(err.to_string())
}

/// Draws one line per memoization strategy, time against `n`, to an SVG file at `path`.
pub fn plot_fibonacci<P: AsRef<Path>>(rows: &[FibonacciRow], path: P) -> Result<()> {
    let series: [(&str, RGBColor, fn(&FibonacciRow) -> f64); 3] = [
        ("LRU cache", RED, |row| row.lru_secs),
        ("Splay tree", BLUE, |row| row.splay_secs),
        ("Splay adaptive", GREEN, |row| row.splay_adaptive_secs),
    ];
    let x_max = rows.iter().map(|row| row.n).max().unwrap_or(0) + 1;
    let y_max = rows
        .iter()
        .flat_map(|row| series.iter().map(move |(_, _, secs)| secs(row)))
        .fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let root = SVGBackend::new(path.as_ref(), (1024, 640)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Memoized Fibonacci", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(0u64..x_max, 0f64..y_max)
        .map_err(plot_error)?;
    chart
        .configure_mesh()
        .x_desc("Fibonacci index (n)")
        .y_desc("Time (s)")
        .draw()
        .map_err(plot_error)?;

    for &(label, color, secs) in series.iter() {
        chart
            .draw_series(LineSeries::new(rows.iter().map(|row| (row.n, secs(row))), &color))
            .map_err(plot_error)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        chart
            .draw_series(rows.iter().map(|row| Circle::new((row.n, secs(row)), 3, color.filled())))
            .map_err(plot_error)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE)
        .border_style(&BLACK)
        .draw()
        .map_err(plot_error)?;
    root.present().map_err(plot_error)?;
    Ok(())
}

pub fn print_range_summary<W: Write>(row: &RangeRow, out: &mut W) -> Result<()> {
    writeln!(out, "Execution time without caching: {:.3} seconds", row.uncached_secs)?;
    writeln!(out, "Execution time with LRU cache: {:.3} seconds", row.cached_secs)?;
    Ok(())
}

/// Runs the workloads selected by `config.mode`, prints their tables to `out`, draws the
/// Fibonacci plot if `config.plot` is set, and saves the report if `config.output` is set.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<Report> {
    let mut report = Report::default();

    if config.mode.runs_fibonacci() {
        report.fibonacci = run_fibonacci(config);
        print_fibonacci_table(&report.fibonacci, out)?;
        if let Some(ref path) = config.plot {
            plot_fibonacci(&report.fibonacci, path)?;
            info!("drew fibonacci plot to {}", path.display());
        }
    } else if config.plot.is_some() {
        warn!("no fibonacci rows to plot in range mode");
    }

    if config.mode.runs_range() {
        let row = run_range(config);
        print_range_summary(&row, out)?;
        report.range = Some(row);
    }

    if let Some(ref path) = config.output {
        report.save(path)?;
        info!("saved report to {}", path.display());
    }
    Ok(report)
}

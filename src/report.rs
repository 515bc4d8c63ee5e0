//! Plain text presentation of a [`BenchReport`].

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use crate::harness::BenchReport;
use crate::measure::SearchResult;

pub fn write_report<W: Write>(out: &mut W, report: &BenchReport) -> io::Result<()> {
    writeln!(out, "Unsorted arrays:")?;
    for data in &report.datasets {
        writeln!(out, "{}", preview(data, report.preview_len))?;
    }

    writeln!(out, "Sorting performance:")?;
    for result in &report.sorts {
        writeln!(
            out,
            "Array size {}: {} {} ms",
            result.size,
            result.algorithm.display_name(),
            format_millis(result.elapsed)
        )?;
    }

    if !report.patterns.is_empty() {
        writeln!(out, "Pattern performance:")?;
        for entry in &report.patterns {
            writeln!(
                out,
                "Pattern {} size {}: {} {} ms",
                entry.pattern.name(),
                entry.result.size,
                entry.result.algorithm.display_name(),
                format_millis(entry.result.elapsed)
            )?;
        }
    }

    writeln!(out, "Search performance:")?;
    for result in &report.searches {
        write_search_line(out, result)?;
    }

    writeln!(out, "Unique elements in A:")?;
    writeln!(out, "{}", join(&report.unique_in_a))?;
    writeln!(out, "Unique elements in B:")?;
    writeln!(out, "{}", join(&report.unique_in_b))?;

    Ok(())
}

/// First `preview_len` elements joined by `, `, followed by `...` if anything was cut off.
pub fn preview<T: Display>(data: &[T], preview_len: usize) -> String {
    let shown = &data[..data.len().min(preview_len)];
    let mut line = join(shown);
    if data.len() > preview_len {
        line.push_str("...");
    }

    line
}

pub fn join<T: Display>(vals: &[T]) -> String {
    vals.iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Not found is printed as `-1`.
pub fn format_index(index: Option<usize>) -> String {
    match index {
        Some(idx) => idx.to_string(),
        None => "-1".into(),
    }
}

fn format_millis(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1_000.0)
}

fn write_search_line<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    writeln!(
        out,
        "Array size {}, Key {}: {} found at {} in {} ns",
        result.size,
        result.key,
        result.algorithm.display_name(),
        format_index(result.index),
        result.elapsed.as_nanos()
    )
}

use std::fmt;
use std::io::{self, Write};

use crate::data::column::distinct_values;
use crate::data::model::LineSet;

/// Default width of each sample column.
pub const DEFAULT_SAMPLE_WIDTH: usize = 6;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Rendering knobs for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Samples are cut to, and padded up to, this many characters.
    pub sample_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sample_width: DEFAULT_SAMPLE_WIDTH,
        }
    }
}

// ---------------------------------------------------------------------------
// ReportRow – one output line per line index
// ---------------------------------------------------------------------------

/// Summary of one line index across all files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// 1-based line number.
    pub line_number: usize,
    /// How many distinct values the files hold at this line.
    pub distinct: usize,
    /// One fixed-width sample per distinct value, in sorted order.
    pub samples: Vec<String>,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4} {:>3} {}",
            self.line_number,
            self.distinct,
            self.samples.join(" ")
        )
    }
}

/// Cut `line` to `width` characters and left-justify it in that width.
pub fn sample(line: &str, width: usize) -> String {
    let head: String = line.chars().take(width).collect();
    format!("{head:<width$}")
}

/// Summarise every line index up to the longest file's length.
pub fn build_rows(set: &LineSet, options: &ReportOptions) -> Vec<ReportRow> {
    (0..set.longest_len())
        .map(|index| {
            let column = set.column(index);
            let distinct = distinct_values(&column);
            ReportRow {
                line_number: index + 1,
                distinct: distinct.len(),
                samples: distinct
                    .into_iter()
                    .map(|line| sample(line, options.sample_width))
                    .collect(),
            }
        })
        .collect()
}

/// Write one row per line index to `out`. Returns the number of rows.
pub fn write_report<W: Write>(
    out: &mut W,
    set: &LineSet,
    options: &ReportOptions,
) -> io::Result<usize> {
    let rows = build_rows(set, options);
    for row in &rows {
        writeln!(out, "{row}")?;
    }
    out.flush()?;
    Ok(rows.len())
}

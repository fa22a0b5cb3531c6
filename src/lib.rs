//! # linecmp
//!
//! Compares a set of text files line by line. For every line index up to the
//! longest file, it reports how many distinct variants of that line exist
//! across the files, with a short fixed-width sample of each variant.

pub mod cli;
pub mod data;
pub mod error;
pub mod report;

use std::io::Write;

use log::info;

pub use error::{CompareError, Result};
pub use report::ReportOptions;

/// Expand `patterns`, load every match and write the report to `out`.
///
/// All files are read before anything is written, so a read failure leaves
/// `out` untouched. Returns the number of rows written.
pub fn compare_files<S, W>(patterns: &[S], options: &ReportOptions, out: &mut W) -> Result<usize>
where
    S: AsRef<str>,
    W: Write,
{
    let paths = data::loader::expand_patterns(patterns);
    let set = data::loader::load_files(&paths)?;
    let rows = report::write_report(out, &set, options).map_err(CompareError::Write)?;
    info!("compared {} files over {rows} lines", set.len());
    Ok(rows)
}

//! Command-line interface for linecmp.

use clap::Parser;

use crate::report::{DEFAULT_SAMPLE_WIDTH, ReportOptions};

/// Compare text files line by line and count the distinct variants of each line
#[derive(Parser, Debug)]
#[command(name = "linecmp")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Glob pattern selecting the files to compare (quote it to stop the shell expanding it)
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Width of each sample column
    #[arg(long, value_name = "N", default_value_t = (DEFAULT_SAMPLE_WIDTH as u16),
          value_parser = clap::value_parser!(u16).range(1..))]
    pub sample_width: u16,
}

impl Args {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            sample_width: usize::from(self.sample_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pattern_defaults() {
        let args = Args::try_parse_from(["linecmp", "data/*.txt"]).unwrap();
        assert_eq!(args.patterns, vec!["data/*.txt"]);
        assert_eq!(args.report_options(), ReportOptions::default());
    }

    #[test]
    fn test_shell_expanded_patterns() {
        let args = Args::try_parse_from(["linecmp", "a.txt", "b.txt"]).unwrap();
        assert_eq!(args.patterns, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_sample_width() {
        let args =
            Args::try_parse_from(["linecmp", "--sample-width", "10", "*.txt"]).unwrap();
        assert_eq!(args.report_options().sample_width, 10);
    }

    #[test]
    fn test_rejects_zero_width_and_missing_pattern() {
        assert!(Args::try_parse_from(["linecmp", "--sample-width", "0", "*.txt"]).is_err());
        assert!(Args::try_parse_from(["linecmp"]).is_err());
    }
}

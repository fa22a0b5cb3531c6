use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use log::{debug, warn};

use super::model::{FileLines, LineSet};
use crate::error::{CompareError, Result};

// ---------------------------------------------------------------------------
// Pattern expansion
// ---------------------------------------------------------------------------

/// Wildcards never match a leading `.`, so `*.txt` leaves dotfiles alone.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Expand one glob pattern into the paths it matches, in glob order.
///
/// Matching nothing is not an error, and neither is a malformed pattern: an
/// unclosed `[` is taken literally, `**` behaves like `*`, and anything the
/// matcher still rejects is logged and treated as matching nothing. Entries
/// the walker cannot inspect (permission denied on a directory, for example)
/// are logged and skipped.
pub fn expand_pattern(pattern: &str) -> Vec<PathBuf> {
    let normalized = normalize_pattern(pattern);
    let entries = match glob::glob_with(&normalized, MATCH_OPTIONS) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("pattern '{pattern}' matches nothing: {err}");
            return Vec::new();
        }
    };

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                debug!("matched {}", path.display());
                paths.push(path);
            }
            Err(err) => warn!("skipping {}: {}", err.path().display(), err.error()),
        }
    }
    paths
}

/// Expand several patterns, concatenating their matches in argument order.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<PathBuf> {
    patterns
        .iter()
        .flat_map(|pattern| expand_pattern(pattern.as_ref()))
        .collect()
}

/// Rewrite `pattern` into one the matcher accepts.
///
/// Runs of `*` collapse to a single `*` (no recursive `**`), and a `[` with no
/// closing `]` in the same path component is escaped as `[[]`.
fn normalize_pattern(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Index of the `]` closing the class opened at `start`, if there is one.
/// A `]` straight after `[` or `[!` is a member, not the close.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while let Some(&c) = chars.get(j) {
        match c {
            ']' => return Some(j),
            '/' => return None,
            _ => j += 1,
        }
    }
    None
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Strip surrounding whitespace, counting the U+001C..=U+001F separators as
/// whitespace too.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Read a file into whitespace-trimmed lines.
///
/// A trailing newline does not produce an extra empty line, but blank lines
/// before it are kept as `""`. `\r\n` endings lose their `\r` in the trim;
/// a lone `\r` is not a line break.
pub fn load_file(path: &Path) -> Result<FileLines> {
    let read_err = |source: io::Error| CompareError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let lines = BufReader::new(file)
        .lines()
        .map(|line| line.map(|l| trim_line(&l).to_string()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_err)?;

    debug!("loaded {} ({} lines)", path.display(), lines.len());
    Ok(FileLines::new(path, lines))
}

/// Load every path in order. The first failure aborts the whole set.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<LineSet> {
    let files = paths
        .iter()
        .map(|p| load_file(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let set = LineSet::from_files(files);
    debug!(
        "loaded {} files, longest is {} lines",
        set.len(),
        set.longest_len()
    );
    Ok(set)
}

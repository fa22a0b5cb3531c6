use std::path::{Path, PathBuf};

use super::column::nth_lines;

// ---------------------------------------------------------------------------
// FileLines – the trimmed contents of one input file
// ---------------------------------------------------------------------------

/// The lines of a single file, whitespace-trimmed, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLines {
    /// Where the lines were read from.
    pub path: PathBuf,
    /// One entry per line; blank lines are kept as empty strings.
    pub lines: Vec<String>,
}

impl FileLines {
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the file had no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at a zero-based index, if the file is long enough.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

impl AsRef<[String]> for FileLines {
    fn as_ref(&self) -> &[String] {
        &self.lines
    }
}

// ---------------------------------------------------------------------------
// LineSet – every loaded file, in expansion order
// ---------------------------------------------------------------------------

/// All files taking part in one comparison run.
#[derive(Debug, Clone, Default)]
pub struct LineSet {
    /// Loaded files in the order the glob produced them.
    pub files: Vec<FileLines>,
    /// Length of the longest file, i.e. the number of report rows.
    longest: usize,
}

impl LineSet {
    /// Build the set and cache the longest file length.
    pub fn from_files(files: Vec<FileLines>) -> Self {
        let longest = files.iter().map(FileLines::len).max().unwrap_or(0);
        Self { files, longest }
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of line indices to report on.
    pub fn longest_len(&self) -> usize {
        self.longest
    }

    /// The lines at `index` from every file that reaches that far.
    pub fn column(&self, index: usize) -> Vec<&str> {
        nth_lines(&self.files, index)
    }
}

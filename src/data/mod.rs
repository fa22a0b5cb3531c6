/// Data layer: loaded file contents and the per-index column views.
///
/// Architecture:
/// ```text
///   glob pattern(s)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  expand pattern, read file → FileLines
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  LineSet  │  Vec<FileLines>, longest length
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  column   │  nth line of every file → distinct values
///   └──────────┘
/// ```

pub mod column;
pub mod loader;
pub mod model;
pub mod sample;

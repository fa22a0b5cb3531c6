use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Column extraction: the nth line across every file
// ---------------------------------------------------------------------------

/// Return the line at `index` from each file that has one, in file order.
///
/// Files with `index + 1` or fewer lines are skipped rather than padded, so the
/// result may be shorter than `lines_by_file`.
pub fn nth_lines<'a, L, S>(lines_by_file: &'a [L], index: usize) -> Vec<&'a str>
where
    L: AsRef<[S]>,
    S: AsRef<str> + 'a,
{
    lines_by_file
        .iter()
        .filter_map(|lines| lines.as_ref().get(index))
        .map(|line| line.as_ref())
        .collect()
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

/// The distinct values among `strings`, sorted.
pub fn distinct_values<S: AsRef<str>>(strings: &[S]) -> BTreeSet<&str> {
    strings.iter().map(|s| s.as_ref()).collect()
}

/// Number of distinct values among `strings`; 0 for an empty slice.
pub fn count_unique<S: AsRef<str>>(strings: &[S]) -> usize {
    distinct_values(strings).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_unique() {
        let empty: [&str; 0] = [];
        assert_eq!(count_unique(&empty), 0);
        assert_eq!(count_unique(&["a"]), 1);
        assert_eq!(count_unique(&["a", "b"]), 2);
        assert_eq!(count_unique(&["cat", "cat", "dog"]), 2);
        assert_eq!(count_unique(&["", "cat"]), 2);
    }

    #[test]
    fn test_count_unique_owned_strings() {
        let lines = vec!["x".to_string(), "x".to_string()];
        assert_eq!(count_unique(&lines), 1);
    }

    #[test]
    fn test_distinct_values_sorted() {
        let values = distinct_values(&["dog", "cat", "dog", ""]);
        assert_eq!(values.into_iter().collect::<Vec<_>>(), vec!["", "cat", "dog"]);
    }

    #[test]
    fn test_nth_lines() {
        let files = vec![vec!["L1A", "L1B"], vec!["L2A", "L2B"]];
        assert_eq!(nth_lines(&files, 0), vec!["L1A", "L2A"]);
        assert_eq!(nth_lines(&files, 1), vec!["L1B", "L2B"]);
    }

    #[test]
    fn test_nth_lines_past_end_is_empty() {
        let files = vec![vec!["L1A", "L1B"], vec!["L2A"]];
        assert!(nth_lines(&files, 2).is_empty());
        assert!(nth_lines(&files, 100).is_empty());
    }

    #[test]
    fn test_nth_lines_uneven_lengths() {
        let files = vec![vec!["a"], vec!["b", "c"], Vec::new()];
        assert_eq!(nth_lines(&files, 1), vec!["c"]);
    }
}

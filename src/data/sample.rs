use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Sample file set
// ---------------------------------------------------------------------------

/// Shape of a generated sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSpec {
    /// Number of files to write.
    pub files: usize,
    /// Maximum number of lines per file.
    pub lines: usize,
    /// How many variants each line can take.
    pub variants: u64,
    pub seed: u64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            files: 5,
            lines: 20,
            variants: 3,
            seed: 42,
        }
    }
}

/// Write `spec.files` text files into `dir` and return their paths.
///
/// Line `n` of every file reads `line <n> v<k>`, where `k` is drawn from
/// `0..spec.variants`. Odd-numbered files drop a few trailing lines so the
/// set has uneven lengths. The output depends only on `spec`.
pub fn generate_files(dir: &Path, spec: &SampleSpec) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut rng = SimpleRng::new(spec.seed);
    let variants = spec.variants.max(1);

    let mut paths = Vec::with_capacity(spec.files);
    for file_no in 0..spec.files {
        let mut len = spec.lines;
        if file_no % 2 == 1 && len > 0 {
            len -= (rng.next_u64() % (len as u64 / 4 + 1)) as usize;
        }

        let mut text = String::new();
        for line_no in 1..=len {
            let variant = rng.next_u64() % variants;
            text.push_str(&format!("line {line_no} v{variant}\n"));
        }

        let path = dir.join(format!("sample_{file_no:02}.txt"));
        fs::write(&path, text)?;
        paths.push(path);
    }
    Ok(paths)
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_files;
    use tempfile::tempdir;

    #[test]
    fn test_generate_files_shape() {
        let dir = tempdir().unwrap();
        let spec = SampleSpec::default();
        let paths = generate_files(dir.path(), &spec).unwrap();
        assert_eq!(paths.len(), spec.files);
        assert_eq!(paths[0], dir.path().join("sample_00.txt"));

        let set = load_files(&paths).unwrap();
        // Even-numbered files are never shortened.
        assert_eq!(set.longest_len(), spec.lines);
        assert_eq!(set.files[0].get(0).map(|l| l.starts_with("line 1 v")), Some(true));

        for index in 0..set.longest_len() {
            let distinct = crate::data::column::count_unique(&set.column(index));
            assert!(distinct >= 1 && distinct as u64 <= spec.variants);
        }
    }

    #[test]
    fn test_generate_files_deterministic() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        let spec = SampleSpec {
            seed: 7,
            ..SampleSpec::default()
        };
        let pa = generate_files(a.path(), &spec).unwrap();
        let pb = generate_files(b.path(), &spec).unwrap();

        for (x, y) in pa.iter().zip(&pb) {
            assert_eq!(fs::read_to_string(x).unwrap(), fs::read_to_string(y).unwrap());
        }
    }
}

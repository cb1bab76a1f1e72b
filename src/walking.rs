//! Bounded file-tree traversal for the CLI
//!
//! Collects the files to scan from a root path: a file root yields itself,
//! a directory yields its files then recurses into subdirectories. Both the
//! recursion depth and the total file count are capped so a careless
//! invocation on a huge tree stays bounded; hitting the count cap is
//! reported through a flag, not an error.
//!
//! This layer owns all filesystem access. The recognition core only ever
//! sees already-loaded strings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Traversal limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkConfig {
    /// How many directory levels below the root to descend into.
    pub max_depth: usize,
    /// Hard cap on collected files.
    pub max_files: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            max_depth: 5,
            max_files: 100,
        }
    }
}

/// The files collected from one root, in a stable (sorted) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walked {
    pub files: Vec<PathBuf>,
    /// True when `max_files` cut the collection short.
    pub truncated: bool,
}

/// Collect files under `root` subject to the configured limits.
pub fn collect_files(root: &Path, config: &WalkConfig) -> io::Result<Walked> {
    let mut walked = Walked {
        files: Vec::new(),
        truncated: false,
    };
    if root.is_file() {
        walked.files.push(root.to_path_buf());
        return Ok(walked);
    }
    walk_dir(root, config.max_depth, config.max_files, &mut walked)?;
    Ok(walked)
}

fn walk_dir(dir: &Path, depth: usize, max_files: usize, out: &mut Walked) -> io::Result<()> {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            subdirs.push(path);
        } else {
            files.push(path);
        }
    }
    files.sort();
    subdirs.sort();

    for file in files {
        if out.files.len() >= max_files {
            out.truncated = true;
            return Ok(());
        }
        out.files.push(file);
    }
    if depth == 0 {
        return Ok(());
    }
    for subdir in subdirs {
        if out.files.len() >= max_files {
            out.truncated = true;
            return Ok(());
        }
        walk_dir(&subdir, depth - 1, max_files, out)?;
    }
    Ok(())
}

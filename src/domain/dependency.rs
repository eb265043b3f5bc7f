//! Dependency domain types
//!
//! The narrow record the deployer consumes. Whatever produced the dependency
//! graph (a package manager, a manifest file, a test fixture) hands over a list
//! of these and nothing else.

use std::path::{Path, PathBuf};

/// A resolved dependency of the root project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Reference used in log lines, e.g. `zlib/1.3.1`
    pub reference: String,
    /// Root of the installed build outputs, `None` when no binary is available
    pub package_folder: Option<PathBuf>,
    /// Whether the binaries are needed at program execution time
    pub run: bool,
    /// Aggregated library directories, duplicates already merged
    pub libdirs: Vec<PathBuf>,
    /// Aggregated binary directories, duplicates already merged
    pub bindirs: Vec<PathBuf>,
}

impl Dependency {
    pub fn new(reference: impl Into<String>, package_folder: Option<PathBuf>) -> Self {
        Self {
            reference: reference.into(),
            package_folder,
            run: true,
            libdirs: Vec::new(),
            bindirs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_run(mut self, run: bool) -> Self {
        self.run = run;
        self
    }

    #[must_use]
    pub fn with_libdirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.libdirs = merge_dirs(dirs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_bindirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.bindirs = merge_dirs(dirs.into_iter().map(Into::into));
        self
    }

    /// Resolve a directory against the package folder
    ///
    /// Absolute directories are returned as-is.
    pub fn resolve_dir(&self, dir: &Path) -> PathBuf {
        match &self.package_folder {
            Some(folder) if dir.is_relative() => folder.join(dir),
            _ => dir.to_path_buf(),
        }
    }
}

/// Which kind of directory of a dependency is being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// Executables (and DLLs on Windows), copied unfiltered
    Bin,
    /// Libraries, filtered by the file name patterns
    Lib,
}

/// Merge directory lists, keeping the first occurrence of each path
pub fn merge_dirs<I>(dirs: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut merged: Vec<PathBuf> = Vec::new();
    for dir in dirs {
        if !merged.contains(&dir) {
            merged.push(dir);
        }
    }
    merged
}

//! Flattening copier
//!
//! Walks one directory of a dependency and copies every eligible file into
//! the top level of the output folder. Files already present with the same
//! contents are left alone, differing ones are overwritten with a warning.
//! The first copy failure aborts the whole deployment.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::compare::files_identical;
use super::copy;
use super::patterns::FilePatterns;
use crate::error::{Result, deploy::copy_failed};
use crate::ui::Reporter;

/// State of the destination before a file is deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Existing {
    Absent,
    Identical,
    Different,
}

/// A file a dry run would have written to the destination
#[derive(Debug, Clone)]
struct Planned {
    source: PathBuf,
    preserved: bool,
}

/// Copies eligible files of source trees into one flat folder
pub struct Flattener<'a, R: Reporter + ?Sized> {
    dest_dir: &'a Path,
    symlinks: bool,
    dry_run: bool,
    reporter: &'a R,
    // Destination names a dry run has already claimed, keyed by basename
    planned: RefCell<HashMap<OsString, Planned>>,
}

impl<'a, R: Reporter + ?Sized> Flattener<'a, R> {
    pub fn new(dest_dir: &'a Path, symlinks: bool, reporter: &'a R) -> Self {
        Self {
            dest_dir,
            symlinks,
            dry_run: false,
            reporter,
            planned: RefCell::new(HashMap::new()),
        }
    }

    /// Only report what would be copied
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Flatten `source_dir` into the destination
    ///
    /// Returns the number of eligible files confirmed present at the
    /// destination, whether freshly copied or already identical.
    pub fn flatten(
        &self,
        dependency: &str,
        source_dir: &Path,
        patterns: &FilePatterns,
    ) -> Result<usize> {
        let mut file_count = 0;

        let walker = WalkDir::new(source_dir)
            .follow_links(self.symlinks)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    if self.walk_error(dependency, &e, patterns)? {
                        file_count += 1;
                    }
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !patterns.is_match(&name) {
                continue;
            }

            let preserve = self.symlinks && entry.path_is_symlink();
            if !preserve && !self.is_regular_target(&entry) {
                continue;
            }

            self.deploy_file(dependency, entry.path(), entry.file_name(), preserve)?;
            file_count += 1;
        }

        Ok(file_count)
    }

    /// Recover from a walk error where possible
    ///
    /// Symlink loops are not descended. A dangling link is re-created as-is
    /// when preserving symlinks and skipped otherwise. Returns whether a file
    /// was deployed; any other error aborts.
    fn walk_error(
        &self,
        dependency: &str,
        err: &walkdir::Error,
        patterns: &FilePatterns,
    ) -> Result<bool> {
        if let Some(ancestor) = err.loop_ancestor() {
            self.reporter.warning(&format!(
                "{} links back to {}, not descending",
                err.path().map_or_else(String::new, |p| p.display().to_string()),
                ancestor.display()
            ));
            return Ok(false);
        }

        let Some(path) = err.path().filter(|p| copy::is_symlink(p)) else {
            return Err(copy_failed(dependency, err.to_string()));
        };

        if !self.symlinks {
            self.reporter
                .verbose(&format!("{} is a dangling symlink, skipping", path.display()));
            return Ok(false);
        }

        match path.file_name() {
            Some(name) if patterns.is_match(&name.to_string_lossy()) => {
                self.deploy_file(dependency, path, name, true)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Whether a non-preserved entry resolves to a regular file
    ///
    /// Symlinks are dereferenced; links to directories are not descended
    /// and dangling links are skipped.
    fn is_regular_target(&self, entry: &DirEntry) -> bool {
        if entry.file_type().is_file() {
            return true;
        }
        if !entry.file_type().is_symlink() {
            return false;
        }
        match fs::metadata(entry.path()) {
            Ok(meta) => meta.is_file(),
            Err(_) => {
                self.reporter.verbose(&format!(
                    "{} is a dangling symlink, skipping",
                    entry.path().display()
                ));
                false
            }
        }
    }

    /// Make sure one eligible file is present at the destination
    fn deploy_file(
        &self,
        dependency: &str,
        source: &Path,
        file_name: &OsStr,
        preserve: bool,
    ) -> Result<()> {
        let dest = self.dest_dir.join(file_name);

        let state = self
            .existing(source, &dest, file_name, preserve)
            .map_err(|e| copy_failed(dependency, e.to_string()))?;

        if self.dry_run {
            self.planned.borrow_mut().insert(
                file_name.to_os_string(),
                Planned {
                    source: source.to_path_buf(),
                    preserved: preserve,
                },
            );
        }

        match state {
            Existing::Identical => {
                self.reporter.verbose(&format!(
                    "{} exists with same contents, skipping copy",
                    dest.display()
                ));
                return Ok(());
            }
            Existing::Different => {
                self.reporter
                    .warning(&format!("{} exists and will be overwritten", dest.display()));
            }
            Existing::Absent => {}
        }

        if self.dry_run {
            self.reporter.verbose(&format!(
                "Would copy {} into {}",
                source.display(),
                self.dest_dir.display()
            ));
            return Ok(());
        }

        let copied = if preserve {
            copy::copy_symlink(source, &dest)
        } else {
            copy::copy_with_metadata(source, &dest)
        };

        if let Err(e) = copied {
            if copy::is_symlink_privilege_error(&e) {
                self.reporter
                    .error("Windows symlinks require admin privileges or 'Developer mode = ON'");
            }
            return Err(copy_failed(dependency, e.to_string()));
        }

        self.reporter.verbose(&format!(
            "Copied {} into {}",
            source.display(),
            self.dest_dir.display()
        ));
        Ok(())
    }

    /// Compare `source` with what the destination holds, or would hold in a dry run
    fn existing(
        &self,
        source: &Path,
        dest: &Path,
        file_name: &OsStr,
        preserve: bool,
    ) -> std::io::Result<Existing> {
        let identical = if let Some(planned) = self.planned.borrow().get(file_name) {
            if preserve {
                planned.preserved && copy::same_symlink(source, &planned.source)
            } else {
                !planned.preserved && files_identical(source, &planned.source)?
            }
        } else if fs::symlink_metadata(dest).is_err() {
            return Ok(Existing::Absent);
        } else if preserve {
            copy::same_symlink(source, dest)
        } else if copy::is_symlink(dest) {
            false
        } else {
            files_identical(source, dest)?
        };

        Ok(if identical {
            Existing::Identical
        } else {
            Existing::Different
        })
    }
}

/// Flatten `source_dir` into `dest_dir`, reporting through `reporter`
#[cfg(test)]
pub fn flatten<R: Reporter + ?Sized>(
    dependency: &str,
    source_dir: &Path,
    dest_dir: &Path,
    follow_symlinks: bool,
    patterns: &FilePatterns,
    reporter: &R,
) -> Result<usize> {
    Flattener::new(dest_dir, follow_symlinks, reporter).flatten(dependency, source_dir, patterns)
}

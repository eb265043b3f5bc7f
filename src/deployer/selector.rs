//! Dependency selection
//!
//! Walks the dependency list and yields the directories that hold runtime
//! binaries. Static-only dependencies never reach the copier, dependencies
//! without a package folder and directories missing on disk are skipped with
//! a warning.

use std::path::PathBuf;

use crate::domain::{Dependency, DirKind};
use crate::ui::Reporter;

/// A directory of a selected dependency, ready to be flattened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDir {
    pub dir: PathBuf,
    pub kind: DirKind,
}

/// A runtime-used dependency with the directories to scan
pub struct Selected<'a> {
    pub dependency: &'a Dependency,
    pub dirs: Vec<SelectedDir>,
}

/// Lazily select the dependencies and directories to deploy
///
/// Binary directories are yielded before library directories.
pub fn select<'a, R: Reporter + ?Sized>(
    dependencies: &'a [Dependency],
    reporter: &'a R,
) -> impl Iterator<Item = Selected<'a>> + 'a {
    dependencies
        .iter()
        .filter(|dep| dep.run)
        .filter(move |dep| {
            if dep.package_folder.is_none() {
                reporter.warning(&format!(
                    "{} does not have any package folder, skipping binary",
                    dep.reference
                ));
                return false;
            }
            true
        })
        .map(move |dep| Selected {
            dependency: dep,
            dirs: existing_dirs(dep, reporter),
        })
}

/// Count of dependencies `select` will yield, without any reporting
pub fn selected_count(dependencies: &[Dependency]) -> usize {
    dependencies
        .iter()
        .filter(|dep| dep.run && dep.package_folder.is_some())
        .count()
}

fn existing_dirs<R: Reporter + ?Sized>(dep: &Dependency, reporter: &R) -> Vec<SelectedDir> {
    let bins = dep.bindirs.iter().map(|d| (d, DirKind::Bin));
    let libs = dep.libdirs.iter().map(|d| (d, DirKind::Lib));

    bins.chain(libs)
        .filter_map(|(dir, kind)| {
            let dir = dep.resolve_dir(dir);
            if dir.is_dir() {
                Some(SelectedDir { dir, kind })
            } else {
                reporter.warning(&format!("{} {} does not exist", dep.reference, dir.display()));
                None
            }
        })
        .collect()
}

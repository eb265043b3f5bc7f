//! Runtime deployment of dependency binaries
//!
//! This module handles:
//! - Selecting runtime-used dependencies and their binary/library directories
//! - Flattening those directories into a single output folder
//! - Summing and reporting per-dependency file counts
//!
//! Processing is sequential: one dependency, one directory, one file at a
//! time. The output folder is assumed to be owned by this run; two
//! deployments into the same folder at once are not supported.

pub mod compare;
pub mod copy;
pub mod flatten;
pub mod patterns;
pub mod selector;


use std::fs;
use std::path::{Path, PathBuf};

pub use flatten::Flattener;
pub use patterns::FilePatterns;
pub use selector::{SelectedDir, select};

use crate::domain::{Dependency, DirKind};
use crate::error::{Result, deploy::output_dir_failed};
use crate::ui::Reporter;

/// Knobs for one deployment run
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Follow directory symlinks and preserve file symlinks
    pub symlinks: bool,
    /// Patterns deciding which library directory files are deployed
    pub patterns: FilePatterns,
    /// Report what would be copied without touching the output folder
    pub dry_run: bool,
}

/// Files confirmed present in the output folder for one dependency
#[allow(dead_code)] // read in tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    pub reference: String,
    pub files: usize,
}

/// Outcome of a deployment run
#[allow(dead_code)] // read in tests
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub output: PathBuf,
    pub dependencies: Vec<DependencyReport>,
}

#[allow(dead_code)] // used in tests
impl DeployReport {
    pub fn total_files(&self) -> usize {
        self.dependencies.iter().map(|d| d.files).sum()
    }

    /// File count of one dependency, `None` when it was not deployed
    pub fn files_for(&self, reference: &str) -> Option<usize> {
        self.dependencies
            .iter()
            .find(|d| d.reference == reference)
            .map(|d| d.files)
    }
}

/// Deploy the runtime binaries of `dependencies` into `output`
pub fn deploy<R: Reporter + ?Sized>(
    dependencies: &[Dependency],
    output: &Path,
    options: &DeployOptions,
    reporter: &R,
) -> Result<DeployReport> {
    reporter.info(&format!(
        "Deploying dependencies runtime to folder: {}",
        output.display()
    ));

    if !options.dry_run {
        fs::create_dir_all(output)
            .map_err(|e| output_dir_failed(output.display().to_string(), e.to_string()))?;
    }

    reporter.begin(selector::selected_count(dependencies));
    let result = deploy_selected(dependencies, output, options, reporter);
    reporter.finish(result.is_ok());

    match result {
        Ok(report) => {
            let verb = if options.dry_run {
                "Runtime would be deployed"
            } else {
                "Runtime deployed"
            };
            reporter.success(&format!("{verb} to folder: {}", output.display()));
            Ok(report)
        }
        Err(e) => {
            reporter.error(&format!(
                "Runtime deployment to folder {} failed",
                output.display()
            ));
            Err(e)
        }
    }
}

fn deploy_selected<R: Reporter + ?Sized>(
    dependencies: &[Dependency],
    output: &Path,
    options: &DeployOptions,
    reporter: &R,
) -> Result<DeployReport> {
    let total = selector::selected_count(dependencies);
    let flattener = Flattener::new(output, options.symlinks, reporter).dry_run(options.dry_run);
    let everything = FilePatterns::all();
    let mut report = DeployReport {
        output: output.to_path_buf(),
        dependencies: Vec::new(),
    };

    for (index, selected) in select(dependencies, reporter).enumerate() {
        let reference = &selected.dependency.reference;
        reporter.begin_dependency(reference, index + 1, total);

        let mut files = 0;
        for SelectedDir { dir, kind } in &selected.dirs {
            let patterns = match kind {
                DirKind::Bin => &everything,
                DirKind::Lib => &options.patterns,
            };
            files += flattener.flatten(reference, dir, patterns)?;
        }

        reporter.info(&format!("Copied {files} files from {reference}"));
        report.dependencies.push(DependencyReport {
            reference: reference.clone(),
            files,
        });
    }

    Ok(report)
}

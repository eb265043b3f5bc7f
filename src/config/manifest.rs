//! Deployment manifest (YAML) data structures
//!
//! The manifest lists the already-resolved dependencies of a project along
//! with the deployment settings. Relative paths in it are relative to the
//! directory holding the manifest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::dependency::DependencySpec;
use crate::deployer::FilePatterns;
use crate::domain::Dependency;
use crate::error::{
    Result,
    config::{invalid, not_found, parse_failed, read_failed},
};

/// Output folder used when neither the manifest nor the CLI names one
pub const DEFAULT_OUTPUT: &str = "runtime";

/// Deployment manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployManifest {
    /// Output folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Follow directory symlinks and preserve file symlinks
    #[serde(default)]
    pub symlinks: bool,

    /// Library file patterns replacing the defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,

    /// Resolved dependencies
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,

    /// Directory the manifest was loaded from
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl DeployManifest {
    /// Parse a manifest from a YAML string
    #[allow(dead_code)] // used in tests
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and validate a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;

        let mut manifest: Self = serde_yaml::from_str(&content)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
        manifest.validate()?;

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        manifest.base_dir = dunce::canonicalize(parent)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;

        Ok(manifest)
    }

    /// Validate dependency entries and patterns
    pub fn validate(&self) -> Result<()> {
        for dep in &self.dependencies {
            dep.validate()?;
        }
        if let Some(patterns) = &self.patterns {
            if patterns.is_empty() {
                return Err(invalid(
                    "'patterns' must list at least one pattern, remove it to use the defaults",
                ));
            }
            FilePatterns::new(patterns)?;
        }
        Ok(())
    }

    /// Compiled library patterns, the defaults when none are configured
    pub fn file_patterns(&self) -> Result<FilePatterns> {
        match &self.patterns {
            Some(patterns) => FilePatterns::new(patterns),
            None => Ok(FilePatterns::default()),
        }
    }

    /// Output folder resolved against the manifest directory
    pub fn output_dir(&self) -> PathBuf {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        self.resolve(&output)
    }

    /// Dependency records handed to the deployer
    pub fn dependencies(&self) -> Vec<Dependency> {
        self.dependencies
            .iter()
            .map(|spec| spec.to_dependency(&self.base_dir))
            .collect()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_relative() {
            self.base_dir.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

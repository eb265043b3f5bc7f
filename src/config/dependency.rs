//! Dependency entries of the deployment manifest
//!
//! A dependency entry as written by the package manager that resolved the
//! graph, with optional per-component directories.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::Dependency;
use crate::error::{Result, config::invalid};

fn default_run() -> bool {
    true
}

/// Directories declared by one component of a dependency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub libdirs: Vec<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bindirs: Vec<PathBuf>,
}

/// A resolved dependency declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
    /// Reference used in log lines, e.g. `zlib/1.3.1`
    #[serde(rename = "ref")]
    pub reference: String,

    /// Root of the installed build outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_folder: Option<PathBuf>,

    /// Whether the binaries are needed at run time
    #[serde(default = "default_run")]
    pub run: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub libdirs: Vec<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bindirs: Vec<PathBuf>,

    /// Per-component directories, merged into the aggregate in name order
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, ComponentSpec>,
}

impl DependencySpec {
    /// Validate the entry
    pub fn validate(&self) -> Result<()> {
        if self.reference.trim().is_empty() {
            return Err(invalid("Dependency reference cannot be empty"));
        }
        Ok(())
    }

    /// Aggregate the dependency and component directories into a `Dependency`
    ///
    /// A relative package folder is resolved against `base`.
    pub fn to_dependency(&self, base: &std::path::Path) -> Dependency {
        let package_folder = self.package_folder.as_ref().map(|folder| {
            if folder.is_relative() {
                base.join(folder)
            } else {
                folder.clone()
            }
        });

        Dependency::new(self.reference.as_str(), package_folder)
            .with_run(self.run)
            .with_libdirs(
                self.libdirs
                    .iter()
                    .chain(self.components.values().flat_map(|c| c.libdirs.iter())),
            )
            .with_bindirs(
                self.bindirs
                    .iter()
                    .chain(self.components.values().flat_map(|c| c.bindirs.iter())),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_run_defaults_to_true() {
        let spec: DependencySpec = serde_yaml::from_str("ref: zlib/1.3.1\n").unwrap();
        assert!(spec.run);
        assert!(spec.package_folder.is_none());
        assert!(spec.libdirs.is_empty());
    }

    #[test]
    fn test_components_are_aggregated_without_duplicates() {
        let yaml = r"
ref: openssl/3.2.0
package_folder: /pkgs/openssl
libdirs: [lib]
components:
  ssl:
    libdirs: [lib, lib/ossl-modules]
  crypto:
    libdirs: [lib, lib/engines-3]
    bindirs: [bin]
";
        let spec: DependencySpec = serde_yaml::from_str(yaml).unwrap();
        let dep = spec.to_dependency(Path::new("/unused"));

        // Components merge in name order: crypto before ssl
        assert_eq!(
            dep.libdirs,
            vec![
                PathBuf::from("lib"),
                PathBuf::from("lib/engines-3"),
                PathBuf::from("lib/ossl-modules"),
            ]
        );
        assert_eq!(dep.bindirs, vec![PathBuf::from("bin")]);
        assert_eq!(dep.package_folder, Some(PathBuf::from("/pkgs/openssl")));
    }

    #[test]
    fn test_relative_package_folder_resolved_against_base() {
        let spec: DependencySpec =
            serde_yaml::from_str("ref: zlib/1.3.1\npackage_folder: pkgs/zlib\n").unwrap();
        let dep = spec.to_dependency(Path::new("/work"));
        assert_eq!(dep.package_folder, Some(PathBuf::from("/work/pkgs/zlib")));
    }

    #[test]
    fn test_empty_reference_is_invalid() {
        let spec: DependencySpec = serde_yaml::from_str("ref: '  '\n").unwrap();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_missing_reference_fails_to_parse() {
        let result: std::result::Result<DependencySpec, _> =
            serde_yaml::from_str("package_folder: /pkgs/zlib\n");
        assert!(result.is_err());
    }
}

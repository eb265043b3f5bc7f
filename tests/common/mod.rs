//! Common test utilities for flatdeploy integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory holding package folders, a manifest and the output
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        self.write_bytes(path, content.as_bytes());
    }

    /// Write raw bytes in workspace
    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names of the entries directly inside `dir`, sorted
    pub fn list_dir(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(dir))
            .expect("Failed to read directory")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// Write `deploy.yaml` at the workspace root
    pub fn write_manifest(&self, yaml: &str) -> PathBuf {
        self.write_file("deploy.yaml", yaml);
        self.path.join("deploy.yaml")
    }

    /// Populate `pkgs/` with a small runtime dependency set
    ///
    /// - zlib: a versioned soname, a static archive and a readme
    /// - openssl: a nested engines directory and a dylib
    /// - gtest: a build-time only library
    /// - protobuf: an executable in bin/ and a library in lib/
    pub fn create_packages(&self) {
        self.write_bytes("pkgs/zlib/lib/libz.so.1.3.1", b"zlib shared");
        self.write_bytes("pkgs/zlib/lib/libz.a", b"zlib static");
        self.write_file("pkgs/zlib/lib/README.txt", "zlib docs");
        self.write_bytes("pkgs/openssl/lib/libssl.so.3", b"ssl");
        self.write_bytes("pkgs/openssl/lib/engines-3/padlock.so", b"padlock");
        self.write_bytes("pkgs/openssl/lib/libcrypto.3.dylib", b"crypto");
        self.write_bytes("pkgs/gtest/lib/libgtest.so", b"gtest");
        self.write_bytes("pkgs/protobuf/bin/protoc", b"protoc");
        self.write_bytes("pkgs/protobuf/lib/libprotobuf.so.32", b"protobuf");
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Manifest deploying the packages from `create_packages`
#[allow(dead_code)]
pub const PACKAGES_MANIFEST: &str = r"
output: runtime
dependencies:
  - ref: zlib/1.3.1
    package_folder: pkgs/zlib
    libdirs: [lib]
  - ref: openssl/3.2.0
    package_folder: pkgs/openssl
    components:
      ssl:
        libdirs: [lib]
      crypto:
        libdirs: [lib]
  - ref: gtest/1.14.0
    package_folder: pkgs/gtest
    run: false
    libdirs: [lib]
  - ref: protobuf/3.21.12
    package_folder: pkgs/protobuf
    libdirs: [lib]
    bindirs: [bin]
";

/// Command for the real flatdeploy binary, run from `dir`
#[allow(dead_code, deprecated)]
pub fn flatdeploy_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flatdeploy").expect("Failed to find flatdeploy binary");
    cmd.current_dir(dir);
    cmd.env_remove("FLATDEPLOY_SYMLINKS");
    cmd
}

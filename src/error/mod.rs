//! Error types and handling for flatdeploy
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`deploy`]: Copy and output directory errors
//! - [`config`]: Manifest and pattern errors
//! - [`cli`]: Command line usage errors

pub mod cli;
pub mod config;
pub mod deploy;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for flatdeploy operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeployError {
    // Deployment errors
    #[error("Copy of '{dependency}' files failed: {reason}")]
    #[diagnostic(
        code(flatdeploy::deploy::copy_failed),
        help("You can use 'symlinks: false' in the manifest (or drop --symlinks) to disable symlinks")
    )]
    CopyFailed { dependency: String, reason: String },

    #[error("Failed to create output folder '{path}': {reason}")]
    #[diagnostic(code(flatdeploy::deploy::output_dir_failed))]
    OutputDirFailed { path: String, reason: String },

    // Manifest errors
    #[error("Deployment manifest not found: {path}")]
    #[diagnostic(
        code(flatdeploy::manifest::not_found),
        help("Pass the path of a YAML manifest listing the resolved dependencies")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read deployment manifest: {path}")]
    #[diagnostic(code(flatdeploy::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse deployment manifest: {path}: {reason}")]
    #[diagnostic(code(flatdeploy::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid deployment manifest: {message}")]
    #[diagnostic(code(flatdeploy::manifest::invalid))]
    ManifestInvalid { message: String },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(flatdeploy::manifest::invalid_pattern),
        help("Patterns are regular expressions matched against file names")
    )]
    InvalidPattern { pattern: String, reason: String },

    // Command line errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(flatdeploy::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(flatdeploy::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DeployError {
    fn from(err: std::io::Error) -> Self {
        DeployError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DeployError {
    fn from(err: serde_yaml::Error) -> Self {
        DeployError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeployError>;

//! Deployment errors

use super::DeployError;

/// Creates a copy failed error for a dependency
pub fn copy_failed(dependency: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::CopyFailed {
        dependency: dependency.into(),
        reason: reason.into(),
    }
}

/// Creates an output directory creation error
pub fn output_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::OutputDirFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

//! Manifest errors

use super::DeployError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> DeployError {
    DeployError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid(message: impl Into<String>) -> DeployError {
    DeployError::ManifestInvalid {
        message: message.into(),
    }
}

/// Creates an invalid pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

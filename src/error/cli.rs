//! Command line usage errors

use super::DeployError;

/// Creates an unsupported shell error
pub fn unknown_shell(shell: impl Into<String>) -> DeployError {
    DeployError::UnknownShell {
        shell: shell.into(),
    }
}

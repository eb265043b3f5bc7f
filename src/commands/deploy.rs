//! Deploy command implementation
//!
//! Loads the manifest, merges CLI overrides into the deployment options and
//! hands the dependency records to the deployer.

use std::path::PathBuf;

use crate::cli::DeployArgs;
use crate::config::DeployManifest;
use crate::deployer::{self, DeployOptions, DeployReport, FilePatterns};
use crate::error::Result;
use crate::ui::{ConsoleReporter, Reporter, SilentReporter};

/// Run deploy command
pub fn run(args: DeployArgs, verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        execute(&args, &SilentReporter)?;
    } else {
        execute(&args, &ConsoleReporter::new(verbose))?;
    }
    Ok(())
}

fn execute<R: Reporter + ?Sized>(args: &DeployArgs, reporter: &R) -> Result<DeployReport> {
    let manifest = DeployManifest::load(&args.manifest)?;
    let output = output_dir(args, &manifest);
    let options = deploy_options(args, &manifest)?;

    deployer::deploy(&manifest.dependencies(), &output, &options, reporter)
}

/// Output folder: `--output` (relative to the working directory) or the manifest's
fn output_dir(args: &DeployArgs, manifest: &DeployManifest) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| manifest.output_dir())
}

fn deploy_options(args: &DeployArgs, manifest: &DeployManifest) -> Result<DeployOptions> {
    let patterns = if args.patterns.is_empty() {
        manifest.file_patterns()?
    } else {
        FilePatterns::new(&args.patterns)?
    };

    Ok(DeployOptions {
        symlinks: args.symlinks_override().unwrap_or(manifest.symlinks),
        patterns,
        dry_run: args.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Level, RecordingReporter};
    use std::fs;
    use tempfile::TempDir;

    fn args(manifest: PathBuf) -> DeployArgs {
        DeployArgs {
            manifest,
            output: None,
            symlinks: false,
            no_symlinks: false,
            patterns: Vec::new(),
            dry_run: false,
        }
    }

    fn workspace() -> TempDir {
        let temp = TempDir::new().unwrap();
        let lib = temp.path().join("pkgs/zlib/lib");
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join("libz.so.1"), b"zlib").unwrap();
        fs::write(lib.join("libz.a"), b"static").unwrap();
        fs::write(
            temp.path().join("deploy.yaml"),
            "output: out\nsymlinks: true\ndependencies:\n  - ref: zlib/1.3.1\n    package_folder: pkgs/zlib\n    libdirs: [lib]\n",
        )
        .unwrap();
        temp
    }

    #[test]
    fn test_execute_deploys_into_manifest_output() {
        let temp = workspace();
        let reporter = RecordingReporter::new();

        let report = execute(&args(temp.path().join("deploy.yaml")), &reporter).unwrap();

        let base = dunce::canonicalize(temp.path()).unwrap();
        assert_eq!(report.output, base.join("out"));
        assert_eq!(report.files_for("zlib/1.3.1"), Some(1));
        assert!(base.join("out/libz.so.1").is_file());
        assert!(reporter.contains(Level::Success, "Runtime deployed to folder"));
    }

    #[test]
    fn test_cli_output_and_patterns_override_manifest() {
        let temp = workspace();
        let mut deploy_args = args(temp.path().join("deploy.yaml"));
        deploy_args.output = Some(temp.path().join("elsewhere"));
        deploy_args.patterns = vec![r"\.a$".to_string()];

        let report = execute(&deploy_args, &RecordingReporter::new()).unwrap();

        assert_eq!(report.output, temp.path().join("elsewhere"));
        assert!(temp.path().join("elsewhere/libz.a").is_file());
        assert!(!temp.path().join("elsewhere/libz.so.1").exists());
    }

    #[test]
    fn test_symlink_setting_precedence() {
        let temp = workspace();
        let manifest = DeployManifest::load(&temp.path().join("deploy.yaml")).unwrap();
        let mut deploy_args = args(temp.path().join("deploy.yaml"));

        assert!(deploy_options(&deploy_args, &manifest).unwrap().symlinks);

        deploy_args.no_symlinks = true;
        assert!(!deploy_options(&deploy_args, &manifest).unwrap().symlinks);
    }

    #[test]
    fn test_invalid_cli_pattern() {
        let temp = workspace();
        let mut deploy_args = args(temp.path().join("deploy.yaml"));
        deploy_args.patterns = vec!["(".to_string()];

        let result = execute(&deploy_args, &RecordingReporter::new());
        assert!(matches!(
            result,
            Err(crate::error::DeployError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let result = run(args(temp.path().join("missing.yaml")), false, true);
        assert!(result.is_err());
    }
}

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the deploy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Deploy into the folder named by the manifest:\n    flatdeploy deploy deploy.yaml\n\n\
                   Deploy into another folder:\n    flatdeploy deploy deploy.yaml --output dist/bin\n\n\
                   Keep symlinked sonames as symlinks:\n    flatdeploy deploy deploy.yaml --symlinks\n\n\
                   Only deploy static archives:\n    flatdeploy deploy deploy.yaml --pattern '\\.a$'")]
pub struct DeployArgs {
    /// Deployment manifest listing the resolved dependencies
    pub manifest: PathBuf,

    /// Output folder (overrides the manifest's `output`)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Follow directory symlinks and preserve file symlinks
    #[arg(long, env = "FLATDEPLOY_SYMLINKS", conflicts_with = "no_symlinks")]
    pub symlinks: bool,

    /// Copy symlink targets as regular files even if the manifest enables symlinks
    #[arg(long)]
    pub no_symlinks: bool,

    /// Library file pattern (regex), replaces the manifest and default patterns
    #[arg(long = "pattern", short = 'p', value_name = "REGEX", num_args = 1)]
    pub patterns: Vec<String>,

    /// Show what would be deployed without copying anything
    #[arg(long)]
    pub dry_run: bool,
}

impl DeployArgs {
    /// Symlink setting from the flags, `None` when the manifest decides
    pub fn symlinks_override(&self) -> Option<bool> {
        if self.no_symlinks {
            Some(false)
        } else if self.symlinks {
            Some(true)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> super::DeployArgs {
        let cli = Cli::try_parse_from(args).unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            Commands::Deploy(args) => args,
            _ => panic!("Expected Deploy command"),
        }
    }

    #[test]
    fn test_cli_parsing_deploy() {
        let args = parse(&["flatdeploy", "deploy", "deploy.yaml"]);
        assert_eq!(args.manifest, std::path::PathBuf::from("deploy.yaml"));
        assert!(args.output.is_none());
        assert!(args.patterns.is_empty());
        assert!(!args.dry_run);
    }

    #[test]
    fn test_cli_parsing_deploy_with_options() {
        let args = parse(&[
            "flatdeploy",
            "deploy",
            "deploy.yaml",
            "-o",
            "dist/bin",
            "--pattern",
            r"\.a$",
            "-p",
            ".dll",
            "--dry-run",
        ]);
        assert_eq!(args.output, Some(std::path::PathBuf::from("dist/bin")));
        assert_eq!(args.patterns, vec![r"\.a$", ".dll"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_symlinks_override() {
        let args = parse(&["flatdeploy", "deploy", "deploy.yaml", "--no-symlinks"]);
        assert_eq!(args.symlinks_override(), Some(false));

        let args = parse(&["flatdeploy", "deploy", "deploy.yaml", "--symlinks"]);
        assert_eq!(args.symlinks_override(), Some(true));
    }

    #[test]
    fn test_symlink_flags_conflict() {
        let result = Cli::try_parse_from([
            "flatdeploy",
            "deploy",
            "deploy.yaml",
            "--symlinks",
            "--no-symlinks",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_deploy_requires_manifest() {
        assert!(Cli::try_parse_from(["flatdeploy", "deploy"]).is_err());
    }
}

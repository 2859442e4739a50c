//! Argument parsing and configuration building for the top-level CLI.

use super::{Cli, CliConfig, Commands};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_cli_parsing() {
    // --help is reported as an error by try_parse
    assert!(Cli::try_parse_from(["repomesh", "--help"]).is_err());
    assert!(Cli::try_parse_from(["repomesh"]).is_err());

    for args in [
        vec!["repomesh", "init"],
        vec!["repomesh", "up"],
        vec!["repomesh", "down"],
        vec!["repomesh", "doctor"],
        vec!["repomesh", "status"],
        vec!["repomesh", "mcp", "--write"],
        vec!["repomesh", "task", "list", "--status", "pending"],
        vec!["repomesh", "logs", "--task-id", "t-1"],
        vec!["repomesh", "context", "t-1", "--mode", "full"],
    ] {
        assert!(Cli::try_parse_from(args.iter().copied()).is_ok(), "failed to parse {args:?}");
    }
}

#[test]
fn test_unknown_context_mode_rejected() {
    assert!(Cli::try_parse_from(["repomesh", "context", "t-1", "--mode", "verbose"]).is_err());
}

#[test]
fn test_verbosity_flags() {
    let cli = Cli::try_parse_from(["repomesh", "--verbose", "doctor"]).unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.log_filter(), Some("debug"));

    // global flags are accepted after the subcommand too
    let cli = Cli::try_parse_from(["repomesh", "status", "-q"]).unwrap();
    assert!(cli.quiet);
    assert_eq!(cli.log_filter(), Some("error"));

    let cli = Cli::try_parse_from(["repomesh", "init"]).unwrap();
    assert_eq!(cli.log_filter(), None);
}

#[test]
fn test_build_config() {
    let args = ["repomesh", "--repo", "/work/demo", "--timeout", "5", "init"];
    let cli = Cli::try_parse_from(args).unwrap();
    assert!(matches!(cli.command, Commands::Init(_)));

    let config = cli.build_config();
    assert_eq!(config.repo_root, Some(PathBuf::from("/work/demo")));
    assert_eq!(config.api_timeout, Some(Duration::from_secs(5)));
    assert_eq!(config.paths().repo_root, PathBuf::from("/work/demo"));
}

#[test]
fn test_default_config_uses_current_dir() {
    let config = CliConfig::new();
    assert!(config.api_timeout.is_none());
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(config.paths().repo_root, cwd);
}

#[test]
fn test_api_client_requires_init() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = CliConfig {
        repo_root: Some(temp.path().to_path_buf()),
        api_timeout: Some(Duration::from_secs(2)),
    };
    let err = config.api_client(&config.paths()).unwrap_err();
    assert!(err.to_string().contains("repomesh init"));
}

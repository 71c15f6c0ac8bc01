//! Tests for global options.

use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "urlprobe",
        "check",
        "https://example.com/",
        "--user-agent",
        "Mozilla/5.0",
        "--config",
        "/tmp/urlprobe.toml",
    ])
    .unwrap();
    assert_eq!(cli.user_agent.as_deref(), Some("Mozilla/5.0"));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/urlprobe.toml")));
    assert!(matches!(cli.command, CliCommand::Check { .. }));
}

#[test]
fn global_options_default_to_none() {
    let cli = Cli::try_parse_from(["urlprobe", "parse", "text"]).unwrap();
    assert!(cli.user_agent.is_none());
    assert!(cli.config.is_none());
}

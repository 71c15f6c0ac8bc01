//! CLI for urlprobe.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use urlprobe_core::config::{self, UrlProbeConfig};
use urlprobe_core::Prober;

use commands::{run_base_host, run_check, run_fetch, run_match, run_parse};

/// Top-level CLI for urlprobe.
#[derive(Debug, Parser)]
#[command(name = "urlprobe")]
#[command(about = "urlprobe: URL parsing, reachability probes and base-host resolution", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// User-Agent to send with probes (overrides the configured default).
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract the first http(s) URL from text and show its parts.
    Parse {
        /// Free text containing a URL.
        text: String,
        /// Print the decomposed parts as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Probe a URL for reachability.
    Check {
        url: String,
        /// Verify TLS certificates (overrides config).
        #[arg(long)]
        verify_ssl: bool,
    },

    /// Fetch and print the body of a URL.
    Fetch {
        url: String,
        /// Verify TLS certificates (overrides config).
        #[arg(long)]
        verify_ssl: bool,
    },

    /// Resolve the base host of a URL by stripping subdomains while it stays reachable.
    BaseHost {
        url: String,
        /// Verify TLS certificates (overrides config).
        #[arg(long)]
        verify_ssl: bool,
        /// Give up narrowing after this many seconds.
        #[arg(long, value_name = "SECS")]
        deadline_secs: Option<u64>,
    },

    /// Compare selected fields of two URLs.
    Match {
        a: String,
        b: String,
        /// Comma-separated field names.
        #[arg(long, value_delimiter = ',', default_value = "scheme,host,port")]
        fields: Vec<String>,
    },
}

impl CliCommand {
    /// Commands that issue probes. `parse` and `match` work offline and never
    /// read or create the config file.
    pub fn needs_config(&self) -> bool {
        matches!(
            self,
            CliCommand::Check { .. } | CliCommand::Fetch { .. } | CliCommand::BaseHost { .. }
        )
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if !cli.command.needs_config() {
            return match cli.command {
                CliCommand::Parse { text, json } => run_parse(&text, json),
                CliCommand::Match { a, b, fields } => run_match(&a, &b, &fields),
                _ => Ok(()),
            };
        }

        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let prober = Prober::from_config(&cfg).with_user_agent(cli.user_agent);
        let verify = |flag: bool| flag || cfg.probe.verify_ssl;

        match cli.command {
            CliCommand::Check { url, verify_ssl } => {
                run_check(prober, &url, verify(verify_ssl)).await?
            }
            CliCommand::Fetch { url, verify_ssl } => {
                run_fetch(prober, &url, verify(verify_ssl)).await?
            }
            CliCommand::BaseHost {
                url,
                verify_ssl,
                deadline_secs,
            } => {
                let deadline = deadline_secs
                    .or(cfg.resolve_deadline_secs)
                    .map(Duration::from_secs);
                run_base_host(prober, &url, verify(verify_ssl), deadline).await?
            }
            CliCommand::Parse { .. } | CliCommand::Match { .. } => {}
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<UrlProbeConfig> {
    match path {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;

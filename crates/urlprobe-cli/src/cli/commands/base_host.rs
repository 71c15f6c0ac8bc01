//! `urlprobe base-host <url>` – resolve the base host.

use anyhow::Result;
use std::time::Duration;
use urlprobe_core::{BaseHostResolver, Prober};

use super::url_arg;

pub async fn run_base_host(
    prober: Prober,
    input: &str,
    verify_ssl: bool,
    deadline: Option<Duration>,
) -> Result<()> {
    let url = url_arg(input)?;
    let res = tokio::task::spawn_blocking(move || {
        BaseHostResolver::new(&prober)
            .verify_ssl(verify_ssl)
            .deadline(deadline)
            .resolve_detailed(&url)
    })
    .await?;
    println!("{}", res.host);
    tracing::info!("base host {} after {} probes ({:?})", res.host, res.probes, res.stop);
    Ok(())
}

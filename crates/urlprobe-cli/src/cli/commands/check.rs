//! `urlprobe check <url>` – reachability probe.

use anyhow::Result;
use urlprobe_core::Prober;

use super::url_arg;

pub async fn run_check(prober: Prober, input: &str, verify_ssl: bool) -> Result<()> {
    let url = url_arg(input)?;
    let target = url.to_string();
    let reachable =
        tokio::task::spawn_blocking(move || url.is_valid(&prober, verify_ssl)).await?;
    println!(
        "{} {}",
        target,
        if reachable { "reachable" } else { "unreachable" }
    );
    Ok(())
}

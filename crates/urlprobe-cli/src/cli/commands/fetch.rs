//! `urlprobe fetch <url>` – print the response body.

use anyhow::{bail, Result};
use urlprobe_core::Prober;

use super::url_arg;

pub async fn run_fetch(prober: Prober, input: &str, verify_ssl: bool) -> Result<()> {
    let mut url = url_arg(input)?;
    let target = url.to_string();
    let body = tokio::task::spawn_blocking(move || {
        url.fetch_content(&prober, verify_ssl).map(str::to_string)
    })
    .await?;
    match body {
        Some(body) => print!("{body}"),
        None => bail!("could not fetch {}", target),
    }
    Ok(())
}

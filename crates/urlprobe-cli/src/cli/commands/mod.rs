//! CLI command handlers, one per file.

mod base_host;
mod check;
mod compare;
mod fetch;
mod parse;

pub use base_host::run_base_host;
pub use check::run_check;
pub use compare::run_match;
pub use fetch::run_fetch;
pub use parse::run_parse;

use anyhow::{bail, Result};
use urlprobe_core::Url;

/// Parses a command-line URL argument, failing if it holds no http(s) URL.
fn url_arg(input: &str) -> Result<Url> {
    let url = Url::from_text(input);
    if url.is_empty() {
        bail!("no http(s) URL found in {:?}", input);
    }
    Ok(url)
}

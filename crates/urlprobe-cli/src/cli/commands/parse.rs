//! `urlprobe parse <text>` – extract and decompose a URL.

use anyhow::Result;
use urlprobe_core::url_model::extract_url;
use urlprobe_core::{Field, Url};

pub fn run_parse(text: &str, json: bool) -> Result<()> {
    let url = Url::from_text(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&url.to_parts())?);
        return Ok(());
    }

    match extract_url(text) {
        Some(raw) => println!("{:<10} {}", "match", raw),
        None => {
            println!("No http(s) URL found.");
            return Ok(());
        }
    }
    println!("{:<10} {}", "canonical", url);
    for field in Field::ALL {
        if field == Field::Content {
            continue;
        }
        if let Some(value) = url.get_field(field) {
            println!("{:<10} {}", field, value);
        }
    }
    Ok(())
}

//! `urlprobe match <a> <b>` – compare selected URL fields.

use anyhow::Result;

use super::url_arg;

pub fn run_match(a: &str, b: &str, fields: &[String]) -> Result<()> {
    let a = url_arg(a)?;
    let b = url_arg(b)?;
    for field in fields {
        let (left, right) = (a.get(field), b.get(field));
        let mark = if left == right { "=" } else { "!=" };
        println!(
            "{:<10} {:<30} {:<2} {}",
            field,
            left.as_deref().unwrap_or("-"),
            mark,
            right.as_deref().unwrap_or("-")
        );
    }
    println!("{}", if a.matches(fields, &b) { "match" } else { "no match" });
    Ok(())
}

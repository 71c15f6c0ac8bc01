//! Building a [`Url`] from free text or from decomposed parts.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

use super::Url;

/// Decomposed form of a URL: part name -> raw value.
///
/// Keys produced by [`decompose`]: `scheme`, `host`, `port`, `user`, `pass`,
/// `path`, `query`, `fragment` (only those present).
pub type UrlParts = BTreeMap<String, String>;

static EMBEDDED_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://[A-Za-z0-9\-_.,~#@^!'()?=+&%;:\[\]/]+")
        .expect("embedded URL pattern is valid")
});

/// Returns the first `http(s)://...` substring of `text`, if any.
pub fn extract_url(text: &str) -> Option<&str> {
    EMBEDDED_URL.find(text).map(|m| m.as_str())
}

/// Splits a URL string into its parts. `None` if it cannot be parsed.
pub fn decompose(s: &str) -> Option<UrlParts> {
    let parsed = match url::Url::parse(s) {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!("cannot decompose {:?}: {}", s, e);
            return None;
        }
    };

    let mut parts = UrlParts::new();
    parts.insert("scheme".into(), parsed.scheme().to_string());
    if let Some(host) = parsed.host_str() {
        parts.insert("host".into(), host.to_string());
    }
    if let Some(port) = parsed.port() {
        parts.insert("port".into(), port.to_string());
    }
    if !parsed.username().is_empty() {
        parts.insert("user".into(), parsed.username().to_string());
    }
    if let Some(pass) = parsed.password() {
        parts.insert("pass".into(), pass.to_string());
    }
    if !parsed.path().is_empty() {
        parts.insert("path".into(), parsed.path().to_string());
    }
    if let Some(query) = parsed.query() {
        parts.insert("query".into(), query.to_string());
    }
    if let Some(fragment) = parsed.fragment() {
        parts.insert("fragment".into(), fragment.to_string());
    }
    Some(parts)
}

impl Url {
    /// Builds a URL from decomposed parts. Keys that are not fields are ignored.
    pub fn from_parts(parts: &UrlParts) -> Url {
        let mut url = Url::new();
        for (key, value) in parts {
            url.set(key, value);
        }
        url
    }

    /// Builds a URL from the first `http(s)://` URL embedded in `text`.
    ///
    /// Text without a URL, or with one that cannot be decomposed, yields an
    /// empty URL.
    pub fn from_text(text: &str) -> Url {
        extract_url(text)
            .and_then(decompose)
            .map(|parts| Url::from_parts(&parts))
            .unwrap_or_default()
    }
}

impl FromStr for Url {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Url::from_text(s))
    }
}

//! Canonical string rendering and the decomposed-parts view.

use std::fmt;

use super::parse::{decompose, UrlParts};
use super::Url;

/// `scheme://[user[:pass]@]host[:port]path[?query]`, each part only when set.
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = self.scheme() {
            write!(f, "{}://", scheme)?;
        }
        if let Some(user) = self.user() {
            f.write_str(user)?;
            if let Some(pass) = self.pass() {
                write!(f, ":{}", pass)?;
            }
            f.write_str("@")?;
        }
        if let Some(host) = self.host() {
            f.write_str(host)?;
        }
        if self.port() != 0 {
            write!(f, ":{}", self.port())?;
        }
        if let Some(path) = self.path() {
            f.write_str(&path)?;
        }
        if let Some(query) = self.query() {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}

impl Url {
    /// Decomposed view, obtained by decomposing the rendered string.
    ///
    /// Anything the decomposition cannot recover from the string form is lost;
    /// an unrenderable URL gives an empty map.
    pub fn to_parts(&self) -> UrlParts {
        decompose(&self.to_string()).unwrap_or_default()
    }
}

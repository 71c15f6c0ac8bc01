//! URL value model.
//!
//! A mutable, field-addressable URL built from free text or decomposed parts,
//! rendered back to a canonical string. Derived fields (`filename`,
//! `extension`) follow `path` and are never set independently of it.

mod parse;
mod path;
mod render;

pub use parse::{decompose, extract_url, UrlParts};
pub use path::{normalize_path, split_filename};

use std::fmt;

/// Addressable fields of a [`Url`].
///
/// Generic accessors go through [`Field::from_key`]; keys that do not name a
/// field are ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Scheme,
    Host,
    Port,
    User,
    Pass,
    Path,
    Filename,
    Extension,
    Query,
    Content,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Scheme,
        Field::Host,
        Field::Port,
        Field::User,
        Field::Pass,
        Field::Path,
        Field::Filename,
        Field::Extension,
        Field::Query,
        Field::Content,
    ];

    /// Maps a part/field name to a field. Exact, lower-case match.
    pub fn from_key(key: &str) -> Option<Field> {
        match key {
            "scheme" => Some(Field::Scheme),
            "host" => Some(Field::Host),
            "port" => Some(Field::Port),
            "user" => Some(Field::User),
            "pass" => Some(Field::Pass),
            "path" => Some(Field::Path),
            "filename" => Some(Field::Filename),
            "extension" => Some(Field::Extension),
            "query" => Some(Field::Query),
            "content" => Some(Field::Content),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Scheme => "scheme",
            Field::Host => "host",
            Field::Port => "port",
            Field::User => "user",
            Field::Pass => "pass",
            Field::Path => "path",
            Field::Filename => "filename",
            Field::Extension => "extension",
            Field::Query => "query",
            Field::Content => "content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A URL as a plain value: every field optional, cloned for speculative edits.
///
/// There is deliberately no `PartialEq`; compare with [`Url::matches`] on the
/// fields that matter to the caller.
#[derive(Debug, Clone, Default)]
pub struct Url {
    scheme: Option<String>,
    host: Option<String>,
    /// 0 means "not specified".
    port: u16,
    user: Option<String>,
    pass: Option<String>,
    path: Option<String>,
    filename: Option<String>,
    extension: Option<String>,
    query: Option<String>,
    /// Lazily fetched response body; not part of the URL's identity.
    content: Option<String>,
}

impl Url {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is set (e.g. free text without an embedded URL).
    pub fn is_empty(&self) -> bool {
        self.scheme.is_none()
            && self.host.is_none()
            && self.port == 0
            && self.user.is_none()
            && self.pass.is_none()
            && self.path.is_none()
            && self.filename.is_none()
            && self.extension.is_none()
            && self.query.is_none()
            && self.content.is_none()
    }

    /// Reads a field by name. Unknown names and unset fields yield `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        Field::from_key(key).and_then(|field| self.get_field(field))
    }

    /// Writes a field by name. Unknown names are ignored.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        match Field::from_key(key) {
            Some(field) => self.set_field(field, value),
            None => {
                tracing::trace!("ignoring unknown url field {:?}", key);
                self
            }
        }
    }

    pub fn get_field(&self, field: Field) -> Option<String> {
        match field {
            Field::Scheme => self.scheme.clone(),
            Field::Host => self.host.clone(),
            Field::Port => (self.port != 0).then(|| self.port.to_string()),
            Field::User => self.user.clone(),
            Field::Pass => self.pass.clone(),
            Field::Path => self.path(),
            Field::Filename => self.filename.clone(),
            Field::Extension => self.extension.clone(),
            Field::Query => self.query.clone(),
            Field::Content => self.content.clone(),
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> &mut Self {
        match field {
            Field::Scheme => self.set_scheme(value),
            Field::Host => self.set_host(value),
            Field::Port => {
                let port = value.trim().parse::<u16>().unwrap_or_else(|_| {
                    tracing::debug!("port {:?} is not a valid port; leaving unset", value);
                    0
                });
                self.set_port(port)
            }
            Field::User => {
                self.user = non_empty(value);
                self
            }
            Field::Pass => {
                self.pass = non_empty(value);
                self
            }
            Field::Path => self.set_path(value),
            Field::Filename | Field::Extension => {
                tracing::trace!("{} is derived from path; ignoring write", field);
                self
            }
            Field::Query => self.set_query(value),
            Field::Content => {
                self.content = Some(value.to_string());
                self
            }
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Stores the scheme lower-cased.
    pub fn set_scheme(&mut self, scheme: &str) -> &mut Self {
        self.scheme = non_empty(&scheme.to_ascii_lowercase());
        self
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn set_host(&mut self, host: &str) -> &mut Self {
        self.host = non_empty(host);
        self
    }

    /// The port, 0 when not specified.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn set_port(&mut self, port: u16) -> &mut Self {
        self.port = port;
        self
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn set_user(&mut self, user: Option<&str>) -> &mut Self {
        self.user = user.and_then(non_empty);
        self
    }

    pub fn pass(&self) -> Option<&str> {
        self.pass.as_deref()
    }

    pub fn set_pass(&mut self, pass: Option<&str>) -> &mut Self {
        self.pass = pass.and_then(non_empty);
        self
    }

    /// The path with exactly one leading `/` and no trailing `/`.
    ///
    /// Normalized on every read, not only on write. `None` if never set.
    pub fn path(&self) -> Option<String> {
        self.path.as_deref().map(normalize_path)
    }

    /// Sets the path and recomputes `filename` and `extension` from it.
    pub fn set_path(&mut self, path: &str) -> &mut Self {
        let normalized = normalize_path(path);
        let (filename, extension) = split_filename(&normalized);
        self.path = Some(normalized);
        self.filename = filename;
        self.extension = extension;
        self
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Raw query string, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn set_query(&mut self, query: &str) -> &mut Self {
        self.query = non_empty(query.strip_prefix('?').unwrap_or(query));
        self
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub(crate) fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }

    /// Compares the selected fields by value (case-sensitive).
    ///
    /// Unknown field names compare as unset on both sides, so they match.
    pub fn matches<S: AsRef<str>>(&self, fields: &[S], other: &Url) -> bool {
        fields
            .iter()
            .all(|key| self.get(key.as_ref()) == other.get(key.as_ref()))
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub mod config;
pub mod logging;

pub mod base_host;
pub mod control;
pub mod probe;
pub mod retry;
pub mod url_model;

pub use base_host::{BaseHostResolver, Resolution, StopReason};
pub use control::CancelToken;
pub use probe::{ProbeError, Prober, Transport};
pub use url_model::{Field, Url, UrlParts};

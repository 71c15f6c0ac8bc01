//! Reachability probing.
//!
//! A probe is a single HTTP GET classified only as reachable or not. The
//! transport is injected through [`Transport`] so callers (and tests) can
//! swap libcurl for anything that can "issue GET, return status + body, or
//! fail".

mod transport;

pub use transport::{CurlTransport, NoTransport, PlainFetchTransport};

use std::time::Duration;

use crate::config::{ProbeConfig, TransportKind, UrlProbeConfig};
use crate::retry::{run_with_retry, RetryPolicy};
use crate::url_model::Url;

/// Failure of a single GET at the transport level.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// No HTTP capability is configured.
    #[error("no HTTP transport available")]
    Unavailable,
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// The transport itself rejected an HTTP error status.
    #[error("HTTP {0}")]
    Status(u32),
}

/// Everything a transport needs to issue one GET.
#[derive(Debug, Clone)]
pub struct ProbeRequest<'a> {
    pub url: &'a str,
    /// Sent as `User-Agent`; empty means "send an empty identity".
    pub user_agent: &'a str,
    pub verify_ssl: bool,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirections: u32,
}

/// Final response after redirects.
#[derive(Debug, Clone, Default)]
pub struct ProbeResponse {
    /// 0 when no status line was received.
    pub status: u32,
    pub body: Vec<u8>,
}

/// The injected HTTP capability.
pub trait Transport: Send + Sync {
    fn get(&self, req: &ProbeRequest<'_>) -> Result<ProbeResponse, ProbeError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Missing status and 404 mean unreachable; every other status means the host
/// answered, so 5xx counts as reachable.
pub fn is_reachable_status(status: u32) -> bool {
    status != 0 && status != 404
}

/// Issues probes through a transport with a fixed identity and timeouts.
pub struct Prober {
    transport: Box<dyn Transport>,
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
    max_redirections: u32,
    retry: RetryPolicy,
}

impl Prober {
    /// Prober over `transport` with default timeouts, an empty user agent and
    /// a single attempt per probe.
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        let defaults = ProbeConfig::default();
        Self {
            transport: Box::new(transport),
            user_agent: defaults.user_agent,
            connect_timeout: Duration::from_secs(defaults.connect_timeout_secs),
            timeout: Duration::from_secs(defaults.timeout_secs),
            max_redirections: defaults.max_redirections,
            retry: RetryPolicy::default(),
        }
    }

    /// Builds a prober from configuration.
    ///
    /// `transport = "curl"` uses libcurl. With `transport = "none"` the plain
    /// fetch fallback is used if `allow_plain_fetch` is set; otherwise every
    /// probe fails.
    pub fn from_config(cfg: &UrlProbeConfig) -> Self {
        let probe = &cfg.probe;
        let transport: Box<dyn Transport> = match probe.transport {
            TransportKind::Curl => Box::new(CurlTransport),
            TransportKind::None if probe.allow_plain_fetch => Box::new(PlainFetchTransport),
            TransportKind::None => Box::new(NoTransport),
        };
        tracing::debug!("prober using {} transport", transport.name());
        Self::configured(transport, cfg)
    }

    fn configured(transport: Box<dyn Transport>, cfg: &UrlProbeConfig) -> Self {
        let probe = &cfg.probe;
        Self {
            transport,
            user_agent: probe.user_agent.clone(),
            connect_timeout: Duration::from_secs(probe.connect_timeout_secs),
            timeout: Duration::from_secs(probe.timeout_secs),
            max_redirections: probe.max_redirections,
            retry: cfg.retry.as_ref().map(RetryPolicy::from).unwrap_or_default(),
        }
    }

    /// Identity taken from the inbound request being served, if any.
    /// `None` keeps the configured default.
    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        if let Some(ua) = user_agent {
            self.user_agent = ua;
        }
        self
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    fn request(&self, url: &str, verify_ssl: bool) -> Result<ProbeResponse, ProbeError> {
        let req = ProbeRequest {
            url,
            user_agent: &self.user_agent,
            verify_ssl,
            connect_timeout: self.connect_timeout,
            timeout: self.timeout,
            max_redirections: self.max_redirections,
        };
        run_with_retry(&self.retry, || self.transport.get(&req))
    }

    /// True if `url` answers with anything other than a missing status or 404.
    pub fn exists(&self, url: &str, verify_ssl: bool) -> bool {
        match self.request(url, verify_ssl) {
            Ok(resp) => {
                let reachable = is_reachable_status(resp.status);
                tracing::debug!(url, status = resp.status, reachable, "probe");
                reachable
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "probe failed");
                false
            }
        }
    }

    /// Body of `url` when it is reachable and the status is not an HTTP error.
    pub fn fetch(&self, url: &str, verify_ssl: bool) -> Option<String> {
        match self.request(url, verify_ssl) {
            Ok(resp) if is_reachable_status(resp.status) && resp.status < 400 => {
                tracing::debug!(url, status = resp.status, bytes = resp.body.len(), "fetched");
                Some(String::from_utf8_lossy(&resp.body).into_owned())
            }
            Ok(resp) => {
                tracing::debug!(url, status = resp.status, "fetch returned no content");
                None
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "fetch failed");
                None
            }
        }
    }
}

impl std::fmt::Debug for Prober {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prober")
            .field("transport", &self.transport.name())
            .field("user_agent", &self.user_agent)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .field("max_redirections", &self.max_redirections)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Url {
    /// Probes the rendered URL for reachability.
    pub fn is_valid(&self, prober: &Prober, verify_ssl: bool) -> bool {
        prober.exists(&self.to_string(), verify_ssl)
    }

    /// Response body, fetched on first call and kept on the value afterwards.
    pub fn fetch_content(&mut self, prober: &Prober, verify_ssl: bool) -> Option<&str> {
        if self.content().is_none() {
            let body = prober.fetch(&self.to_string(), verify_ssl);
            self.set_content(body);
        }
        self.content()
    }
}

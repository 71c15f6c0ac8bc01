//! Empirical base-host resolution.
//!
//! There is no public-suffix table: leading labels are stripped one at a time
//! and each shorter host is probed. The last host that still answered is the
//! base host. The first failed probe ends the search.

use std::net::IpAddr;
use std::time::{Duration, Instant};

use crate::control::CancelToken;
use crate::probe::Prober;
use crate::url_model::Url;

/// Why a resolution stopped narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Empty, single-label or IP-literal host; nothing was probed.
    Trivial,
    /// A narrowed host did not answer.
    Unreachable,
    /// Every strip step answered.
    Exhausted,
    DeadlineExceeded,
    Cancelled,
}

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub host: String,
    /// Number of probes issued.
    pub probes: usize,
    pub stop: StopReason,
}

/// Narrows a URL's host using a [`Prober`] as the oracle.
#[derive(Debug, Clone)]
pub struct BaseHostResolver<'a> {
    prober: &'a Prober,
    verify_ssl: bool,
    deadline: Option<Duration>,
    cancel: Option<CancelToken>,
}

impl<'a> BaseHostResolver<'a> {
    /// Resolver that does not verify TLS and has no time budget.
    pub fn new(prober: &'a Prober) -> Self {
        Self {
            prober,
            verify_ssl: false,
            deadline: None,
            cancel: None,
        }
    }

    pub fn verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    /// Overall budget; checked before each probe.
    pub fn deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The base host of `url`.
    pub fn resolve(&self, url: &Url) -> String {
        self.resolve_detailed(url).host
    }

    pub fn resolve_detailed(&self, url: &Url) -> Resolution {
        let host = url.host().unwrap_or_default().to_string();
        if is_trivial_host(&host) {
            tracing::debug!(host = %host, "trivial host; nothing to narrow");
            return Resolution {
                host,
                probes: 0,
                stop: StopReason::Trivial,
            };
        }

        let labels: Vec<&str> = host.split('.').collect();
        let started = Instant::now();
        let mut best = url.clone();
        let mut work = url.clone();
        let mut probes = 0;
        let mut stop = StopReason::Exhausted;

        // One step past the last label: that step strips nothing and re-probes.
        for i in 0..=labels.len() {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                stop = StopReason::Cancelled;
                break;
            }
            if self.deadline.is_some_and(|d| started.elapsed() >= d) {
                stop = StopReason::DeadlineExceeded;
                break;
            }

            let current = work.host().unwrap_or_default().to_string();
            let narrowed = match labels.get(i) {
                Some(label) => strip_first_label(&current, label),
                None => current,
            };
            // A trailing-dot host strips down to nothing on its last label.
            if narrowed.is_empty() {
                tracing::debug!(host = %host, "no labels left to narrow");
                break;
            }
            work.set_host(&narrowed);

            probes += 1;
            if work.is_valid(self.prober, self.verify_ssl) {
                tracing::debug!(host = %narrowed, "narrowed host answered");
                best = work.clone();
            } else {
                tracing::debug!(host = %narrowed, "narrowed host unreachable; stopping");
                stop = StopReason::Unreachable;
                break;
            }
        }

        let resolved = best.host().unwrap_or_default().to_string();
        tracing::info!(host = %host, base_host = %resolved, probes, ?stop, "resolved base host");
        Resolution {
            host: resolved,
            probes,
            stop,
        }
    }
}

impl Url {
    /// The base host, recomputed on every call.
    pub fn base_host(&self, prober: &Prober) -> String {
        BaseHostResolver::new(prober).resolve(self)
    }
}

/// Removes the first textual occurrence of `label.` from `host`.
///
/// This is substring removal, not positional: for `"xa.a.com"` and label
/// `"a"` the `a.` inside `xa.` is the one removed.
pub fn strip_first_label(host: &str, label: &str) -> String {
    host.replacen(&format!("{label}."), "", 1)
}

/// Hosts that cannot be narrowed: empty, a single label, or an IP literal.
pub fn is_trivial_host(host: &str) -> bool {
    host.is_empty()
        || !host.contains('.')
        || host.starts_with('[')
        || host.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_first_occurrence_only() {
        assert_eq!(strip_first_label("www.example.com", "www"), "example.com");
        assert_eq!(strip_first_label("a.a.com", "a"), "a.com");
        assert_eq!(strip_first_label("xa.a.com", "a"), "xa.com");
        assert_eq!(strip_first_label("ab.b.com", "b"), "ab.com");
        assert_eq!(strip_first_label("com", "com"), "com");
        assert_eq!(strip_first_label(".example.com", ""), "example.com");
    }

    #[test]
    fn trivial_hosts() {
        assert!(is_trivial_host(""));
        assert!(is_trivial_host("localhost"));
        assert!(is_trivial_host("192.168.0.1"));
        assert!(is_trivial_host("::1"));
        assert!(is_trivial_host("[::1]"));
        assert!(!is_trivial_host("example.com"));
        assert!(!is_trivial_host("1.2.3.example.com"));
    }
}

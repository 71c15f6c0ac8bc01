//! Retry and backoff policy for probes.
//!
//! Transport failures are classified as transient (timeouts, dropped or
//! refused connections) or permanent (unknown host, TLS, no transport).
//! Only transient failures are retried, and only when the policy allows more
//! than one attempt.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;

//! Integration tests: curl transports against a local HTTP server.

mod common;

use std::time::Duration;

use urlprobe_core::config::{TransportKind, UrlProbeConfig};
use urlprobe_core::probe::{CurlTransport, PlainFetchTransport, Prober};
use urlprobe_core::Url;

fn curl_prober() -> Prober {
    Prober::new(CurlTransport).with_timeouts(Duration::from_secs(2), Duration::from_secs(5))
}

#[test]
fn success_and_server_errors_are_reachable() {
    let base = common::status_server::start();
    let p = curl_prober();
    assert!(p.exists(&format!("{base}/status/200"), false));
    assert!(p.exists(&format!("{base}/status/500"), false));
    assert!(p.exists(&format!("{base}/status/403"), false));
}

#[test]
fn not_found_is_unreachable() {
    let base = common::status_server::start();
    assert!(!curl_prober().exists(&format!("{base}/status/404"), false));
}

#[test]
fn refused_connection_is_unreachable() {
    let base = common::status_server::closed_port();
    assert!(!curl_prober().exists(&format!("{base}/status/200"), false));
}

#[test]
fn redirects_are_followed() {
    let base = common::status_server::start();
    let p = curl_prober();
    assert_eq!(
        p.fetch(&format!("{base}/redirect"), false).as_deref(),
        Some("status 200")
    );
}

#[test]
fn fetch_has_no_body_for_error_status() {
    let base = common::status_server::start();
    let p = curl_prober();
    assert_eq!(p.fetch(&format!("{base}/status/500"), false), None);
    assert_eq!(p.fetch(&format!("{base}/status/404"), false), None);
}

#[test]
fn request_sends_identity_and_accepts_compression() {
    let base = common::status_server::start();
    let p = curl_prober().with_user_agent(Some("Mozilla/5.0 (probe-test)".to_string()));
    let echoed = p.fetch(&format!("{base}/headers"), false).unwrap().to_lowercase();
    assert!(echoed.contains("user-agent: mozilla/5.0 (probe-test)"));
    assert!(echoed.contains("accept-encoding:"));
    assert!(echoed.contains("gzip"));
}

#[test]
fn plain_fetch_treats_http_errors_as_failure() {
    let base = common::status_server::start();
    let p = Prober::new(PlainFetchTransport);
    assert!(p.exists(&format!("{base}/status/200"), false));
    assert!(!p.exists(&format!("{base}/status/500"), false));
    assert!(!p.exists(&format!("{base}/status/404"), false));
}

#[test]
fn config_without_any_transport_never_reaches() {
    let base = common::status_server::start();
    let mut cfg = UrlProbeConfig::default();
    cfg.probe.transport = TransportKind::None;
    cfg.probe.allow_plain_fetch = false;
    let p = Prober::from_config(&cfg);
    assert_eq!(p.transport_name(), "none");
    assert!(!p.exists(&format!("{base}/status/200"), false));
}

#[test]
fn config_without_curl_falls_back_to_plain_fetch() {
    let base = common::status_server::start();
    let mut cfg = UrlProbeConfig::default();
    cfg.probe.transport = TransportKind::None;
    cfg.probe.allow_plain_fetch = true;
    cfg.probe.connect_timeout_secs = 2;
    cfg.probe.timeout_secs = 5;
    let p = Prober::from_config(&cfg);
    assert_eq!(p.transport_name(), "plain-fetch");
    assert!(p.exists(&format!("{base}/status/200"), false));
    assert!(!p.exists(&format!("{base}/status/404"), false));
    assert_eq!(
        p.fetch(&format!("{base}/redirect"), false).as_deref(),
        Some("status 200")
    );
}

#[test]
fn url_content_is_fetched_through_the_model() {
    let base = common::status_server::start();
    let p = curl_prober();
    let mut url = Url::from_text(&format!("link: {base}/status/201 end"));
    assert!(url.port() > 0);
    assert!(url.is_valid(&p, false));
    assert_eq!(url.fetch_content(&p, false), Some("status 201"));
}

//! libcurl-backed transports.
//!
//! Blocking; call from `spawn_blocking` if used from async code.

use curl::easy::Easy;

use super::{ProbeError, ProbeRequest, ProbeResponse, Transport};

/// Full GET: identity header, compressed transfer, redirects followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn get(&self, req: &ProbeRequest<'_>) -> Result<ProbeResponse, ProbeError> {
        let mut body = Vec::new();

        let mut easy = Easy::new();
        easy.url(req.url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(req.max_redirections)?;
        easy.useragent(req.user_agent)?;
        easy.accept_encoding("gzip,deflate")?;
        easy.ssl_verify_peer(req.verify_ssl)?;
        easy.ssl_verify_host(req.verify_ssl)?;
        easy.connect_timeout(req.connect_timeout)?;
        easy.timeout(req.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(ProbeResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "curl"
    }
}

/// Bare fetch-or-fail GET: no identity or encoding negotiation, and any HTTP
/// error status is a failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFetchTransport;

impl Transport for PlainFetchTransport {
    fn get(&self, req: &ProbeRequest<'_>) -> Result<ProbeResponse, ProbeError> {
        let mut body = Vec::new();

        let mut easy = Easy::new();
        easy.url(req.url)?;
        easy.follow_location(true)?;
        easy.max_redirections(req.max_redirections)?;
        easy.fail_on_error(true)?;
        easy.ssl_verify_peer(req.verify_ssl)?;
        easy.ssl_verify_host(req.verify_ssl)?;
        easy.connect_timeout(req.connect_timeout)?;
        easy.timeout(req.timeout)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        if let Err(e) = performed {
            if e.is_http_returned_error() {
                return Err(ProbeError::Status(easy.response_code().unwrap_or(0)));
            }
            return Err(e.into());
        }

        let status = easy.response_code()?;
        Ok(ProbeResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "plain-fetch"
    }
}

/// No HTTP capability: every request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransport;

impl Transport for NoTransport {
    fn get(&self, _req: &ProbeRequest<'_>) -> Result<ProbeResponse, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

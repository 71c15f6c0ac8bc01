//! Classify probe failures into retry error kinds.

use super::policy::ErrorKind;
use crate::probe::ProbeError;

/// Classify a curl error.
///
/// An unresolvable host is permanent: for a probe it is the answer, not a
/// glitch.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_partial_file()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Permanent
}

pub fn classify(e: &ProbeError) -> ErrorKind {
    match e {
        ProbeError::Curl(ce) => classify_curl_error(ce),
        ProbeError::Unavailable | ProbeError::Status(_) => ErrorKind::Permanent,
    }
}

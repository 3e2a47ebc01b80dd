//! Coarse-grained classification of an HTTP status for programmatic handling.
//!
//! Typical mappings:
//! - Client: 4xx, the caller sent something we refuse (bad coupon, stacked coupon)
//! - Server: everything else, a fault on our side or upstream
use http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Client,
    Server,
}

impl Severity {
    pub fn of(status: StatusCode) -> Self {
        if status.is_client_error() {
            Severity::Client
        } else {
            Severity::Server
        }
    }
}

/// Standard phrase for a status, e.g. "Bad Request".
pub fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_status_class() {
        assert_eq!(Severity::of(StatusCode::BAD_REQUEST), Severity::Client);
        assert_eq!(Severity::of(StatusCode::INTERNAL_SERVER_ERROR), Severity::Server);
        assert!(Severity::Client < Severity::Server);
    }

    #[test]
    fn reason_phrases() {
        assert_eq!(reason_phrase(StatusCode::BAD_REQUEST), "Bad Request");
        assert_eq!(
            reason_phrase(StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
    }
}

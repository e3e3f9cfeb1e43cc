//! Metrics collection and exposition.
//!
//! # Metrics
//! - `proxyauth_requests_total` (counter): requests by outcome
//! - `proxyauth_request_duration_seconds` (histogram): handler latency by outcome

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Terminal outcome of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Granted,
    Denied,
    UnknownDomain,
    NotFound,
    EncodingError,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Granted => "granted",
            Outcome::Denied => "denied",
            Outcome::UnknownDomain => "unknown_domain",
            Outcome::NotFound => "not_found",
            Outcome::EncodingError => "encoding_error",
        }
    }
}

/// Install the Prometheus recorder and serve it on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(outcome: Outcome, start: Instant) {
    let label = outcome.as_str();
    metrics::counter!("proxyauth_requests_total", "outcome" => label).increment(1);
    metrics::histogram!("proxyauth_request_duration_seconds", "outcome" => label)
        .record(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::Granted.as_str(), "granted");
        assert_eq!(Outcome::Denied.as_str(), "denied");
        assert_eq!(Outcome::UnknownDomain.as_str(), "unknown_domain");
        assert_eq!(Outcome::NotFound.as_str(), "not_found");
        assert_eq!(Outcome::EncodingError.as_str(), "encoding_error");
    }

    #[test]
    fn recording_without_recorder_is_noop() {
        record_request(Outcome::Granted, Instant::now());
    }
}

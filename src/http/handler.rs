//! Verification endpoint handler.
//!
//! `POST /api/2/domains/{domain}/proxyauth` with a form or multipart body
//! of `username` and pre-hashed `password`.

use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::Response,
};

use crate::http::credentials::{Credentials, CredentialsRejection};
use crate::http::request::request_id;
use crate::http::response::{decision_response, encode_decision, internal_error, not_found};
use crate::http::server::AppState;
use crate::observability::metrics::{self, Outcome};

/// Single entry point for every request.
///
/// Mounted on every path and method; anything other than the verification
/// route answers a bare 404, never 405.
pub async fn proxyauth_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    credentials: Result<Credentials, CredentialsRejection>,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let route = match state.router.match_request(&method, path) {
        Some(route) => route,
        None => {
            tracing::debug!(request_id = %request_id, method = %method, path = %path, "No route matched");
            metrics::record_request(Outcome::NotFound, start_time);
            return not_found();
        }
    };

    let credentials = match credentials {
        Ok(credentials) => credentials,
        Err(rejection) => {
            tracing::debug!(request_id = %request_id, error = %rejection, "Unreadable body, using empty credentials");
            Credentials::default()
        }
    };

    let decision = match state.verifier.verify(
        route.domain,
        &credentials.username,
        &credentials.password,
    ) {
        Some(decision) => decision,
        None => {
            tracing::debug!(request_id = %request_id, domain = %route.domain, "Unknown domain");
            metrics::record_request(Outcome::UnknownDomain, start_time);
            return not_found();
        }
    };

    let outcome = if decision.is_granted() {
        tracing::debug!(
            request_id = %request_id,
            domain = %route.domain,
            username = %credentials.username,
            "Access granted"
        );
        Outcome::Granted
    } else {
        tracing::info!(
            request_id = %request_id,
            domain = %route.domain,
            username = %credentials.username,
            reason = decision.reason().unwrap_or_default(),
            "Access denied"
        );
        Outcome::Denied
    };

    match encode_decision(&decision) {
        Ok(body) => {
            metrics::record_request(outcome, start_time);
            decision_response(body)
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Failed to encode decision");
            metrics::record_request(Outcome::EncodingError, start_time);
            internal_error()
        }
    }
}

//! Response encoding.
//!
//! # Responsibilities
//! - Render an AccessDecision as `{"access_granted": bool, "reason"?: string}`
//! - Status 200 and `Content-Type: application/json` for every decision
//! - Bare status responses (404, 500) with empty bodies
//!
//! # Design Decisions
//! - Denial is carried in the body, never in the status
//! - `reason` is omitted when absent or empty
//! - Error responses carry no detail

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::security::AccessDecision;

#[derive(Debug, Serialize)]
struct DecisionBody<'a> {
    access_granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

impl<'a> From<&'a AccessDecision> for DecisionBody<'a> {
    fn from(decision: &'a AccessDecision) -> Self {
        Self {
            access_granted: decision.is_granted(),
            reason: decision.reason().filter(|r| !r.is_empty()),
        }
    }
}

/// Serialize a decision to its JSON body.
pub fn encode_decision(decision: &AccessDecision) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&DecisionBody::from(decision))
}

/// Build the 200 response for an encoded decision body.
pub fn decision_response(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}

/// 404 with an empty body.
pub fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

/// 500 with an empty body.
pub fn internal_error() -> Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

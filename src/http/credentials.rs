//! Credential extraction from the request body.
//!
//! # Responsibilities
//! - Decode `application/x-www-form-urlencoded` and `multipart/form-data`
//! - Pick the first `username` and the first `password` value
//! - Report anything unreadable as a rejection the handler can downgrade
//!
//! # Design Decisions
//! - Repeated fields are not an error; the first occurrence wins
//! - Multipart file parts never supply credentials
//! - Body size is bounded by `DefaultBodyLimit` for both encodings

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::FormRejection,
        Form, FromRequest, Multipart, Request,
    },
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

const USERNAME: &str = "username";
const PASSWORD: &str = "password";

/// Submitted credentials. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Build from decoded name/value pairs, first occurrence wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut username = None;
        let mut password = None;

        for (name, value) in pairs {
            match name.as_str() {
                USERNAME => {
                    username.get_or_insert(value);
                }
                PASSWORD => {
                    password.get_or_insert(value);
                }
                _ => {}
            }
        }

        Self {
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }
}

/// Why a body yielded no credentials.
#[derive(Debug, Error)]
pub enum CredentialsRejection {
    #[error("form body: {0}")]
    Form(#[from] FormRejection),

    #[error("multipart body: {0}")]
    Multipart(#[from] MultipartRejection),

    #[error("multipart field: {0}")]
    MultipartField(#[from] MultipartError),
}

impl IntoResponse for CredentialsRejection {
    fn into_response(self) -> Response {
        StatusCode::BAD_REQUEST.into_response()
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("multipart/form-data"))
        .unwrap_or(false)
}

impl<S> FromRequest<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = CredentialsRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(req.headers()) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
            return Ok(Self::from_pairs(pairs));
        }

        let mut multipart = Multipart::from_request(req, state).await?;
        let mut pairs = Vec::new();

        while let Some(field) = multipart.next_field().await? {
            if field.file_name().is_some() {
                continue;
            }
            let name = match field.name() {
                Some(name @ (USERNAME | PASSWORD)) => name.to_string(),
                _ => continue,
            };
            pairs.push((name, field.text().await?));
        }

        Ok(Self::from_pairs(pairs))
    }
}

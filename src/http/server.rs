//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the single catch-all handler
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::DefaultBodyLimit, routing::any, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handler::proxyauth_handler;
use crate::http::request::UuidRequestId;
use crate::lifecycle::ShutdownSignal;
use crate::registry::Registry;
use crate::routing::Router as AuthRouter;
use crate::security::CredentialVerifier;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<AuthRouter>,
    pub verifier: CredentialVerifier,
}

/// HTTP server for the verification endpoint.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server over a frozen registry.
    pub fn new(config: ServiceConfig, registry: Arc<Registry>) -> Self {
        let state = AppState {
            router: Arc::new(AuthRouter::new()),
            verifier: CredentialVerifier::new(registry),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(proxyauth_handler))
            .route("/{*path}", any(proxyauth_handler))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let cause = shutdown.fired().await;
                tracing::info!(%cause, "Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::registry::loader::parse_registry;
    use crate::security::PasswordHash;

    fn app() -> Router {
        let registry = parse_registry(
            r#"[{"domain": "topcoder.com", "users": [{"username": "takumi", "password": "ilovego"}]}]"#,
        )
        .unwrap();
        HttpServer::new(ServiceConfig::default(), Arc::new(registry)).router
    }

    fn form_request(method: &str, uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn encoded_hash(plaintext: &str) -> String {
        // Form encoding for the base64 alphabet.
        PasswordHash::digest(plaintext)
            .as_str()
            .replace('{', "%7B")
            .replace('}', "%7D")
            .replace('+', "%2B")
            .replace('/', "%2F")
            .replace('=', "%3D")
    }

    #[tokio::test]
    async fn test_granted() {
        let body = format!("username=takumi&password={}", encoded_hash("ilovego"));
        let res = app()
            .oneshot(form_request("POST", "/api/2/domains/topcoder.com/proxyauth", body))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
        assert!(res.headers().contains_key("x-request-id"));
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"access_granted":true}"#);
    }

    #[tokio::test]
    async fn test_denied() {
        let body = format!("username=takumi&password={}", encoded_hash("ilovegoa"));
        let res = app()
            .oneshot(form_request("POST", "/api/2/domains/topcoder.com/proxyauth", body))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            &bytes[..],
            br#"{"access_granted":false,"reason":"denied by policy"}"#
        );
    }

    #[tokio::test]
    async fn test_not_found_is_bare() {
        let cases = [
            ("POST", "/api/2/domains/topcoder.coma/proxyauth"),
            ("GET", "/api/2/domains/topcoder.com/proxyauth"),
            ("PATCH", "/api/2/domains/topcoder.com/proxyauth"),
            ("POST", "/api/2/domains/topcoder.com"),
            ("POST", "/api/2/domains/topcoder.com/proxyauth?x=1"),
            ("POST", "/api/2/domains/topcoder.com/proxyauth?"),
            ("POST", "/"),
        ];
        for (method, uri) in cases {
            let body = format!("username=takumi&password={}", encoded_hash("ilovego"));
            let res = app().oneshot(form_request(method, uri, body)).await.unwrap();

            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method} {uri}");
            assert!(res.headers().get(header::CONTENT_TYPE).is_none());
            let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
            assert!(bytes.is_empty(), "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn test_repeated_password_first_wins() {
        let body = format!(
            "username=takumi&password={}&password=junk",
            encoded_hash("ilovego")
        );
        let res = app()
            .oneshot(form_request("POST", "/api/2/domains/topcoder.com/proxyauth", body))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"access_granted":true}"#);
    }

    #[tokio::test]
    async fn test_multipart_granted() {
        let body = format!(
            "--B\r\nContent-Disposition: form-data; name=\"username\"\r\n\r\ntakumi\r\n\
             --B\r\nContent-Disposition: form-data; name=\"password\"\r\n\r\n{}\r\n\
             --B--\r\n",
            PasswordHash::digest("ilovego")
        );
        let req = Request::builder()
            .method("POST")
            .uri("/api/2/domains/topcoder.com/proxyauth")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=B")
            .body(Body::from(body))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"access_granted":true}"#);
    }
}

//! Route lookup.
//!
//! # Responsibilities
//! - Accept only `POST /api/2/domains/{domain}/proxyauth`
//! - Extract the domain segment
//! - Return an explicit NoMatch for everything else
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - The method is checked with the path so the caller cannot tell a wrong
//!   method from a wrong path
//! - Matching runs on the request target (path plus query); any query
//!   string, even an empty `?`, is a deviation from the route shape

use axum::http::Method;

use crate::routing::matcher::PathPattern;

/// Path template of the verification endpoint.
pub const PROXYAUTH_TEMPLATE: &str = "/api/2/domains/{domain}/proxyauth";

/// A successfully routed verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Domain exactly as it appears in the raw path.
    pub domain: &'a str,
}

/// Router for the verification endpoint.
#[derive(Debug, Clone)]
pub struct Router {
    method: Method,
    pattern: PathPattern,
}

impl Router {
    pub fn new() -> Self {
        Self {
            method: Method::POST,
            pattern: PathPattern::parse(PROXYAUTH_TEMPLATE),
        }
    }

    /// Match a request by method and raw request target (path and query).
    pub fn match_request<'a>(&self, method: &Method, target: &'a str) -> Option<RouteMatch<'a>> {
        if *method != self.method || target.contains('?') {
            return None;
        }

        let captures = self.pattern.captures(target)?;
        let domain = captures.first().copied()?;
        Some(RouteMatch { domain })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain_of(method: Method, path: &str) -> Option<String> {
        Router::new()
            .match_request(&method, path)
            .map(|m| m.domain.to_string())
    }

    #[test]
    fn test_valid_path() {
        assert_eq!(
            domain_of(Method::POST, "/api/2/domains/topcoder.com/proxyauth"),
            Some("topcoder.com".into())
        );
    }

    #[test]
    fn test_domain_is_raw() {
        assert_eq!(
            domain_of(Method::POST, "/api/2/domains/Top%20Coder/proxyauth"),
            Some("Top%20Coder".into())
        );
    }

    #[test]
    fn test_non_post_rejected() {
        for method in [Method::GET, Method::PUT, Method::DELETE, Method::HEAD, Method::PATCH] {
            assert_eq!(domain_of(method, "/api/2/domains/topcoder.com/proxyauth"), None);
        }
    }

    #[test]
    fn test_malformed_paths_rejected() {
        let paths = [
            "/api/2/domains/topcoder.com/proxyautha",
            "/api/2/domains/topcoder.com",
            "/api/2/domains/",
            "/api/2/domains//proxyauth",
            "/api/2",
            "/api",
            "/",
            "/api/3/domains/topcoder.com/proxyauth",
            "/v1/2/domains/topcoder.com/proxyauth",
            "/api/2/realms/topcoder.com/proxyauth",
            "/api/2/domains/topcoder.com/proxyauth/",
            "/api/2/domains/topcoder.com/proxyauth/extra",
            "/api/2/domains/topcoder.com/proxyauth?x=1",
            "/api/2/domains/topcoder.com/proxyauth?",
            "/api/2/domains/topcoder.com?/proxyauth",
            "//api/2/domains/topcoder.com/proxyauth",
            "/api/2/Domains/topcoder.com/proxyauth",
        ];
        for path in paths {
            assert_eq!(domain_of(Method::POST, path), None, "path {path} should not match");
        }
    }
}

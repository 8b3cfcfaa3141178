//! Credential attachment for outgoing requests.

use std::collections::HashSet;

use lazy_static::lazy_static;
use reqwest::{Method, RequestBuilder};

/// The one header that carries the credential. Its value is the raw token.
pub const CREDENTIAL_HEADER: &str = "token";

lazy_static! {
    /// Paths reachable without a valid token.
    static ref PUBLIC_PATHS: HashSet<&'static str> = [
        "/user/login",
        "/user",
        "/post",
        "/post/page",
        "/shop",
        "/shop/page",
        "/comment/page",
        "/coupon",
    ]
    .into_iter()
    .collect();
}

/// Check whether `path` is on the public allow-list.
///
/// Matching is exact after dropping the query string and a trailing slash,
/// so `/shop` does not cover `/shop/owner`.
pub fn is_public_path(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    PUBLIC_PATHS.contains(path)
}

/// Source of the credential and receiver of auth failures.
///
/// Implemented by [`crate::Session`]; the transport only knows this trait.
pub trait SessionHook: Send + Sync {
    /// Current token, if any.
    fn credential(&self) -> Option<String>;

    /// Called when the server rejected the credential (HTTP 401).
    fn mark_unauthenticated(&self);
}

/// Context of one outgoing call, captured before dispatch.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base endpoint.
    pub path: String,
    /// Whether the path is on the public allow-list.
    pub public: bool,
    /// Token snapshotted at dispatch time.
    pub credential: Option<String>,
}

impl PendingRequest {
    /// Snapshot the request context.
    pub fn capture(method: Method, path: &str, hook: Option<&dyn SessionHook>) -> Self {
        let credential = hook
            .and_then(|h| h.credential())
            .filter(|token| !token.is_empty());
        Self {
            method,
            public: is_public_path(path),
            path: path.to_owned(),
            credential,
        }
    }

    /// Attach the credential header when a token was captured.
    ///
    /// Public paths get the header too; the allow-list is informational.
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Some(token) => request.header(CREDENTIAL_HEADER, token),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FixedToken(Mutex<Option<String>>);

    impl SessionHook for FixedToken {
        fn credential(&self) -> Option<String> {
            self.0.lock().unwrap().clone()
        }

        fn mark_unauthenticated(&self) {
            *self.0.lock().unwrap() = None;
        }
    }

    #[test]
    fn test_public_path_exact_match() {
        assert!(is_public_path("/user/login"));
        assert!(is_public_path("/shop"));
        assert!(is_public_path("/shop/"));
        assert!(is_public_path("/post/page?cursor=0&offset=10"));

        assert!(!is_public_path("/shop/owner"));
        assert!(!is_public_path("/order/payment"));
        assert!(!is_public_path("/user/login/extra"));
        assert!(!is_public_path("/"));
    }

    #[test]
    fn test_capture_snapshots_token() {
        let hook = FixedToken(Mutex::new(Some("abc".into())));
        let pending = PendingRequest::capture(Method::GET, "/shop/owner", Some(&hook));

        hook.mark_unauthenticated();

        assert_eq!(pending.credential.as_deref(), Some("abc"));
        assert!(!pending.public);
    }

    #[test]
    fn test_capture_ignores_empty_token() {
        let hook = FixedToken(Mutex::new(Some(String::new())));
        let pending = PendingRequest::capture(Method::GET, "/shop", Some(&hook));
        assert!(pending.credential.is_none());
        assert!(pending.public);

        let pending = PendingRequest::capture(Method::GET, "/shop", None);
        assert!(pending.credential.is_none());
    }
}

//! HTTP client configuration and request execution.

use crate::error::{Error, Result};
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::auth::{PendingRequest, SessionHook};
use super::notify::Notifier;
use super::response::{ApiResponse, Payload};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8090";

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default user agent.
pub const DEFAULT_USER_AGENT: &str = concat!("rhub/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL for API requests.
    pub base_url: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout. Expiry is reported as a transport failure.
    pub timeout: Duration,
    /// Custom user agent.
    pub custom_user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            connect_timeout: DEFAULT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            custom_user_agent: None,
        }
    }
}

impl HttpConfig {
    /// User agent to send.
    pub fn user_agent(&self) -> &str {
        self.custom_user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Resolve an API path against the base URL.
    ///
    /// A leading slash does not discard a path prefix in the base URL.
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Url::parse(path).map_err(Error::Url);
        }

        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        Url::parse(&base)
            .and_then(|b| b.join(path.trim_start_matches('/')))
            .map_err(Error::Url)
    }
}

/// Build a reqwest client with the given configuration.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout)
        .gzip(true)
        .build()
        .map_err(Error::Transport)
}

/// HTTP request executor.
///
/// Wraps every call with the request interceptor (credential attachment)
/// and the response interceptor (error normalization, notification,
/// forced logout on 401).
pub struct HttpExecutor<'a> {
    client: &'a Client,
    config: &'a HttpConfig,
    session: Option<&'a dyn SessionHook>,
    notifier: &'a dyn Notifier,
}

impl<'a> HttpExecutor<'a> {
    /// Create a new executor.
    pub fn new(
        client: &'a Client,
        config: &'a HttpConfig,
        session: Option<&'a dyn SessionHook>,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            client,
            config,
            session,
            notifier,
        }
    }

    /// Send a request and decode a successful body as `T`.
    ///
    /// `decorate` adds the query string and body; credentials are never set
    /// there.
    pub async fn execute<T, F>(&self, method: Method, path: &str, decorate: F) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.config.resolve_url(path)?;
        let pending = PendingRequest::capture(method.clone(), path, self.session);

        log::debug!(
            "{} {} (public: {}, credential: {})",
            pending.method,
            pending.path,
            pending.public,
            pending.credential.is_some()
        );

        let request = decorate(
            self.client
                .request(method, url)
                .header(header::USER_AGENT, self.config.user_agent()),
        );
        let request = pending.apply(request);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.reject(&pending, Error::Transport(e))),
        };

        self.handle_response(&pending, response).await
    }

    /// Response interceptor.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        pending: &PendingRequest,
        response: Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status();

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Err(self.reject(pending, Error::Transport(e))),
        };

        if !status.is_success() {
            let error = Error::from_status(status.as_u16(), body_message(&bytes));
            if error.is_auth_error() {
                if let Some(session) = self.session {
                    session.mark_unauthenticated();
                }
            }
            return Err(self.reject(pending, error));
        }

        let decoded: serde_json::Result<Payload<T>> = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_slice(&bytes)
        };

        match decoded {
            Ok(body) => Ok(ApiResponse {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(self.reject(pending, Error::Json(e))),
        }
    }

    /// Notify the user about a failure and hand it back.
    fn reject(&self, pending: &PendingRequest, error: Error) -> Error {
        log::warn!("{} {} failed: {}", pending.method, pending.path, error);
        self.notifier.notify_error(&error.message());
        error
    }
}

/// Extract a non-empty `message` field from an error body.
fn body_message(bytes: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let config = HttpConfig::default();

        let url = config.resolve_url("/post/page").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8090/post/page");
    }

    #[test]
    fn test_resolve_url_keeps_base_prefix() {
        let config = HttpConfig {
            base_url: "https://api.example.com/v1".into(),
            ..Default::default()
        };

        let url = config.resolve_url("/shop/owner").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/shop/owner");
    }

    #[test]
    fn test_body_message() {
        assert_eq!(
            body_message(br#"{"message":"coupon sold out"}"#).as_deref(),
            Some("coupon sold out")
        );
        assert_eq!(body_message(br#"{"message":"  "}"#), None);
        assert_eq!(body_message(br#"{"msg":"elsewhere"}"#), None);
        assert_eq!(body_message(b"<html>502</html>"), None);
    }

    #[test]
    fn test_user_agent() {
        let mut config = HttpConfig::default();
        assert!(config.user_agent().starts_with("rhub/"));

        config.custom_user_agent = Some("custom".into());
        assert_eq!(config.user_agent(), "custom");
    }
}

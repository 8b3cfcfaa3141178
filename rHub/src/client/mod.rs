//! HTTP client and configuration.

mod auth;
mod http;
mod notify;
mod response;

pub use auth::{is_public_path, PendingRequest, SessionHook, CREDENTIAL_HEADER};
pub use http::{HttpConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use notify::{LogNotifier, Notifier};
pub use response::{ApiResponse, Envelope, Payload};

use crate::api::{
    CommentApi, CouponApi, FavoriteApi, FollowApi, OrderApi, PostApi, ShopApi, ThumbApi, UserApi,
};
use crate::error::{Error, Result};
use crate::models::UploadFile;
use http::{build_client, HttpExecutor};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating HubClient.
pub struct HubClientBuilder {
    http_config: HttpConfig,
    session: Option<Arc<dyn SessionHook>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl std::fmt::Debug for HubClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubClientBuilder")
            .field("http_config", &self.http_config)
            .field("session", &self.session.as_ref().map(|_| "..."))
            .field("notifier", &self.notifier.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Default for HubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HubClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            http_config: HttpConfig::default(),
            session: None,
            notifier: None,
        }
    }

    /// Set the session that supplies the credential and receives 401s.
    pub fn session(mut self, session: Arc<dyn SessionHook>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the receiver of failure messages. Defaults to [`LogNotifier`].
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Set base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.http_config.base_url = url.into();
        self
    }

    /// Set custom user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.http_config.custom_user_agent = Some(ua.into());
        self
    }

    /// Set connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = timeout;
        self
    }

    /// Set whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = timeout;
        self
    }

    /// Build HubClient.
    pub fn build(self) -> Result<HubClient> {
        url::Url::parse(&self.http_config.base_url)?;
        let http_client = build_client(&self.http_config)?;

        Ok(HubClient {
            inner: Arc::new(HubClientInner {
                http: http_client,
                config: self.http_config,
                session: self.session,
                notifier: self.notifier.unwrap_or_else(|| Arc::new(LogNotifier)),
            }),
        })
    }
}

/// Internal client state.
pub(crate) struct HubClientInner {
    pub http: reqwest::Client,
    pub config: HttpConfig,
    pub session: Option<Arc<dyn SessionHook>>,
    pub notifier: Arc<dyn Notifier>,
}

impl HubClientInner {
    /// Create HTTP executor.
    pub fn executor(&self) -> HttpExecutor<'_> {
        HttpExecutor::new(
            &self.http,
            &self.config,
            self.session.as_deref(),
            self.notifier.as_ref(),
        )
    }

    /// Execute a GET request without parameters.
    pub async fn get_path<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.executor().execute(Method::GET, path, |r| r).await
    }

    /// Execute a GET request with a query string.
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.executor()
            .execute(Method::GET, path, |r| r.query(query))
            .await
    }

    /// Execute a request with a JSON body.
    pub async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.executor()
            .execute(method, path, |r| r.json(body))
            .await
    }

    /// Execute a request whose parameters travel in the query string only.
    pub async fn send_query<T, Q>(&self, method: Method, path: &str, query: &Q) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.executor()
            .execute(method, path, |r| r.query(query))
            .await
    }

    /// Execute a multipart POST with a single `file` field.
    pub async fn post_file<T>(&self, path: &str, file: UploadFile) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(mime) = file.mime {
            part = part
                .mime_str(&mime)
                .map_err(|_| Error::InvalidArgument(format!("invalid MIME type '{}'", mime)))?;
        }
        let form = Form::new().part("file", part);

        self.executor()
            .execute(Method::POST, path, |r| r.multipart(form))
            .await
    }
}

/// Client for the platform's REST API.
#[derive(Clone)]
pub struct HubClient {
    pub(crate) inner: Arc<HubClientInner>,
}

impl HubClient {
    /// Create a new client builder.
    pub fn builder() -> HubClientBuilder {
        HubClientBuilder::new()
    }

    /// Get the comment API.
    pub fn comments(&self) -> CommentApi {
        CommentApi::new(self.inner.clone())
    }

    /// Get the coupon API.
    pub fn coupons(&self) -> CouponApi {
        CouponApi::new(self.inner.clone())
    }

    /// Get the favorite API.
    pub fn favorites(&self) -> FavoriteApi {
        FavoriteApi::new(self.inner.clone())
    }

    /// Get the follow API.
    pub fn follows(&self) -> FollowApi {
        FollowApi::new(self.inner.clone())
    }

    /// Get the order API.
    pub fn orders(&self) -> OrderApi {
        OrderApi::new(self.inner.clone())
    }

    /// Get the post API.
    pub fn posts(&self) -> PostApi {
        PostApi::new(self.inner.clone())
    }

    /// Get the shop API.
    pub fn shops(&self) -> ShopApi {
        ShopApi::new(self.inner.clone())
    }

    /// Get the thumb API.
    pub fn thumbs(&self) -> ThumbApi {
        ThumbApi::new(self.inner.clone())
    }

    /// Get the user API.
    pub fn users(&self) -> UserApi {
        UserApi::new(self.inner.clone())
    }

    /// Check if a credential would be attached to the next request.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .session
            .as_ref()
            .and_then(|s| s.credential())
            .is_some_and(|t| !t.is_empty())
    }

    /// Get the HTTP configuration.
    pub fn config(&self) -> &HttpConfig {
        &self.inner.config
    }
}

impl std::fmt::Debug for HubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubClient")
            .field("authenticated", &self.is_authenticated())
            .field("base_url", &self.inner.config.base_url)
            .finish()
    }
}

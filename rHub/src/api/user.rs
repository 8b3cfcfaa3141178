//! User API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::{ApiResponse, HubClientInner},
    error::Result,
    models::{LoginData, LoginForm, RegisterForm},
};

/// API for user operations.
///
/// `login` only performs the call; use [`crate::Session::login`] to also
/// keep the issued token.
pub struct UserApi {
    client: Arc<HubClientInner>,
}

impl UserApi {
    pub(crate) fn new(client: Arc<HubClientInner>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token.
    pub async fn login(&self, form: &LoginForm) -> Result<ApiResponse<LoginData>> {
        self.client.send_json(Method::POST, "/user/login", form).await
    }

    /// Create an account.
    pub async fn register(&self, form: &RegisterForm) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::POST, "/user", form).await
    }
}

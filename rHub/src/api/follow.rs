//! Follow API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::{ApiResponse, HubClientInner},
    error::Result,
    models::{FollowDto, FollowPageQuery, FollowVo, PageResult},
};

/// API for follow operations.
pub struct FollowApi {
    client: Arc<HubClientInner>,
}

impl FollowApi {
    pub(crate) fn new(client: Arc<HubClientInner>) -> Self {
        Self { client }
    }

    /// Follow a user or shop.
    pub async fn add(&self, follow: &FollowDto) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::POST, "/follow", follow).await
    }

    /// Unfollow. The fields travel in a JSON body.
    pub async fn cancel(&self, follow: &FollowDto) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::DELETE, "/follow", follow).await
    }

    /// Page through the current user's follows.
    pub async fn page(&self, query: &FollowPageQuery) -> Result<ApiResponse<PageResult<FollowVo>>> {
        self.client.get("/follow/page", query).await
    }
}

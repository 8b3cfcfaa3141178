//! Thumb (like) API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::{ApiResponse, HubClientInner},
    error::Result,
    models::{PageResult, ThumbDto, ThumbPageQuery, ThumbVo},
};

/// API for thumb operations.
pub struct ThumbApi {
    client: Arc<HubClientInner>,
}

impl ThumbApi {
    pub(crate) fn new(client: Arc<HubClientInner>) -> Self {
        Self { client }
    }

    /// Give a thumb.
    pub async fn add(&self, thumb: &ThumbDto) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::POST, "/thumb", thumb).await
    }

    /// Take a thumb back. The fields travel in a JSON body.
    pub async fn cancel(&self, thumb: &ThumbDto) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::DELETE, "/thumb", thumb).await
    }

    /// Page through the current user's thumbs.
    pub async fn page(&self, query: &ThumbPageQuery) -> Result<ApiResponse<PageResult<ThumbVo>>> {
        self.client.get("/thumb/page", query).await
    }
}

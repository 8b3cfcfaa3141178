//! Favorite API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::{ApiResponse, HubClientInner},
    error::Result,
    models::FavoriteDto,
};

/// API for favorite operations.
pub struct FavoriteApi {
    client: Arc<HubClientInner>,
}

impl FavoriteApi {
    pub(crate) fn new(client: Arc<HubClientInner>) -> Self {
        Self { client }
    }

    /// Favorite a post.
    pub async fn add(&self, favorite: &FavoriteDto) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::POST, "/favorite", favorite).await
    }

    /// Remove a favorite. The fields travel in the query string.
    pub async fn cancel(&self, favorite: &FavoriteDto) -> Result<ApiResponse<Value>> {
        self.client
            .send_query(Method::DELETE, "/favorite", favorite)
            .await
    }
}

//! Shop API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::{ApiResponse, HubClientInner},
    error::Result,
    models::{PageResult, ShopDto, ShopId, ShopPageQuery, ShopVo},
};

/// API for shop operations.
pub struct ShopApi {
    client: Arc<HubClientInner>,
}

impl ShopApi {
    pub(crate) fn new(client: Arc<HubClientInner>) -> Self {
        Self { client }
    }

    /// Register a shop.
    pub async fn register(&self, shop: &ShopDto) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::POST, "/shop", shop).await
    }

    /// Get a shop by ID.
    pub async fn get(&self, id: impl Into<ShopId>) -> Result<ApiResponse<ShopVo>> {
        let id = id.into();
        self.client.get("/shop", &[("id", id.get())]).await
    }

    /// Delete a shop by ID.
    pub async fn delete(&self, id: impl Into<ShopId>) -> Result<ApiResponse<Value>> {
        let id = id.into();
        self.client
            .send_query(Method::DELETE, "/shop", &[("id", id.get())])
            .await
    }

    /// Page through shops.
    pub async fn page(&self, query: &ShopPageQuery) -> Result<ApiResponse<PageResult<ShopVo>>> {
        self.client.get("/shop/page", query).await
    }

    /// List the shops owned by the current user.
    pub async fn owned(&self) -> Result<ApiResponse<Vec<ShopVo>>> {
        self.client.get_path("/shop/owner").await
    }
}

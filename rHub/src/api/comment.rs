//! Comment API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::{ApiResponse, HubClientInner},
    error::Result,
    models::{CommentDto, CommentId, CommentPageQuery, CommentVo, PageResult},
};

/// API for comment operations.
pub struct CommentApi {
    client: Arc<HubClientInner>,
}

impl CommentApi {
    pub(crate) fn new(client: Arc<HubClientInner>) -> Self {
        Self { client }
    }

    /// Add a comment.
    pub async fn add(&self, comment: &CommentDto) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::POST, "/comment", comment).await
    }

    /// Delete a comment by ID.
    pub async fn delete(&self, id: impl Into<CommentId>) -> Result<ApiResponse<Value>> {
        let id = id.into();
        self.client
            .send_query(Method::DELETE, "/comment", &[("id", id.get())])
            .await
    }

    /// Page through comments.
    pub async fn page(&self, query: &CommentPageQuery) -> Result<ApiResponse<PageResult<CommentVo>>> {
        self.client.get("/comment/page", query).await
    }
}

//! Post API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::{ApiResponse, HubClientInner},
    error::Result,
    models::{PostDto, PostId, PostVo, ScrollResult, UploadFile},
};

/// API for post operations.
pub struct PostApi {
    client: Arc<HubClientInner>,
}

impl PostApi {
    pub(crate) fn new(client: Arc<HubClientInner>) -> Self {
        Self { client }
    }

    /// Upload a file as multipart field `file`.
    pub async fn upload(&self, file: UploadFile) -> Result<ApiResponse<Value>> {
        self.client.post_file("/upload", file).await
    }

    /// Publish a post.
    pub async fn add(&self, post: &PostDto) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::POST, "/post", post).await
    }

    /// Get a post by ID.
    pub async fn get(&self, post_id: impl Into<PostId>) -> Result<ApiResponse<PostVo>> {
        let post_id = post_id.into();
        self.client.get("/post", &[("postId", post_id.get())]).await
    }

    /// Read the feed with cursor pagination.
    ///
    /// Start with `cursor = 0, offset = 0`, then pass back the values from
    /// the previous page.
    pub async fn feed(&self, cursor: i64, offset: i64) -> Result<ApiResponse<ScrollResult<PostVo>>> {
        self.client
            .get("/post/page", &[("cursor", cursor), ("offset", offset)])
            .await
    }
}

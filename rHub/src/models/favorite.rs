//! Favorite models.

use serde::Serialize;

use super::PostId;

/// Payload for `POST /favorite` and query for `DELETE /favorite`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<PostId>,
}

impl FavoriteDto {
    /// Favorite targeting a post.
    pub fn post(post_id: impl Into<PostId>) -> Self {
        Self {
            post_id: Some(post_id.into()),
        }
    }
}

//! Thumb (like) models.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;
use super::{ThumbId, UserId};

/// Payload for `POST /thumb` and `DELETE /thumb`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbDto {
    /// Thumb type, 0-2.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A thumb record as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThumbVo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ThumbId,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: UserId,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub target_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub create_time: String,
}

/// Query for `GET /thumb/page`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbPageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_asc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i32>,
}

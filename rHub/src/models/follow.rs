//! Follow models.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;
use super::{FollowId, UserId};

/// Payload for `POST /follow` and `DELETE /follow`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fans_id: Option<UserId>,
    /// Follow type, 0-1.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

/// A follow record as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FollowVo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: FollowId,
    #[serde(deserialize_with = "null_as_default")]
    pub fans_id: UserId,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub target_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub target_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub create_time: String,
}

/// Query for `GET /follow/page`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowPageQuery {
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

//! Post models.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;
use super::{PostId, UserId};

/// Payload for `POST /post`.
///
/// `urls` is a comma-separated list of uploaded file URLs.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_type: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A post as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostVo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: PostId,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher_id: UserId,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher_type: i32,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub urls: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumb_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub favorite_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub create_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_thumb: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_favorite: bool,
}

impl PostVo {
    /// Individual attachment URLs.
    pub fn url_list(&self) -> Vec<&str> {
        self.urls
            .split(',')
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .collect()
    }
}

/// A file to send to `POST /upload`.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type, if known.
    pub mime: Option<String>,
    /// File content.
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Create an upload from raw bytes.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes: bytes.into(),
        }
    }

    /// Set the MIME type.
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_list() {
        let post = PostVo {
            urls: "a.png, b.png,,".into(),
            ..Default::default()
        };
        assert_eq!(post.url_list(), vec!["a.png", "b.png"]);
        assert!(PostVo::default().url_list().is_empty());
    }

    #[test]
    fn test_dto_skips_unset_fields() {
        let dto = PostDto {
            title: Some("hi".into()),
            kind: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "hi", "type": 1 }));
    }
}

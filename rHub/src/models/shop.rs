//! Shop models.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;
use super::{ShopId, UserId};

/// Time of day as the server encodes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nano: u32,
}

impl LocalTime {
    /// Create a time with whole seconds.
    pub fn hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nano: 0,
        }
    }

    /// Convert to a chrono time, if the fields are in range.
    pub fn to_naive(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_nano_opt(self.hour, self.minute, self.second, self.nano)
    }
}

impl From<NaiveTime> for LocalTime {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            nano: t.nanosecond(),
        }
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Payload for `POST /shop`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub begin_time: LocalTime,
    pub end_time: LocalTime,
}

/// A shop as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopVo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ShopId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_id: UserId,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub thumb_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fans_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub has_follow: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_thumb: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub begin_time: LocalTime,
    #[serde(deserialize_with = "null_as_default")]
    pub end_time: LocalTime,
}

/// Query for `GET /shop/page`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_asc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_from_naive() {
        let t = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let local = LocalTime::from(t);
        assert_eq!(local, LocalTime::hms(9, 30, 0));
        assert_eq!(local.to_naive(), Some(t));
        assert_eq!(local.to_string(), "09:30");
    }

    #[test]
    fn test_local_time_out_of_range() {
        assert!(LocalTime::hms(25, 0, 0).to_naive().is_none());
    }

    #[test]
    fn test_shop_dto_wire_shape() {
        let dto = ShopDto {
            name: Some("Noodles".into()),
            address: None,
            begin_time: LocalTime::hms(8, 0, 0),
            end_time: LocalTime::hms(22, 0, 0),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["beginTime"]["hour"], 8);
        assert_eq!(json["endTime"]["nano"], 0);
        assert!(json.get("address").is_none());
    }
}

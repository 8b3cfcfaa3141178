//! Coupon models.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;
use super::{CouponId, ShopId};

/// Payload for `POST /coupon`.
///
/// `begin_time` and `end_time` are ISO 8601 local date-times.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<ShopId>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// A coupon as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponVo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: CouponId,
    #[serde(deserialize_with = "null_as_default")]
    pub shop_id: ShopId,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stock: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub discount_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub full_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub reduce_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub begin_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_time: String,
}

//! Order models.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;
use super::{CouponId, OrderId};

/// An order as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderVo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: OrderId,
    #[serde(deserialize_with = "null_as_default")]
    pub coupon_id: CouponId,
    #[serde(deserialize_with = "null_as_default")]
    pub status: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub create_time: String,
}

//! Coupon API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::{ApiResponse, HubClientInner},
    error::Result,
    models::{CouponDto, CouponId, CouponVo, ShopId},
};

/// API for coupon operations.
pub struct CouponApi {
    client: Arc<HubClientInner>,
}

impl CouponApi {
    pub(crate) fn new(client: Arc<HubClientInner>) -> Self {
        Self { client }
    }

    /// Create a coupon.
    pub async fn add(&self, coupon: &CouponDto) -> Result<ApiResponse<Value>> {
        self.client.send_json(Method::POST, "/coupon", coupon).await
    }

    /// List the coupons of a shop.
    pub async fn by_shop(&self, shop_id: impl Into<ShopId>) -> Result<ApiResponse<Vec<CouponVo>>> {
        let shop_id = shop_id.into();
        self.client
            .get("/coupon", &[("shopId", shop_id.get())])
            .await
    }

    /// Delete a coupon.
    pub async fn delete(&self, coupon_id: impl Into<CouponId>) -> Result<ApiResponse<Value>> {
        let coupon_id = coupon_id.into();
        self.client
            .send_query(Method::DELETE, "/coupon", &[("couponId", coupon_id.get())])
            .await
    }

    /// Read the cached stock of a coupon.
    pub async fn stock(&self, coupon_id: impl Into<CouponId>) -> Result<ApiResponse<i64>> {
        let coupon_id = coupon_id.into();
        self.client
            .get("/coupon/stock", &[("couponId", coupon_id.get())])
            .await
    }

    /// Change the stock of a coupon by `stock_change` (may be negative).
    pub async fn update_stock(
        &self,
        coupon_id: impl Into<CouponId>,
        stock_change: i64,
    ) -> Result<ApiResponse<Value>> {
        let coupon_id = coupon_id.into();
        self.client
            .send_query(
                Method::PUT,
                "/coupon/stock",
                &[("couponId", coupon_id.get()), ("stockChange", stock_change)],
            )
            .await
    }

    /// Try to grab a flash-sale coupon.
    pub async fn sec_kill(&self, coupon_id: impl Into<CouponId>) -> Result<ApiResponse<Value>> {
        let coupon_id = coupon_id.into();
        self.client
            .send_query(Method::POST, "/coupon/secKill", &[("couponId", coupon_id.get())])
            .await
    }
}

//! Order API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::{ApiResponse, HubClientInner},
    error::Result,
    models::{OrderId, OrderVo},
};

/// API for order operations.
pub struct OrderApi {
    client: Arc<HubClientInner>,
}

impl OrderApi {
    pub(crate) fn new(client: Arc<HubClientInner>) -> Self {
        Self { client }
    }

    /// Pay an order.
    ///
    /// The server binds the order ID positionally, hence `arg0`.
    pub async fn pay(&self, order_id: impl Into<OrderId>) -> Result<ApiResponse<Value>> {
        let order_id = order_id.into();
        self.client
            .send_query(Method::PUT, "/order/payment", &[("arg0", order_id.get())])
            .await
    }

    /// List the current user's orders.
    pub async fn owned(&self) -> Result<ApiResponse<Vec<OrderVo>>> {
        self.client.get_path("/order/owner").await
    }
}

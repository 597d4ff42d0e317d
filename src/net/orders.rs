//! Order backend client: `GET /api/orders`.

use super::types::{ClientError, Order, OrderSource};
use crate::config::HttpTimeouts;

const API: &str = "Orders";

pub struct OrderClient {
    http: reqwest::Client,
    url: String,
}

impl OrderClient {
    /// Build a client for the order list endpoint at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(url: impl Into<String>, timeouts: HttpTimeouts) -> Result<Self, ClientError> {
        Ok(Self { http: super::build_http(timeouts)?, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl OrderSource for OrderClient {
    async fn fetch_orders(&self) -> Result<Vec<Order>, ClientError> {
        tracing::debug!(url = %self.url, "fetching orders");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ClientError::Network { api: API, message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::transport(API, status));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network { api: API, message: e.to_string() })?;

        let orders = parse_orders(&text)?;
        tracing::debug!(count = orders.len(), "orders fetched");
        Ok(orders)
    }
}

/// Decode the order list body. Server order is preserved.
fn parse_orders(json: &str) -> Result<Vec<Order>, ClientError> {
    serde_json::from_str(json).map_err(|e| ClientError::Decode { api: API, message: e.to_string() })
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;

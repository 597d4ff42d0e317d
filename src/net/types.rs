//! Wire types shared by the order and assistant clients.
//!
//! The order record mirrors the order backend's response DTO. Field names are
//! camelCase on the wire; optional metrics arrive as `null` until the
//! forecasting side has computed them.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-success HTTP status.
    #[error("{api} API error: {status} {reason}")]
    Transport { api: &'static str, status: u16, reason: String },

    /// The request never completed (DNS, connect, timeout).
    #[error("{api} request failed: {message}")]
    Network { api: &'static str, message: String },

    /// The response body was not valid JSON or had the wrong shape.
    #[error("{api} response parse failed: {message}")]
    Decode { api: &'static str, message: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ClientError {
    pub(crate) fn transport(api: &'static str, status: reqwest::StatusCode) -> Self {
        Self::Transport {
            api,
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
        }
    }
}

// =============================================================================
// ORDER
// =============================================================================

/// Delivery lifecycle status as reported by the order backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Wire spelling, used verbatim in the order table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::InTransit => "IN_TRANSIT",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Destination coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Client-side read-only copy of an order record.
///
/// `None` in any optional field means "not set / not computed yet" and is
/// never the same thing as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub destination: Location,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub estimated_arrival_minutes: Option<f64>,
}

// =============================================================================
// ASSISTANT
// =============================================================================

/// Body of `POST /api/assistant/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantChatRequest {
    pub order_id: String,
    pub message: String,
}

/// Successful reply from the assistant backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantChatResponse {
    pub reply: String,
}

// =============================================================================
// SOURCE TRAITS
// =============================================================================

/// Anything that can produce the current order list. Enables mocking in tests.
#[async_trait::async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch every order in server-provided order.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport, network, or decode failure.
    async fn fetch_orders(&self) -> Result<Vec<Order>, ClientError>;
}

/// Anything that can answer an assistant question about an order.
#[async_trait::async_trait]
pub trait AssistantSource: Send + Sync {
    /// Ask the assistant about `order_id` and return its reply text.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport, network, or decode failure.
    async fn post_chat(&self, order_id: &str, message: &str) -> Result<String, ClientError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

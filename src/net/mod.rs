//! HTTP clients for the order backend and the logistics assistant.
//!
//! DESIGN
//! ======
//! Each client is a thin `reqwest` wrapper with a pure `parse_*` function
//! for the body, so decoding is testable without a server. The controller
//! only sees the [`types::OrderSource`] and [`types::AssistantSource`]
//! traits.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses fail with [`types::ClientError::Transport`] and never
//! yield partial data. No retries are attempted here.

pub mod assistant;
pub mod orders;
pub mod types;

use types::ClientError;

use crate::config::HttpTimeouts;

fn build_http(timeouts: HttpTimeouts) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(timeouts.request())
        .connect_timeout(timeouts.connect())
        .build()
        .map_err(|e| ClientError::HttpClientBuild(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_helpers;

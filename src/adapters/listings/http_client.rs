//! HTTP listings adapter. GETs the built request URL and decodes a JSON film array.

use crate::domain::{FetchFailure, Film, ListingsRequest};
use crate::ports::ListingsPort;
use reqwest::Client;
use tracing::{debug, info, warn};

/// reqwest-backed listings source. Transport defaults apply (no engine-owned timeout).
pub struct HttpListingsAdapter {
    client: Client,
}

impl HttpListingsAdapter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpListingsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ListingsPort for HttpListingsAdapter {
    async fn fetch(&self, request: &ListingsRequest) -> Result<Vec<Film>, FetchFailure> {
        let url = request.url();
        debug!(url = %url, "requesting listings");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "listings source returned error");
            return Err(FetchFailure::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::Transport(format!("Failed to read body: {}", e)))?;
        let films: Vec<Film> = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, body = %body.chars().take(200).collect::<String>(), "JSON parse failed");
            FetchFailure::Body(format!("Failed to parse film list: {}", e))
        })?;

        info!(count = films.len(), "listings received");
        Ok(films)
    }
}

//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, FetchFailure, Film, ListingsRequest, LocationSample, Preferences};

/// Remote listings source. One call per query; no retries.
#[async_trait::async_trait]
pub trait ListingsPort: Send + Sync {
    /// Dispatch `request` and decode the film list.
    ///
    /// Non-success statuses and undecodable bodies are failures just like
    /// transport errors.
    async fn fetch(&self, request: &ListingsRequest) -> Result<Vec<Film>, FetchFailure>;
}

/// Geolocation collaborator. Yields a snapshot; the caller owns the decision timeout.
#[async_trait::async_trait]
pub trait LocationPort: Send + Sync {
    async fn sample(&self) -> Result<LocationSample, DomainError>;
}

/// Last-used username and timeframe, kept across sessions.
#[async_trait::async_trait]
pub trait PreferencesPort: Send + Sync {
    /// Stored preferences, or defaults when nothing was saved yet.
    async fn load(&self) -> Result<Preferences, DomainError>;

    async fn save(&self, prefs: &Preferences) -> Result<(), DomainError>;
}

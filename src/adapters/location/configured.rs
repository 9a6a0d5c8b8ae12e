//! Location from configuration: a fixed position plus a permission flag.
//!
//! With no position configured the service reports itself unavailable.

use crate::domain::{DomainError, LocationSample};
use crate::ports::LocationPort;
use tokio::sync::RwLock;

pub struct ConfiguredLocation {
    sample: RwLock<LocationSample>,
}

impl ConfiguredLocation {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>, enabled: bool) -> Self {
        let available = latitude.is_some() || longitude.is_some();
        Self {
            sample: RwLock::new(LocationSample {
                available,
                enabled: available && enabled,
                latitude,
                longitude,
            }),
        }
    }

    pub fn unavailable() -> Self {
        Self::new(None, None, false)
    }

    /// Revoke or grant permission, e.g. from a CLI flag.
    pub async fn set_enabled(&self, enabled: bool) {
        let mut sample = self.sample.write().await;
        sample.enabled = sample.available && enabled;
    }
}

#[async_trait::async_trait]
impl LocationPort for ConfiguredLocation {
    async fn sample(&self) -> Result<LocationSample, DomainError> {
        Ok(*self.sample.read().await)
    }
}

//! Application configuration. Listings endpoint, paths, location, ordering.

use crate::domain::DomainError;
use reqwest::Url;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LISTINGS_URL: &str = "https://home.limbe.ro/lecinema/films-showtimes";

/// How long the geolocation service may take to answer, in milliseconds.
pub const DEFAULT_GEOLOCATION_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Listings source endpoint. Read from LE_CINEMA_LISTINGS_URL.
    #[serde(default)]
    pub listings_url: Option<String>,

    /// Directory for the preferences file. Read from LE_CINEMA_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Location
    // ─────────────────────────────────────────────────────────────────────────
    /// Fixed device latitude. Read from LE_CINEMA_LATITUDE.
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Fixed device longitude. Read from LE_CINEMA_LONGITUDE.
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Whether location may be shared (default true). Read from LE_CINEMA_LOCATION_ENABLED.
    #[serde(default)]
    pub location_enabled: Option<bool>,

    /// Geolocation decision timeout in ms. Read from LE_CINEMA_GEOLOCATION_TIMEOUT_MS.
    #[serde(default)]
    pub geolocation_timeout_ms: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────
    /// Locale for title ordering, e.g. "en" or "sv". Read from LE_CINEMA_COLLATION_LOCALE.
    #[serde(default)]
    pub collation_locale: Option<String>,

    /// Films in this language show their original title. Read from LE_CINEMA_NATIVE_LANGUAGE.
    #[serde(default)]
    pub native_language: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("LE_CINEMA_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("LE_CINEMA").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Parsed listings endpoint. Defaults to the public le cinema API.
    pub fn listings_url_or_default(&self) -> Result<Url, DomainError> {
        let raw = self.listings_url.as_deref().unwrap_or(DEFAULT_LISTINGS_URL);
        Url::parse(raw)
            .map_err(|e| DomainError::Config(format!("invalid listings URL '{}': {}", raw, e)))
    }

    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or("./data"))
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir_or_default().join("preferences.json")
    }

    pub fn location_enabled_or_default(&self) -> bool {
        self.location_enabled.unwrap_or(true)
    }

    pub fn geolocation_timeout(&self) -> Duration {
        Duration::from_millis(
            self.geolocation_timeout_ms
                .unwrap_or(DEFAULT_GEOLOCATION_TIMEOUT_MS),
        )
    }

    pub fn collation_locale_or_default(&self) -> String {
        self.collation_locale.clone().unwrap_or_else(|| "en".to_string())
    }

    pub fn native_language_or_default(&self) -> String {
        self.native_language.clone().unwrap_or_else(|| "sv".to_string())
    }
}

//! Listings request builder.
//!
//! Parameter order is username, coordinates, time_from, time_to. The listings
//! source accepts any order; the fixed order just keeps logged URLs readable.

use crate::domain::time_window::format_timestamp;
use crate::domain::{LocationSample, TimeWindow};
use reqwest::Url;

/// Decimal places sent for each coordinate (city-level, not exact position).
pub const COORDINATE_PRECISION: usize = 3;

/// A built listings request: endpoint plus ordered query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingsRequest {
    endpoint: Url,
    params: Vec<(&'static str, String)>,
}

impl ListingsRequest {
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Full URL with URL-encoded query string.
    pub fn url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .extend_pairs(self.params.iter().map(|(k, v)| (*k, v.as_str())));
        url
    }
}

/// Build the request. No validation: an empty username goes through untouched.
pub fn build(
    endpoint: &Url,
    username: &str,
    window: &TimeWindow,
    location: Option<&LocationSample>,
) -> ListingsRequest {
    let mut params = vec![("username", username.to_string())];

    if let Some((lat, lon)) = location.and_then(LocationSample::usable_coordinates) {
        params.push((
            "coordinates",
            format!("{lat:.prec$},{lon:.prec$}", prec = COORDINATE_PRECISION),
        ));
    }

    params.push(("time_from", format_timestamp(&window.from)));
    if let Some(to) = &window.to {
        params.push(("time_to", format_timestamp(to)));
    }

    ListingsRequest {
        endpoint: endpoint.clone(),
        params,
    }
}

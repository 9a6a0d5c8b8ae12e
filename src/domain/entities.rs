//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — listings JSON maps straight onto these via serde.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse time filter picked by the user. Persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    #[default]
    Anytime,
    Today,
    Tomorrow,
    ThisWeek,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Anytime,
        Timeframe::Today,
        Timeframe::Tomorrow,
        Timeframe::ThisWeek,
    ];

    /// Stable key used in the preferences file and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Timeframe::Anytime => "anytime",
            Timeframe::Today => "today",
            Timeframe::Tomorrow => "tomorrow",
            Timeframe::ThisWeek => "this_week",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Anytime => "Anytime",
            Timeframe::Today => "Today",
            Timeframe::Tomorrow => "Tomorrow",
            Timeframe::ThisWeek => "This week",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Timeframe::ALL
            .into_iter()
            .find(|t| t.key() == normalized)
            .ok_or_else(|| {
                format!("unknown timeframe '{s}' (expected anytime, today, tomorrow or this_week)")
            })
    }
}

/// Resolved `[from, to)` bound. `to` is absent only for [`Timeframe::Anytime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<FixedOffset>,
    pub to: Option<DateTime<FixedOffset>>,
}

/// Read-only geolocation snapshot, taken once per query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSample {
    #[serde(rename = "isGeolocationAvailable")]
    pub available: bool,
    #[serde(rename = "isGeolocationEnabled")]
    pub enabled: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationSample {
    /// Snapshot for a device without any location service.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Coordinates usable for a query: service available, permission granted, both axes present.
    pub fn usable_coordinates(&self) -> Option<(f64, f64)> {
        if !(self.available && self.enabled) {
            return None;
        }
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Listing ids arrive as either JSON strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cinema {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// A single screening. `start_at` keeps the listing's own ISO-8601 text and offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showing {
    pub id: RecordId,
    pub start_at: String,
    pub cinema: Cinema,
    #[serde(default)]
    pub booking_link: Option<String>,
}

impl Showing {
    /// Calendar date portion of `start_at` (`YYYY-MM-DD`).
    pub fn date(&self) -> &str {
        self.start_at
            .split_once('T')
            .map_or(self.start_at.as_str(), |(date, _)| date)
    }

    /// `HH:MM` in the cinema's encoded offset; never converted to the viewer's zone.
    pub fn time(&self) -> &str {
        self.start_at.get(11..16).unwrap_or("")
    }

    /// Where to book: the showing's own link, else the cinema's website.
    pub fn booking_target(&self) -> Option<&str> {
        self.booking_link
            .as_deref()
            .filter(|l| !l.is_empty())
            .or(self.cinema.website.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    #[serde(rename = "letterboxd_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub poster_image: Option<String>,
    #[serde(rename = "url", default)]
    pub detail_url: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub showtimes: Vec<Showing>,
}

impl Film {
    /// Films in the viewer's own language show their original title.
    pub fn display_title(&self, native_language: &str) -> &str {
        match (&self.original_language, &self.original_title) {
            (Some(lang), Some(original)) if lang == native_language && !original.is_empty() => {
                original
            }
            _ => &self.title,
        }
    }
}

/// Showings of one film sharing a calendar date, time-ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateGroup {
    pub date: String,
    pub showings: Vec<Showing>,
}

/// Last-used inputs, owned by the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub username: String,
    #[serde(default)]
    pub timeframe: Timeframe,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            username: "limbero".to_string(),
            timeframe: Timeframe::Anytime,
        }
    }
}

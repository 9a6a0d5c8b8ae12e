//! Persistence adapters.

pub mod prefs_json;

pub use prefs_json::PrefsJson;

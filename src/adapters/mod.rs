//! Infrastructure adapters. Implement outbound ports.
//!
//! Listings HTTP source, location, preferences file, terminal UI. Map errors to domain types.

pub mod listings;
pub mod location;
pub mod persistence;
pub mod ui;

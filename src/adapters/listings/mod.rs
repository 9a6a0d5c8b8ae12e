//! Listings adapters. Implement ListingsPort.
//!
//! HTTP adapter for the real source, mock adapter for offline runs and tests.

pub mod http_client;
pub mod mock_adapter;

pub use http_client::HttpListingsAdapter;
pub use mock_adapter::MockListingsAdapter;

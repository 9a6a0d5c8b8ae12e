//! Core domain layer. No external I/O dependencies.
//!
//! Entities and the query/aggregation rules live here. Dependencies flow inward.

pub mod classifier;
pub mod entities;
pub mod errors;
pub mod film_sorter;
pub mod query;
pub mod showtime_grouper;
pub mod time_window;

pub use classifier::{Diagnostic, FetchResult};
pub use entities::{
    Cinema, DateGroup, Film, LocationSample, Preferences, RecordId, Showing, TimeWindow, Timeframe,
};
pub use errors::{DomainError, FetchFailure};
pub use film_sorter::TitleCollator;
pub use query::ListingsRequest;

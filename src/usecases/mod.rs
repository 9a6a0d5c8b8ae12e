//! Application use cases. Orchestrate domain logic via ports.

pub mod showtime_service;

pub use showtime_service::ShowtimeService;

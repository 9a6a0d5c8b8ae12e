//! Showtime pipeline: resolve window -> build request -> fetch -> classify -> sort.
//!
//! - Inputs (username, timeframe) are passed in per call, never read from shared state
//! - Location is sampled once per run and the copy is used throughout
//! - One fetch per run, no retries; failures come back as a `Diagnostic`

use crate::domain::{
    DateGroup, FetchResult, Film, LocationSample, Timeframe, TitleCollator, classifier, query,
    showtime_grouper, time_window,
};
use crate::ports::{ListingsPort, LocationPort};
use chrono::{DateTime, FixedOffset, Utc};
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Default time allowed for the location service to answer.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ShowtimeService {
    listings: Arc<dyn ListingsPort>,
    location: Arc<dyn LocationPort>,
    endpoint: Url,
    collator: TitleCollator,
    location_timeout: Duration,
}

impl ShowtimeService {
    pub fn new(
        listings: Arc<dyn ListingsPort>,
        location: Arc<dyn LocationPort>,
        endpoint: Url,
        collator: TitleCollator,
    ) -> Self {
        Self {
            listings,
            location,
            endpoint,
            collator,
            location_timeout: DEFAULT_LOCATION_TIMEOUT,
        }
    }

    pub fn with_location_timeout(mut self, timeout: Duration) -> Self {
        self.location_timeout = timeout;
        self
    }

    /// Run the pipeline against the system clock.
    pub async fn fetch_films(&self, username: &str, timeframe: Timeframe) -> FetchResult {
        let now = chrono::Local::now();
        self.fetch_films_at(username, timeframe, now.with_timezone(&Utc), *now.offset())
            .await
    }

    /// Run the pipeline for an explicit instant and local offset.
    pub async fn fetch_films_at(
        &self,
        username: &str,
        timeframe: Timeframe,
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> FetchResult {
        let location = self.location_snapshot().await;
        let window = time_window::resolve(timeframe, now, offset);
        let request = query::build(&self.endpoint, username, &window, Some(&location));
        debug!(url = %request.url(), timeframe = timeframe.key(), "built listings request");

        let outcome = self.listings.fetch(&request).await;
        let FetchResult { films, error } = classifier::classify(outcome, &request, &location);

        match error {
            None => {
                info!(
                    username,
                    timeframe = timeframe.key(),
                    films = films.len(),
                    "fetched films"
                );
                FetchResult {
                    films: self.collator.sort_films(films),
                    error: None,
                }
            }
            Some(diagnostic) => {
                error!("{}", diagnostic);
                FetchResult {
                    films,
                    error: Some(diagnostic),
                }
            }
        }
    }

    /// Date-grouped showings of one film, for its details view.
    pub fn showtimes_for(&self, film: &Film) -> Vec<DateGroup> {
        showtime_grouper::group_by_date(&film.showtimes)
    }

    /// Location errors and slow answers both count as "no location".
    async fn location_snapshot(&self) -> LocationSample {
        match tokio::time::timeout(self.location_timeout, self.location.sample()).await {
            Ok(Ok(sample)) => sample,
            Ok(Err(e)) => {
                warn!(error = %e, "location unavailable");
                LocationSample::unavailable()
            }
            Err(_) => {
                let timeout_ms = self.location_timeout.as_millis() as u64;
                warn!(timeout_ms, "location decision timed out");
                LocationSample::unavailable()
            }
        }
    }
}

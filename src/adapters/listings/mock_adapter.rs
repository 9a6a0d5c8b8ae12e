//! Mock listings adapter for running without the remote source.
//!
//! Returns canned films (or a canned failure) and records every request it sees.

use crate::domain::{Cinema, FetchFailure, Film, ListingsRequest, RecordId, Showing};
use crate::ports::ListingsPort;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

pub struct MockListingsAdapter {
    response: Result<Vec<Film>, FetchFailure>,
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    requests: Mutex<Vec<ListingsRequest>>,
}

impl MockListingsAdapter {
    /// Mock serving a small built-in programme.
    pub fn new() -> Self {
        Self::with_films(sample_programme())
    }

    pub fn with_films(films: Vec<Film>) -> Self {
        Self {
            response: Ok(films),
            delay_ms: 0,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(failure: FetchFailure) -> Self {
        Self {
            response: Err(failure),
            delay_ms: 0,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ListingsRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Default for MockListingsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ListingsPort for MockListingsAdapter {
    async fn fetch(&self, request: &ListingsRequest) -> Result<Vec<Film>, FetchFailure> {
        info!(url = %request.url(), "[MOCK] Simulating listings request");
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request.clone());
        }
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        self.response.clone()
    }
}

fn sample_programme() -> Vec<Film> {
    let zita = Cinema {
        name: "Zita Folkets Bio".to_string(),
        website: Some("https://www.zita.se".to_string()),
    };
    let rio = Cinema {
        name: "Bio Rio".to_string(),
        website: Some("https://www.biorio.se".to_string()),
    };
    vec![
        Film {
            id: RecordId::Text("2bg8".to_string()),
            title: "The Seventh Seal".to_string(),
            poster_image: None,
            detail_url: "https://letterboxd.com/film/the-seventh-seal/".to_string(),
            original_title: Some("Det sjunde inseglet".to_string()),
            original_language: Some("sv".to_string()),
            showtimes: vec![
                Showing {
                    id: RecordId::Number(2),
                    start_at: "2024-05-02T18:00:00+02:00".to_string(),
                    cinema: zita.clone(),
                    booking_link: None,
                },
                Showing {
                    id: RecordId::Number(1),
                    start_at: "2024-05-01T20:30:00+02:00".to_string(),
                    cinema: rio.clone(),
                    booking_link: Some("https://www.biorio.se/boka/1".to_string()),
                },
            ],
        },
        Film {
            id: RecordId::Text("1H4e".to_string()),
            title: "Alphaville".to_string(),
            poster_image: None,
            detail_url: "https://letterboxd.com/film/alphaville/".to_string(),
            original_title: Some("Alphaville, une étrange aventure de Lemmy Caution".to_string()),
            original_language: Some("fr".to_string()),
            showtimes: vec![Showing {
                id: RecordId::Number(3),
                start_at: "2024-05-01T21:00:00+02:00".to_string(),
                cinema: zita,
                booking_link: None,
            }],
        },
    ]
}

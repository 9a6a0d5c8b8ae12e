//! Turns a completed listings request into films or a diagnostic.
//!
//! Every failure kind collapses into one [`Diagnostic`] carrying the failure,
//! the exact request URL and the location snapshot used to build it.

use crate::domain::{FetchFailure, Film, ListingsRequest, LocationSample};
use serde::Serialize;
use std::fmt;

/// Human-readable failure report, shown verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostic(String);

impl Diagnostic {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of one pipeline run. On failure `films` is always empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchResult {
    pub films: Vec<Film>,
    pub error: Option<Diagnostic>,
}

impl FetchResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Classify the raw fetch outcome. No retries: a failure is final for this run.
pub fn classify(
    outcome: Result<Vec<Film>, FetchFailure>,
    request: &ListingsRequest,
    location: &LocationSample,
) -> FetchResult {
    match outcome {
        Ok(films) => FetchResult { films, error: None },
        Err(failure) => FetchResult {
            films: Vec::new(),
            error: Some(diagnose(&failure, request, location)),
        },
    }
}

/// Build the composite text: failure name and message, request URL, location snapshot.
pub fn diagnose(
    failure: &FetchFailure,
    request: &ListingsRequest,
    location: &LocationSample,
) -> Diagnostic {
    Diagnostic(format!(
        "{}: \"{}\",\nrequest URL: \"{}\"\n{}",
        failure.name(),
        failure,
        request.url(),
        location_snapshot(location)
    ))
}

fn location_snapshot(location: &LocationSample) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    match location.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(e) => format!("<location snapshot unavailable: {e}>"),
    }
}

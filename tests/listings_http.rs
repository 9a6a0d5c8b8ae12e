//! Integration tests for the HTTP listings adapter and the full pipeline.
//!
//! A one-shot `TcpListener` plays the listings source so the real reqwest
//! path (status handling, body decoding, diagnostics) is exercised.

use chrono::{DateTime, FixedOffset, Utc};
use le_cinema::adapters::listings::HttpListingsAdapter;
use le_cinema::adapters::location::ConfiguredLocation;
use le_cinema::domain::{FetchFailure, Timeframe, TitleCollator};
use le_cinema::ports::ListingsPort;
use le_cinema::usecases::ShowtimeService;
use reqwest::Url;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const FILMS_JSON: &str = r#"[
  {"letterboxd_id": "z9", "title": "Zabriskie Point", "poster_image": null,
   "url": "https://letterboxd.com/film/zabriskie-point/",
   "original_title": "Zabriskie Point", "original_language": "en",
   "showtimes": []},
  {"letterboxd_id": "a1", "title": "Ägget är löst", "poster_image": "https://img.example/a1.jpg",
   "url": "https://letterboxd.com/film/agget-ar-lost/",
   "original_title": "Ägget är löst", "original_language": "sv",
   "showtimes": [
     {"id": 2, "start_at": "2024-05-01T20:30:00+02:00",
      "cinema": {"name": "Zita", "website": "https://zita.se"}, "booking_link": null},
     {"id": 1, "start_at": "2024-05-01T18:00:00+02:00",
      "cinema": {"name": "Zita", "website": "https://zita.se"}, "booking_link": null}
   ]}
]"#;

/// Serves exactly one canned response; yields the raw request head it received.
async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let mut head = Vec::new();
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            head.extend_from_slice(&buf[..n]);
            if n == 0 || head.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&head).into_owned()
    });
    let url = Url::parse(&format!("http://{}/lecinema/films-showtimes", addr)).unwrap();
    (url, handle)
}

/// Direct client: a proxy from the environment must not intercept loopback traffic.
fn adapter() -> HttpListingsAdapter {
    HttpListingsAdapter::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

fn service(endpoint: Url) -> ShowtimeService {
    ShowtimeService::new(
        Arc::new(adapter()),
        Arc::new(ConfiguredLocation::unavailable()),
        endpoint,
        TitleCollator::new("sv").unwrap(),
    )
}

fn now() -> (DateTime<Utc>, FixedOffset) {
    let now = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    (now, FixedOffset::east_opt(7200).unwrap())
}

#[tokio::test]
async fn service_unavailable_yields_empty_films_and_diagnostic() {
    let (endpoint, server) = serve_once("503 Service Unavailable", "").await;
    let (now, offset) = now();

    let result = service(endpoint.clone())
        .fetch_films_at("limbero", Timeframe::Today, now, offset)
        .await;
    let head = server.await.unwrap();

    assert!(result.films.is_empty());
    let text = result.error.expect("503 must produce a diagnostic").to_string();
    assert!(text.contains("503"), "diagnostic was: {text}");
    assert!(text.contains("Service Unavailable"));

    // the URL in the diagnostic is the one actually requested
    let path_and_query = head.lines().next().unwrap().split(' ').nth(1).unwrap();
    let requested = format!(
        "http://{}:{}{}",
        endpoint.host_str().unwrap(),
        endpoint.port().unwrap(),
        path_and_query
    );
    assert!(
        text.contains(&format!("request URL: \"{}\"", requested)),
        "diagnostic was: {text}"
    );
    assert!(text.contains("\"isGeolocationAvailable\": false"));
}

#[tokio::test]
async fn success_parses_and_sorts_films() {
    let (endpoint, server) = serve_once("200 OK", FILMS_JSON).await;
    let (now, offset) = now();

    let result = service(endpoint)
        .fetch_films_at("limbero", Timeframe::ThisWeek, now, offset)
        .await;
    let head = server.await.unwrap();

    assert!(result.error.is_none());
    let titles: Vec<_> = result.films.iter().map(|f| f.title.as_str()).collect();
    // Swedish collation puts Ä after Z
    assert_eq!(titles, ["Zabriskie Point", "Ägget är löst"]);

    let request_line = head.lines().next().unwrap();
    assert!(request_line.starts_with("GET /lecinema/films-showtimes?username=limbero&time_from="));
    assert!(request_line.contains("time_to=2024-05-08T00%3A00%3A00%2B02%3A00"));
    assert!(!request_line.contains("coordinates"));
}

#[tokio::test]
async fn malformed_body_is_a_failure() {
    let (endpoint, server) = serve_once("200 OK", r#"{"error": "not a list"}"#).await;
    let base_url = endpoint.clone();
    let (now, offset) = now();

    let result = service(endpoint)
        .fetch_films_at("limbero", Timeframe::Anytime, now, offset)
        .await;
    server.await.unwrap();

    assert!(result.films.is_empty());
    let text = result.error.unwrap().to_string();
    assert!(text.starts_with("BodyError: "));
    assert!(text.contains(base_url.as_str()));
}

#[tokio::test]
async fn transport_failure_maps_to_transport_error() {
    // bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = Url::parse(&format!("http://{}/films", addr)).unwrap();
    let window = le_cinema::domain::time_window::resolve(Timeframe::Anytime, now().0, now().1);
    let request = le_cinema::domain::query::build(&endpoint, "limbero", &window, None);

    let outcome = adapter().fetch(&request).await;

    assert!(matches!(outcome, Err(FetchFailure::Transport(_))));
}

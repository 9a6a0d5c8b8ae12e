//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Pick timeframe and username, fetch, then browse films and their showtimes.
//! The loop awaits each fetch, so no second query can start while one is running.

use crate::adapters::ui::progress::fetch_spinner;
use crate::domain::{DateGroup, DomainError, Film, Preferences, Timeframe};
use crate::ports::{InputPort, PreferencesPort};
use crate::usecases::ShowtimeService;
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::warn;

const NEW_SEARCH: &str = "‹ New search";
const QUIT: &str = "‹ Quit";

/// Applies the marquee theme to all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("▶").with_fg(Color::DarkRed))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::DarkYellow));
    inquire::set_global_render_config(config);
}

/// One line per film in the picker.
pub fn film_label(film: &Film, native_language: &str) -> String {
    let count = film.showtimes.len();
    format!(
        "{} ({} showing{})",
        film.display_title(native_language),
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Details view: title, Letterboxd link, then one table per date.
pub fn render_details(film: &Film, groups: &[DateGroup], native_language: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", film.display_title(native_language));
    if !film.detail_url.is_empty() {
        let _ = writeln!(out, "Read more on Letterboxd: {}", film.detail_url);
    }
    if groups.is_empty() {
        let _ = writeln!(out, "\nNo upcoming showings.");
    }
    for group in groups {
        let _ = writeln!(out, "\n{}", group.date);
        let _ = writeln!(out, "  {:<6} {:<28} {}", "Time", "Cinema", "Book");
        for showing in &group.showings {
            let _ = writeln!(
                out,
                "  {:<6} {:<28} {}",
                showing.time(),
                showing.cinema.name,
                showing.booking_target().unwrap_or("-")
            );
        }
    }
    out
}

fn ui_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<ShowtimeService>,
    prefs: Arc<dyn PreferencesPort>,
    native_language: String,
}

impl TuiInputPort {
    pub fn new(
        service: Arc<ShowtimeService>,
        prefs: Arc<dyn PreferencesPort>,
        native_language: String,
    ) -> Self {
        Self {
            service,
            prefs,
            native_language,
        }
    }

    /// Ask for timeframe and username, seeded from the stored preferences.
    fn prompt_inputs(&self, current: &Preferences) -> Result<Option<Preferences>, DomainError> {
        let labels: Vec<&str> = Timeframe::ALL.iter().map(|t| t.label()).collect();
        let cursor = Timeframe::ALL
            .iter()
            .position(|t| *t == current.timeframe)
            .unwrap_or(0);
        let timeframe = match Select::new("When?", labels)
            .with_starting_cursor(cursor)
            .raw_prompt()
        {
            Ok(choice) => Timeframe::ALL[choice.index],
            Err(e) if is_cancel(&e) => return Ok(None),
            Err(e) => return Err(ui_err(e)),
        };

        let username = match Text::new("Letterboxd username")
            .with_default(&current.username)
            .prompt()
        {
            Ok(name) => name,
            Err(e) if is_cancel(&e) => return Ok(None),
            Err(e) => return Err(ui_err(e)),
        };

        Ok(Some(Preferences {
            username,
            timeframe,
        }))
    }

    /// Browse films until the user asks for a new search (true) or quits (false).
    fn browse(&self, films: &[Film]) -> Result<bool, DomainError> {
        loop {
            let mut options: Vec<String> = films
                .iter()
                .map(|f| film_label(f, &self.native_language))
                .collect();
            options.push(NEW_SEARCH.to_string());
            options.push(QUIT.to_string());

            let choice = match Select::new("Pick a film", options)
                .with_page_size(15)
                .raw_prompt()
            {
                Ok(choice) => choice,
                Err(e) if is_cancel(&e) => return Ok(false),
                Err(e) => return Err(ui_err(e)),
            };

            match films.get(choice.index) {
                Some(film) => {
                    let groups = self.service.showtimes_for(film);
                    println!("{}", render_details(film, &groups, &self.native_language));
                }
                None if choice.value == NEW_SEARCH => return Ok(true),
                None => return Ok(false),
            }
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let current = self.prefs.load().await?;
            let Some(inputs) = self.prompt_inputs(&current)? else {
                return Ok(());
            };
            if let Err(e) = self.prefs.save(&inputs).await {
                warn!(error = %e, "could not persist preferences");
            }

            let spinner = fetch_spinner(&inputs.username);
            let result = self
                .service
                .fetch_films(&inputs.username, inputs.timeframe)
                .await;
            spinner.finish_and_clear();

            if let Some(diagnostic) = &result.error {
                eprintln!("\n{}\n", diagnostic);
                continue;
            }
            if result.films.is_empty() {
                println!("No screenings found for {} ({}).", inputs.username, inputs.timeframe);
                continue;
            }
            if !self.browse(&result.films)? {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cinema, RecordId, Showing};
    use crate::domain::showtime_grouper::group_by_date;

    fn film() -> Film {
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
                    start_at: "2024-05-01T20:30:00+02:00".to_string(),
                    cinema: Cinema {
                        name: "Zita".to_string(),
                        website: Some("https://zita.se".to_string()),
                    },
                    booking_link: None,
                },
                Showing {
                    id: RecordId::Number(1),
                    start_at: "2024-05-01T18:00:00+02:00".to_string(),
                    cinema: Cinema {
                        name: "Bio Rio".to_string(),
                        website: None,
                    },
                    booking_link: None,
                },
            ],
        }
    }

    #[test]
    fn test_film_label_uses_display_title() {
        assert_eq!(film_label(&film(), "sv"), "Det sjunde inseglet (2 showings)");
        assert_eq!(film_label(&film(), "en"), "The Seventh Seal (2 showings)");
    }

    #[test]
    fn test_render_details_orders_rows_and_falls_back() {
        let f = film();
        let text = render_details(&f, &group_by_date(&f.showtimes), "en");
        let rio = text.find("18:00").unwrap();
        let zita = text.find("20:30").unwrap();
        assert!(rio < zita);
        assert!(text.contains("https://zita.se"));
        assert!(text.contains("2024-05-01"));
        // no booking link and no website
        assert!(text.lines().any(|l| l.contains("Bio Rio") && l.trim_end().ends_with('-')));
    }

    #[test]
    fn test_render_details_without_showings() {
        let mut f = film();
        f.showtimes.clear();
        assert!(render_details(&f, &[], "en").contains("No upcoming showings."));
    }
}

//! Locale-aware, stable title ordering.

use crate::domain::{DomainError, Film};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;

/// Compares titles the way a reader of `locale` expects (accents and case
/// rank after the base letter instead of by codepoint).
pub struct TitleCollator {
    collator: Collator,
}

impl TitleCollator {
    /// `locale` is a BCP-47 tag such as `en` or `sv`.
    pub fn new(locale: &str) -> Result<Self, DomainError> {
        let locale: Locale = locale
            .parse()
            .map_err(|e| DomainError::Config(format!("invalid collation locale '{locale}': {e}")))?;
        let collator = Collator::try_new(&locale.into(), CollatorOptions::new())
            .map_err(|e| DomainError::Config(format!("collator unavailable: {e}")))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    /// Sort by title. `sort_by` is stable, so equal titles keep their input order.
    pub fn sort_films(&self, mut films: Vec<Film>) -> Vec<Film> {
        films.sort_by(|a, b| self.compare(&a.title, &b.title));
        films
    }
}

impl std::fmt::Debug for TitleCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleCollator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;
    use proptest::prelude::*;

    fn film(id: i64, title: &str) -> Film {
        Film {
            id: RecordId::Number(id),
            title: title.to_string(),
            poster_image: None,
            detail_url: String::new(),
            original_title: None,
            original_language: None,
            showtimes: Vec::new(),
        }
    }

    fn titles(films: &[Film]) -> Vec<&str> {
        films.iter().map(|f| f.title.as_str()).collect()
    }

    #[test]
    fn test_diacritics_and_case_follow_reading_order() {
        let collator = TitleCollator::new("en").unwrap();
        let sorted = collator.sort_films(vec![
            film(1, "Zodiac"),
            film(2, "élan"),
            film(3, "Emma"),
            film(4, "alien"),
            film(5, "Blade Runner"),
        ]);
        assert_eq!(titles(&sorted), ["alien", "Blade Runner", "élan", "Emma", "Zodiac"]);
    }

    #[test]
    fn test_swedish_letters_sort_after_z() {
        let collator = TitleCollator::new("sv").unwrap();
        let sorted = collator.sort_films(vec![film(1, "Äppelkriget"), film(2, "Zelig")]);
        assert_eq!(titles(&sorted), ["Zelig", "Äppelkriget"]);
    }

    #[test]
    fn test_equal_titles_keep_input_order() {
        let collator = TitleCollator::new("en").unwrap();
        let sorted = collator.sort_films(vec![
            film(1, "Solaris"),
            film(2, "Alphaville"),
            film(3, "Solaris"),
        ]);
        let ids: Vec<_> = sorted.iter().map(|f| f.id.to_string()).collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }

    #[test]
    fn test_invalid_locale_is_config_error() {
        assert!(matches!(
            TitleCollator::new("not a locale!"),
            Err(DomainError::Config(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_sorting_is_idempotent(raw in prop::collection::vec("[a-zA-Zåäöé ]{0,8}", 0..12)) {
            let collator = TitleCollator::new("en").unwrap();
            let films: Vec<Film> = raw
                .iter()
                .enumerate()
                .map(|(i, t)| film(i as i64, t))
                .collect();
            let once = collator.sort_films(films);
            let twice = collator.sort_films(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}

//! Loading spinner shown while a listings request is outstanding.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn fetch_spinner(username: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.red} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["◐", "◓", "◑", "◒", "●"]);
    pb.set_style(style);
    pb.set_message(format!("Finding screenings for {}…", username));
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

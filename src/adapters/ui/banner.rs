//! Marquee banner (LE CINEMA) with a red-to-gold gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Curtain red (#770000).
const CURTAIN_RED: (u8, u8, u8) = (0x77, 0x00, 0x00);
/// Marquee gold (#f5c542).
const MARQUEE_GOLD: (u8, u8, u8) = (0xf5, 0xc5, 0x42);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints "LE CINEMA" in the standard figlet font, one gradient step per line,
/// followed by the version. Falls back to plain text if the font fails to load.
pub fn print_welcome() {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("LE CINEMA").map(|f| f.to_string()))
        .unwrap_or_else(|| "LE CINEMA\n".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(CURTAIN_RED, MARQUEE_GOLD, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: MARQUEE_GOLD.0,
        g: MARQUEE_GOLD.1,
        b: MARQUEE_GOLD.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(CURTAIN_RED, MARQUEE_GOLD, 0.0), CURTAIN_RED);
        assert_eq!(lerp_rgb(CURTAIN_RED, MARQUEE_GOLD, 1.0), MARQUEE_GOLD);
    }
}

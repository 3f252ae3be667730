use crate::config::{ChromeConfig, NavbarStyle};

/// Navbar style for the current scroll offset. Strictly past the threshold
/// counts as scrolled.
pub fn navbar_style(config: &ChromeConfig, scroll_y: f64) -> &NavbarStyle {
    if scroll_y > config.navbar_threshold_px {
        &config.navbar_scrolled
    } else {
        &config.navbar_resting
    }
}

/// Hero `transform` value for the current scroll offset.
pub fn parallax_transform(config: &ChromeConfig, scroll_y: f64) -> String {
    translate_y(scroll_y * config.parallax_rate)
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", css_number(px))
}

/// CSS-friendly number: at most two decimals, no trailing zeros, no `-0`.
///
/// Goes through integer formatting so no float `Display` runs on wasm.
pub fn css_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let scaled = (v * 100.0).round();
    if scaled.abs() > (i64::MAX as f64) {
        return "0".to_string();
    }
    let scaled = scaled as i64;
    if scaled == 0 {
        return "0".to_string();
    }

    let abs = scaled.unsigned_abs();
    let mut out = String::new();
    if scaled < 0 {
        out.push('-');
    }
    out.push_str(&(abs / 100).to_string());
    let frac = abs % 100;
    if frac != 0 {
        out.push('.');
        if frac % 10 == 0 {
            out.push_str(&(frac / 10).to_string());
        } else {
            out.push_str(&format!("{frac:02}"));
        }
    }
    out
}

/// Style property carrying a card's fade-in stagger. Must not be a transition
/// property: card press feedback transitions `transform`.
pub const STAGGER_PROPERTY: &str = "animation-delay";

/// Milliseconds as a CSS time value (`animation-delay`).
pub fn css_millis(ms: u32) -> String {
    format!("{ms}ms")
}

/// The element selector an in-page anchor points at.
///
/// `None` for non-fragment hrefs and for a bare `#`, which selects nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Reveals a string one character at a time.
///
/// Each `next()` yields the next longer prefix; the last item is the full text.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    end: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.end >= self.text.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let c = self.text[self.end..].chars().next()?;
        self.end += c.len_utf8();
        Some(self.text[..self.end].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_switches_strictly_past_threshold() {
        let cfg = ChromeConfig::default();
        assert_eq!(navbar_style(&cfg, 0.0), &cfg.navbar_resting);
        assert_eq!(navbar_style(&cfg, 50.0), &cfg.navbar_resting);
        assert_eq!(navbar_style(&cfg, 50.5), &cfg.navbar_scrolled);
        assert_eq!(
            navbar_style(&cfg, 400.0).background,
            "rgba(255, 255, 255, 0.98)"
        );
    }

    #[test]
    fn parallax_moves_hero_up_at_half_speed() {
        let cfg = ChromeConfig::default();
        assert_eq!(parallax_transform(&cfg, 0.0), "translateY(0px)");
        assert_eq!(parallax_transform(&cfg, 120.0), "translateY(-60px)");
        assert_eq!(parallax_transform(&cfg, 33.0), "translateY(-16.5px)");
    }

    #[test]
    fn css_number_formatting() {
        assert_eq!(css_number(-2.0), "-2");
        assert_eq!(css_number(0.98), "0.98");
        assert_eq!(css_number(1.05), "1.05");
        assert_eq!(css_number(-0.001), "0");
        assert_eq!(css_number(f64::NAN), "0");
        assert_eq!(css_millis(300), "300ms");
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#apps"), Some("#apps"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn typewriter_yields_growing_prefixes() {
        let frames: Vec<String> = Typewriter::new("Hi é").collect();
        assert_eq!(frames, ["H", "Hi", "Hi ", "Hi é"]);

        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.next(), None);
    }
}

//! Display and text helpers for counters and scraped post text.

use std::sync::LazyLock;

use regex::Regex;

static SLASH_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\/]+").expect("valid slash regex"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static AUTHOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(@\w+)\s+·").expect("valid author regex"));

/// Render a counter the way the dashboard cards do: `2.8M`, `34.9K`, `999`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_compact(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Parse an abbreviated counter such as `"1,204"`, `"12.5K"`, or `"3M"`.
///
/// Suffixes are case-insensitive. Returns `None` for anything that is not a
/// non-negative count.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn parse_abbreviated(s: &str) -> Option<u64> {
    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();

    let last = cleaned.chars().last()?;
    let (number, multiplier) = match last.to_ascii_uppercase() {
        'K' => (&cleaned[..cleaned.len() - 1], 1_000.0),
        'M' => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        c if c.is_ascii_digit() => (cleaned, 1.0),
        _ => return None,
    };

    let value = number.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * multiplier).clamp(0.0, u64::MAX as f64) as u64)
}

/// Collapse control whitespace, slash runs, and repeated spaces into single
/// spaces, then trim.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let text = SLASH_RUNS.replace_all(text, " ");
    WHITESPACE_RUNS.replace_all(&text, " ").trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetAuthor {
    pub display_name: String,
    pub handle: String,
}

/// Recover the author from scraped tweet text shaped `Display Name @handle · ...`.
#[must_use]
pub fn extract_author(text: &str) -> Option<TweetAuthor> {
    let caps = AUTHOR_PREFIX.captures(text)?;
    Some(TweetAuthor {
        display_name: caps.get(1)?.as_str().trim().to_string(),
        handle: caps.get(2)?.as_str().trim().to_string(),
    })
}

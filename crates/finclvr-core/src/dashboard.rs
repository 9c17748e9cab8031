//! Summary numbers shown at the top of the digest dashboard.
//!
//! Derivation is total: any payload, including partial or malformed JSON,
//! produces a [`DashboardMetrics`]. Missing or non-numeric counters count as 0.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::parse_abbreviated;
use crate::schema::{DigestContent, EngagementTrend};

/// Reported when neither list has any items.
pub const NO_TOP_NICHE: &str = "N/A";
/// Reported when the winning item carries no niche tag.
pub const UNTAGGED_NICHE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_videos: u64,
    pub total_tweets: u64,
    pub average_views: u64,
    pub top_performing_niche: String,
    pub engagement_trend: EngagementTrend,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            total_videos: 0,
            total_tweets: 0,
            average_views: 0,
            top_performing_niche: NO_TOP_NICHE.to_string(),
            engagement_trend: EngagementTrend::Stable,
        }
    }
}

/// One video or tweet reduced to what ranking needs.
#[derive(Debug, Clone, Copy)]
struct Ranked<'a> {
    views: u64,
    niche: Option<&'a str>,
}

impl DashboardMetrics {
    /// Derive metrics from a typed digest payload.
    #[must_use]
    pub fn from_content(content: &DigestContent) -> Self {
        let best_video = most_viewed(content.top_youtube_videos.iter().map(|v| Ranked {
            views: v.views,
            niche: v.niche.as_deref(),
        }));
        let best_tweet = most_viewed(content.trending_tweets.iter().map(|t| Ranked {
            views: t.views,
            niche: Some(t.niche.as_str()),
        }));

        Self {
            total_videos: content.top_youtube_videos.len() as u64,
            total_tweets: content.trending_tweets.len() as u64,
            average_views: content.performance_metrics.average_views,
            top_performing_niche: top_niche(best_video, best_tweet),
            engagement_trend: content.performance_metrics.engagement_trend,
        }
    }

    /// Derive metrics from an arbitrary JSON value shaped like a digest payload.
    ///
    /// Never fails: non-object input, absent lists, and unreadable counters all
    /// fall back to zero/`"N/A"`/`stable`.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let videos = array_at(value, "topYouTubeVideos");
        let tweets = array_at(value, "trendingTweets");

        let best_video = most_viewed(videos.iter().map(ranked_from_value));
        let best_tweet = most_viewed(tweets.iter().map(ranked_from_value));

        let performance = value.get("performanceMetrics");
        let average_views = performance
            .and_then(|p| p.get("youtube"))
            .and_then(|y| y.get("views"))
            .and_then(lenient_count)
            .or_else(|| {
                performance
                    .and_then(|p| p.get("averageViews"))
                    .and_then(lenient_count)
            })
            .unwrap_or(0);
        let engagement_trend = performance
            .and_then(|p| p.get("engagementTrend"))
            .and_then(Value::as_str)
            .and_then(EngagementTrend::parse)
            .unwrap_or_default();

        Self {
            total_videos: videos.len() as u64,
            total_tweets: tweets.len() as u64,
            average_views,
            top_performing_niche: top_niche(best_video, best_tweet),
            engagement_trend,
        }
    }
}

/// First item holding the strictly highest view count, in list order.
fn most_viewed<'a>(items: impl IntoIterator<Item = Ranked<'a>>) -> Option<Ranked<'a>> {
    items.into_iter().fold(None, |best, item| match best {
        Some(current) if item.views <= current.views => Some(current),
        _ => Some(item),
    })
}

/// Videos win ties against tweets.
fn top_niche(best_video: Option<Ranked<'_>>, best_tweet: Option<Ranked<'_>>) -> String {
    let winner = match (best_video, best_tweet) {
        (Some(video), Some(tweet)) => {
            if video.views >= tweet.views {
                video
            } else {
                tweet
            }
        }
        (Some(video), None) => video,
        (None, Some(tweet)) => tweet,
        (None, None) => return NO_TOP_NICHE.to_string(),
    };

    winner
        .niche
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNTAGGED_NICHE)
        .to_string()
}

fn array_at<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn ranked_from_value(item: &Value) -> Ranked<'_> {
    Ranked {
        views: item.get("views").and_then(lenient_count).unwrap_or(0),
        niche: item.get("niche").and_then(Value::as_str),
    }
}

/// Read a non-negative counter from a JSON number or numeric string.
///
/// Strings may be abbreviated the way scraped counters are (`"12.5K"`,
/// `"1,204"`). Negative values clamp to 0; fractional values truncate.
/// Returns `None` for anything that is not a finite number.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn lenient_count(value: &Value) -> Option<u64> {
    let as_float = match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return Some(u);
            }
            // as_u64 failed, so an integer here is negative
            if n.is_i64() {
                return Some(0);
            }
            n.as_f64()?
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(u) = s.parse::<u64>() {
                return Some(u);
            }
            match s.parse::<f64>() {
                Ok(f) => f,
                Err(_) => return parse_abbreviated(s),
            }
        }
        _ => return None,
    };

    if !as_float.is_finite() {
        return None;
    }
    Some(as_float.clamp(0.0, u64::MAX as f64) as u64)
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

//! Entity and payload shapes shared by the store, the HTTP API, and the CLI.
//!
//! Wire format is camelCase to match what the dashboard client sends and reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Opaque credential. Never written to responses.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub niche: String,
    pub tone: String,
    pub color_preferences: Option<Vec<String>>,
    pub audience_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Digest {
    pub id: i64,
    pub brand_id: i64,
    pub title: String,
    pub content: DigestContent,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// Per-digest counters captured once when the digest is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestMetric {
    pub id: i64,
    pub digest_id: i64,
    pub total_mentions: i64,
    pub rising_creators: i64,
    pub viral_posts: i64,
    pub positive_sentiment: i64,
    pub neutral_sentiment: i64,
    pub negative_sentiment: i64,
}

// ---------------------------------------------------------------------------
// Insert shapes (entity minus server-assigned fields)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    pub user_id: i64,
    pub name: String,
    pub niche: String,
    pub tone: String,
    #[serde(default)]
    pub color_preferences: Option<Vec<String>>,
    #[serde(default)]
    pub audience_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDigest {
    pub brand_id: i64,
    pub title: String,
    pub content: DigestContent,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewDigestMetric {
    pub digest_id: i64,
    pub total_mentions: i64,
    pub rising_creators: i64,
    pub viral_posts: i64,
    pub positive_sentiment: i64,
    pub neutral_sentiment: i64,
    pub negative_sentiment: i64,
}

// ---------------------------------------------------------------------------
// Digest payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestContent {
    pub summary: String,
    #[serde(rename = "topYouTubeVideos")]
    pub top_youtube_videos: Vec<YouTubeVideo>,
    pub trending_tweets: Vec<TwitterPost>,
    pub audience_sentiment: SentimentAnalysis,
    pub key_insights: Vec<String>,
    pub performance_metrics: PerformanceMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeVideo {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub views: u64,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Value>,
    pub comments_disabled: bool,
    pub is_short: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterPost {
    pub id: i64,
    pub text: String,
    pub date: String,
    pub replies: u64,
    pub retweets: u64,
    pub likes: u64,
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_replies: Option<String>,
    pub niche: String,
}

/// Audience sentiment breakdown. The three shares are independent values and
/// are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub total_engagement: u64,
    pub top_positive_comments: Vec<String>,
    pub top_concerns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub total_videos: u64,
    pub total_tweets: u64,
    pub average_views: u64,
    pub top_performing_niche: String,
    pub engagement_trend: EngagementTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementTrend {
    Up,
    Down,
    #[default]
    Stable,
}

impl EngagementTrend {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EngagementTrend::Up => "up",
            EngagementTrend::Down => "down",
            EngagementTrend::Stable => "stable",
        }
    }

    /// Parse the wire spelling, returning `None` for anything unrecognised.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "up" => Some(EngagementTrend::Up),
            "down" => Some(EngagementTrend::Down),
            "stable" => Some(EngagementTrend::Stable),
            _ => None,
        }
    }
}

impl std::fmt::Display for EngagementTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

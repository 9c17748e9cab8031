//! Deterministic sample digest used until real platform collection exists.

use crate::schema::{
    DigestContent, EngagementTrend, PerformanceMetrics, SentimentAnalysis, TwitterPost,
    YouTubeVideo,
};

/// Niche assumed when the caller supplies none.
pub const DEFAULT_NICHE: &str = "finance";

/// Build the sample digest for `niche`.
///
/// Blank input falls back to [`DEFAULT_NICHE`]. The niche only shapes the
/// summary wording; the sampled videos, tweets, sentiment, and insights are the
/// same fixed set for every niche.
#[must_use]
pub fn generate_mock_digest(niche: &str) -> DigestContent {
    let niche = resolve_niche(niche);

    DigestContent {
        summary: format!(
            "Comprehensive analysis of {} content performance from the past 48 hours, \
             featuring top YouTube videos, trending Twitter discussions, and audience \
             sentiment insights.",
            niche_subject(niche)
        ),
        top_youtube_videos: sample_videos(),
        trending_tweets: sample_tweets(),
        audience_sentiment: sample_sentiment(),
        key_insights: [
            "Investment-focused content drives 3x higher engagement than general finance topics",
            "Video content under 10 minutes performs 40% better than longer formats",
            "Personal success stories generate the most positive audience responses",
            "Cryptocurrency content sees highest volatility in engagement",
            "Educational threads consistently outperform promotional content",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
        performance_metrics: PerformanceMetrics {
            total_videos: 156,
            total_tweets: 2_847,
            average_views: 1_453_726,
            top_performing_niche: "investment".to_string(),
            engagement_trend: EngagementTrend::Up,
        },
    }
}

/// Trim the requested niche, substituting [`DEFAULT_NICHE`] when blank.
#[must_use]
pub fn resolve_niche(niche: &str) -> &str {
    let trimmed = niche.trim();
    if trimmed.is_empty() {
        DEFAULT_NICHE
    } else {
        trimmed
    }
}

/// Adjective used in the summary sentence for the dashboard's built-in niches.
fn niche_subject(niche: &str) -> &str {
    match niche.to_ascii_lowercase().as_str() {
        "finance" => "financial",
        "tech" => "technology",
        "lifestyle" => "lifestyle",
        "crypto" => "cryptocurrency",
        _ => niche,
    }
}

fn video(
    id: i64,
    title: &str,
    url: &str,
    views: u64,
    date: &str,
    is_short: bool,
    niche: &str,
) -> YouTubeVideo {
    YouTubeVideo {
        id,
        title: title.to_string(),
        url: url.to_string(),
        views,
        date: date.to_string(),
        comments: None,
        comments_disabled: false,
        is_short,
        niche: Some(niche.to_string()),
    }
}

fn sample_videos() -> Vec<YouTubeVideo> {
    vec![
        video(
            1,
            "The Psychology of Money: Why We Make Bad Financial Decisions",
            "https://www.youtube.com/watch?v=4qZ3EKp2H5I",
            2_847_693,
            "2024-01-15",
            false,
            "finance",
        ),
        video(
            2,
            "How I Built $1M Portfolio by Age 30 (Step by Step)",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            1_934_821,
            "2024-01-14",
            false,
            "investment",
        ),
        video(
            3,
            "Crypto in 2024: What Nobody Tells You",
            "https://www.youtube.com/watch?v=abc123def456",
            1_256_743,
            "2024-01-13",
            true,
            "cryptocurrency",
        ),
        video(
            4,
            "Budget Like a Millionaire: The 50/30/20 Rule Explained",
            "https://www.youtube.com/watch?v=xyz789uvw012",
            987_654,
            "2024-01-12",
            false,
            "budgeting",
        ),
        video(
            5,
            "Emergency Fund vs Investing: What's More Important?",
            "https://www.youtube.com/watch?v=def456ghi789",
            743_291,
            "2024-01-11",
            false,
            "personal-finance",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn tweet(
    id: i64,
    text: &str,
    date: &str,
    replies: u64,
    retweets: u64,
    likes: u64,
    views: u64,
    top_replies: &str,
    niche: &str,
) -> TwitterPost {
    TwitterPost {
        id,
        text: text.to_string(),
        date: date.to_string(),
        replies,
        retweets,
        likes,
        views,
        top_replies: Some(top_replies.to_string()),
        niche: niche.to_string(),
    }
}

fn sample_tweets() -> Vec<TwitterPost> {
    vec![
        tweet(
            1,
            "🧵 THREAD: I analyzed 100+ millionaire portfolios. Here are the 5 patterns I found that 99% of people ignore:",
            "2024-01-15",
            2_847,
            12_456,
            34_892,
            892_456,
            "This is exactly what I needed to hear right now. Thanks for sharing!",
            "investment",
        ),
        tweet(
            2,
            "Your salary is not your wealth. Your savings rate is. Your investments are. Your financial literacy is. Stop focusing on the wrong metrics.",
            "2024-01-14",
            1_293,
            8_934,
            23_847,
            567_834,
            "This hit different. Time to focus on what actually matters.",
            "personal-finance",
        ),
        tweet(
            3,
            "Bitcoin just hit $47K and everyone's asking if it's too late to buy. Remember: You're not late, you're early to the next cycle. 📈",
            "2024-01-13",
            3_847,
            15_672,
            41_923,
            1_234_567,
            "Been DCA'ing since $20K and this gives me confidence to keep going.",
            "cryptocurrency",
        ),
        tweet(
            4,
            "Daily reminder: The stock market is a voting machine in the short run, but a weighing machine in the long run. - Benjamin Graham",
            "2024-01-12",
            567,
            4_321,
            18_945,
            287_456,
            "Classic wisdom that never gets old. Thank you for the reminder.",
            "investment",
        ),
        tweet(
            5,
            "If you're struggling with money, start here: 1. Track every expense for 30 days 2. Cut the bottom 20% 3. Automate savings 4. Invest the rest Simple but not easy.",
            "2024-01-11",
            1_847,
            7_865,
            28_473,
            456_789,
            "Step 1 was eye-opening for me. I had no idea where my money was going.",
            "budgeting",
        ),
    ]
}

fn sample_sentiment() -> SentimentAnalysis {
    SentimentAnalysis {
        positive: 78,
        neutral: 18,
        negative: 4,
        total_engagement: 2_847_692,
        top_positive_comments: [
            "This changed my entire perspective on investing!",
            "Finally someone explains this in simple terms",
            "Started implementing this strategy and already seeing results",
            "Best financial advice I've received all year",
            "This should be taught in schools",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
        top_concerns: [
            "Market volatility is making me nervous",
            "Not sure if this strategy works for low income",
            "Worried about inflation eating my savings",
            "Tax implications are confusing",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
    }
}

//! Counters stored alongside a generated digest.

use std::collections::HashSet;

use crate::format::{clean_text, extract_author};
use crate::schema::{DigestContent, NewDigestMetric};

/// Views above which a video or tweet counts as viral.
pub const VIRAL_VIEW_THRESHOLD: u64 = 100_000;

/// Compute the metrics row for `digest_id` from its generated content.
///
/// Called once at generation time; the result is never recomputed.
#[must_use]
pub fn derive_digest_metrics(digest_id: i64, content: &DigestContent) -> NewDigestMetric {
    let sentiment = &content.audience_sentiment;
    let positive = i64::from(sentiment.positive);
    let neutral = i64::from(sentiment.neutral);
    let negative = i64::from(sentiment.negative);

    let viral_videos = content
        .top_youtube_videos
        .iter()
        .filter(|v| v.views > VIRAL_VIEW_THRESHOLD)
        .count();
    let viral_tweets = content
        .trending_tweets
        .iter()
        .filter(|t| t.views > VIRAL_VIEW_THRESHOLD)
        .count();

    let rising_creators: HashSet<String> = content
        .trending_tweets
        .iter()
        .filter_map(|t| extract_author(&clean_text(&t.text)))
        .map(|author| author.handle.to_lowercase())
        .collect();

    NewDigestMetric {
        digest_id,
        total_mentions: positive + neutral + negative,
        rising_creators: count_as_i64(rising_creators.len()),
        viral_posts: count_as_i64(viral_videos + viral_tweets),
        positive_sentiment: positive,
        neutral_sentiment: neutral,
        negative_sentiment: negative,
    }
}

fn count_as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::generate_mock_digest;

    #[test]
    fn mock_digest_metrics() {
        let content = generate_mock_digest("finance");
        let metrics = derive_digest_metrics(7, &content);
        assert_eq!(metrics.digest_id, 7);
        assert_eq!(metrics.total_mentions, 100);
        assert_eq!(metrics.positive_sentiment, 78);
        assert_eq!(metrics.neutral_sentiment, 18);
        assert_eq!(metrics.negative_sentiment, 4);
        // every sampled video and tweet is above 100K views
        assert_eq!(metrics.viral_posts, 10);
        // sample tweets carry no author prefix
        assert_eq!(metrics.rising_creators, 0);
    }

    #[test]
    fn viral_threshold_is_exclusive() {
        let mut content = generate_mock_digest("finance");
        for video in &mut content.top_youtube_videos {
            video.views = VIRAL_VIEW_THRESHOLD;
        }
        for tweet in &mut content.trending_tweets {
            tweet.views = VIRAL_VIEW_THRESHOLD + 1;
        }
        assert_eq!(derive_digest_metrics(1, &content).viral_posts, 5);
    }

    #[test]
    fn rising_creators_counts_distinct_handles() {
        let mut content = generate_mock_digest("finance");
        content.trending_tweets[0].text = "Jane Doe @janedoe · 1h first".to_string();
        content.trending_tweets[1].text = "Jane D. @JaneDoe · 3h second".to_string();
        content.trending_tweets[2].text = "Max Money @maxmoney · 5h third".to_string();
        assert_eq!(derive_digest_metrics(1, &content).rising_creators, 2);
    }

    #[test]
    fn rising_creators_reads_authors_split_across_lines() {
        let mut content = generate_mock_digest("finance");
        content.trending_tweets[0].text = "  Jane\nDoe   @JaneDoe\n· 2h rates".to_string();
        content.trending_tweets[1].text = "Max Money\t@maxmoney · 5h budget".to_string();
        assert_eq!(derive_digest_metrics(1, &content).rising_creators, 2);
    }

    #[test]
    fn total_mentions_does_not_assume_percentages() {
        let mut content = generate_mock_digest("finance");
        content.audience_sentiment.positive = 90;
        content.audience_sentiment.neutral = 30;
        content.audience_sentiment.negative = 10;
        assert_eq!(derive_digest_metrics(1, &content).total_mentions, 130);
    }
}

//! Digest metric records (one per generated digest).

use finclvr_core::{DigestMetric, NewDigestMetric};

use crate::{MemStore, StoreError};

impl MemStore {
    /// Metrics recorded for `digest_id`, found by scanning.
    #[must_use]
    pub fn get_digest_metrics(&self, digest_id: i64) -> Option<DigestMetric> {
        self.tables
            .read()
            .digest_metrics
            .values()
            .find(|metric| metric.digest_id == digest_id)
            .cloned()
    }

    /// Insert a metrics row. The referenced digest is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdExhausted`] if no metric id is left.
    pub fn create_digest_metrics(&self, new: NewDigestMetric) -> Result<DigestMetric, StoreError> {
        let mut tables = self.tables.write();
        let id = tables.digest_metric_ids.advance()?;
        let metric = DigestMetric {
            id,
            digest_id: new.digest_id,
            total_mentions: new.total_mentions,
            rising_creators: new.rising_creators,
            viral_posts: new.viral_posts,
            positive_sentiment: new.positive_sentiment,
            neutral_sentiment: new.neutral_sentiment,
            negative_sentiment: new.negative_sentiment,
        };
        tables.digest_metrics.insert(id, metric.clone());
        Ok(metric)
    }
}

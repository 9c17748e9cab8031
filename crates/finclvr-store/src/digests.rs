//! Digest records, including the digest-plus-metrics write used by generation.

use chrono::Utc;
use finclvr_core::{Digest, DigestMetric, NewDigest, NewDigestMetric};

use crate::{MemStore, StoreError};

impl MemStore {
    #[must_use]
    pub fn get_digest(&self, id: i64) -> Option<Digest> {
        self.tables.read().digests.get(&id).cloned()
    }

    /// All digests for `brand_id` in creation order. Empty when there are none.
    #[must_use]
    pub fn get_digests_by_brand_id(&self, brand_id: i64) -> Vec<Digest> {
        self.tables
            .read()
            .digests
            .values()
            .filter(|digest| digest.brand_id == brand_id)
            .cloned()
            .collect()
    }

    /// Insert a digest. The owning brand is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdExhausted`] if no digest id is left.
    pub fn create_digest(&self, new: NewDigest) -> Result<Digest, StoreError> {
        let mut tables = self.tables.write();
        let id = tables.digest_ids.advance()?;
        let digest = build_digest(id, new);
        tables.digests.insert(id, digest.clone());
        Ok(digest)
    }

    /// Insert a digest and the metrics row derived from it in one step.
    ///
    /// Both ids are reserved before anything is written, so on error neither
    /// record exists and readers never see a digest without its metrics.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdExhausted`] if either id space is used up.
    pub fn create_generated_digest<F>(
        &self,
        new: NewDigest,
        derive: F,
    ) -> Result<(Digest, DigestMetric), StoreError>
    where
        F: FnOnce(&Digest) -> NewDigestMetric,
    {
        let mut tables = self.tables.write();
        tables.digest_ids.peek()?;
        tables.digest_metric_ids.peek()?;

        let digest_id = tables.digest_ids.advance()?;
        let metric_id = tables.digest_metric_ids.advance()?;

        let digest = build_digest(digest_id, new);
        let derived = derive(&digest);
        let metric = DigestMetric {
            id: metric_id,
            digest_id,
            total_mentions: derived.total_mentions,
            rising_creators: derived.rising_creators,
            viral_posts: derived.viral_posts,
            positive_sentiment: derived.positive_sentiment,
            neutral_sentiment: derived.neutral_sentiment,
            negative_sentiment: derived.negative_sentiment,
        };

        tables.digests.insert(digest_id, digest.clone());
        tables.digest_metrics.insert(metric_id, metric.clone());
        Ok((digest, metric))
    }
}

fn build_digest(id: i64, new: NewDigest) -> Digest {
    Digest {
        id,
        brand_id: new.brand_id,
        title: new.title,
        content: new.content,
        is_published: new.is_published,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use finclvr_core::{derive_digest_metrics, generate_mock_digest};

    use super::*;
    use crate::EntityKind;

    fn new_digest(brand_id: i64, title: &str) -> NewDigest {
        NewDigest {
            brand_id,
            title: title.to_string(),
            content: generate_mock_digest("finance"),
            is_published: false,
        }
    }

    #[test]
    fn digests_list_by_brand_in_creation_order() {
        let store = MemStore::new();
        store.create_digest(new_digest(1, "first")).unwrap();
        store.create_digest(new_digest(2, "other")).unwrap();
        store.create_digest(new_digest(1, "second")).unwrap();

        let titles: Vec<String> = store
            .get_digests_by_brand_id(1)
            .into_iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert!(store.get_digests_by_brand_id(99).is_empty());
    }

    #[test]
    fn generated_digest_links_metrics() {
        let store = MemStore::new();
        store.create_digest(new_digest(1, "manual")).unwrap();

        let (digest, metric) = store
            .create_generated_digest(new_digest(1, "generated"), |d| {
                derive_digest_metrics(d.id, &d.content)
            })
            .unwrap();

        assert_eq!(digest.id, 2);
        assert_eq!(metric.id, 1);
        assert_eq!(metric.digest_id, 2);
        assert_eq!(store.get_digest_metrics(2), Some(metric));
        assert!(store.get_digest_metrics(1).is_none());
    }

    #[test]
    fn metrics_digest_id_follows_the_stored_digest() {
        let store = MemStore::new();
        let (digest, metric) = store
            .create_generated_digest(new_digest(1, "generated"), |d| {
                // a derive callback that gets the id wrong is corrected
                derive_digest_metrics(d.id + 100, &d.content)
            })
            .unwrap();
        assert_eq!(metric.digest_id, digest.id);
    }

    #[test]
    fn generated_digest_is_all_or_nothing() {
        let store = MemStore::new();
        store.set_next_id(EntityKind::DigestMetric, i64::MAX);

        let result = store.create_generated_digest(new_digest(1, "generated"), |d| {
            derive_digest_metrics(d.id, &d.content)
        });

        assert_eq!(
            result,
            Err(StoreError::IdExhausted(EntityKind::DigestMetric))
        );
        assert_eq!(store.counts(), (0, 0, 0, 0));
        // the digest counter was not consumed either
        assert_eq!(store.create_digest(new_digest(1, "next")).unwrap().id, 1);
    }
}

//! Process-lifetime storage for users, brands, digests, and digest metrics.
//!
//! Everything lives behind one [`RwLock`] so identifier assignment and insertion
//! happen atomically with respect to concurrent requests. State is discarded
//! when the process exits.

use std::collections::BTreeMap;

use finclvr_core::{Brand, Digest, DigestMetric, User};
use parking_lot::RwLock;
use thiserror::Error;

pub mod brands;
pub mod digest_metrics;
pub mod digests;
pub mod seed;
pub mod users;

pub use seed::{seed_demo_user, DEMO_USER_EMAIL, DEMO_USERNAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Brand,
    Digest,
    DigestMetric,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Brand => write!(f, "brand"),
            EntityKind::Digest => write!(f, "digest"),
            EntityKind::DigestMetric => write!(f, "digest metric"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} identifier space exhausted")]
    IdExhausted(EntityKind),
}

/// Monotonic per-kind identifier source. The first id handed out is 1.
#[derive(Debug)]
struct IdCounter {
    kind: EntityKind,
    next: i64,
}

impl IdCounter {
    fn new(kind: EntityKind) -> Self {
        Self { kind, next: 1 }
    }

    /// Id the next successful [`IdCounter::advance`] will return.
    fn peek(&self) -> Result<i64, StoreError> {
        if self.next == i64::MAX {
            return Err(StoreError::IdExhausted(self.kind));
        }
        Ok(self.next)
    }

    fn advance(&mut self) -> Result<i64, StoreError> {
        let id = self.peek()?;
        self.next = id + 1;
        Ok(id)
    }
}

/// Entity maps keyed by id; `BTreeMap` keeps scans in creation order.
#[derive(Debug)]
struct Tables {
    users: BTreeMap<i64, User>,
    brands: BTreeMap<i64, Brand>,
    digests: BTreeMap<i64, Digest>,
    digest_metrics: BTreeMap<i64, DigestMetric>,
    user_ids: IdCounter,
    brand_ids: IdCounter,
    digest_ids: IdCounter,
    digest_metric_ids: IdCounter,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            brands: BTreeMap::new(),
            digests: BTreeMap::new(),
            digest_metrics: BTreeMap::new(),
            user_ids: IdCounter::new(EntityKind::User),
            brand_ids: IdCounter::new(EntityKind::Brand),
            digest_ids: IdCounter::new(EntityKind::Digest),
            digest_metric_ids: IdCounter::new(EntityKind::DigestMetric),
        }
    }
}

/// In-memory store. Construct one at startup and share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemStore {
    tables: RwLock<Tables>,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records per kind, in `(users, brands, digests, metrics)` order.
    #[cfg(test)]
    pub(crate) fn counts(&self) -> (usize, usize, usize, usize) {
        let tables = self.tables.read();
        (
            tables.users.len(),
            tables.brands.len(),
            tables.digests.len(),
            tables.digest_metrics.len(),
        )
    }

    #[cfg(test)]
    pub(crate) fn set_next_id(&self, kind: EntityKind, next: i64) {
        let mut tables = self.tables.write();
        let counter = match kind {
            EntityKind::User => &mut tables.user_ids,
            EntityKind::Brand => &mut tables.brand_ids,
            EntityKind::Digest => &mut tables.digest_ids,
            EntityKind::DigestMetric => &mut tables.digest_metric_ids,
        };
        counter.next = next;
    }
}

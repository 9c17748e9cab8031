//! Shared types and pure logic for the Finclvr social digest service.
//!
//! Holds the schema (entities and digest payloads), the mock digest generator,
//! dashboard and stored-metrics derivation, display helpers, and environment
//! configuration. Nothing here performs I/O beyond reading env vars.

pub mod app_config;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod metrics;
pub mod mock;
pub mod schema;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use dashboard::DashboardMetrics;
pub use metrics::derive_digest_metrics;
pub use mock::{generate_mock_digest, DEFAULT_NICHE};
pub use schema::{
    Brand, Digest, DigestContent, DigestMetric, EngagementTrend, NewBrand, NewDigest,
    NewDigestMetric, NewUser, PerformanceMetrics, SentimentAnalysis, TwitterPost, User,
    YouTubeVideo,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

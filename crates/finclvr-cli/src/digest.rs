//! `generate` and `dashboard` subcommands.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use finclvr_core::{format::format_compact, generate_mock_digest, DashboardMetrics};

/// Serialize the sample digest for `niche`.
pub(crate) fn render_generated(niche: &str, pretty: bool) -> anyhow::Result<String> {
    let content = generate_mock_digest(niche);
    let json = if pretty {
        serde_json::to_string_pretty(&content)?
    } else {
        serde_json::to_string(&content)?
    };
    Ok(json)
}

pub(crate) fn run_generate(
    niche: &str,
    pretty: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let json = render_generated(niche, pretty)?;
    if let Some(path) = output {
        std::fs::write(path, json)
            .with_context(|| format!("failed to write digest to {}", path.display()))?;
        tracing::info!(path = %path.display(), niche, "wrote sample digest");
    } else {
        println!("{json}");
    }
    Ok(())
}

/// Parse `raw` as JSON and derive dashboard metrics.
///
/// Only the JSON syntax must be valid; any shape is accepted.
pub(crate) fn dashboard_from_str(raw: &str) -> anyhow::Result<DashboardMetrics> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("digest payload is not valid JSON")?;
    Ok(DashboardMetrics::from_value(&value))
}

/// One line per metric, numbers shortened with `K`/`M` suffixes.
pub(crate) fn render_dashboard_text(metrics: &DashboardMetrics) -> String {
    format!(
        "Videos: {}\nTweets: {}\nAverage views: {}\nTop niche: {}\nTrend: {}",
        format_compact(metrics.total_videos),
        format_compact(metrics.total_tweets),
        format_compact(metrics.average_views),
        metrics.top_performing_niche,
        metrics.engagement_trend,
    )
}

pub(crate) fn run_dashboard(file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let raw = if let Some(path) = file {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    };

    let metrics = dashboard_from_str(&raw)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        println!("{}", render_dashboard_text(&metrics));
    }
    Ok(())
}

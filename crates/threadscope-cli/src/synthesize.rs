//! Handler for `synthesize`: filter analyses, enforce the minimum count, report.

use std::path::Path;

use anyhow::Context;
use threadscope_core::{Analysis, TrendReport};
use threadscope_engine::synthesize_trends;

/// Analyses scoring at least `min_relevance`, in input order.
pub(crate) fn filter_relevant(analyses: Vec<Analysis>, min_relevance: f64) -> Vec<Analysis> {
    analyses
        .into_iter()
        .filter(|a| a.relevance_score >= min_relevance)
        .collect()
}

pub(crate) fn synthesize_filtered(
    query: &str,
    analyses: Vec<Analysis>,
    min_relevance: f64,
    min_posts: usize,
) -> anyhow::Result<TrendReport> {
    if !(0.0..=100.0).contains(&min_relevance) {
        anyhow::bail!("min relevance must be within 0..=100, got {min_relevance}");
    }

    let total = analyses.len();
    let relevant = filter_relevant(analyses, min_relevance);
    if relevant.len() < min_posts {
        anyhow::bail!(
            "insufficient data: {} of {total} analyses score {min_relevance} or more, need {min_posts}",
            relevant.len()
        );
    }

    Ok(synthesize_trends(query, &relevant))
}

pub(crate) fn run_synthesize(
    analyses_path: &Path,
    query: &str,
    min_relevance: f64,
    min_posts: usize,
) -> anyhow::Result<TrendReport> {
    tracing::info!(path = %analyses_path.display(), "reading analyses");
    let json = std::fs::read_to_string(analyses_path)
        .with_context(|| format!("failed to read {}", analyses_path.display()))?;
    let analyses: Vec<Analysis> =
        serde_json::from_str(&json).context("analyses file must hold a JSON array of analyses")?;

    let report = synthesize_filtered(query, analyses, min_relevance, min_posts)?;
    tracing::info!(
        query,
        posts = report.posts_analyzed,
        trends = report.key_trends.len(),
        "trend report ready"
    );
    Ok(report)
}

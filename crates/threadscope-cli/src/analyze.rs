//! Handlers for `analyze`, `themes` and `profile`.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use threadscope_core::{Analysis, AppConfig, Post, Theme};
use threadscope_engine::{Engine, Vocabulary};

/// One row of the `themes` output.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct ThemeRow<'a> {
    theme: Theme,
    weight: f64,
    description: &'a str,
    keywords: &'a [String],
}

/// Build the engine from `--vocabulary`, falling back to the configured path.
pub(crate) fn load_engine(vocabulary: Option<&Path>, config: &AppConfig) -> anyhow::Result<Engine> {
    let path = vocabulary.or(config.vocabulary_path.as_deref());
    if let Some(path) = path {
        tracing::info!(path = %path.display(), "loading vocabulary");
    }
    Engine::from_vocabulary_path(path).context("failed to load vocabulary")
}

/// Inline text or file contents; blank input counts as no description.
pub(crate) fn read_description(
    inline: Option<String>,
    file: Option<&Path>,
) -> anyhow::Result<Option<String>> {
    let raw = match (inline, file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => {
            tracing::info!(path = %path.display(), "reading company description");
            Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
            )
        }
        (None, None) => None,
    };

    Ok(raw
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty()))
}

pub(crate) fn parse_posts(json: &str) -> anyhow::Result<Vec<Post>> {
    serde_json::from_str(json).context("posts file must hold a JSON array of posts")
}

pub(crate) fn analyze_all(
    engine: &Engine,
    posts: &[Post],
    description: Option<&str>,
) -> Vec<Analysis> {
    posts
        .iter()
        .map(|post| engine.analyze(post, description))
        .collect()
}

pub(crate) fn run_analyze(
    engine: &Engine,
    posts_path: &Path,
    description: Option<&str>,
) -> anyhow::Result<Vec<Analysis>> {
    tracing::info!(path = %posts_path.display(), "reading posts");
    let json = std::fs::read_to_string(posts_path)
        .with_context(|| format!("failed to read {}", posts_path.display()))?;
    let posts = parse_posts(&json)?;

    let analyses = analyze_all(engine, &posts, description);
    tracing::info!(
        posts = posts.len(),
        with_description = description.is_some(),
        "analysis complete"
    );
    Ok(analyses)
}

pub(crate) fn theme_table(vocabulary: &Vocabulary) -> Vec<ThemeRow<'_>> {
    vocabulary
        .themes
        .iter()
        .map(|category| ThemeRow {
            theme: category.theme,
            weight: category.weight,
            description: &category.description,
            keywords: &category.keywords,
        })
        .collect()
}

use std::path::Path;

use threadscope_core::{Analysis, Post, TrendReport};

use crate::error::EngineError;
use crate::narrative::{self, NarrativeContext};
use crate::normalize::normalize_post_text;
use crate::profile::{extract_profile, CompanyProfile};
use crate::scorer::{company_boost, engagement_multiplier, relevance_score};
use crate::themes::match_themes;
use crate::trends::synthesize_trends;
use crate::vocabulary::{load_vocabulary, Vocabulary};

/// Stateless analysis engine over one immutable [`Vocabulary`].
///
/// Safe to share across threads; every call is a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    vocabulary: Vocabulary,
}

impl Engine {
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Build from a YAML vocabulary file, or the built-in tables when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the file cannot be read, parsed or validated.
    pub fn from_vocabulary_path(path: Option<&Path>) -> Result<Self, EngineError> {
        let vocabulary = match path {
            Some(path) => load_vocabulary(path)?,
            None => Vocabulary::default(),
        };
        Ok(Self::new(vocabulary))
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn profile(&self, description: &str) -> CompanyProfile {
        extract_profile(description, &self.vocabulary)
    }

    /// Score one post and generate its narrative.
    ///
    /// A blank `company_description` is treated the same as `None`.
    #[must_use]
    pub fn analyze(&self, post: &Post, company_description: Option<&str>) -> Analysis {
        let description = company_description
            .map(str::trim)
            .filter(|d| !d.is_empty());
        let profile = description.map(|d| self.profile(d)).unwrap_or_default();

        let text = normalize_post_text(&post.title, &post.body);
        let themes = match_themes(&text, &self.vocabulary);
        let boost = company_boost(&profile, &themes, &text, &self.vocabulary);
        let multiplier = engagement_multiplier(post.upvotes, post.comments);
        let score = relevance_score(themes.subtotal, boost, multiplier);

        tracing::debug!(
            post_id = %post.id,
            subtotal = themes.subtotal,
            boost,
            multiplier,
            score,
            themes = themes.detected.len(),
            "post scored"
        );

        let ctx = NarrativeContext {
            post,
            themes: &themes,
            profile: &profile,
            has_description: description.is_some(),
        };

        Analysis {
            post_id: post.id.clone(),
            relevance_score: score,
            takeaways: narrative::takeaways(&ctx),
            suggested_response: narrative::suggested_response(&ctx),
            targeting_insights: narrative::targeting_insights(&ctx),
            detected_themes: themes.detected.clone(),
            theme_details: themes.details.clone(),
        }
    }

    /// Aggregate analyses the caller has already filtered by relevance.
    #[must_use]
    pub fn synthesize(&self, query: &str, analyses: &[Analysis]) -> TrendReport {
        let report = synthesize_trends(query, analyses);
        tracing::debug!(
            query,
            posts = report.posts_analyzed,
            trends = report.key_trends.len(),
            "trends synthesized"
        );
        report
    }
}

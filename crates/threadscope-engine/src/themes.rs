//! Weighted keyword-category matching over normalized post text.
//!
//! Matching is raw substring counting. Overlapping phrases ("aging" inside
//! "healthy aging") both count, so related keywords compound.

use std::collections::BTreeMap;

use threadscope_core::{Theme, ThemeDetail};

use crate::normalize::NormalizedText;
use crate::vocabulary::{ThemeCategory, Vocabulary};

/// Result of scanning one post against every theme category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeMatch {
    /// Sum of per-category contributions, each capped at twice the weight.
    pub subtotal: f64,
    /// Categories with a nonzero uncapped score, in table order.
    pub detected: Vec<Theme>,
    pub details: BTreeMap<Theme, ThemeDetail>,
}

impl ThemeMatch {
    #[must_use]
    pub fn is_detected(&self, theme: Theme) -> bool {
        self.detected.contains(&theme)
    }
}

#[must_use]
pub fn match_themes(text: &NormalizedText, vocabulary: &Vocabulary) -> ThemeMatch {
    let mut result = ThemeMatch::default();

    for category in &vocabulary.themes {
        let (category_score, matched_keywords) = score_category(text, category);
        result.subtotal += category_score.min(category.weight * 2.0);

        if category_score > 0.0 {
            result.detected.push(category.theme);
            result.details.insert(
                category.theme,
                ThemeDetail {
                    score: category_score,
                    matched_keywords,
                    description: category.description.clone(),
                },
            );
        }
    }

    result
}

/// Uncapped score for one category plus the keywords that contributed.
fn score_category(text: &NormalizedText, category: &ThemeCategory) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut matched = Vec::new();

    for keyword in &category.keywords {
        if !text.combined.contains(keyword.as_str()) {
            continue;
        }

        let title_hits = text.title.matches(keyword.as_str()).count();
        let body_hits = text.body.matches(keyword.as_str()).count();
        #[allow(clippy::cast_precision_loss)]
        let weighted_hits = (title_hits * 2 + body_hits) as f64;
        let keyword_score = weighted_hits * category.weight;

        if keyword_score > 0.0 {
            score += keyword_score;
            matched.push(keyword.clone());
        }
    }

    (score, matched)
}

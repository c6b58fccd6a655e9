//! Company profile extraction from a free-text description.

use std::collections::BTreeSet;

use serde::Serialize;
use threadscope_core::FocusArea;

use crate::vocabulary::Vocabulary;

/// Keywords beyond this many are never used for matching.
pub const MAX_PROFILE_KEYWORDS: usize = 20;

/// Tokens must be longer than this (in characters) to count as keywords.
const MIN_KEYWORD_CHARS: usize = 4;

/// Derived view of a company description. Never cached: the same post
/// may be scored against different descriptions over its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub focus_areas: BTreeSet<FocusArea>,
    /// Original order, duplicates kept, at most [`MAX_PROFILE_KEYWORDS`].
    pub keywords: Vec<String>,
}

impl CompanyProfile {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.focus_areas.is_empty() && self.keywords.is_empty()
    }
}

/// Extract focus areas and salient keywords from `description`.
#[must_use]
pub fn extract_profile(description: &str, vocabulary: &Vocabulary) -> CompanyProfile {
    let lowered = description.to_lowercase();

    let focus_areas = vocabulary
        .focus_areas
        .iter()
        .filter(|rule| {
            rule.indicators
                .iter()
                .any(|indicator| lowered.contains(indicator.as_str()))
        })
        .map(|rule| rule.focus_area)
        .collect();

    let keywords = lowered
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
        .filter(|token| !vocabulary.is_stop_word(token))
        .take(MAX_PROFILE_KEYWORDS)
        .map(str::to_string)
        .collect();

    CompanyProfile {
        focus_areas,
        keywords,
    }
}

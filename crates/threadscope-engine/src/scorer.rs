//! Relevance scoring: theme subtotal, company-alignment boost and engagement.

use crate::normalize::NormalizedText;
use crate::profile::{CompanyProfile, MAX_PROFILE_KEYWORDS};
use crate::themes::ThemeMatch;
use crate::vocabulary::Vocabulary;

/// Points per (focus area, supported theme, detected theme) alignment.
const ALIGNMENT_POINTS: f64 = 12.0;
/// Points per profile keyword found in the post.
const KEYWORD_POINTS: f64 = 2.0;
const KEYWORD_BOOST_CAP: f64 = 20.0;
const COMPANY_BOOST_CAP: f64 = 40.0;
const ENGAGEMENT_CAP: f64 = 1.5;
const MAX_SCORE: f64 = 100.0;

/// Boost for how well the post lines up with the company profile.
///
/// Every matching (focus area, theme) pair counts, so a profile with several
/// aligned focus areas earns more. Capped at 40.
#[must_use]
pub fn company_boost(
    profile: &CompanyProfile,
    themes: &ThemeMatch,
    text: &NormalizedText,
    vocabulary: &Vocabulary,
) -> f64 {
    let alignments = profile
        .focus_areas
        .iter()
        .flat_map(|&area| vocabulary.supported_themes(area))
        .filter(|&&theme| themes.is_detected(theme))
        .count();
    #[allow(clippy::cast_precision_loss)]
    let alignment_boost = alignments as f64 * ALIGNMENT_POINTS;

    let keyword_hits = profile
        .keywords
        .iter()
        .take(MAX_PROFILE_KEYWORDS)
        .filter(|keyword| text.combined.contains(keyword.as_str()))
        .count();
    #[allow(clippy::cast_precision_loss)]
    let keyword_boost = (keyword_hits as f64 * KEYWORD_POINTS).min(KEYWORD_BOOST_CAP);

    (alignment_boost + keyword_boost).min(COMPANY_BOOST_CAP)
}

/// `min(1.5, 1 + upvotes/1000 + comments/100)`; never below 1.0.
#[must_use]
pub fn engagement_multiplier(upvotes: u64, comments: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let raw = 1.0 + upvotes as f64 / 1000.0 + comments as f64 / 100.0;
    raw.min(ENGAGEMENT_CAP)
}

/// Combine the pieces into a score in `[0, 100]`, rounded to one decimal.
#[must_use]
pub fn relevance_score(theme_subtotal: f64, company_boost: f64, multiplier: f64) -> f64 {
    let raw = ((theme_subtotal + company_boost) * multiplier).clamp(0.0, MAX_SCORE);
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_post_text;
    use crate::profile::extract_profile;
    use crate::themes::match_themes;

    fn boost_for(title: &str, description: &str) -> f64 {
        let vocabulary = Vocabulary::default();
        let text = normalize_post_text(title, "");
        let themes = match_themes(&text, &vocabulary);
        let profile = extract_profile(description, &vocabulary);
        company_boost(&profile, &themes, &text, &vocabulary)
    }

    #[test]
    fn multiplier_floor_is_one() {
        assert_eq!(engagement_multiplier(0, 0), 1.0);
    }

    #[test]
    fn multiplier_combines_upvotes_and_comments() {
        let m = engagement_multiplier(100, 10);
        assert!((m - 1.2).abs() < 1e-9, "got {m}");
    }

    #[test]
    fn multiplier_caps_at_one_and_a_half() {
        assert_eq!(engagement_multiplier(10_000, 0), 1.5);
        assert_eq!(engagement_multiplier(0, 5_000), 1.5);
        assert_eq!(engagement_multiplier(u64::MAX, u64::MAX), 1.5);
    }

    #[test]
    fn multiplier_is_monotonic() {
        let mut previous = 0.0;
        for upvotes in (0..2_000).step_by(50) {
            let m = engagement_multiplier(upvotes, upvotes / 10);
            assert!(m >= previous, "multiplier decreased at {upvotes}");
            previous = m;
        }
    }

    #[test]
    fn score_is_clamped_and_rounded() {
        assert_eq!(relevance_score(90.0, 40.0, 1.5), 100.0);
        assert_eq!(relevance_score(10.0, 0.0, 1.234), 12.3);
        assert_eq!(relevance_score(0.0, 0.0, 1.5), 0.0);
    }

    #[test]
    fn empty_description_gives_no_boost() {
        assert_eq!(boost_for("Wearable sensor study", ""), 0.0);
    }

    #[test]
    fn alignment_and_keyword_boosts_add_up() {
        // wearable_technology -> biometric_integration (12) + "wearable" keyword (2)
        assert_eq!(boost_for("Wearable sensor study", "We build wearable devices"), 14.0);
    }

    #[test]
    fn alignment_needs_detected_theme() {
        // Nothing in the title matches a theme or a profile keyword.
        assert_eq!(boost_for("Cooking tips", "We build wearable devices"), 0.0);
    }

    #[test]
    fn company_boost_is_capped() {
        let description = "AI machine learning personalized wearable sensor analytics \
                           longevity prevention screening chronic metabolic nutrition \
                           fitness sleep recovery stress clinical research";
        let boost = boost_for(
            "AI wearable predicts longevity, prevention and holistic systems",
            description,
        );
        assert_eq!(boost, 40.0);
    }
}

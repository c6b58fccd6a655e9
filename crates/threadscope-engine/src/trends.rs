//! Trend synthesis over a batch of analyses.
//!
//! Theme frequencies are counted per analysis (a post that detects a theme
//! counts once for it). Key trends fire when a theme's share of the batch is
//! strictly above its threshold.

use std::collections::BTreeMap;

use threadscope_core::{Analysis, Community, Theme, TrendReport};

pub const MAX_KEY_TRENDS: usize = 6;
pub const MAX_STRATEGIES: usize = 8;

/// Distinct themes before the report calls out integrated demand.
const META_TREND_MIN_THEMES: usize = 4;
/// Distinct themes before the platform positioning strategy is added.
const POSITIONING_MIN_THEMES: usize = 3;
/// Batch size at which the volume sentence is added.
const VOLUME_MIN_POSTS: usize = 10;

/// Percentage of analyses a theme must exceed to become a key trend.
fn trend_threshold(theme: Theme) -> f64 {
    match theme {
        Theme::AiPersonalization => 20.0,
        Theme::LongevityHealthspan | Theme::PreventiveMedicine => 30.0,
        Theme::BiometricIntegration => 25.0,
        Theme::TemporalPatterns => 35.0,
        Theme::HolisticSystems => 40.0,
    }
}

fn trend_sentence(theme: Theme, percent: f64) -> String {
    match theme {
        Theme::AiPersonalization => format!(
            "AI-driven personalization is a leading theme, appearing in {percent:.0}% of relevant posts."
        ),
        Theme::LongevityHealthspan => format!(
            "Healthspan framing shows up in {percent:.0}% of posts, signalling a shift from lifespan toward quality of life."
        ),
        Theme::BiometricIntegration => format!(
            "Wearable and biometric data integration features in {percent:.0}% of posts as users look for more value from devices they already own."
        ),
        Theme::TemporalPatterns => format!(
            "Longitudinal patterns and prediction come up in {percent:.0}% of posts, showing demand for insight over time."
        ),
        Theme::HolisticSystems => format!(
            "Whole-system thinking appears in {percent:.0}% of posts, with health discussed as interconnected rather than isolated metrics."
        ),
        Theme::PreventiveMedicine => format!(
            "Preventive care and early detection come up in {percent:.0}% of posts."
        ),
    }
}

fn community_insight(community: Community) -> &'static str {
    match community {
        Community::Longevity => {
            "Research-driven discussion of healthspan interventions; members reward cited evidence and are wary of hype."
        }
        Community::Biohackers => {
            "Early adopters running self-experiments and sharing protocols; receptive to tools that quantify results."
        }
        Community::Science => {
            "Evidence-first audience reacting to new studies; promotional content is poorly received."
        }
        Community::Futurology => {
            "Broad audience interested in where health technology is heading; big-picture narratives travel well."
        }
        Community::Artificial => {
            "Technical audience curious about applied AI, with recurring questions on privacy and model reliability."
        }
        Community::QuantifiedSelf => {
            "Dedicated trackers who care about data ownership, device accuracy and integrations across apps."
        }
    }
}

fn theme_strategy(theme: Theme) -> Option<&'static str> {
    let strategy = match theme {
        Theme::AiPersonalization => {
            "Lead content with concrete examples of AI personalization built on a user's own data."
        }
        Theme::LongevityHealthspan => {
            "Position the product around healthspan: more healthy years, not just more years."
        }
        Theme::BiometricIntegration => {
            "Promote integrations with popular wearables and show what combined data reveals."
        }
        Theme::TemporalPatterns => {
            "Publish longitudinal insights, such as lagged effects, that single-metric apps miss."
        }
        Theme::HolisticSystems | Theme::PreventiveMedicine => return None,
    };
    Some(strategy)
}

const COMMUNITY_STRATEGIES: [&str; 4] = [
    "Participate in r/longevity and r/Biohackers with evidence-backed, non-promotional contributions.",
    "Share anonymized aggregate findings in r/QuantifiedSelf to build credibility with data-literate users.",
    "Engage r/science and r/Futurology with commentary on new research rather than product announcements.",
    "Answer questions in r/artificial about how health models handle privacy and personalization.",
];

const POSITIONING_STRATEGY: &str = "Position the platform as an integrated health system that connects the themes users currently manage in separate tools.";

const CASE_STUDY_STRATEGY: &str =
    "Develop case studies with measurable outcomes for real users to support every channel above.";

/// Per-theme count of analyses that detected it, in theme order.
#[must_use]
pub fn theme_frequencies(analyses: &[Analysis]) -> BTreeMap<Theme, usize> {
    let mut counts: BTreeMap<Theme, usize> = Theme::ALL.into_iter().map(|t| (t, 0)).collect();
    for analysis in analyses {
        for theme in Theme::ALL {
            if analysis.detected_themes.contains(&theme) {
                *counts.entry(theme).or_default() += 1;
            }
        }
    }
    counts
}

/// Build a [`TrendReport`] for `query` from already-filtered analyses.
#[must_use]
pub fn synthesize_trends(query: &str, analyses: &[Analysis]) -> TrendReport {
    let total = analyses.len();
    let frequencies = theme_frequencies(analyses);
    let distinct = frequencies.values().filter(|&&count| count > 0).count();

    let mut key_trends = Vec::new();
    if total > 0 {
        for (&theme, &count) in &frequencies {
            #[allow(clippy::cast_precision_loss)]
            let percent = count as f64 / total as f64 * 100.0;
            if percent > trend_threshold(theme) {
                key_trends.push(trend_sentence(theme, percent));
            }
        }
    }
    if distinct >= META_TREND_MIN_THEMES {
        key_trends.push(format!(
            "Conversations span {distinct} distinct themes, pointing to demand for integrated platforms over single-purpose tools."
        ));
    }
    if total >= VOLUME_MIN_POSTS {
        key_trends.push(format!(
            "The query \"{query}\" surfaced {total} relevant posts, enough to treat these themes as sustained interest rather than noise."
        ));
    }
    key_trends.truncate(MAX_KEY_TRENDS);

    let community_insights = if total == 0 {
        BTreeMap::new()
    } else {
        Community::ALL
            .into_iter()
            .map(|c| (c.to_string(), community_insight(c).to_string()))
            .collect()
    };

    let mut suggested_strategies: Vec<String> = frequencies
        .iter()
        .filter(|&(theme, &count)| theme.is_primary() && count > 0)
        .filter_map(|(&theme, _)| theme_strategy(theme))
        .chain(COMMUNITY_STRATEGIES)
        .map(str::to_string)
        .collect();
    if distinct >= POSITIONING_MIN_THEMES {
        suggested_strategies.push(POSITIONING_STRATEGY.to_string());
    }
    suggested_strategies.push(CASE_STUDY_STRATEGY.to_string());
    suggested_strategies.truncate(MAX_STRATEGIES);

    TrendReport {
        query: query.to_string(),
        posts_analyzed: total,
        key_trends,
        community_insights,
        suggested_strategies,
    }
}

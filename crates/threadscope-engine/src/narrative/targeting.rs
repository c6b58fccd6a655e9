use threadscope_core::{Community, FocusArea, Theme};

use super::NarrativeContext;

fn audience(community: Option<Community>) -> &'static str {
    match community {
        Some(Community::Longevity) => {
            "r/longevity is a research-literate audience focused on healthspan interventions and evidence quality; lead with data and cite sources."
        }
        Some(Community::Biohackers) => {
            "r/Biohackers members are hands-on experimenters who value protocols and n=1 data; practical detail earns trust."
        }
        Some(Community::Science) => {
            "r/science is a skeptical, evidence-first audience that moderates promotion strictly; contribute analysis rather than product mentions."
        }
        Some(Community::Futurology) => {
            "r/Futurology is a broad, trend-oriented audience interested in where technology is heading; big-picture framing works well."
        }
        Some(Community::Artificial) => {
            "r/artificial is a technical audience interested in how AI systems work and where they fail; explain methods, not just outcomes."
        }
        Some(Community::QuantifiedSelf) => {
            "r/QuantifiedSelf members track their own metrics in depth and care about data export and device accuracy."
        }
        None => {
            "This community has a general audience; keep messaging accessible and lead with practical value."
        }
    }
}

fn theme_targeting(theme: Theme) -> &'static str {
    match theme {
        Theme::AiPersonalization => {
            "Target members interested in AI-driven personalization with examples of individualized recommendations."
        }
        Theme::LongevityHealthspan => {
            "Target healthspan-minded members with content on sustainable, evidence-based longevity habits."
        }
        Theme::BiometricIntegration => {
            "Target wearable owners with messaging about integrating and interpreting the device data they already have."
        }
        Theme::TemporalPatterns => {
            "Target data-driven members with longitudinal insights and trend visualizations."
        }
        Theme::HolisticSystems => {
            "Target systems thinkers with content on how sleep, nutrition, movement and stress interact."
        }
        Theme::PreventiveMedicine => {
            "Target prevention-focused members with early-detection and risk-reduction messaging."
        }
    }
}

fn reach(upvotes: u64) -> &'static str {
    if upvotes > 200 {
        "High-visibility post: engage promptly, as a thoughtful reply can reach a large audience."
    } else if upvotes > 50 {
        "Moderate visibility: a detailed, helpful reply can still stand out in the thread."
    } else {
        "Low visibility: a good place to build rapport with engaged members before larger threads."
    }
}

fn focus_guidance(area: FocusArea) -> &'static str {
    match area {
        FocusArea::AiTechnology => {
            "Highlight the AI behind your recommendations when the discussion invites technical depth."
        }
        FocusArea::Personalization => {
            "Emphasize how the product adapts to each user rather than offering one-size-fits-all advice."
        }
        FocusArea::WearableTechnology => {
            "Mention device compatibility, since members here often already own wearables."
        }
        FocusArea::DataAnalytics => {
            "Offer analytical perspective, such as trends or correlations, instead of promotional claims."
        }
        FocusArea::Longevity => "Frame your contribution around healthspan and long-term outcomes.",
        FocusArea::PreventiveCare => {
            "Lean on early-detection value: members respond to catching issues before symptoms."
        }
        FocusArea::ChronicDisease => {
            "Be supportive when chronic conditions come up and avoid anything that reads as medical advice."
        }
        FocusArea::Nutrition => {
            "Connect to nutrition where relevant, as diet questions draw consistent engagement."
        }
        FocusArea::Fitness => {
            "Tie insights back to training and movement that members can act on immediately."
        }
        FocusArea::SleepRecovery => {
            "Use sleep and recovery as an entry point; practical sleep insights are well received."
        }
        FocusArea::MentalWellness => {
            "Acknowledge the mental side of health, which metric-heavy threads often overlook."
        }
        FocusArea::ClinicalResearch => {
            "Reference clinical evidence to build credibility with skeptical readers."
        }
    }
}

/// Audience profile, per-theme targeting, reach and focus-area guidance,
/// joined into one paragraph.
#[must_use]
pub fn targeting_insights(ctx: &NarrativeContext<'_>) -> String {
    let mut parts: Vec<&str> = vec![audience(ctx.community())];
    parts.extend(ctx.themes.detected.iter().map(|&theme| theme_targeting(theme)));
    parts.push(reach(ctx.post.upvotes));

    if ctx.has_description {
        parts.extend(ctx.profile.focus_areas.iter().map(|&area| focus_guidance(area)));
    }

    parts.join(" ")
}

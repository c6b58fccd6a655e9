use threadscope_core::{FocusArea, Theme};

use super::NarrativeContext;

pub const MAX_TAKEAWAYS: usize = 6;

/// Themes needed before a post counts as multi-dimensional.
const MULTI_THEME_MIN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngagementTier {
    High,
    Moderate,
    Emerging,
}

impl EngagementTier {
    fn from_upvotes(upvotes: u64) -> Self {
        if upvotes > 100 {
            Self::High
        } else if upvotes > 20 {
            Self::Moderate
        } else {
            Self::Emerging
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Emerging => "Emerging",
        }
    }

    fn reading(self) -> &'static str {
        match self {
            Self::High => "the topic resonates strongly with this audience",
            Self::Moderate => "steady interest worth monitoring",
            Self::Emerging => "an early conversation that could still grow",
        }
    }
}

fn theme_takeaway(theme: Theme) -> &'static str {
    match theme {
        Theme::AiPersonalization => {
            "Users want AI that adapts recommendations to their own data rather than generic population advice."
        }
        Theme::LongevityHealthspan => {
            "The discussion frames health in terms of healthspan, adding healthy years rather than just lifespan."
        }
        Theme::BiometricIntegration => {
            "Participants already collect wearable and biometric data and want help turning it into decisions."
        }
        Theme::TemporalPatterns => {
            "Interest centers on how health metrics change over time and what those patterns predict."
        }
        Theme::HolisticSystems => {
            "Health is treated as an interconnected system where sleep, nutrition, movement and stress affect each other."
        }
        Theme::PreventiveMedicine => {
            "There is clear appetite for catching problems early instead of reacting once symptoms appear."
        }
    }
}

fn company_takeaway(area: FocusArea, theme: Theme) -> Option<&'static str> {
    let sentence = match (area, theme) {
        (FocusArea::AiTechnology, Theme::AiPersonalization) => {
            "Your AI capabilities map directly onto the personalization this thread is asking for."
        }
        (FocusArea::Personalization, Theme::AiPersonalization) => {
            "The demand for individualized guidance here matches your personalization focus."
        }
        (FocusArea::WearableTechnology, Theme::BiometricIntegration) => {
            "Your wearable integrations fit users who already own devices and want more from the data."
        }
        (FocusArea::DataAnalytics, Theme::TemporalPatterns) => {
            "Your analytics work can speak to the trend and pattern questions raised in this post."
        }
        (FocusArea::Longevity, Theme::LongevityHealthspan) => {
            "Your longevity focus aligns with the healthspan framing of this discussion."
        }
        (FocusArea::PreventiveCare, Theme::PreventiveMedicine) => {
            "Your preventive care positioning answers the early-detection interest in this thread."
        }
        (FocusArea::ChronicDisease, Theme::PreventiveMedicine) => {
            "Chronic disease risk is part of this conversation, which overlaps with your disease management focus."
        }
        (FocusArea::Nutrition, Theme::HolisticSystems) => {
            "Nutrition sits inside the whole-system view discussed here, which suits your nutrition offering."
        }
        (FocusArea::Fitness, Theme::BiometricIntegration) => {
            "Training data from wearables connects this post to your fitness focus."
        }
        (FocusArea::SleepRecovery, Theme::BiometricIntegration) => {
            "Sleep and recovery tracking is a natural entry point for your sleep features."
        }
        (FocusArea::MentalWellness, Theme::HolisticSystems) => {
            "The systems view here leaves room to bring in the mental wellness side of your platform."
        }
        (FocusArea::ClinicalResearch, Theme::LongevityHealthspan) => {
            "Your research grounding earns credibility with readers who weigh evidence on aging interventions."
        }
        _ => return None,
    };
    Some(sentence)
}

/// Key takeaways for one post, at most [`MAX_TAKEAWAYS`] in insertion order.
#[must_use]
pub fn takeaways(ctx: &NarrativeContext<'_>) -> Vec<String> {
    let detected = &ctx.themes.detected;
    let mut out: Vec<String> = detected
        .iter()
        .map(|&theme| theme_takeaway(theme).to_string())
        .collect();

    let tier = EngagementTier::from_upvotes(ctx.post.upvotes);
    out.push(format!(
        "{} engagement in {} ({} upvotes, {} comments) suggests {}.",
        tier.label(),
        ctx.community_display(),
        ctx.post.upvotes,
        ctx.post.comments,
        tier.reading()
    ));

    if ctx.has_description {
        for &area in &ctx.profile.focus_areas {
            for &theme in detected {
                if let Some(sentence) = company_takeaway(area, theme) {
                    out.push(sentence.to_string());
                }
            }
        }
    }

    if detected.len() >= MULTI_THEME_MIN {
        out.push(format!(
            "This multi-dimensional discussion spans {} themes, making it a strong candidate for in-depth engagement.",
            detected.len()
        ));
    } else {
        out.push(
            "This focused discussion offers a targeted opportunity to engage on a specific topic."
                .to_string(),
        );
    }

    out.truncate(MAX_TAKEAWAYS);
    out
}

use threadscope_core::{Community, FocusArea, Theme};

use super::NarrativeContext;

fn opening(community: Option<Community>) -> &'static str {
    match community {
        Some(Community::Longevity) => {
            "Great discussion on extending healthspan, this is the kind of question the longevity community does best."
        }
        Some(Community::Biohackers) => {
            "Love seeing self-experimentation shared with actual data behind it."
        }
        Some(Community::Science) => {
            "Interesting findings, and worth looking closely at what the data does and does not show."
        }
        Some(Community::Futurology) => {
            "This is a good look at where health technology is heading over the next decade."
        }
        Some(Community::Artificial) => {
            "A useful example of AI being applied to a problem that affects everyone."
        }
        Some(Community::QuantifiedSelf) => "Really appreciate the detail in how you're tracking this.",
        None => "Thanks for sharing this, it raises some useful points about health and wellbeing.",
    }
}

fn call_to_action(community: Option<Community>) -> &'static str {
    match community {
        Some(Community::Longevity) => {
            "Curious which interventions others here have found most sustainable long term?"
        }
        Some(Community::Biohackers) => {
            "Would love to hear what the rest of your stack looks like and how you measure results."
        }
        Some(Community::Science) => {
            "Does anyone know if there are follow-up studies with larger or longer cohorts?"
        }
        Some(Community::Futurology) => {
            "What do you think the biggest barrier to mainstream adoption will be?"
        }
        Some(Community::Artificial) => {
            "How do you think these models should handle privacy for personal health data?"
        }
        Some(Community::QuantifiedSelf) => {
            "Have you noticed any surprising correlations in your data so far?"
        }
        None => "Would be interested to hear how others here approach this.",
    }
}

/// Focus area that switches a theme's value proposition to its company variant.
fn variant_focus(theme: Theme) -> &'static [FocusArea] {
    match theme {
        Theme::AiPersonalization => &[FocusArea::AiTechnology, FocusArea::Personalization],
        Theme::LongevityHealthspan => &[FocusArea::Longevity],
        Theme::BiometricIntegration => &[FocusArea::WearableTechnology],
        Theme::TemporalPatterns => &[FocusArea::DataAnalytics],
        Theme::PreventiveMedicine => &[FocusArea::PreventiveCare],
        Theme::HolisticSystems => &[],
    }
}

fn value_proposition(theme: Theme, company_variant: bool) -> Option<&'static str> {
    let sentence = match (theme, company_variant) {
        (Theme::AiPersonalization, false) => {
            "Personalized recommendations work best when they learn from your own data rather than population averages."
        }
        (Theme::AiPersonalization, true) => {
            "We've found that models trained on an individual's own history give far more useful recommendations than population averages."
        }
        (Theme::LongevityHealthspan, false) => {
            "Focusing on healthspan, the years lived in good health, tends to lead to more practical daily decisions than chasing lifespan alone."
        }
        (Theme::LongevityHealthspan, true) => {
            "Our work centers on healthspan, and the biggest gains we see come from small, consistent changes tracked over time."
        }
        (Theme::BiometricIntegration, false) => {
            "Wearable data becomes much more useful once it is combined across devices and read in context."
        }
        (Theme::BiometricIntegration, true) => {
            "We integrate data from multiple wearables, and combining signals like HRV and sleep reveals far more than any single metric."
        }
        (Theme::TemporalPatterns, false) => {
            "Looking at how metrics move over weeks and months often reveals more than any single reading."
        }
        (Theme::TemporalPatterns, true) => {
            "In our analytics work, lagged effects (how today's habits show up days later) are often where the real insights are."
        }
        (Theme::PreventiveMedicine, false) => {
            "Catching small shifts early is usually far easier than reversing a problem later."
        }
        (Theme::PreventiveMedicine, true) => {
            "We focus on prevention, and spotting subtle changes against a personal baseline is what makes that possible."
        }
        (Theme::HolisticSystems, _) => return None,
    };
    Some(sentence)
}

fn generic_value(has_description: bool) -> &'static str {
    if has_description {
        "This connects to a lot of what we think about when building tools that turn health data into everyday decisions."
    } else {
        "It's great to see thoughtful health conversations like this one."
    }
}

/// Three-part reply: community opening, one value proposition, community question.
#[must_use]
pub fn suggested_response(ctx: &NarrativeContext<'_>) -> String {
    let community = ctx.community();

    let value = ctx
        .themes
        .detected
        .iter()
        .find_map(|&theme| {
            let company_variant = ctx.has_description
                && variant_focus(theme)
                    .iter()
                    .any(|area| ctx.profile.focus_areas.contains(area));
            value_proposition(theme, company_variant)
        })
        .unwrap_or_else(|| generic_value(ctx.has_description));

    format!(
        "{} {} {}",
        opening(community),
        value,
        call_to_action(community)
    )
}

//! Closed sets of identifiers shared by the engine, the store and the API.

use serde::{Deserialize, Serialize};

/// A topical category a post can be classified under.
///
/// Declaration order is the canonical theme-table order: it drives
/// detection order, value-proposition precedence and trend ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    AiPersonalization,
    LongevityHealthspan,
    BiometricIntegration,
    TemporalPatterns,
    HolisticSystems,
    PreventiveMedicine,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::AiPersonalization,
        Theme::LongevityHealthspan,
        Theme::BiometricIntegration,
        Theme::TemporalPatterns,
        Theme::HolisticSystems,
        Theme::PreventiveMedicine,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::AiPersonalization => "ai_personalization",
            Theme::LongevityHealthspan => "longevity_healthspan",
            Theme::BiometricIntegration => "biometric_integration",
            Theme::TemporalPatterns => "temporal_patterns",
            Theme::HolisticSystems => "holistic_systems",
            Theme::PreventiveMedicine => "preventive_medicine",
        }
    }

    /// The four themes that get a dedicated strategy recommendation.
    #[must_use]
    pub fn is_primary(self) -> bool {
        matches!(
            self,
            Theme::AiPersonalization
                | Theme::LongevityHealthspan
                | Theme::BiometricIntegration
                | Theme::TemporalPatterns
        )
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stated business emphasis inferred from a company description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    AiTechnology,
    Personalization,
    WearableTechnology,
    DataAnalytics,
    Longevity,
    PreventiveCare,
    ChronicDisease,
    Nutrition,
    Fitness,
    SleepRecovery,
    MentalWellness,
    ClinicalResearch,
}

impl FocusArea {
    pub const ALL: [FocusArea; 12] = [
        FocusArea::AiTechnology,
        FocusArea::Personalization,
        FocusArea::WearableTechnology,
        FocusArea::DataAnalytics,
        FocusArea::Longevity,
        FocusArea::PreventiveCare,
        FocusArea::ChronicDisease,
        FocusArea::Nutrition,
        FocusArea::Fitness,
        FocusArea::SleepRecovery,
        FocusArea::MentalWellness,
        FocusArea::ClinicalResearch,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FocusArea::AiTechnology => "ai_technology",
            FocusArea::Personalization => "personalization",
            FocusArea::WearableTechnology => "wearable_technology",
            FocusArea::DataAnalytics => "data_analytics",
            FocusArea::Longevity => "longevity",
            FocusArea::PreventiveCare => "preventive_care",
            FocusArea::ChronicDisease => "chronic_disease",
            FocusArea::Nutrition => "nutrition",
            FocusArea::Fitness => "fitness",
            FocusArea::SleepRecovery => "sleep_recovery",
            FocusArea::MentalWellness => "mental_wellness",
            FocusArea::ClinicalResearch => "clinical_research",
        }
    }
}

impl std::fmt::Display for FocusArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source communities with dedicated narrative templates.
///
/// Posts from any other community are still analyzed; they get the
/// generic fallback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Community {
    #[serde(rename = "longevity")]
    Longevity,
    #[serde(rename = "Biohackers")]
    Biohackers,
    #[serde(rename = "science")]
    Science,
    #[serde(rename = "Futurology")]
    Futurology,
    #[serde(rename = "artificial")]
    Artificial,
    #[serde(rename = "QuantifiedSelf")]
    QuantifiedSelf,
}

impl Community {
    pub const ALL: [Community; 6] = [
        Community::Longevity,
        Community::Biohackers,
        Community::Science,
        Community::Futurology,
        Community::Artificial,
        Community::QuantifiedSelf,
    ];

    /// Canonical label, without the `r/` prefix.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Community::Longevity => "longevity",
            Community::Biohackers => "Biohackers",
            Community::Science => "science",
            Community::Futurology => "Futurology",
            Community::Artificial => "artificial",
            Community::QuantifiedSelf => "QuantifiedSelf",
        }
    }

    /// Resolve a free-form community label.
    ///
    /// Matching ignores ASCII case, surrounding whitespace and an `r/` prefix.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        let bare = trimmed
            .strip_prefix("r/")
            .or_else(|| trimmed.strip_prefix("R/"))
            .unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(bare))
    }
}

impl std::fmt::Display for Community {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r/{}", self.label())
    }
}

//! Keyword tables that drive theme matching and company profiling.
//!
//! A [`Vocabulary`] is immutable once built. The built-in tables target
//! health, longevity and health-tech conversations; a YAML file with the
//! same shape can replace them without touching any scoring logic.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use threadscope_core::{FocusArea, Theme};

use crate::error::EngineError;

/// One weighted keyword category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeCategory {
    pub theme: Theme,
    /// Lower-case phrases, matched as raw substrings.
    pub keywords: Vec<String>,
    pub weight: f64,
    pub description: String,
}

/// Indicator phrases for one focus area and the themes it lends weight to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusAreaRule {
    pub focus_area: FocusArea,
    pub indicators: Vec<String>,
    #[serde(default)]
    pub supports: Vec<Theme>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Table order is significant: it is the theme iteration order.
    pub themes: Vec<ThemeCategory>,
    pub focus_areas: Vec<FocusAreaRule>,
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
}

const THEME_TABLE: &[(Theme, f64, &str, &[&str])] = &[
    (
        Theme::AiPersonalization,
        15.0,
        "AI-driven personalization of health recommendations",
        &[
            " ai",
            "ai ",
            "ai-",
            "ai.",
            "ai?",
            "ai:",
            "artificial intelligence",
            "machine learning",
            "deep learning",
            "algorithm",
            "personalized",
            "personalised",
            "individualized",
            "tailored",
        ],
    ),
    (
        Theme::LongevityHealthspan,
        15.0,
        "Longevity, healthspan extension and the biology of aging",
        &[
            "longevity",
            "healthspan",
            "lifespan",
            "aging",
            "ageing",
            "anti-aging",
            "healthy aging",
            "senescence",
            "rejuvenation",
            "age reversal",
        ],
    ),
    (
        Theme::BiometricIntegration,
        12.0,
        "Wearables, sensors and continuous biometric data",
        &[
            "wearable",
            "biometric",
            "heart rate",
            "hrv",
            "glucose",
            "cgm",
            "sleep tracking",
            "oura",
            "whoop",
            "biomarker",
            "sensor",
        ],
    ),
    (
        Theme::TemporalPatterns,
        10.0,
        "Longitudinal tracking, trends and prediction over time",
        &[
            "longitudinal",
            "over time",
            "trend",
            "pattern",
            "predict",
            "forecast",
            "temporal",
            "time series",
            "lagged",
        ],
    ),
    (
        Theme::HolisticSystems,
        8.0,
        "Health as an interconnected, whole-body system",
        &[
            "holistic",
            "interconnected",
            "whole body",
            "systems",
            "ecosystem",
            "integrated",
            "multi-dimensional",
            "comprehensive",
        ],
    ),
    (
        Theme::PreventiveMedicine,
        10.0,
        "Prevention, early detection and chronic disease risk",
        &[
            "prevent",
            "preventive",
            "preventative",
            "early detection",
            "screening",
            "risk factor",
            "chronic disease",
            "before symptoms",
        ],
    ),
];

const FOCUS_AREA_TABLE: &[(FocusArea, &[&str], &[Theme])] = &[
    (
        FocusArea::AiTechnology,
        &[
            " ai",
            "ai ",
            "ai-",
            "ai,",
            "ai.",
            "ai?",
            "ai:",
            "artificial intelligence",
            "machine learning",
            "algorithm",
            "neural network",
        ],
        &[Theme::AiPersonalization, Theme::TemporalPatterns],
    ),
    (
        FocusArea::Personalization,
        &["personaliz", "personalis", "tailored", "individual", "custom"],
        &[Theme::AiPersonalization, Theme::BiometricIntegration],
    ),
    (
        FocusArea::WearableTechnology,
        &["wearable", "device", "sensor", "tracker", "smartwatch"],
        &[Theme::BiometricIntegration],
    ),
    (
        FocusArea::DataAnalytics,
        &[
            "analytics",
            "data science",
            "data-driven",
            "insight",
            "correlation",
            "dashboard",
        ],
        &[Theme::TemporalPatterns, Theme::AiPersonalization],
    ),
    (
        FocusArea::Longevity,
        &[
            "longevity",
            "healthspan",
            "lifespan",
            "aging",
            "anti-aging",
            "age reversal",
        ],
        &[Theme::LongevityHealthspan, Theme::PreventiveMedicine],
    ),
    (
        FocusArea::PreventiveCare,
        &["prevent", "early detection", "screening", "proactive"],
        &[Theme::PreventiveMedicine, Theme::TemporalPatterns],
    ),
    (
        FocusArea::ChronicDisease,
        &[
            "chronic",
            "diabetes",
            "cardiovascular",
            "metabolic",
            "disease management",
        ],
        &[Theme::PreventiveMedicine, Theme::BiometricIntegration],
    ),
    (
        FocusArea::Nutrition,
        &["nutrition", "diet", "meal", "food", "nutrient"],
        &[Theme::HolisticSystems, Theme::AiPersonalization],
    ),
    (
        FocusArea::Fitness,
        &["fitness", "exercise", "workout", "training", "movement"],
        &[Theme::BiometricIntegration, Theme::HolisticSystems],
    ),
    (
        FocusArea::SleepRecovery,
        &["sleep", "recovery", "circadian", "restorative"],
        &[Theme::BiometricIntegration, Theme::HolisticSystems],
    ),
    (
        FocusArea::MentalWellness,
        &[
            "mental health",
            "mindfulness",
            "meditation",
            "stress",
            "cognitive",
            "mood",
        ],
        &[Theme::HolisticSystems],
    ),
    (
        FocusArea::ClinicalResearch,
        &[
            "clinical",
            "research",
            "evidence-based",
            "scientific",
            "study",
            "trial",
        ],
        &[Theme::LongevityHealthspan, Theme::PreventiveMedicine],
    ),
];

const STOP_WORDS: &[&str] = &[
    "about", "after", "again", "being", "below", "between", "could", "doing", "during", "every",
    "other", "should", "their", "there", "these", "those", "through", "under", "until", "where",
    "which", "while", "would", "within", "without", "yourself",
];

fn default_stop_words() -> Vec<String> {
    STOP_WORDS.iter().map(|w| (*w).to_string()).collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        let themes = THEME_TABLE
            .iter()
            .map(|&(theme, weight, description, keywords)| ThemeCategory {
                theme,
                keywords: to_strings(keywords),
                weight,
                description: description.to_string(),
            })
            .collect();

        let focus_areas = FOCUS_AREA_TABLE
            .iter()
            .map(|&(focus_area, indicators, supports)| FocusAreaRule {
                focus_area,
                indicators: to_strings(indicators),
                supports: supports.to_vec(),
            })
            .collect();

        Self {
            themes,
            focus_areas,
            stop_words: default_stop_words(),
        }
    }
}

impl Vocabulary {
    /// Parse and validate a vocabulary from YAML text.
    ///
    /// Keyword, indicator and stop-word entries are lower-cased on load so
    /// they line up with normalized post text.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::VocabularyParse`] for malformed YAML and
    /// [`EngineError::Validation`] if the tables are incomplete.
    pub fn from_yaml_str(content: &str) -> Result<Self, EngineError> {
        let mut vocabulary: Vocabulary = serde_yaml::from_str(content)?;
        vocabulary.lowercase_entries();
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Category for `theme`, if present in the table.
    #[must_use]
    pub fn category(&self, theme: Theme) -> Option<&ThemeCategory> {
        self.themes.iter().find(|c| c.theme == theme)
    }

    /// Themes the given focus area lends weight to.
    #[must_use]
    pub fn supported_themes(&self, focus_area: FocusArea) -> &[Theme] {
        self.focus_areas
            .iter()
            .find(|rule| rule.focus_area == focus_area)
            .map_or(&[][..], |rule| rule.supports.as_slice())
    }

    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|w| w == word)
    }

    fn lowercase_entries(&mut self) {
        for category in &mut self.themes {
            for keyword in &mut category.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        for rule in &mut self.focus_areas {
            for indicator in &mut rule.indicators {
                *indicator = indicator.to_lowercase();
            }
        }
        for word in &mut self.stop_words {
            *word = word.to_lowercase();
        }
    }

    /// Check that every theme and focus area is configured exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] describing the first problem found.
    pub fn validate(&self) -> Result<(), EngineError> {
        let mut seen_themes = HashSet::new();
        for category in &self.themes {
            if !seen_themes.insert(category.theme) {
                return Err(EngineError::Validation(format!(
                    "duplicate theme category: '{}'",
                    category.theme
                )));
            }
            if !category.weight.is_finite() || category.weight <= 0.0 {
                return Err(EngineError::Validation(format!(
                    "theme '{}' has invalid weight {}; must be positive",
                    category.theme, category.weight
                )));
            }
            if category.keywords.is_empty() || category.keywords.iter().any(String::is_empty) {
                return Err(EngineError::Validation(format!(
                    "theme '{}' needs at least one keyword and no empty entries",
                    category.theme
                )));
            }
        }
        if let Some(missing) = Theme::ALL.iter().find(|t| !seen_themes.contains(*t)) {
            return Err(EngineError::Validation(format!(
                "missing theme category: '{missing}'"
            )));
        }

        let mut seen_areas = HashSet::new();
        for rule in &self.focus_areas {
            if !seen_areas.insert(rule.focus_area) {
                return Err(EngineError::Validation(format!(
                    "duplicate focus area: '{}'",
                    rule.focus_area
                )));
            }
            if rule.indicators.is_empty() || rule.indicators.iter().any(String::is_empty) {
                return Err(EngineError::Validation(format!(
                    "focus area '{}' needs at least one indicator and no empty entries",
                    rule.focus_area
                )));
            }
        }
        if let Some(missing) = FocusArea::ALL.iter().find(|a| !seen_areas.contains(*a)) {
            return Err(EngineError::Validation(format!(
                "missing focus area: '{missing}'"
            )));
        }

        Ok(())
    }
}

/// Load and validate a vocabulary from a YAML file.
///
/// # Errors
///
/// Returns [`EngineError`] if the file cannot be read, parsed, or fails validation.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, EngineError> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::VocabularyIo {
        path: path.display().to_string(),
        source: e,
    })?;

    Vocabulary::from_yaml_str(&content)
}

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod tests;

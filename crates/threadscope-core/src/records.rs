use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::taxonomy::Theme;

/// A short-form post as handed over by the ingestion layer.
///
/// Missing numeric fields default to zero and missing text to empty, so
/// downstream scoring never has to deal with partial records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content")]
    pub body: String,
    #[serde(default, alias = "subreddit")]
    pub community: String,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default, alias = "comments_count")]
    pub comments: u64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Minimal post with empty body and zero engagement.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, community: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: String::new(),
            community: community.into(),
            upvotes: 0,
            comments: 0,
            author: None,
            url: None,
            created_at: None,
        }
    }
}

/// Per-theme diagnostic attached to an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDetail {
    /// Uncapped category score.
    pub score: f64,
    pub matched_keywords: Vec<String>,
    pub description: String,
}

/// Relevance analysis of one post against one company description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub post_id: String,
    /// In `[0.0, 100.0]`, rounded to one decimal place.
    pub relevance_score: f64,
    #[serde(default)]
    pub takeaways: Vec<String>,
    #[serde(default)]
    pub suggested_response: String,
    #[serde(default)]
    pub targeting_insights: String,
    /// Theme-table order.
    #[serde(default)]
    pub detected_themes: Vec<Theme>,
    #[serde(default)]
    pub theme_details: BTreeMap<Theme, ThemeDetail>,
}

/// Aggregate view over a batch of analyses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub query: String,
    pub posts_analyzed: usize,
    pub key_trends: Vec<String>,
    pub community_insights: BTreeMap<String, String>,
    pub suggested_strategies: Vec<String>,
}

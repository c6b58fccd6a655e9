//! In-process record store for posts, analyses and trend history.
//!
//! Locks are held only while copying records in or out; callers run the
//! engine on owned data outside any guard.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use threadscope_core::{Analysis, Post, TrendReport};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct StoredPost {
    #[serde(flatten)]
    pub post: Post,
    pub ingested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredAnalysis {
    #[serde(flatten)]
    pub analysis: Analysis,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredTrendReport {
    pub id: Uuid,
    #[serde(flatten)]
    pub report: TrendReport,
    pub min_relevance: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct PostTable {
    /// Ingestion order, oldest first.
    order: Vec<String>,
    by_id: HashMap<String, StoredPost>,
}

/// Record counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub posts: usize,
    pub analyses: usize,
    pub trend_reports: usize,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    posts: RwLock<PostTable>,
    analyses: RwLock<BTreeMap<String, StoredAnalysis>>,
    trends: RwLock<Vec<StoredTrendReport>>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert posts whose id is not yet stored. Returns how many were new.
    ///
    /// Existing posts are left untouched, including their ingestion time.
    pub async fn insert_posts(&self, posts: Vec<Post>) -> usize {
        let now = Utc::now();
        let mut table = self.posts.write().await;
        let mut inserted = 0;

        for post in posts {
            if table.by_id.contains_key(&post.id) {
                continue;
            }
            table.order.push(post.id.clone());
            table.by_id.insert(
                post.id.clone(),
                StoredPost {
                    post,
                    ingested_at: now,
                },
            );
            inserted += 1;
        }

        inserted
    }

    /// Look up posts by id, in request order. Unknown ids are returned separately.
    pub async fn posts_by_id(&self, ids: &[String]) -> (Vec<Post>, Vec<String>) {
        let table = self.posts.read().await;
        let mut found = Vec::with_capacity(ids.len());
        let mut missing = Vec::new();

        for id in ids {
            match table.by_id.get(id) {
                Some(stored) => found.push(stored.post.clone()),
                None => missing.push(id.clone()),
            }
        }

        (found, missing)
    }

    /// Every stored post, newest-ingested first.
    pub async fn posts_newest_first(&self) -> Vec<StoredPost> {
        let table = self.posts.read().await;
        table
            .order
            .iter()
            .rev()
            .filter_map(|id| table.by_id.get(id).cloned())
            .collect()
    }

    /// Insert or overwrite analyses keyed by post id.
    pub async fn upsert_analyses(&self, analyses: Vec<Analysis>) -> Vec<StoredAnalysis> {
        let now = Utc::now();
        let stored: Vec<StoredAnalysis> = analyses
            .into_iter()
            .map(|analysis| StoredAnalysis {
                analysis,
                analyzed_at: now,
            })
            .collect();

        let mut map = self.analyses.write().await;
        for record in &stored {
            map.insert(record.analysis.post_id.clone(), record.clone());
        }

        stored
    }

    pub async fn analysis(&self, post_id: &str) -> Option<StoredAnalysis> {
        self.analyses.read().await.get(post_id).cloned()
    }

    /// Analyses scoring at least `min_relevance`, ordered by post id.
    pub async fn analyses_at_least(&self, min_relevance: f64) -> Vec<Analysis> {
        self.analyses
            .read()
            .await
            .values()
            .filter(|stored| stored.analysis.relevance_score >= min_relevance)
            .map(|stored| stored.analysis.clone())
            .collect()
    }

    /// Append a report to the history. Stored reports are never modified.
    pub async fn append_trend_report(
        &self,
        report: TrendReport,
        min_relevance: f64,
    ) -> StoredTrendReport {
        let stored = StoredTrendReport {
            id: Uuid::new_v4(),
            report,
            min_relevance,
            created_at: Utc::now(),
        };
        self.trends.write().await.push(stored.clone());
        stored
    }

    /// Up to `limit` reports, newest first.
    pub async fn trend_reports_newest_first(&self, limit: usize) -> Vec<StoredTrendReport> {
        self.trends
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn counts(&self) -> StoreCounts {
        StoreCounts {
            posts: self.posts.read().await.order.len(),
            analyses: self.analyses.read().await.len(),
            trend_reports: self.trends.read().await.len(),
        }
    }
}

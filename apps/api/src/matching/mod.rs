//! Job relevance matching: keyword extraction, per-job scoring and ranking.
//!
//! `AppState` holds an `Arc<dyn JobRecommender>`; `KeywordRecommender` is the
//! default (and currently only) backend.

pub mod handlers;
pub mod keywords;
pub mod ranker;
pub mod scorer;

use tracing::debug;

use crate::matching::keywords::{extract_keywords, KeywordConfig};
use crate::matching::ranker::{rank_top_matches, ScoredJob};
use crate::models::job::JobPosting;

/// Ranks a candidate pool of jobs for one profile.
///
/// Implementations are synchronous and pure; all I/O happens before the call.
pub trait JobRecommender: Send + Sync {
    fn recommend(
        &self,
        skills: &[String],
        branch: Option<&str>,
        jobs: &[JobPosting],
        limit: usize,
    ) -> Vec<ScoredJob>;

    /// Backend label surfaced in responses.
    fn backend(&self) -> &'static str;
}

/// Keyword-overlap recommender.
pub struct KeywordRecommender {
    config: KeywordConfig,
}

impl KeywordRecommender {
    pub fn new(config: KeywordConfig) -> Self {
        Self { config }
    }
}

impl JobRecommender for KeywordRecommender {
    fn recommend(
        &self,
        skills: &[String],
        branch: Option<&str>,
        jobs: &[JobPosting],
        limit: usize,
    ) -> Vec<ScoredJob> {
        let profile = extract_keywords(skills, branch, &self.config);
        debug!(
            keywords = profile.keywords.len(),
            skill_keywords = profile.skill_keywords.len(),
            candidates = jobs.len(),
            "Ranking job candidates"
        );
        rank_top_matches(jobs, &profile, &self.config, limit)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

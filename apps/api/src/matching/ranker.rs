use serde::Serialize;

use crate::matching::keywords::{KeywordConfig, ProfileKeywords};
use crate::matching::scorer::{score_job, JobScore};
use crate::models::job::JobPosting;

/// A job posting annotated with its match score and display skills.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub score: u8,
    pub matched_skills: Vec<String>,
}

/// Scores every job, sorts by descending score and keeps the first `limit`.
///
/// The sort is stable: equal scores keep their input order, so an all-zero
/// pool comes back as the first `limit` jobs as given.
pub fn rank_top_matches(
    jobs: &[JobPosting],
    profile: &ProfileKeywords,
    config: &KeywordConfig,
    limit: usize,
) -> Vec<ScoredJob> {
    let mut scored: Vec<ScoredJob> = jobs
        .iter()
        .map(|job| {
            let JobScore {
                score,
                matched_skills,
            } = score_job(job, profile, config);
            ScoredJob {
                job: job.clone(),
                score,
                matched_skills,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// True when at least one ranked job carries a non-zero score.
pub fn has_signal(ranked: &[ScoredJob]) -> bool {
    ranked.iter().any(|j| j.score > 0)
}

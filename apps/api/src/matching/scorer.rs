//! Job Scorer — scores one job posting against a student's keywords.
//!
//! Algorithm:
//! 1. For each keyword (insertion order, skipping probes shorter than `min_probe_len`):
//!    - title contains keyword → +20
//!    - description contains keyword → +8 (independent of the title check)
//! 2. A keyword that hit and is a whole-skill keyword is recorded (uppercased)
//!    as a matched skill, up to 3 and without duplicates.
//! 3. score = min(98, floor(50 + ln(raw + 1) * 10)), or 0 when there is no signal.
//!
//! Matching is plain substring containment, so short keywords can hit inside
//! unrelated words.

use serde::Serialize;

use crate::matching::keywords::{KeywordConfig, ProfileKeywords};
use crate::models::job::JobPosting;

pub const TITLE_HIT_WEIGHT: u32 = 20;
pub const DESCRIPTION_HIT_WEIGHT: u32 = 8;
pub const MAX_MATCHED_SKILLS: usize = 3;

const SCORE_FLOOR: f64 = 50.0;
const SCORE_CEILING: f64 = 98.0;
const LOG_SCALE: f64 = 10.0;

/// Score and display skills for a single job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobScore {
    /// 0 – 98; 0 means no signal.
    pub score: u8,
    pub matched_skills: Vec<String>,
}

pub fn score_job(job: &JobPosting, profile: &ProfileKeywords, config: &KeywordConfig) -> JobScore {
    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();

    let mut raw = 0_u32;
    let mut matched_skills: Vec<String> = Vec::new();

    for keyword in profile.keywords.iter() {
        if keyword.chars().count() < config.min_probe_len {
            continue;
        }

        let mut found = false;
        if title.contains(keyword) {
            raw += TITLE_HIT_WEIGHT;
            found = true;
        }
        if description.contains(keyword) {
            raw += DESCRIPTION_HIT_WEIGHT;
            found = true;
        }

        if found
            && profile.skill_keywords.contains(keyword)
            && matched_skills.len() < MAX_MATCHED_SKILLS
        {
            let display = keyword.to_uppercase();
            if !matched_skills.contains(&display) {
                matched_skills.push(display);
            }
        }
    }

    JobScore {
        score: normalize_score(raw, !profile.keywords.is_empty()),
        matched_skills,
    }
}

/// Log-scales a raw hit total into the 0 – 98 match score.
///
/// Any signal at all lands at 56 or above (raw = 1). The ceiling is reached
/// around raw = 121 and never exceeded.
pub fn normalize_score(raw: u32, has_keywords: bool) -> u8 {
    if !has_keywords || raw == 0 {
        return 0;
    }
    let scaled = (SCORE_FLOOR + (f64::from(raw) + 1.0).ln() * LOG_SCALE).floor();
    scaled.min(SCORE_CEILING) as u8
}

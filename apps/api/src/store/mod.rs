//! Read-side access to the placement document store.
//!
//! The matcher only ever reads: one profile by id and a bounded pool of the
//! most recent job postings. Both reads are independent of each other.

pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::student::StudentProfile;

pub use postgres::PgPlacementStore;

#[async_trait]
pub trait PlacementStore: Send + Sync {
    /// Returns `None` when no student has this id.
    async fn fetch_profile(&self, student_id: Uuid) -> Result<Option<StudentProfile>, AppError>;

    /// Returns at most `limit` postings, most recent first.
    async fn fetch_recent_jobs(&self, limit: usize) -> Result<Vec<JobPosting>, AppError>;
}

#[cfg(test)]
pub mod memory {
    use std::collections::HashMap;

    use super::*;

    /// Seeded in-memory store for handler and router tests.
    #[derive(Default)]
    pub struct InMemoryStore {
        pub profiles: HashMap<Uuid, StudentProfile>,
        pub jobs: Vec<JobPosting>,
        pub fail_jobs: bool,
    }

    impl InMemoryStore {
        pub fn with_profile(mut self, profile: StudentProfile) -> Self {
            self.profiles.insert(profile.id, profile);
            self
        }

        pub fn with_jobs(mut self, jobs: Vec<JobPosting>) -> Self {
            self.jobs = jobs;
            self
        }
    }

    #[async_trait]
    impl PlacementStore for InMemoryStore {
        async fn fetch_profile(
            &self,
            student_id: Uuid,
        ) -> Result<Option<StudentProfile>, AppError> {
            Ok(self.profiles.get(&student_id).cloned())
        }

        async fn fetch_recent_jobs(&self, limit: usize) -> Result<Vec<JobPosting>, AppError> {
            if self.fail_jobs {
                return Err(AppError::Database(sqlx::Error::PoolTimedOut));
            }
            let mut jobs = self.jobs.clone();
            // Stable: postings without a timestamp sink to the end in seed order.
            jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
            jobs.truncate(limit);
            Ok(jobs)
        }
    }

    mod tests {
        use super::*;
        use chrono::{Duration, Utc};

        #[tokio::test]
        async fn test_recent_jobs_are_newest_first_and_bounded() {
            let now = Utc::now();
            let mut old = JobPosting::new("Old", "A", "");
            old.posted_at = Some(now - Duration::days(3));
            let mut new = JobPosting::new("New", "B", "");
            new.posted_at = Some(now);
            let undated = JobPosting::new("Undated", "C", "");

            let store = InMemoryStore::default().with_jobs(vec![undated, old, new]);
            let jobs = store.fetch_recent_jobs(2).await.unwrap();
            let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
            assert_eq!(titles, vec!["New", "Old"]);
        }

        #[tokio::test]
        async fn test_unknown_profile_is_none() {
            let store = InMemoryStore::default();
            assert!(store.fetch_profile(Uuid::new_v4()).await.unwrap().is_none());
        }
    }
}

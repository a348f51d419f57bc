use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobRow};
use crate::models::student::{StudentProfile, StudentRow};
use crate::store::PlacementStore;

/// Postgres-backed store over the `students` and `jobs` tables.
pub struct PgPlacementStore {
    pool: PgPool,
}

impl PgPlacementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlacementStore for PgPlacementStore {
    async fn fetch_profile(&self, student_id: Uuid) -> Result<Option<StudentProfile>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, display_name, skills, branch FROM students WHERE id = $1",
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StudentProfile::from))
    }

    async fn fetch_recent_jobs(&self, limit: usize) -> Result<Vec<JobPosting>, AppError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, company, description, posted_at
            FROM jobs
            ORDER BY posted_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobPosting::from).collect())
    }
}

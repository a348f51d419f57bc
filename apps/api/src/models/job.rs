use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::null_as_empty;

/// Row shape of the `jobs` table.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub posted_at: DateTime<Utc>,
}

/// Read-only snapshot of a job posting. Missing text fields are empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        JobPosting {
            id: None,
            title: title.into(),
            company: company.into(),
            description: description.into(),
            posted_at: None,
        }
    }
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        JobPosting {
            id: Some(row.id),
            title: row.title.unwrap_or_default(),
            company: row.company.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            posted_at: Some(row.posted_at),
        }
    }
}

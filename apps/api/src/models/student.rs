use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{blank_as_none, lenient_skills};

/// Row shape of the `students` table. `skills` and `branch` are nullable.
#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub skills: Option<Vec<String>>,
    pub branch: Option<String>,
}

/// A student's profile as the matcher sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: Uuid,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_skills")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub branch: Option<String>,
}

impl From<StudentRow> for StudentProfile {
    fn from(row: StudentRow) -> Self {
        StudentProfile {
            id: row.id,
            display_name: row.display_name,
            skills: row.skills.unwrap_or_default(),
            branch: row.branch.filter(|b| !b.trim().is_empty()),
        }
    }
}

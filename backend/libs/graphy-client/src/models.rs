//! Wire types for the Graphy LMS API.
//!
//! Field names follow the camelCase JSON the API speaks. These records are
//! read-only inputs to the recommendation core; the client never writes
//! back to the LMS.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Learner {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Learner {
    /// Deterministic placeholder identity used when the Graphy API is not
    /// configured (local development, demos). Same email, same learner.
    pub fn demo(email: &str) -> Self {
        let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, email.as_bytes());
        let name = email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .unwrap_or("learner")
            .replace(['.', '_', '-'], " ");

        Self {
            id: format!("demo-{}", id.simple()),
            email: email.to_string(),
            name,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }
}

/// A learner's registration in one catalog product. The LMS guarantees at
/// most one enrollment per (learner, product) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub learner_id: String,
    pub product_id: String,
    /// Open set of status labels; only "completed" is meaningful to the
    /// recommendation core, everything else counts as in progress.
    pub status: String,
    /// Percentage, 0-100.
    pub progress: f64,
    pub enrolled_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    pub const STATUS_COMPLETED: &'static str = "completed";

    pub fn is_completed(&self) -> bool {
        self.status == Self::STATUS_COMPLETED
    }
}

/// Per-(learner, product) lesson and watch-time metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub learner_id: String,
    pub product_id: String,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    /// Minutes.
    pub total_duration: f64,
    /// Minutes actually watched.
    pub watched_duration: f64,
    /// Percentage, 0-100.
    pub progress: f64,
    pub last_watched_lesson_id: Option<String>,
    pub last_watched_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

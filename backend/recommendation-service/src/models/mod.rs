use chrono::{DateTime, Utc};
use graphy_client::{Enrollment, Learner, ProgressReport};
use serde::{Deserialize, Serialize};

/// One entry of a product's ordered syllabus. Lock and completion state
/// here are catalog-side defaults, distinct from per-learner progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub position: u32,
    pub is_locked: bool,
    pub is_completed: bool,
}

/// A purchasable course, the catalog unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub price: f64,
    pub currency: String,
    pub instructor: String,
    pub level: Option<String>,
    pub language: String,
    pub duration_minutes: Option<f64>,
    pub syllabus: Vec<Lesson>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Resume,
    NextLesson,
    CategoryMatch,
    Popular,
}

impl RecommendationType {
    /// Rule priority for deterministic tie-breaking; lower wins.
    pub fn priority(self) -> u8 {
        match self {
            RecommendationType::Resume => 0,
            RecommendationType::NextLesson => 1,
            RecommendationType::CategoryMatch => 2,
            RecommendationType::Popular => 3,
        }
    }
}

/// One scored, reasoned suggestion. Unique by `product_id` within a
/// generated list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub product_id: String,
    pub product: Product,
    #[serde(rename = "type")]
    pub rec_type: RecommendationType,
    pub reason: String,
    pub score: f64,
}

/// Derived aggregate of a learner's history. Built fresh per request,
/// never mutated afterwards, never persisted.
#[derive(Debug, Clone)]
pub struct LearnerProfile {
    pub learner: Learner,
    pub enrollments: Vec<Enrollment>,
    pub progress_reports: Vec<ProgressReport>,
    pub completed_courses: Vec<String>,
    pub in_progress_courses: Vec<String>,
    /// Most frequent first; ties keep first-seen order.
    pub preferred_categories: Vec<String>,
    pub preferred_tags: Vec<String>,
    /// Mean of enrollment progress across all enrollments, 0 when empty.
    pub average_completion_rate: f64,
    /// Sum of watched minutes across progress reports, 0 when empty.
    pub total_learning_time: f64,
}

/// The profile fields exposed on the API response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfileSummary {
    pub preferred_categories: Vec<String>,
    pub preferred_tags: Vec<String>,
    pub average_completion_rate: f64,
    pub total_learning_time: f64,
}

impl From<&LearnerProfile> for LearnerProfileSummary {
    fn from(profile: &LearnerProfile) -> Self {
        Self {
            preferred_categories: profile.preferred_categories.clone(),
            preferred_tags: profile.preferred_tags.clone(),
            average_completion_rate: profile.average_completion_rate,
            total_learning_time: profile.total_learning_time,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationData {
    pub recommendations: Vec<Recommendation>,
    pub learner_profile: LearnerProfileSummary,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub data: RecommendationData,
}

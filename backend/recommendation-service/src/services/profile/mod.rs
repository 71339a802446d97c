// ============================================
// Learner Profile Builder
// ============================================
//
// Aggregates raw enrollment and progress records into the preference
// vectors and summary statistics the rule pipeline scores against.
// Pure and infallible: empty or malformed inputs degrade to zeroed or
// empty fields, never an error.

use crate::models::{LearnerProfile, Product};
use graphy_client::{Enrollment, Learner, ProgressReport};
use tracing::debug;

pub fn build_learner_profile(
    learner: Learner,
    enrollments: Vec<Enrollment>,
    progress_reports: Vec<ProgressReport>,
    all_products: &[Product],
) -> LearnerProfile {
    let mut completed_courses = Vec::new();
    let mut in_progress_courses = Vec::new();
    for enrollment in &enrollments {
        // Unknown status labels from the LMS still count as active history.
        if enrollment.is_completed() {
            completed_courses.push(enrollment.product_id.clone());
        } else {
            in_progress_courses.push(enrollment.product_id.clone());
        }
    }

    // Ids with no catalog match are silently skipped.
    let completed_products: Vec<&Product> = completed_courses
        .iter()
        .filter_map(|id| all_products.iter().find(|p| &p.id == id))
        .collect();

    let preferred_categories =
        rank_by_frequency(completed_products.iter().map(|p| p.category.clone()));
    let preferred_tags =
        rank_by_frequency(completed_products.iter().flat_map(|p| p.tags.iter().cloned()));

    let average_completion_rate = if enrollments.is_empty() {
        0.0
    } else {
        enrollments.iter().map(|e| e.progress).sum::<f64>() / enrollments.len() as f64
    };
    let total_learning_time = progress_reports.iter().map(|r| r.watched_duration).sum();

    debug!(
        learner_id = %learner.id,
        completed = completed_courses.len(),
        in_progress = in_progress_courses.len(),
        categories = preferred_categories.len(),
        "Built learner profile"
    );

    LearnerProfile {
        learner,
        enrollments,
        progress_reports,
        completed_courses,
        in_progress_courses,
        preferred_categories,
        preferred_tags,
        average_completion_rate,
        total_learning_time,
    }
}

/// Tally values and return them deduplicated, most frequent first. Ties
/// keep first-seen order, so the result never depends on hash-map
/// iteration order.
pub(crate) fn rank_by_frequency<I>(values: I) -> Vec<String>
where
    I: Iterator<Item = String>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    // Stable sort: equal counts stay in insertion order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(v, _)| v).collect()
}

// ============================================
// Recommendation Rule Pipeline
// ============================================
//
// Four rules run in priority order, each emitting scored candidates:
// 1. Resume: re-surface in-progress courses
// 2. Next lesson: point at the exact lesson to continue with
// 3. Category match: unenrolled courses in preferred categories
// 4. Popular: fallback padding toward the cap
//
// Candidates are pooled per product (highest score wins), sorted
// descending and truncated. Resume and next-lesson are the only rules
// allowed to reference already-enrolled products.

use crate::models::{LearnerProfile, Lesson, Product, Recommendation, RecommendationType};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Hard cap on the size of one generated list.
pub const MAX_RECOMMENDATIONS: usize = 10;

const NEXT_LESSON_SCORE: f64 = 0.95;
const RESUME_BASE_SCORE: f64 = 0.7;
const RESUME_PROGRESS_WEIGHT: f64 = 0.25;
const CATEGORY_BASE_SCORE: f64 = 0.65;
const CATEGORY_RANK_STEP: f64 = 0.05;
const CATEGORY_MIN_SCORE: f64 = 0.4;
const POPULAR_SCORE: f64 = 0.3;

pub struct RecommendationEngine {
    max_recommendations: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            max_recommendations: MAX_RECOMMENDATIONS,
        }
    }

    /// Run the rule pipeline over a learner profile and the catalog.
    ///
    /// Async so catalog lookups can move behind this interface without an
    /// API change; the current core does no I/O and never fails. Empty
    /// catalogs simply yield fewer (or zero) recommendations.
    pub async fn generate(
        &self,
        profile: &LearnerProfile,
        all_products: &[Product],
        popular_products: &[Product],
    ) -> Vec<Recommendation> {
        let enrolled: HashSet<&str> = profile
            .enrollments
            .iter()
            .map(|e| e.product_id.as_str())
            .collect();

        let mut best: HashMap<String, Recommendation> = HashMap::new();

        for candidate in self.resume_candidates(profile, all_products) {
            Self::keep_best(&mut best, candidate);
        }
        for candidate in self.next_lesson_candidates(profile, all_products) {
            Self::keep_best(&mut best, candidate);
        }
        for candidate in self.category_candidates(profile, all_products, &enrolled) {
            Self::keep_best(&mut best, candidate);
        }
        for candidate in self.popular_candidates(popular_products, &enrolled, &best) {
            Self::keep_best(&mut best, candidate);
        }

        let mut recommendations: Vec<Recommendation> = best.into_values().collect();
        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.rec_type.priority().cmp(&b.rec_type.priority()))
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        recommendations.truncate(self.max_recommendations);

        debug!(
            learner_id = %profile.learner.id,
            count = recommendations.len(),
            top_score = recommendations.first().map(|r| r.score),
            "Generated recommendations"
        );

        recommendations
    }

    /// Keep the highest-scoring candidate per product. Overwrites only on
    /// a strictly higher score, so rule priority settles exact ties.
    fn keep_best(best: &mut HashMap<String, Recommendation>, candidate: Recommendation) {
        match best.get(&candidate.product_id) {
            Some(existing) if existing.score >= candidate.score => {}
            _ => {
                best.insert(candidate.product_id.clone(), candidate);
            }
        }
    }

    fn resume_candidates(
        &self,
        profile: &LearnerProfile,
        all_products: &[Product],
    ) -> Vec<Recommendation> {
        profile
            .enrollments
            .iter()
            .filter(|e| !e.is_completed())
            .filter_map(|enrollment| {
                let product = all_products.iter().find(|p| p.id == enrollment.product_id)?;
                let progress = enrollment.progress.clamp(0.0, 100.0);
                Some(Recommendation {
                    product_id: product.id.clone(),
                    product: product.clone(),
                    rec_type: RecommendationType::Resume,
                    reason: format!(
                        "Resume your progress in \"{}\" ({:.0}% complete)",
                        product.title, progress
                    ),
                    score: RESUME_BASE_SCORE + RESUME_PROGRESS_WEIGHT * progress / 100.0,
                })
            })
            .collect()
    }

    fn next_lesson_candidates(
        &self,
        profile: &LearnerProfile,
        all_products: &[Product],
    ) -> Vec<Recommendation> {
        profile
            .enrollments
            .iter()
            .filter(|e| !e.is_completed())
            .filter_map(|enrollment| {
                let report = profile
                    .progress_reports
                    .iter()
                    .find(|r| r.product_id == enrollment.product_id)?;
                let last_watched = report.last_watched_lesson_id.as_deref()?;
                let product = all_products.iter().find(|p| p.id == enrollment.product_id)?;
                let lesson = find_next_unlocked_lesson(&product.syllabus, last_watched)?;
                Some(Recommendation {
                    product_id: product.id.clone(),
                    product: product.clone(),
                    rec_type: RecommendationType::NextLesson,
                    reason: format!("Continue with \"{}\"", lesson.title),
                    score: NEXT_LESSON_SCORE,
                })
            })
            .collect()
    }

    fn category_candidates(
        &self,
        profile: &LearnerProfile,
        all_products: &[Product],
        enrolled: &HashSet<&str>,
    ) -> Vec<Recommendation> {
        all_products
            .iter()
            .filter(|p| !enrolled.contains(p.id.as_str()))
            .filter_map(|product| {
                let rank = profile
                    .preferred_categories
                    .iter()
                    .position(|c| *c == product.category)?;
                let score =
                    (CATEGORY_BASE_SCORE - CATEGORY_RANK_STEP * rank as f64).max(CATEGORY_MIN_SCORE);
                Some(Recommendation {
                    product_id: product.id.clone(),
                    product: product.clone(),
                    rec_type: RecommendationType::CategoryMatch,
                    reason: format!("Based on your interest in {}", product.category),
                    score,
                })
            })
            .collect()
    }

    fn popular_candidates(
        &self,
        popular_products: &[Product],
        enrolled: &HashSet<&str>,
        best: &HashMap<String, Recommendation>,
    ) -> Vec<Recommendation> {
        popular_products
            .iter()
            .filter(|p| !enrolled.contains(p.id.as_str()) && !best.contains_key(&p.id))
            .map(|product| Recommendation {
                product_id: product.id.clone(),
                product: product.clone(),
                rec_type: RecommendationType::Popular,
                reason: "Popular among learners".to_string(),
                score: POPULAR_SCORE,
            })
            .collect()
    }
}

/// Linear scan for the first unlocked, uncompleted lesson strictly after
/// `last_watched_lesson_id`. `None` when the id is unknown or nothing
/// after it qualifies, including when the last watched lesson closes the
/// syllabus.
pub fn find_next_unlocked_lesson<'a>(
    syllabus: &'a [Lesson],
    last_watched_lesson_id: &str,
) -> Option<&'a Lesson> {
    let index = syllabus
        .iter()
        .position(|l| l.id == last_watched_lesson_id)?;
    syllabus
        .iter()
        .skip(index + 1)
        .find(|l| !l.is_locked && !l.is_completed)
}

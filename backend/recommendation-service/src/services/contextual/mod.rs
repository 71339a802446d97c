// ============================================
// Contextual Booster (real-time re-ranking)
// ============================================
//
// Pure post-processing pass over the generated list. Takes the current
// local timestamp as an explicit input and never reads the wall clock, so
// repeated calls with the same instant are identical.
//
// Boosts are multiplicative and applied sequentially, each prepending its
// reason prefix; the final score is clamped to 1.0 and the list re-sorted.

use crate::models::{LearnerProfile, Recommendation};
use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};

const MORNING_MULTIPLIER: f64 = 1.2;
const EVENING_MULTIPLIER: f64 = 1.15;
const WEEKEND_MULTIPLIER: f64 = 1.1;
const ADVANCED_MULTIPLIER: f64 = 1.25;
// Recent-activity bonus: half an engagement point at 10% weight.
const RECENT_ACTIVITY_MULTIPLIER: f64 = 1.0 + 0.5 * 0.1;
const MAX_SCORE: f64 = 1.0;

const MORNING_HOURS: std::ops::RangeInclusive<u32> = 6..=10;
const EVENING_HOURS: std::ops::RangeInclusive<u32> = 18..=22;
const MORNING_CATEGORIES: [&str; 2] = ["Philosophy", "Yoga"];
const EVENING_CATEGORIES: [&str; 2] = ["Creative Writing", "Language"];
const WEEKEND_MIN_DURATION_MINUTES: f64 = 180.0;
const ADVANCED_LEARNING_TIME_MINUTES: f64 = 1000.0;
const RECENT_ACTIVITY_COMPLETION_RATE: f64 = 70.0;
const ADVANCED_LEVEL: &str = "Advanced";

pub struct ContextualBooster;

impl Default for ContextualBooster {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextualBooster {
    pub fn new() -> Self {
        Self
    }

    /// Re-score a generated list against time-of-day, day-of-week and
    /// learner-history context. Missing optional product fields simply
    /// mean the rule does not apply.
    pub fn enhance(
        &self,
        recommendations: Vec<Recommendation>,
        profile: &LearnerProfile,
        now: DateTime<FixedOffset>,
    ) -> Vec<Recommendation> {
        let hour = now.hour();
        let is_weekend = matches!(now.weekday(), Weekday::Sat | Weekday::Sun);

        let mut boosted: Vec<Recommendation> = recommendations
            .into_iter()
            .map(|mut rec| {
                let category = rec.product.category.as_str();

                if MORNING_HOURS.contains(&hour) && MORNING_CATEGORIES.contains(&category) {
                    rec.score *= MORNING_MULTIPLIER;
                    rec.reason = format!("Perfect for morning learning: {}", rec.reason);
                } else if EVENING_HOURS.contains(&hour) && EVENING_CATEGORIES.contains(&category) {
                    rec.score *= EVENING_MULTIPLIER;
                    rec.reason = format!("Great for evening study: {}", rec.reason);
                }

                if is_weekend
                    && rec
                        .product
                        .duration_minutes
                        .is_some_and(|d| d > WEEKEND_MIN_DURATION_MINUTES)
                {
                    rec.score *= WEEKEND_MULTIPLIER;
                    rec.reason = format!("Weekend deep-dive: {}", rec.reason);
                }

                if profile.total_learning_time > ADVANCED_LEARNING_TIME_MINUTES
                    && rec.product.level.as_deref() == Some(ADVANCED_LEVEL)
                {
                    rec.score *= ADVANCED_MULTIPLIER;
                    rec.reason = format!("For your advanced level: {}", rec.reason);
                }

                if profile.average_completion_rate > RECENT_ACTIVITY_COMPLETION_RATE {
                    rec.score *= RECENT_ACTIVITY_MULTIPLIER;
                    rec.reason = format!("Based on your recent activity: {}", rec.reason);
                }

                rec.score = rec.score.min(MAX_SCORE);
                rec
            })
            .collect();

        boosted.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        boosted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, RecommendationType};
    use crate::services::profile::build_learner_profile;
    use chrono::TimeZone;
    use graphy_client::Learner;

    fn course(id: &str, category: &str, level: Option<&str>, duration: Option<f64>) -> Product {
        Product {
            id: id.into(),
            title: format!("Course {id}"),
            description: String::new(),
            category: category.into(),
            tags: vec![],
            price: 0.0,
            currency: "INR".into(),
            instructor: "Instructor".into(),
            level: level.map(str::to_string),
            language: "English".into(),
            duration_minutes: duration,
            syllabus: vec![],
        }
    }

    fn rec(product: Product, score: f64) -> Recommendation {
        Recommendation {
            product_id: product.id.clone(),
            product,
            rec_type: RecommendationType::CategoryMatch,
            reason: "Based on your interest in testing".into(),
            score,
        }
    }

    fn empty_profile() -> LearnerProfile {
        build_learner_profile(Learner::demo("t@example.com"), vec![], vec![], &[])
    }

    fn profile_with(total_learning_time: f64, average_completion_rate: f64) -> LearnerProfile {
        let mut profile = empty_profile();
        profile.total_learning_time = total_learning_time;
        profile.average_completion_rate = average_completion_rate;
        profile
    }

    /// 2025-06-02 was a Monday.
    fn monday_at(hour: u32) -> DateTime<FixedOffset> {
        chrono::FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 2, hour, 0, 0)
            .unwrap()
    }

    /// 2025-06-07 was a Saturday.
    fn saturday_at(hour: u32) -> DateTime<FixedOffset> {
        chrono::FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 7, hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn morning_boost_applies_to_philosophy_and_yoga() {
        let booster = ContextualBooster::new();
        let recs = vec![
            rec(course("phil", "Philosophy", None, None), 0.5),
            rec(course("hist", "History", None, None), 0.5),
        ];

        let out = booster.enhance(recs, &empty_profile(), monday_at(7));

        let phil = out.iter().find(|r| r.product_id == "phil").unwrap();
        let hist = out.iter().find(|r| r.product_id == "hist").unwrap();
        assert!((phil.score - 0.6).abs() < 1e-9);
        assert!(phil.reason.starts_with("Perfect for morning learning: "));
        assert_eq!(hist.score, 0.5);
    }

    #[test]
    fn evening_boost_applies_to_writing_and_language() {
        let booster = ContextualBooster::new();
        let recs = vec![rec(course("lang", "Language", None, None), 0.4)];

        let out = booster.enhance(recs, &empty_profile(), monday_at(19));

        assert!((out[0].score - 0.4 * 1.15).abs() < 1e-9);
        assert!(out[0].reason.starts_with("Great for evening study: "));
    }

    #[test]
    fn morning_and_evening_windows_are_exclusive() {
        let booster = ContextualBooster::new();
        // Language would match the evening rule, but it is morning.
        let recs = vec![rec(course("lang", "Language", None, None), 0.4)];

        let out = booster.enhance(recs, &empty_profile(), monday_at(7));

        assert_eq!(out[0].score, 0.4);
    }

    #[test]
    fn weekend_boost_requires_a_long_course() {
        let booster = ContextualBooster::new();
        let recs = vec![
            rec(course("long", "History", None, Some(200.0)), 0.5),
            rec(course("short", "History", None, Some(90.0)), 0.5),
            rec(course("unknown", "History", None, None), 0.5),
        ];

        let out = booster.enhance(recs, &empty_profile(), saturday_at(14));

        let long = out.iter().find(|r| r.product_id == "long").unwrap();
        assert!((long.score - 0.55).abs() < 1e-9);
        assert!(long.reason.starts_with("Weekend deep-dive: "));
        for id in ["short", "unknown"] {
            let untouched = out.iter().find(|r| r.product_id == id).unwrap();
            assert_eq!(untouched.score, 0.5);
        }
    }

    #[test]
    fn advanced_boost_requires_learning_time_and_level() {
        let booster = ContextualBooster::new();
        let recs = vec![
            rec(course("adv", "History", Some("Advanced"), None), 0.5),
            rec(course("beg", "History", Some("Beginner"), None), 0.5),
            rec(course("none", "History", None, None), 0.5),
        ];

        let out = booster.enhance(recs, &profile_with(1200.0, 0.0), monday_at(14));

        let adv = out.iter().find(|r| r.product_id == "adv").unwrap();
        assert!((adv.score - 0.625).abs() < 1e-9);
        assert!(adv.reason.starts_with("For your advanced level: "));
        for id in ["beg", "none"] {
            assert_eq!(out.iter().find(|r| r.product_id == id).unwrap().score, 0.5);
        }

        // Same recommendations, not enough learning time: no boost.
        let recs = vec![rec(course("adv", "History", Some("Advanced"), None), 0.5)];
        let out = booster.enhance(recs, &profile_with(500.0, 0.0), monday_at(14));
        assert_eq!(out[0].score, 0.5);
    }

    #[test]
    fn recent_activity_bonus_applies_to_every_entry() {
        let booster = ContextualBooster::new();
        let recs = vec![rec(course("any", "History", None, None), 0.4)];

        let out = booster.enhance(recs, &profile_with(0.0, 85.0), monday_at(14));

        assert!((out[0].score - 0.42).abs() < 1e-9);
        assert!(out[0].reason.starts_with("Based on your recent activity: "));
    }

    #[test]
    fn boosts_compound_sequentially_and_clamp_at_one() {
        let booster = ContextualBooster::new();
        // Saturday morning, long advanced Yoga course, active learner:
        // 0.9 * 1.2 * 1.1 * 1.25 * 1.05 = 1.55925 -> clamped to 1.0.
        let recs = vec![rec(
            course("max", "Yoga", Some("Advanced"), Some(300.0)),
            0.9,
        )];

        let out = booster.enhance(recs, &profile_with(1500.0, 90.0), saturday_at(8));

        assert_eq!(out[0].score, 1.0);
        assert!(out[0].reason.starts_with("Based on your recent activity: "));
        assert!(out[0].reason.contains("For your advanced level: "));
        assert!(out[0].reason.contains("Weekend deep-dive: "));
        assert!(out[0].reason.contains("Perfect for morning learning: "));

        // Below the clamp the product of multipliers is exact.
        let recs = vec![rec(
            course("mid", "Yoga", Some("Advanced"), Some(300.0)),
            0.5,
        )];
        let out = booster.enhance(recs, &profile_with(1500.0, 90.0), saturday_at(8));
        assert!((out[0].score - 0.5 * 1.2 * 1.1 * 1.25 * 1.05).abs() < 1e-9);
    }

    #[test]
    fn list_is_resorted_after_boosting() {
        let booster = ContextualBooster::new();
        let recs = vec![
            rec(course("leader", "History", None, None), 0.6),
            rec(course("yoga", "Yoga", None, None), 0.55),
        ];

        // Morning: the yoga course overtakes the previous leader.
        let out = booster.enhance(recs, &empty_profile(), monday_at(8));

        assert_eq!(out[0].product_id, "yoga");
        assert!(out[0].score > out[1].score);
    }

    #[test]
    fn enhancement_is_deterministic_for_a_fixed_instant() {
        let booster = ContextualBooster::new();
        let make = || {
            vec![
                rec(course("a", "Yoga", Some("Advanced"), Some(300.0)), 0.7),
                rec(course("b", "Language", None, Some(90.0)), 0.6),
            ]
        };
        let profile = profile_with(1200.0, 80.0);

        let first = booster.enhance(make(), &profile, saturday_at(9));
        let second = booster.enhance(make(), &profile, saturday_at(9));

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.product_id, b.product_id);
            assert_eq!(a.score, b.score);
            assert_eq!(a.reason, b.reason);
        }
    }
}

//! Property-based tests for the simulated scenario generator
//!
//! Tests invariants:
//! - Sampled values stay inside their bounds for any seed
//! - Guest identity is echoed, never sampled
//! - Same seed yields the same bundles

use proptest::prelude::*;

use crate::core::scenario::vocabulary as vocab;
use crate::core::scenario::{
    FeedbackUpload, RoomType, ScenarioSource, Sentiment, SimulatedScenarios,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Guest ids as a user might type them: non-blank, mixed scripts allowed.
fn arb_guest_id() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9-]{1,12}",
        "[0-9]{1,8}",
        "\\PC{1,16}".prop_filter("non-blank", |s| !s.trim().is_empty()),
    ]
}

fn csv_upload() -> (tempfile::TempDir, FeedbackUpload) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feedback.csv");
    std::fs::write(&path, "review\nok\n").unwrap();
    let upload = FeedbackUpload::attach(&path).unwrap();
    (dir, upload)
}

// ============================================================================
// Guest personalization
// ============================================================================

proptest! {
    #[test]
    fn guest_profile_echoes_id(seed in any::<u64>(), guest_id in arb_guest_id()) {
        let bundle = SimulatedScenarios::with_seed(seed).personalize_guest_experience(&guest_id);
        prop_assert_eq!(&bundle.profile.id, &guest_id);
        prop_assert_eq!(bundle.profile.name, format!("Guest {guest_id}"));
    }

    #[test]
    fn guest_values_in_bounds(seed in any::<u64>(), guest_id in arb_guest_id()) {
        let bundle = SimulatedScenarios::with_seed(seed).personalize_guest_experience(&guest_id);

        prop_assert!(vocab::GUEST_AGE.contains(&bundle.profile.age));
        prop_assert!(vocab::PREVIOUS_VISITS.contains(&bundle.profile.previous_visits));
        prop_assert!(vocab::NATIONALITIES.contains(&bundle.profile.nationality));

        prop_assert_eq!(bundle.amenities.len(), vocab::AMENITIES.len());
        for (amenity, (name, _, bounds)) in bundle.amenities.iter().zip(vocab::AMENITIES) {
            prop_assert_eq!(amenity.name, name);
            prop_assert!(bounds.contains(&amenity.interest_score));
        }
        for feature in &bundle.room_features {
            prop_assert!(vocab::FEATURE_IMPORTANCE.contains(&feature.importance));
        }
        for dining in &bundle.dining {
            prop_assert!(vocab::DINING_SCORE.contains(&dining.score));
        }
        prop_assert_eq!(bundle.activities, vocab::ACTIVITIES.to_vec());
    }
}

// ============================================================================
// Revenue, feedback, staff
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn revenue_values_in_bounds(seed in any::<u64>()) {
        let bundle = SimulatedScenarios::with_seed(seed).optimize_revenue_management();

        prop_assert_eq!(bundle.pricing.len(), vocab::WINDOW_DAYS * RoomType::ALL.len());
        for row in &bundle.pricing {
            prop_assert!(vocab::NIGHTLY_PRICE.contains(&row.price));
        }
        prop_assert_eq!(bundle.occupancy.len(), vocab::WINDOW_DAYS);
        for day in &bundle.occupancy {
            prop_assert!(vocab::OCCUPANCY.contains(&day.occupancy));
        }
        prop_assert!(vocab::PROJECTED_REVENUE.contains(&bundle.projected_revenue));
        prop_assert!(vocab::REVENUE_INCREASE_PCT.contains(&bundle.revenue_increase_pct));
    }

    #[test]
    fn feedback_values_in_bounds(seed in any::<u64>()) {
        let (_dir, upload) = csv_upload();
        let bundle = SimulatedScenarios::with_seed(seed).analyze_guest_feedback(&upload);

        let labels: Vec<Sentiment> = bundle.sentiment.iter().map(|s| s.sentiment).collect();
        prop_assert_eq!(labels, Sentiment::ALL.to_vec());
        for (count, (_, bounds)) in bundle.sentiment.iter().zip(vocab::SENTIMENT_COUNTS) {
            prop_assert!(bounds.contains(&count.count));
        }
        for topic in &bundle.topics {
            prop_assert!(vocab::TOPIC_MENTIONS.contains(&topic.mentions));
        }
        prop_assert_eq!(bundle.trend.len(), vocab::WINDOW_DAYS);
        for point in &bundle.trend {
            prop_assert!(vocab::SENTIMENT_SCORE.contains(&point.score));
        }
    }

    #[test]
    fn staff_values_in_bounds(seed in any::<u64>()) {
        let bundle = SimulatedScenarios::with_seed(seed).analyze_staff_performance();

        prop_assert!(vocab::OVERALL_EFFICIENCY.contains(&bundle.overall_efficiency));
        for record in &bundle.departments {
            prop_assert!(vocab::DEPARTMENT_EFFICIENCY.contains(&record.efficiency_score));
        }
        prop_assert_eq!(bundle.correlation.len(), vocab::CORRELATION_POINTS);
        for point in &bundle.correlation {
            prop_assert!(vocab::STAFF_PERFORMANCE.contains(&point.staff_performance));
            prop_assert!(vocab::GUEST_SATISFACTION.contains(&point.guest_satisfaction));
        }
        let allocation: Vec<(u32, u32)> = bundle
            .allocation
            .iter()
            .map(|a| (a.current, a.optimized))
            .collect();
        prop_assert_eq!(allocation, vocab::ALLOCATION.to_vec());
    }

    #[test]
    fn same_seed_same_bundles(seed in any::<u64>(), guest_id in arb_guest_id()) {
        let a = SimulatedScenarios::with_seed(seed);
        let b = SimulatedScenarios::with_seed(seed);
        prop_assert_eq!(
            a.personalize_guest_experience(&guest_id),
            b.personalize_guest_experience(&guest_id)
        );
        prop_assert_eq!(a.optimize_revenue_management(), b.optimize_revenue_management());
        prop_assert_eq!(a.analyze_staff_performance(), b.analyze_staff_performance());
    }
}

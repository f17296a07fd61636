//! Fixed vocabularies and sampling bounds for the simulated analytics.
//!
//! Nothing here is derived from user input.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use super::models::{
    Department, DietaryRestriction, FeedbackCategory, Priority, RoomType, Sentiment,
};

// ── Date window ─────────────────────────────────────────────────────────────

/// First day of the simulated window (2024-01-01).
pub const WINDOW_START: (i32, u32, u32) = (2024, 1, 1);
/// Number of days in the window (January 2024).
pub const WINDOW_DAYS: usize = 31;

/// Every date of the fixed January 2024 window, in order.
pub fn window_dates() -> Vec<NaiveDate> {
    let (year, month, day) = WINDOW_START;
    NaiveDate::from_ymd_opt(year, month, day)
        .into_iter()
        .flat_map(|start| start.iter_days().take(WINDOW_DAYS))
        .collect()
}

// ── Guest personalization ───────────────────────────────────────────────────

pub const GUEST_AGE: RangeInclusive<u8> = 25..=65;
pub const PREVIOUS_VISITS: RangeInclusive<u8> = 0..=5;

pub const NATIONALITIES: [&str; 5] = ["USA", "UK", "Germany", "Japan", "Australia"];

/// `None` is a valid draw: most guests have no restriction recorded.
pub const DIETARY_OPTIONS: [Option<DietaryRestriction>; 4] = [
    None,
    Some(DietaryRestriction::Vegetarian),
    Some(DietaryRestriction::Vegan),
    Some(DietaryRestriction::GlutenFree),
];

/// (name, reason, interest bounds)
pub const AMENITIES: [(&str, &str, RangeInclusive<f64>); 3] = [
    ("Spa Treatment", "Based on previous bookings", 0.7..=1.0),
    ("Guided City Tour", "Popular with first-time visitors", 0.6..=0.9),
    ("In-room Dining", "Matches preference for privacy", 0.8..=1.0),
];

pub const ROOM_FEATURES: [&str; 4] = ["View", "Size", "Quietness", "Tech Amenities"];
pub const FEATURE_IMPORTANCE: RangeInclusive<f64> = 0.5..=1.0;

pub const RESTAURANTS: [(&str, &str); 3] = [
    ("The Gourmet Room", "French"),
    ("Sushi Express", "Japanese"),
    ("Vegan Delights", "Vegan"),
];
pub const DINING_SCORE: RangeInclusive<f64> = 0.7..=1.0;

pub const ACTIVITIES: [&str; 4] = [
    "Morning yoga session",
    "Wine tasting event",
    "Local art gallery visit",
    "Poolside relaxation",
];

// ── Revenue management ──────────────────────────────────────────────────────

pub const NIGHTLY_PRICE: RangeInclusive<f64> = 100.0..=500.0;
pub const OCCUPANCY: RangeInclusive<f64> = 0.5..=1.0;
pub const PROJECTED_REVENUE: RangeInclusive<f64> = 500_000.0..=1_000_000.0;
pub const REVENUE_INCREASE_PCT: RangeInclusive<f64> = 5.0..=15.0;

/// Prices in [`RoomType::ALL`] order.
pub const COMPETITORS: [(&str, [u32; 3]); 3] = [
    ("Our Hotel", [250, 350, 450]),
    ("Competitor A", [240, 340, 440]),
    ("Competitor B", [260, 360, 460]),
];

pub const UPSELLS: [(&str, &str, f64); 3] = [
    ("Room Upgrade", "Business Travelers", 5000.0),
    ("Spa Package", "Couples", 3000.0),
    ("Airport Transfer", "International Guests", 2000.0),
];

pub const PRICED_ROOMS: [RoomType; 3] = RoomType::ALL;

// ── Feedback sentiment ──────────────────────────────────────────────────────

pub const SENTIMENT_COUNTS: [(Sentiment, RangeInclusive<u32>); 3] = [
    (Sentiment::Positive, 50..=100),
    (Sentiment::Neutral, 20..=50),
    (Sentiment::Negative, 10..=30),
];

pub const TOPICS: [(FeedbackCategory, &str); 6] = [
    (FeedbackCategory::Room, "Cleanliness"),
    (FeedbackCategory::Room, "Comfort"),
    (FeedbackCategory::Service, "Staff Friendliness"),
    (FeedbackCategory::Service, "Check-in Process"),
    (FeedbackCategory::Facilities, "Pool"),
    (FeedbackCategory::Facilities, "Gym"),
];
pub const TOPIC_MENTIONS: RangeInclusive<u32> = 20..=50;

pub const SENTIMENT_SCORE: RangeInclusive<f64> = 0.5..=1.0;

pub const POSITIVE_ASPECTS: [&str; 3] = ["Friendly staff", "Clean rooms", "Great location"];

pub const IMPROVEMENT_AREAS: [&str; 3] = [
    "Slow check-in process",
    "Limited parking",
    "Outdated gym equipment",
];

pub const FEEDBACK_RECOMMENDATIONS: [(FeedbackCategory, &str, &str); 3] = [
    (
        FeedbackCategory::Service,
        "Implement express check-in for frequent guests",
        "Reduce wait times by 30%",
    ),
    (
        FeedbackCategory::Facilities,
        "Upgrade gym equipment",
        "Increase gym usage by 25%",
    ),
    (
        FeedbackCategory::Room,
        "Add smart room controls",
        "Improve guest satisfaction scores by 15%",
    ),
];

// ── Staff performance ───────────────────────────────────────────────────────

pub const OVERALL_EFFICIENCY: RangeInclusive<f64> = 7.0..=9.5;
pub const DEPARTMENT_EFFICIENCY: RangeInclusive<f64> = 6.0..=9.5;

/// (current, optimized) headcount in [`Department::ALL`] order.
pub const ALLOCATION: [(u32, u32); 5] = [(10, 8), (15, 12), (20, 18), (5, 6), (8, 7)];

pub const CORRELATION_POINTS: usize = 50;
pub const STAFF_PERFORMANCE: RangeInclusive<f64> = 6.0..=9.5;
pub const GUEST_SATISFACTION: RangeInclusive<f64> = 7.0..=9.8;

pub const TRAINING_PLAN: [(&str, Priority); 5] = [
    ("Customer Service", Priority::High),
    ("Time Management", Priority::Medium),
    ("Conflict Resolution", Priority::High),
    ("Upselling Techniques", Priority::Low),
    ("Technical Skills", Priority::Medium),
];

pub const STAFF_SUGGESTIONS: [&str; 5] = [
    "Implement a new task management system",
    "Conduct cross-training sessions between departments",
    "Introduce a staff recognition program",
    "Optimize room cleaning processes",
    "Enhance internal communication tools",
];

pub const DEPARTMENTS: [Department; 5] = Department::ALL;

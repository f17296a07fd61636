//! Bundle types returned by a [`ScenarioSource`](super::ScenarioSource).
//!
//! Every bundle is transient: it is built for one explicit user action,
//! owned by the view that requested it, and dropped when that view is left.

use chrono::NaiveDate;
use serde::Serialize;

// ── Closed vocabularies ─────────────────────────────────────────────────────

/// Room categories offered by the hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Standard, RoomType::Deluxe, RoomType::Suite];

    pub fn label(self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-free")]
    GlutenFree,
}

impl DietaryRestriction {
    pub fn label(self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "Vegetarian",
            DietaryRestriction::Vegan => "Vegan",
            DietaryRestriction::GlutenFree => "Gluten-free",
        }
    }
}

/// Hotel departments tracked by the staff analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Department {
    #[serde(rename = "Front Desk")]
    FrontDesk,
    Housekeeping,
    #[serde(rename = "F&B")]
    FoodAndBeverage,
    Concierge,
    Maintenance,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::FrontDesk,
        Department::Housekeeping,
        Department::FoodAndBeverage,
        Department::Concierge,
        Department::Maintenance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::FrontDesk => "Front Desk",
            Department::Housekeeping => "Housekeeping",
            Department::FoodAndBeverage => "F&B",
            Department::Concierge => "Concierge",
            Department::Maintenance => "Maintenance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Top-level grouping of feedback topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeedbackCategory {
    Room,
    Service,
    Facilities,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 3] = [
        FeedbackCategory::Room,
        FeedbackCategory::Service,
        FeedbackCategory::Facilities,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeedbackCategory::Room => "Room",
            FeedbackCategory::Service => "Service",
            FeedbackCategory::Facilities => "Facilities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

// ── Guest personalization ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub nationality: &'static str,
    pub previous_visits: u8,
    pub preferred_room_type: RoomType,
    pub dietary_restrictions: Option<DietaryRestriction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmenityRecommendation {
    pub name: &'static str,
    pub reason: &'static str,
    /// Likelihood of interest, 0..=1.
    pub interest_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomFeatureImportance {
    pub feature: &'static str,
    pub importance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiningRecommendation {
    pub restaurant: &'static str,
    pub cuisine: &'static str,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestBundle {
    pub profile: GuestProfile,
    pub amenities: Vec<AmenityRecommendation>,
    pub room_features: Vec<RoomFeatureImportance>,
    pub dining: Vec<DiningRecommendation>,
    pub activities: Vec<&'static str>,
}

// ── Revenue management ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRow {
    pub date: NaiveDate,
    pub room_type: RoomType,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyForecast {
    pub date: NaiveDate,
    /// Occupancy ratio, 0..=1.
    pub occupancy: f64,
}

/// One hotel's nightly price per room type, in [`RoomType::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorSeries {
    pub name: &'static str,
    pub prices: [u32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpsellOpportunity {
    pub item: &'static str,
    pub target_segment: &'static str,
    pub potential_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueBundle {
    pub pricing: Vec<PricingRow>,
    pub occupancy: Vec<OccupancyForecast>,
    pub competitors: Vec<CompetitorSeries>,
    pub upsells: Vec<UpsellOpportunity>,
    pub projected_revenue: f64,
    pub revenue_increase_pct: f64,
}

impl RevenueBundle {
    /// Pricing rows for a single room type, in date order.
    pub fn prices_for(&self, room_type: RoomType) -> impl Iterator<Item = &PricingRow> {
        self.pricing.iter().filter(move |r| r.room_type == room_type)
    }
}

// ── Feedback sentiment ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackTopic {
    pub category: FeedbackCategory,
    pub topic: &'static str,
    pub mentions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentPoint {
    pub date: NaiveDate,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRecommendation {
    pub category: FeedbackCategory,
    pub suggestion: &'static str,
    pub expected_impact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackBundle {
    pub sentiment: Vec<SentimentCount>,
    pub topics: Vec<FeedbackTopic>,
    pub trend: Vec<SentimentPoint>,
    pub positive_aspects: Vec<&'static str>,
    pub improvement_areas: Vec<&'static str>,
    pub recommendations: Vec<FeedbackRecommendation>,
}

impl FeedbackBundle {
    pub fn total_responses(&self) -> u32 {
        self.sentiment.iter().map(|s| s.count).sum()
    }
}

// ── Staff performance ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffRecord {
    pub department: Department,
    /// Efficiency on a 0..=10 scale.
    pub efficiency_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffAllocation {
    pub department: Department,
    pub current: u32,
    pub optimized: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPoint {
    pub staff_performance: f64,
    pub guest_satisfaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingRecommendation {
    pub employee: String,
    pub department: Department,
    pub training: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffBundle {
    pub overall_efficiency: f64,
    pub departments: Vec<StaffRecord>,
    pub allocation: Vec<StaffAllocation>,
    pub correlation: Vec<CorrelationPoint>,
    pub training: Vec<TrainingRecommendation>,
    pub suggestions: Vec<&'static str>,
}

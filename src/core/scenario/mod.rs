//! Scenario generator: synthetic hospitality analytics.
//!
//! Views never sample data themselves. They call a [`ScenarioSource`], so a
//! real analytics backend can replace [`SimulatedScenarios`] as long as it
//! returns the same bundle shapes.

pub mod models;
pub mod simulated;
pub mod upload;
pub mod vocabulary;

pub use models::*;
pub use simulated::SimulatedScenarios;
pub use upload::FeedbackUpload;

/// Producer of the four analytics bundles.
///
/// Implementations must not fail: missing input is handled by the caller
/// (the action stays disabled), never by the source.
pub trait ScenarioSource: Send + Sync {
    /// Profile, amenities, room-feature weights, dining and activities for
    /// one guest. `guest_id` is non-empty.
    fn personalize_guest_experience(&self, guest_id: &str) -> GuestBundle;

    /// Pricing, occupancy, competitor comparison, upsells and projections for
    /// the January 2024 window.
    fn optimize_revenue_management(&self) -> RevenueBundle;

    /// Sentiment, topic, trend and recommendation summary for the attached
    /// feedback file.
    fn analyze_guest_feedback(&self, upload: &FeedbackUpload) -> FeedbackBundle;

    /// Efficiency, allocation, correlation and training summary.
    fn analyze_staff_performance(&self) -> StaffBundle;
}

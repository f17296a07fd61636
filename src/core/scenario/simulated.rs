//! Random-sampling implementation of [`ScenarioSource`].
//!
//! Every value is a uniform draw over a literal range from
//! [`vocabulary`](super::vocabulary); structure (row counts, order, labels)
//! is fixed.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::models::*;
use super::upload::FeedbackUpload;
use super::vocabulary as vocab;
use super::ScenarioSource;

/// Placeholder analytics backend driven by a seedable RNG.
pub struct SimulatedScenarios {
    rng: Mutex<StdRng>,
}

impl SimulatedScenarios {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sampler: equal seeds yield equal bundle sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic while sampling cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *rng)
    }

    fn sample_profile(guest_id: &str, rng: &mut impl Rng) -> GuestProfile {
        GuestProfile {
            id: guest_id.to_string(),
            name: format!("Guest {guest_id}"),
            age: rng.gen_range(vocab::GUEST_AGE),
            nationality: pick(&vocab::NATIONALITIES, rng),
            previous_visits: rng.gen_range(vocab::PREVIOUS_VISITS),
            preferred_room_type: pick(&RoomType::ALL, rng),
            dietary_restrictions: pick(&vocab::DIETARY_OPTIONS, rng),
        }
    }
}

impl Default for SimulatedScenarios {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform choice from a non-empty fixed vocabulary.
fn pick<T: Copy>(items: &[T], rng: &mut impl Rng) -> T {
    items[rng.gen_range(0..items.len())]
}

impl ScenarioSource for SimulatedScenarios {
    fn personalize_guest_experience(&self, guest_id: &str) -> GuestBundle {
        let bundle = self.with_rng(|rng| {
            let profile = Self::sample_profile(guest_id, rng);

            let amenities = vocab::AMENITIES
                .into_iter()
                .map(|(name, reason, bounds)| AmenityRecommendation {
                    name,
                    reason,
                    interest_score: rng.gen_range(bounds),
                })
                .collect();

            let room_features = vocab::ROOM_FEATURES
                .iter()
                .map(|&feature| RoomFeatureImportance {
                    feature,
                    importance: rng.gen_range(vocab::FEATURE_IMPORTANCE),
                })
                .collect();

            let dining = vocab::RESTAURANTS
                .iter()
                .map(|&(restaurant, cuisine)| DiningRecommendation {
                    restaurant,
                    cuisine,
                    score: rng.gen_range(vocab::DINING_SCORE),
                })
                .collect();

            GuestBundle {
                profile,
                amenities,
                room_features,
                dining,
                activities: vocab::ACTIVITIES.to_vec(),
            }
        });

        log::debug!(
            "Personalized guest {}: {} amenities, {} room features",
            guest_id,
            bundle.amenities.len(),
            bundle.room_features.len()
        );
        bundle
    }

    fn optimize_revenue_management(&self) -> RevenueBundle {
        let dates = vocab::window_dates();

        let bundle = self.with_rng(|rng| {
            // Date-major: every room type for day 1, then day 2, ...
            let pricing = dates
                .iter()
                .flat_map(|&date| vocab::PRICED_ROOMS.into_iter().map(move |room_type| (date, room_type)))
                .map(|(date, room_type)| PricingRow {
                    date,
                    room_type,
                    price: rng.gen_range(vocab::NIGHTLY_PRICE),
                })
                .collect();

            let occupancy = dates
                .iter()
                .map(|&date| OccupancyForecast {
                    date,
                    occupancy: rng.gen_range(vocab::OCCUPANCY),
                })
                .collect();

            let competitors = vocab::COMPETITORS
                .iter()
                .map(|&(name, prices)| CompetitorSeries { name, prices })
                .collect();

            let upsells = vocab::UPSELLS
                .iter()
                .map(|&(item, target_segment, potential_revenue)| UpsellOpportunity {
                    item,
                    target_segment,
                    potential_revenue,
                })
                .collect();

            RevenueBundle {
                pricing,
                occupancy,
                competitors,
                upsells,
                projected_revenue: rng.gen_range(vocab::PROJECTED_REVENUE),
                revenue_increase_pct: rng.gen_range(vocab::REVENUE_INCREASE_PCT),
            }
        });

        log::debug!(
            "Revenue scenario: {} pricing rows, {} occupancy rows",
            bundle.pricing.len(),
            bundle.occupancy.len()
        );
        bundle
    }

    fn analyze_guest_feedback(&self, upload: &FeedbackUpload) -> FeedbackBundle {
        // The attached file is never opened; output depends only on the RNG.
        log::debug!(
            "Analyzing feedback for {} ({} bytes, contents not inspected)",
            upload.file_name(),
            upload.size_bytes()
        );

        let dates = vocab::window_dates();

        self.with_rng(|rng| {
            let sentiment = vocab::SENTIMENT_COUNTS
                .into_iter()
                .map(|(sentiment, bounds)| SentimentCount {
                    sentiment,
                    count: rng.gen_range(bounds),
                })
                .collect();

            let topics = vocab::TOPICS
                .iter()
                .map(|&(category, topic)| FeedbackTopic {
                    category,
                    topic,
                    mentions: rng.gen_range(vocab::TOPIC_MENTIONS),
                })
                .collect();

            let trend = dates
                .iter()
                .map(|&date| SentimentPoint {
                    date,
                    score: rng.gen_range(vocab::SENTIMENT_SCORE),
                })
                .collect();

            let recommendations = vocab::FEEDBACK_RECOMMENDATIONS
                .iter()
                .map(|&(category, suggestion, expected_impact)| FeedbackRecommendation {
                    category,
                    suggestion,
                    expected_impact,
                })
                .collect();

            FeedbackBundle {
                sentiment,
                topics,
                trend,
                positive_aspects: vocab::POSITIVE_ASPECTS.to_vec(),
                improvement_areas: vocab::IMPROVEMENT_AREAS.to_vec(),
                recommendations,
            }
        })
    }

    fn analyze_staff_performance(&self) -> StaffBundle {
        let bundle = self.with_rng(|rng| {
            let overall_efficiency = rng.gen_range(vocab::OVERALL_EFFICIENCY);

            let departments = vocab::DEPARTMENTS
                .iter()
                .map(|&department| StaffRecord {
                    department,
                    efficiency_score: rng.gen_range(vocab::DEPARTMENT_EFFICIENCY),
                })
                .collect();

            let allocation = vocab::DEPARTMENTS
                .iter()
                .zip(vocab::ALLOCATION)
                .map(|(&department, (current, optimized))| StaffAllocation {
                    department,
                    current,
                    optimized,
                })
                .collect();

            let correlation = (0..vocab::CORRELATION_POINTS)
                .map(|_| CorrelationPoint {
                    staff_performance: rng.gen_range(vocab::STAFF_PERFORMANCE),
                    guest_satisfaction: rng.gen_range(vocab::GUEST_SATISFACTION),
                })
                .collect();

            // Departments are drawn with replacement, so repeats are expected.
            let training = vocab::TRAINING_PLAN
                .iter()
                .enumerate()
                .map(|(i, &(training, priority))| TrainingRecommendation {
                    employee: format!("Employee {}", i + 1),
                    department: pick(&vocab::DEPARTMENTS, rng),
                    training,
                    priority,
                })
                .collect();

            StaffBundle {
                overall_efficiency,
                departments,
                allocation,
                correlation,
                training,
                suggestions: vocab::STAFF_SUGGESTIONS.to_vec(),
            }
        });

        log::debug!(
            "Staff scenario: efficiency {:.2}, {} correlation points",
            bundle.overall_efficiency,
            bundle.correlation.len()
        );
        bundle
    }
}

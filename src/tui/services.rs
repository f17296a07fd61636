use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::scenario::{ScenarioSource, SimulatedScenarios};

/// Centralized handle to the analytics backend.
///
/// Created once at startup, then passed by ref to views that need it.
/// The source sits behind a trait object so a real backend can replace
/// the simulated one without touching the views.
#[derive(Clone)]
pub struct Services {
    pub scenarios: Arc<dyn ScenarioSource>,
}

impl Services {
    /// Build services from config (seeded when `dashboard.seed` is set).
    pub fn init(config: &AppConfig) -> Self {
        match config.dashboard.seed {
            Some(seed) => log::info!("Scenario generator seeded with {seed}"),
            None => log::info!("Scenario generator seeded from entropy"),
        }
        Self::with_source(Arc::new(SimulatedScenarios::from_seed(
            config.dashboard.seed,
        )))
    }

    pub fn with_source(scenarios: Arc<dyn ScenarioSource>) -> Self {
        Self { scenarios }
    }
}

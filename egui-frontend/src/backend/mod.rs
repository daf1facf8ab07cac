//! # Backend Module for egui Frontend
//!
//! This backend module provides direct access to the dashboard domain services.
//! Everything here is synchronous and UI agnostic:
//! - Input parsing with blank-field defaults
//! - Metric calculation (savings and goal progress)
//! - Synthetic chart sample generation from an injectable source
//! - Currency and percentage formatting

use log::info;
use shared::InputDefaults;
use crate::config::DashboardConfig;

pub mod domain;

use domain::sample_data_service::{RandomSampleSource, SampleSource, SequenceSampleSource};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub input_service: domain::InputService,
    pub metrics_service: domain::MetricsService,
    pub sample_data_service: domain::SampleDataService,
}

impl Backend {
    /// Create a backend from configuration.
    ///
    /// Chart samples come from the configured sequence if there is one,
    /// otherwise from a random source (seeded when `sample_seed` is set).
    pub fn new(config: &DashboardConfig) -> Self {
        let source: Box<dyn SampleSource> = match (&config.sample_sequence, config.sample_seed) {
            (Some(values), _) => {
                info!("🎲 Replaying {} configured chart samples", values.len());
                Box::new(SequenceSampleSource::new(values.clone()))
            }
            (None, Some(seed)) => {
                info!("🎲 Using seeded sample source (seed={})", seed);
                Box::new(RandomSampleSource::seeded(seed))
            }
            (None, None) => Box::new(RandomSampleSource::from_os_rng()),
        };
        Self::with_sample_source(config.defaults, source)
    }

    /// Create a backend with an explicit sample source
    pub fn with_sample_source(defaults: InputDefaults, source: Box<dyn SampleSource>) -> Self {
        Backend {
            input_service: domain::InputService::new(defaults),
            metrics_service: domain::MetricsService::new(),
            sample_data_service: domain::SampleDataService::new(source),
        }
    }
}

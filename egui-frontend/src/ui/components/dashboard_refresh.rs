//! # Dashboard Refresh Module
//!
//! This module runs one refresh cycle, triggered by the "Update Dashboard" button
//! (or Enter in any input).
//!
//! ## Refresh Flow:
//! 1. Parse the four inputs (blank fields take their defaults)
//! 2. On any parse error: show a validation message and stop; labels and charts keep
//!    their previous contents
//! 3. Compute savings and goal progress; savings that overflow abort the same way
//! 4. Update the metric panel labels
//! 5. Draw a fresh set of chart samples and redraw every chart from scratch

use log::{info, warn};
use crate::backend::domain::{InputErrors, MetricsError};
use crate::ui::app_state::FinanceDashboardApp;

/// Why a refresh was abandoned
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Please fix the highlighted fields: {0}")]
    Input(#[from] InputErrors),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

impl FinanceDashboardApp {
    /// Recompute metrics and redraw all charts from the current form input
    pub fn refresh_dashboard(&mut self) -> Result<(), RefreshError> {
        let inputs = match self.backend.input_service.parse_inputs(&self.form.inputs) {
            Ok(inputs) => inputs,
            Err(errors) => {
                warn!(
                    "⚠️ Dashboard refresh aborted, {} invalid field(s): {}",
                    errors.errors().len(),
                    errors
                );
                self.form.set_errors(errors.clone());
                return Err(self.record_failure(errors.into()));
            }
        };

        let metrics = match self.backend.metrics_service.calculate(&inputs) {
            Ok(metrics) => metrics,
            Err(error) => {
                warn!("⚠️ Dashboard refresh aborted: {}", error);
                self.form.clear_errors();
                return Err(self.record_failure(error.into()));
            }
        };
        self.metrics.update(&inputs, &metrics);

        let samples = self.backend.sample_data_service.next_samples();
        self.charts.redraw(metrics.progress_percent, &samples);

        self.form.clear_errors();
        self.ui.clear_messages();
        self.ui.refresh_count += 1;

        info!(
            "💰 Dashboard refreshed (#{}) savings={:.2} progress={:.1}%",
            self.ui.refresh_count, metrics.savings, metrics.progress_percent
        );
        Ok(())
    }

    fn record_failure(&mut self, error: RefreshError) -> RefreshError {
        self.ui.set_error(error.to_string());
        error
    }
}

//! # App State Module
//!
//! This module defines the central application state structure and initialization logic
//! for the finance dashboard.
//!
//! ## Key Types:
//! - `FinanceDashboardApp` - Main application state struct
//!
//! ## State Management:
//! The app struct owns every piece of retained state (form text, metric labels,
//! chart canvases, feedback messages) and the backend services. Nothing lives in
//! globals; the eframe update loop borrows the app mutably for each frame.

use log::info;
use crate::backend::Backend;
use crate::config::DashboardConfig;
use crate::ui::state::{ChartState, FormState, MetricLabels, UIState};

/// Main application struct for the egui finance dashboard
pub struct FinanceDashboardApp {
    pub backend: Backend,

    pub form: FormState,
    pub metrics: MetricLabels,
    pub charts: ChartState,
    pub ui: UIState,
}

impl FinanceDashboardApp {
    /// Create the app for an eframe window
    pub fn new(cc: &eframe::CreationContext<'_>, config: &DashboardConfig) -> Self {
        info!("🚀 Initializing FinanceDashboardApp");

        crate::ui::setup_dashboard_style(&cc.egui_ctx);

        Self::with_backend(Backend::new(config))
    }

    /// Create the app around an existing backend
    pub fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            form: FormState::new(),
            metrics: MetricLabels::new(),
            charts: ChartState::new(),
            ui: UIState::new(),
        }
    }
}

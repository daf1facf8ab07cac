//! # App Coordinator Module
//!
//! This module contains the main update loop for the dashboard window.
//!
//! ## Application Flow:
//! 1. Render the input form; a click or Enter triggers a dashboard refresh
//! 2. Show validation feedback, if any
//! 3. Render the metric panels
//! 4. Paint the gauge, trend and expense canvases from their retained items
//!
//! Charts are only redrawn by a refresh; ordinary frames just repaint the
//! items already held by each canvas.

use eframe::egui;
use crate::ui::app_state::FinanceDashboardApp;
use crate::ui::components::theme::colors;

const SECTION_SPACING: f32 = 12.0;

impl eframe::App for FinanceDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(SECTION_SPACING);

                    if self.render_input_form(ui) {
                        if let Err(e) = self.refresh_dashboard() {
                            log::debug!("Refresh rejected, keeping previous dashboard: {}", e);
                        }
                    }

                    self.render_messages(ui);
                    ui.add_space(SECTION_SPACING);

                    self.render_metric_panels(ui);
                    ui.add_space(SECTION_SPACING);

                    self.charts.gauge.show(ui);
                    ui.add_space(SECTION_SPACING);
                    self.charts.trend.show(ui);
                    ui.add_space(SECTION_SPACING);
                    self.charts.expenses.show(ui);
                    ui.add_space(SECTION_SPACING);
                });
            });
        });
    }
}

impl FinanceDashboardApp {
    /// Render error messages
    pub fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.ui.error_message {
            ui.colored_label(colors::TEXT_ERROR, format!("❌ {}", error));
        }
    }
}

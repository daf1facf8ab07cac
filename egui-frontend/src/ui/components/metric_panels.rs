//! # Metric Panels Module
//!
//! Five colored boxes in a row showing balance, income, expenses, savings and
//! goal progress, each with its caption underneath.

use eframe::egui;
use crate::ui::app_state::FinanceDashboardApp;
use crate::ui::components::theme::colors;
use crate::ui::state::MetricKind;

const PANEL_SIZE: egui::Vec2 = egui::vec2(140.0, 60.0);
const PANEL_GAP: f32 = 10.0;

/// Background color of a metric panel
pub fn panel_color(kind: MetricKind) -> egui::Color32 {
    match kind {
        MetricKind::Balance => colors::BALANCE_PANEL,
        MetricKind::Income => colors::INCOME_PANEL,
        MetricKind::Expenses => colors::EXPENSES_PANEL,
        MetricKind::Savings => colors::SAVINGS_PANEL,
        MetricKind::GoalProgress => colors::GOAL_PROGRESS_PANEL,
    }
}

impl FinanceDashboardApp {
    /// Render the metric panel row
    pub fn render_metric_panels(&self, ui: &mut egui::Ui) {
        let count = MetricKind::ALL.len() as f32;
        let row_width = count * PANEL_SIZE.x + (count - 1.0) * PANEL_GAP;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = PANEL_GAP;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

            for kind in MetricKind::ALL {
                ui.vertical(|ui| {
                    self.draw_metric_panel(ui, kind);
                    ui.label(
                        egui::RichText::new(kind.label())
                            .size(10.0)
                            .color(colors::TEXT_SECONDARY),
                    );
                });
            }
        });
    }

    fn draw_metric_panel(&self, ui: &mut egui::Ui, kind: MetricKind) {
        let (rect, _response) = ui.allocate_exact_size(PANEL_SIZE, egui::Sense::hover());
        let painter = ui.painter();

        painter.rect_filled(rect, egui::Rounding::same(4.0), panel_color(kind));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            self.metrics.text(kind),
            egui::FontId::proportional(14.0),
            colors::TEXT_PRIMARY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_panel_has_a_distinct_color() {
        let colors: Vec<egui::Color32> = MetricKind::ALL.iter().map(|k| panel_color(*k)).collect();

        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(panel_color(MetricKind::Savings), egui::Color32::from_rgb(0x81, 0xC7, 0x84));
    }
}

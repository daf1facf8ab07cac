//! # Line Chart Module
//!
//! Monthly spending trend drawn as a polyline with circular point markers.
//!
//! Sample `i` is plotted at `x = origin_x + step_x * i` and
//! `y = baseline_y - sample`, so larger samples sit higher on the canvas.

use eframe::egui;
use crate::ui::components::canvas::Canvas;
use crate::ui::components::theme::CURRENT_THEME;

pub const LINE_CHART_CAPTION: &str = "Monthly Spending Trend";

/// Configuration for line chart placement and styling
#[derive(Debug, Clone)]
pub struct LineChartConfig {
    pub origin_x: f32,
    pub step_x: f32,
    pub baseline_y: f32,
    pub line_width: f32,
    pub marker_radius: f32,
    pub color: egui::Color32,
    pub caption_pos: egui::Pos2,
    pub caption_font_size: f32,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            origin_x: 10.0,
            step_x: 50.0,
            baseline_y: 120.0,
            line_width: 2.0,
            marker_radius: 4.0,
            color: CURRENT_THEME.charts.trend_line,
            caption_pos: egui::pos2(300.0, 140.0),
            caption_font_size: 10.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineChartRenderer {
    config: LineChartConfig,
}

impl LineChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas positions for each sample
    pub fn point_positions(&self, samples: &[u32]) -> Vec<egui::Pos2> {
        samples
            .iter()
            .enumerate()
            .map(|(i, sample)| {
                egui::pos2(
                    self.config.origin_x + self.config.step_x * i as f32,
                    self.config.baseline_y - *sample as f32,
                )
            })
            .collect()
    }

    /// Clear `canvas` and draw the trend for `samples`
    pub fn draw(&self, canvas: &mut Canvas, samples: &[u32]) {
        let config = &self.config;
        canvas.clear();

        let points = self.point_positions(samples);
        let line_stroke = egui::Stroke::new(config.line_width, config.color);
        for pair in points.windows(2) {
            canvas.line(pair[0], pair[1], line_stroke);
        }

        let marker_outline = egui::Stroke::new(1.0, CURRENT_THEME.charts.outline);
        for point in &points {
            canvas.circle(*point, config.marker_radius, config.color, marker_outline);
        }

        canvas.text(
            config.caption_pos,
            egui::Align2::CENTER_CENTER,
            LINE_CHART_CAPTION,
            config.caption_font_size,
            CURRENT_THEME.typography.secondary,
        );

        log::debug!("📈 Line chart redrawn with {} points", points.len());
    }
}

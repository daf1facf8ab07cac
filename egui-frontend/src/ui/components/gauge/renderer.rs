//! # Gauge Renderer
//!
//! Records the savings gauge onto a canvas: background ring, progress slice,
//! centered percentage and caption. The canvas is cleared first so repeated
//! refreshes never stack old frames.

use eframe::egui;
use crate::backend::domain::format_percent;
use crate::ui::components::canvas::Canvas;
use crate::ui::components::theme::CURRENT_THEME;
use super::geometry::{sweep_degrees, GaugeConfig, GAUGE_START_DEGREES};

pub const GAUGE_CAPTION: &str = "Savings Goal Progress";

/// Savings gauge component
#[derive(Debug, Clone, Default)]
pub struct GaugeRenderer {
    config: GaugeConfig,
}

impl GaugeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear `canvas` and draw the gauge for `progress_percent` (0-100)
    pub fn draw(&self, canvas: &mut Canvas, progress_percent: f64) {
        let config = &self.config;
        canvas.clear();

        // Background ring
        canvas.circle(
            config.center,
            config.radius,
            egui::Color32::TRANSPARENT,
            egui::Stroke::new(config.ring_width, config.ring_color),
        );

        // Progress slice
        canvas.arc(
            config.center,
            config.radius,
            GAUGE_START_DEGREES,
            sweep_degrees(progress_percent),
            config.fill_color,
            egui::Stroke::new(1.0, CURRENT_THEME.charts.outline),
        );

        canvas.text(
            config.center,
            egui::Align2::CENTER_CENTER,
            format_percent(progress_percent, 0),
            config.percent_font_size,
            CURRENT_THEME.typography.primary,
        );
        canvas.text(
            config.center + egui::vec2(0.0, config.caption_offset),
            egui::Align2::CENTER_CENTER,
            GAUGE_CAPTION,
            config.caption_font_size,
            CURRENT_THEME.typography.secondary,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::canvas::{point_on_circle, CanvasItem};

    fn gauge_canvas() -> Canvas {
        Canvas::new(250.0, 150.0, egui::Color32::LIGHT_GRAY)
    }

    fn arc_of(canvas: &Canvas) -> (f32, f32) {
        canvas
            .items()
            .iter()
            .find_map(|item| match item {
                CanvasItem::Arc {
                    start_degrees,
                    sweep_degrees,
                    ..
                } => Some((*start_degrees, *sweep_degrees)),
                _ => None,
            })
            .expect("gauge should draw an arc")
    }

    #[test]
    fn test_arc_sweep_matches_progress() {
        let renderer = GaugeRenderer::new();
        let mut canvas = gauge_canvas();

        for percent in [0.0, 12.5, 25.0, 62.0, 100.0] {
            renderer.draw(&mut canvas, percent);
            let (start, sweep) = arc_of(&canvas);
            assert_eq!(start, 0.0);
            assert!((sweep - (percent as f32) * 3.6).abs() < 1e-4);
        }
    }

    #[test]
    fn test_quarter_progress_ends_at_three_oclock() {
        let renderer = GaugeRenderer::new();
        let mut canvas = gauge_canvas();
        renderer.draw(&mut canvas, 25.0);

        let (start, sweep) = arc_of(&canvas);
        let config = GaugeConfig::default();
        let end = point_on_circle(config.center, config.radius, start + sweep);
        assert!((end.x - 185.0).abs() < 1e-3);
        assert!((end.y - 75.0).abs() < 1e-3);
    }

    #[test]
    fn test_percentage_text_and_caption() {
        let renderer = GaugeRenderer::new();
        let mut canvas = gauge_canvas();
        renderer.draw(&mut canvas, 62.4);

        let texts: Vec<&str> = canvas
            .items()
            .iter()
            .filter_map(|item| match item {
                CanvasItem::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["62%", GAUGE_CAPTION]);
    }

    #[test]
    fn test_redraw_does_not_accumulate() {
        let renderer = GaugeRenderer::new();
        let mut canvas = gauge_canvas();

        renderer.draw(&mut canvas, 40.0);
        let first_frame = canvas.items().len();
        renderer.draw(&mut canvas, 80.0);

        assert_eq!(canvas.items().len(), first_frame);
        assert_eq!(first_frame, 4);
    }
}

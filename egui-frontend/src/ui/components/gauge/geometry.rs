//! # Gauge Geometry
//!
//! Placement, sizing and sweep-angle calculations for the savings gauge.

use eframe::egui;
use crate::ui::components::theme::CURRENT_THEME;

/// Angle at which the progress slice starts (12 o'clock)
pub const GAUGE_START_DEGREES: f32 = 0.0;

/// Configuration for gauge appearance
#[derive(Debug, Clone)]
pub struct GaugeConfig {
    /// Center of the gauge in canvas coordinates
    pub center: egui::Pos2,
    pub radius: f32,
    /// Width of the background ring outline
    pub ring_width: f32,
    pub fill_color: egui::Color32,
    pub ring_color: egui::Color32,
    pub percent_font_size: f32,
    pub caption_font_size: f32,
    /// Vertical distance from the center to the caption
    pub caption_offset: f32,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            center: egui::pos2(125.0, 75.0),
            radius: 60.0,
            ring_width: 3.0,
            fill_color: CURRENT_THEME.charts.gauge_fill,
            ring_color: CURRENT_THEME.charts.gauge_ring,
            percent_font_size: 14.0,
            caption_font_size: 10.0,
            caption_offset: 50.0,
        }
    }
}

/// Clockwise sweep of the progress slice for a percentage in [0, 100]
pub fn sweep_degrees(progress_percent: f64) -> f32 {
    (progress_percent / 100.0 * 360.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_is_proportional_to_progress() {
        assert_eq!(sweep_degrees(0.0), 0.0);
        assert_eq!(sweep_degrees(25.0), 90.0);
        assert_eq!(sweep_degrees(50.0), 180.0);
        assert_eq!(sweep_degrees(100.0), 360.0);
    }

    #[test]
    fn test_default_config_fits_gauge_canvas() {
        let config = GaugeConfig::default();
        assert!(config.center.x - config.radius >= 0.0);
        assert!(config.center.x + config.radius <= 250.0);
        assert!(config.center.y - config.radius >= 0.0);
        assert!(config.center.y + config.radius <= 150.0);
    }
}

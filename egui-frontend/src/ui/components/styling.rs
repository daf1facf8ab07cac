//! # Styling Module
//!
//! Global egui style for the finance dashboard: a light gray window, white
//! text inputs, and slightly larger text than the egui defaults.

use eframe::egui;
use crate::ui::components::theme::CURRENT_THEME;

/// Setup dashboard UI styling for the entire application
pub fn setup_dashboard_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.window_fill = CURRENT_THEME.layout.window_background;
        style.visuals.panel_fill = CURRENT_THEME.layout.window_background;
        style.visuals.override_text_color = Some(CURRENT_THEME.typography.primary);

        // In egui 0.28, text edits use extreme_bg_color
        style.visuals.extreme_bg_color = CURRENT_THEME.layout.input_background;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(20.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);

        style
    });
}

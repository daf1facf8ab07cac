//! # Bar Chart Module
//!
//! Category-wise expenses drawn as stacked bars, one per month, with a legend.
//!
//! ## Layout:
//! - Bar `m` starts at `x = origin_x + step_x * m` and is `bar_width` wide
//! - Segments stack upward from `baseline_y` in [`ExpenseCategory::ALL`] order
//! - Legend swatches sit in a column at `legend_x`, one row per category

use eframe::egui;
use shared::{ExpenseCategory, MonthlyCategoryExpenses};
use crate::ui::components::canvas::Canvas;
use crate::ui::components::theme::CURRENT_THEME;

pub const BAR_CHART_CAPTION: &str = "Category-wise Expenses (Last 5 Months)";

/// Configuration for bar chart placement and styling
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    pub origin_x: f32,
    pub step_x: f32,
    pub bar_width: f32,
    pub baseline_y: f32,
    pub legend_x: f32,
    pub legend_top: f32,
    pub legend_row_height: f32,
    pub legend_swatch_size: f32,
    /// Horizontal offset from `legend_x` to the start of each label
    pub legend_label_offset: f32,
    pub legend_font_size: f32,
    pub caption_pos: egui::Pos2,
    pub caption_font_size: f32,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            origin_x: 50.0,
            step_x: 70.0,
            bar_width: 30.0,
            baseline_y: 150.0,
            legend_x: 400.0,
            legend_top: 10.0,
            legend_row_height: 20.0,
            legend_swatch_size: 15.0,
            legend_label_offset: 70.0,
            legend_font_size: 9.0,
            caption_pos: egui::pos2(250.0, 160.0),
            caption_font_size: 10.0,
        }
    }
}

/// One stacked segment, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub category: ExpenseCategory,
    pub rect: egui::Rect,
}

#[derive(Debug, Clone, Default)]
pub struct BarChartRenderer {
    config: BarChartConfig,
}

impl BarChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stacked segment rectangles for every month, bottom segment first
    pub fn segments(&self, months: &[MonthlyCategoryExpenses]) -> Vec<BarSegment> {
        let config = &self.config;
        let mut segments = Vec::with_capacity(months.len() * ExpenseCategory::ALL.len());

        for (month_index, amounts) in months.iter().enumerate() {
            let x = config.origin_x + config.step_x * month_index as f32;
            let mut y_base = config.baseline_y;

            for (category, amount) in ExpenseCategory::ALL.iter().zip(amounts.iter()) {
                let height = *amount as f32;
                segments.push(BarSegment {
                    category: *category,
                    rect: egui::Rect::from_min_max(
                        egui::pos2(x, y_base - height),
                        egui::pos2(x + config.bar_width, y_base),
                    ),
                });
                y_base -= height;
            }
        }

        segments
    }

    /// Clear `canvas` and draw the bars, legend and caption
    pub fn draw(&self, canvas: &mut Canvas, months: &[MonthlyCategoryExpenses]) {
        let config = &self.config;
        canvas.clear();

        let outline = egui::Stroke::new(1.0, CURRENT_THEME.charts.outline);
        for segment in self.segments(months) {
            canvas.rect(segment.rect, CURRENT_THEME.category_color(segment.category), outline);
        }

        self.draw_legend(canvas, outline);

        canvas.text(
            config.caption_pos,
            egui::Align2::CENTER_CENTER,
            BAR_CHART_CAPTION,
            config.caption_font_size,
            CURRENT_THEME.typography.secondary,
        );

        log::debug!("📊 Bar chart redrawn with {} months", months.len());
    }

    fn draw_legend(&self, canvas: &mut Canvas, outline: egui::Stroke) {
        let config = &self.config;
        for (row, category) in ExpenseCategory::ALL.iter().enumerate() {
            let top = config.legend_top + config.legend_row_height * row as f32;
            let swatch = egui::Rect::from_min_size(
                egui::pos2(config.legend_x, top),
                egui::vec2(config.legend_swatch_size, config.legend_swatch_size),
            );
            canvas.rect(swatch, CURRENT_THEME.category_color(*category), outline);
            canvas.text(
                egui::pos2(
                    config.legend_x + config.legend_label_offset,
                    top + config.legend_swatch_size / 2.0,
                ),
                egui::Align2::LEFT_CENTER,
                category.label(),
                config.legend_font_size,
                CURRENT_THEME.typography.primary,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::canvas::CanvasItem;

    fn bar_canvas() -> Canvas {
        Canvas::new(600.0, 200.0, egui::Color32::WHITE)
    }

    #[test]
    fn test_segments_stack_upward_from_baseline() {
        let renderer = BarChartRenderer::new();
        let segments = renderer.segments(&[[20, 30, 40]]);

        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[0].rect,
            egui::Rect::from_min_max(egui::pos2(50.0, 130.0), egui::pos2(80.0, 150.0))
        );
        assert_eq!(
            segments[1].rect,
            egui::Rect::from_min_max(egui::pos2(50.0, 100.0), egui::pos2(80.0, 130.0))
        );
        assert_eq!(
            segments[2].rect,
            egui::Rect::from_min_max(egui::pos2(50.0, 60.0), egui::pos2(80.0, 100.0))
        );
        assert_eq!(segments[2].category, ExpenseCategory::Entertainment);
    }

    #[test]
    fn test_bars_are_spaced_by_step() {
        let renderer = BarChartRenderer::new();
        let months = [[20, 20, 20]; 5];
        let segments = renderer.segments(&months);

        let bar_lefts: Vec<f32> = segments.iter().step_by(3).map(|s| s.rect.min.x).collect();
        assert_eq!(bar_lefts, vec![50.0, 120.0, 190.0, 260.0, 330.0]);
    }

    #[test]
    fn test_bars_stay_left_of_legend() {
        let renderer = BarChartRenderer::new();
        let segments = renderer.segments(&[[60, 60, 60]; 5]);
        let legend_x = BarChartConfig::default().legend_x;

        assert!(segments.iter().all(|s| s.rect.max.x < legend_x));
    }

    #[test]
    fn test_legend_labels_in_category_order() {
        let renderer = BarChartRenderer::new();
        let mut canvas = bar_canvas();
        renderer.draw(&mut canvas, &[]);

        let labels: Vec<(&str, egui::Pos2)> = canvas
            .items()
            .iter()
            .filter_map(|item| match item {
                CanvasItem::Text { text, pos, anchor, .. } if *anchor == egui::Align2::LEFT_CENTER => {
                    Some((text.as_str(), *pos))
                }
                _ => None,
            })
            .collect();

        assert_eq!(
            labels,
            vec![
                ("Rent", egui::pos2(470.0, 17.5)),
                ("Food", egui::pos2(470.0, 37.5)),
                ("Entertainment", egui::pos2(470.0, 57.5)),
            ]
        );
    }

    #[test]
    fn test_redraw_replaces_previous_frame() {
        let renderer = BarChartRenderer::new();
        let mut canvas = bar_canvas();
        let months = [[25, 35, 45]; 5];

        renderer.draw(&mut canvas, &months);
        let first_frame = canvas.items().len();
        renderer.draw(&mut canvas, &[[50, 50, 50]; 5]);

        assert_eq!(canvas.items().len(), first_frame);
        // 15 segments + 3 swatches + 3 labels + caption
        assert_eq!(first_frame, 22);
    }
}

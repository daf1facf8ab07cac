//! # Chart State Module
//!
//! This module manages the three chart canvases and the renderers that draw
//! into them. Canvases retain their items between frames; each refresh clears
//! and redraws all three.

use shared::ChartSamples;
use crate::ui::components::bar_chart::BarChartRenderer;
use crate::ui::components::canvas::Canvas;
use crate::ui::components::gauge::GaugeRenderer;
use crate::ui::components::line_chart::LineChartRenderer;
use crate::ui::components::theme::colors;

pub const GAUGE_CANVAS_SIZE: (f32, f32) = (250.0, 150.0);
pub const TREND_CANVAS_SIZE: (f32, f32) = (600.0, 150.0);
pub const EXPENSES_CANVAS_SIZE: (f32, f32) = (600.0, 200.0);

/// Chart canvases and their renderers
#[derive(Debug)]
pub struct ChartState {
    /// Savings goal gauge
    pub gauge: Canvas,
    /// Monthly spending trend line
    pub trend: Canvas,
    /// Category-wise stacked expenses
    pub expenses: Canvas,

    gauge_renderer: GaugeRenderer,
    line_renderer: LineChartRenderer,
    bar_renderer: BarChartRenderer,
}

impl ChartState {
    /// Create empty canvases; nothing is drawn until the first refresh
    pub fn new() -> Self {
        Self {
            gauge: Canvas::new(GAUGE_CANVAS_SIZE.0, GAUGE_CANVAS_SIZE.1, colors::WINDOW_BACKGROUND),
            trend: Canvas::new(TREND_CANVAS_SIZE.0, TREND_CANVAS_SIZE.1, colors::CHART_BACKGROUND),
            expenses: Canvas::new(
                EXPENSES_CANVAS_SIZE.0,
                EXPENSES_CANVAS_SIZE.1,
                colors::CHART_BACKGROUND,
            ),
            gauge_renderer: GaugeRenderer::new(),
            line_renderer: LineChartRenderer::new(),
            bar_renderer: BarChartRenderer::new(),
        }
    }

    /// Clear and redraw all three charts, gauge first
    pub fn redraw(&mut self, progress_percent: f64, samples: &ChartSamples) {
        self.gauge_renderer.draw(&mut self.gauge, progress_percent);
        self.line_renderer.draw(&mut self.trend, &samples.monthly_spending);
        self.bar_renderer.draw(&mut self.expenses, &samples.category_expenses);

        log::debug!(
            "🖌️ Charts redrawn: gauge={} trend={} expenses={} items",
            self.gauge.items().len(),
            self.trend.items().len(),
            self.expenses.items().len()
        );
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

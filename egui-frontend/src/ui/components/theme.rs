//! # Theme Configuration
//!
//! This module provides centralized color configuration for the finance dashboard.
//! All visual styling should use these constants to ensure consistency.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::{colors, CURRENT_THEME};
//!
//! let fill = CURRENT_THEME.charts.gauge_fill;
//! let panel = colors::SAVINGS_PANEL;
//! ```

use eframe::egui::Color32;
use shared::{ExpenseCategory, EXPENSE_CATEGORY_COUNT};

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (the update button)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Metric panel fills
    pub metrics: MetricColors,
    /// Chart drawing colors
    pub charts: ChartColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    pub button_fill: Color32,
    pub button_text: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Window background (also the gauge canvas background)
    pub window_background: Color32,
    /// Line and bar chart canvas background
    pub chart_background: Color32,
    /// Text input background
    pub input_background: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub error: Color32,
}

/// Metric panel background colors
#[derive(Debug, Clone)]
pub struct MetricColors {
    pub balance: Color32,
    pub income: Color32,
    pub expenses: Color32,
    pub savings: Color32,
    pub goal_progress: Color32,
}

/// Chart colors
#[derive(Debug, Clone)]
pub struct ChartColors {
    pub gauge_fill: Color32,
    pub gauge_ring: Color32,
    pub outline: Color32,
    pub trend_line: Color32,
    /// Bar segment colors in category order
    pub categories: [Color32; EXPENSE_CATEGORY_COUNT],
}

/// The current active theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        button_fill: Color32::from_rgb(0x4C, 0xAF, 0x50),
        button_text: Color32::WHITE,
    },
    layout: LayoutColors {
        window_background: Color32::from_rgb(0xF0, 0xF0, 0xF0),
        chart_background: Color32::WHITE,
        input_background: Color32::WHITE,
    },
    typography: TypographyColors {
        primary: Color32::BLACK,
        secondary: Color32::from_rgb(60, 60, 60),
        error: Color32::from_rgb(200, 30, 30),
    },
    metrics: MetricColors {
        balance: Color32::from_rgb(0xFF, 0xD5, 0x4F),
        income: Color32::from_rgb(0x4F, 0xC3, 0xF7),
        expenses: Color32::from_rgb(0xFF, 0x8A, 0x65),
        savings: Color32::from_rgb(0x81, 0xC7, 0x84),
        goal_progress: Color32::from_rgb(0xDC, 0xE7, 0x75),
    },
    charts: ChartColors {
        gauge_fill: Color32::from_rgb(0x4C, 0xAF, 0x50),
        gauge_ring: Color32::GRAY,
        outline: Color32::BLACK,
        trend_line: Color32::from_rgb(0x21, 0x96, 0xF3),
        categories: [
            Color32::from_rgb(0xFF, 0x57, 0x22), // Rent
            Color32::from_rgb(0xFF, 0xC1, 0x07), // Food
            Color32::from_rgb(0x03, 0xA9, 0xF4), // Entertainment
        ],
    },
};

impl Theme {
    /// Bar segment color for an expense category
    pub fn category_color(&self, category: ExpenseCategory) -> Color32 {
        let [rent, food, entertainment] = self.charts.categories;
        match category {
            ExpenseCategory::Rent => rent,
            ExpenseCategory::Food => food,
            ExpenseCategory::Entertainment => entertainment,
        }
    }
}

/// Convenience constants for direct access
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const WINDOW_BACKGROUND: Color32 = CURRENT_THEME.layout.window_background;
    pub const CHART_BACKGROUND: Color32 = CURRENT_THEME.layout.chart_background;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_ERROR: Color32 = CURRENT_THEME.typography.error;

    pub const BALANCE_PANEL: Color32 = CURRENT_THEME.metrics.balance;
    pub const INCOME_PANEL: Color32 = CURRENT_THEME.metrics.income;
    pub const EXPENSES_PANEL: Color32 = CURRENT_THEME.metrics.expenses;
    pub const SAVINGS_PANEL: Color32 = CURRENT_THEME.metrics.savings;
    pub const GOAL_PROGRESS_PANEL: Color32 = CURRENT_THEME.metrics.goal_progress;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_colors_follow_category_order() {
        assert_eq!(
            CURRENT_THEME.category_color(ExpenseCategory::Rent),
            Color32::from_rgb(0xFF, 0x57, 0x22)
        );
        assert_eq!(
            CURRENT_THEME.category_color(ExpenseCategory::Entertainment),
            Color32::from_rgb(0x03, 0xA9, 0xF4)
        );
    }

    #[test]
    fn test_every_category_has_its_own_color() {
        let colors: Vec<Color32> = ExpenseCategory::ALL
            .iter()
            .map(|c| CURRENT_THEME.category_color(*c))
            .collect();

        assert_eq!(colors, CURRENT_THEME.charts.categories.to_vec());
        assert_eq!(
            CURRENT_THEME.category_color(ExpenseCategory::Food),
            Color32::from_rgb(0xFF, 0xC1, 0x07)
        );
    }
}

//! # Metrics State Module
//!
//! Display text for the five metric panels. Panels keep their last
//! successfully computed values until the next successful refresh.

use shared::{DashboardInputs, DashboardMetrics};
use crate::backend::domain::{format_currency, format_percent};

/// Text shown before the first refresh
pub const INITIAL_METRIC_TEXT: &str = "$0";

/// The five metric panels, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Balance,
    Income,
    Expenses,
    Savings,
    GoalProgress,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Balance,
        MetricKind::Income,
        MetricKind::Expenses,
        MetricKind::Savings,
        MetricKind::GoalProgress,
    ];

    /// Caption shown under the panel
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Balance => "Total Balance",
            MetricKind::Income => "Monthly Income",
            MetricKind::Expenses => "Monthly Expenses",
            MetricKind::Savings => "Savings",
            MetricKind::GoalProgress => "Goal Progress",
        }
    }
}

/// Formatted panel values
#[derive(Debug, Clone, PartialEq)]
pub struct MetricLabels {
    pub balance: String,
    pub income: String,
    pub expenses: String,
    pub savings: String,
    pub goal_progress: String,
}

impl Default for MetricLabels {
    fn default() -> Self {
        Self {
            balance: INITIAL_METRIC_TEXT.to_string(),
            income: INITIAL_METRIC_TEXT.to_string(),
            expenses: INITIAL_METRIC_TEXT.to_string(),
            savings: INITIAL_METRIC_TEXT.to_string(),
            goal_progress: INITIAL_METRIC_TEXT.to_string(),
        }
    }
}

impl MetricLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every label from freshly computed values
    pub fn update(&mut self, inputs: &DashboardInputs, metrics: &DashboardMetrics) {
        self.balance = format_currency(inputs.balance);
        self.income = format_currency(inputs.income);
        self.expenses = format_currency(inputs.expenses);
        self.savings = format_currency(metrics.savings);
        self.goal_progress = format_percent(metrics.progress_percent, 1);
    }

    pub fn text(&self, kind: MetricKind) -> &str {
        match kind {
            MetricKind::Balance => &self.balance,
            MetricKind::Income => &self.income,
            MetricKind::Expenses => &self.expenses,
            MetricKind::Savings => &self.savings,
            MetricKind::GoalProgress => &self.goal_progress,
        }
    }
}

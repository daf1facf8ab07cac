//! Metric calculation for the finance dashboard.
//!
//! Savings is `balance + income - expenses`. Goal progress is savings as a
//! percentage of the savings goal, clamped to `[0, 100]`. A zero goal yields
//! `0%` rather than dividing by zero. Finite inputs whose savings overflow
//! to infinity are rejected.

use shared::{DashboardInputs, DashboardMetrics};

pub const MIN_PROGRESS_PERCENT: f64 = 0.0;
pub const MAX_PROGRESS_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("Savings are too large to calculate (balance + income - expenses overflows)")]
    SavingsOverflow,
}

/// Stateless calculator for derived dashboard metrics
#[derive(Debug, Clone, Default)]
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute savings and goal progress from parsed inputs
    pub fn calculate(&self, inputs: &DashboardInputs) -> Result<DashboardMetrics, MetricsError> {
        let savings = inputs.balance + inputs.income - inputs.expenses;
        if !savings.is_finite() {
            return Err(MetricsError::SavingsOverflow);
        }

        Ok(DashboardMetrics {
            savings,
            progress_percent: progress_percent(savings, inputs.savings_goal),
        })
    }
}

/// Savings as a percentage of the goal, clamped to [0, 100]
pub fn progress_percent(savings: f64, savings_goal: f64) -> f64 {
    if savings_goal == 0.0 {
        return MIN_PROGRESS_PERCENT;
    }

    let percent = savings / savings_goal * 100.0;
    if percent.is_nan() {
        return MIN_PROGRESS_PERCENT;
    }

    percent.clamp(MIN_PROGRESS_PERCENT, MAX_PROGRESS_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(balance: f64, income: f64, expenses: f64, savings_goal: f64) -> DashboardInputs {
        DashboardInputs {
            balance,
            income,
            expenses,
            savings_goal,
        }
    }

    #[test]
    fn test_progress_clamped_to_maximum() {
        let metrics = MetricsService::new().calculate(&inputs(5000.0, 3000.0, 2000.0, 1000.0)).unwrap();
        assert_eq!(metrics.savings, 6000.0);
        assert_eq!(metrics.progress_percent, 100.0);
    }

    #[test]
    fn test_all_zero_inputs() {
        let metrics = MetricsService::new().calculate(&inputs(0.0, 0.0, 0.0, 1000.0)).unwrap();
        assert_eq!(metrics.savings, 0.0);
        assert_eq!(metrics.progress_percent, 0.0);
    }

    #[test]
    fn test_negative_savings_clamped_to_zero() {
        let metrics = MetricsService::new().calculate(&inputs(-500.0, 100.0, 50.0, 100.0)).unwrap();
        assert_eq!(metrics.savings, -450.0);
        assert_eq!(metrics.progress_percent, 0.0);
    }

    #[test]
    fn test_partial_progress() {
        let metrics = MetricsService::new().calculate(&inputs(100.0, 300.0, 150.0, 1000.0)).unwrap();
        assert_eq!(metrics.savings, 250.0);
        assert_eq!(metrics.progress_percent, 25.0);
    }

    #[test]
    fn test_zero_goal_is_zero_percent() {
        assert_eq!(progress_percent(6000.0, 0.0), 0.0);
        assert_eq!(progress_percent(-10.0, 0.0), 0.0);
        assert_eq!(progress_percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_overflowing_savings_is_rejected() {
        let service = MetricsService::new();

        assert_eq!(
            service.calculate(&inputs(1e308, 1e308, 0.0, 1000.0)),
            Err(MetricsError::SavingsOverflow)
        );
        assert_eq!(
            service.calculate(&inputs(-1e308, 0.0, 1e308, 1000.0)),
            Err(MetricsError::SavingsOverflow)
        );
    }

    #[test]
    fn test_nan_ratio_is_zero_percent() {
        assert_eq!(progress_percent(f64::NAN, 10.0), 0.0);
        assert_eq!(progress_percent(1.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_savings_matches_formula_and_progress_in_range() {
        let values = [0.0, 0.01, 1.5, 99.99, 1000.0, 123456.78];
        let service = MetricsService::new();
        for &balance in &values {
            for &income in &values {
                for &expenses in &values {
                    for &goal in &values {
                        let metrics = service.calculate(&inputs(balance, income, expenses, goal)).unwrap();
                        assert_eq!(metrics.savings, balance + income - expenses);
                        assert!((0.0..=100.0).contains(&metrics.progress_percent));
                    }
                }
            }
        }
    }
}

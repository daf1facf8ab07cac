use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four numeric fields on the dashboard form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    Balance,
    Income,
    Expenses,
    SavingsGoal,
}

impl InputField {
    /// All fields in form order (row by row, left to right)
    pub const ALL: [InputField; 4] = [
        InputField::Balance,
        InputField::Income,
        InputField::Expenses,
        InputField::SavingsGoal,
    ];

    /// Label shown next to the text input
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Balance => "Total Balance",
            InputField::Income => "Monthly Income",
            InputField::Expenses => "Monthly Expenses",
            InputField::SavingsGoal => "Savings Goal",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw text exactly as typed into the dashboard form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDashboardInputs {
    pub balance: String,
    pub income: String,
    pub expenses: String,
    pub savings_goal: String,
}

impl RawDashboardInputs {
    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::Balance => &self.balance,
            InputField::Income => &self.income,
            InputField::Expenses => &self.expenses,
            InputField::SavingsGoal => &self.savings_goal,
        }
    }

    pub fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Balance => &mut self.balance,
            InputField::Income => &mut self.income,
            InputField::Expenses => &mut self.expenses,
            InputField::SavingsGoal => &mut self.savings_goal,
        }
    }
}

/// Values substituted for blank form fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub balance: f64,
    pub income: f64,
    pub expenses: f64,
    pub savings_goal: f64,
}

impl InputDefaults {
    pub fn value(&self, field: InputField) -> f64 {
        match field {
            InputField::Balance => self.balance,
            InputField::Income => self.income,
            InputField::Expenses => self.expenses,
            InputField::SavingsGoal => self.savings_goal,
        }
    }
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            balance: 5000.0,
            income: 3000.0,
            expenses: 2000.0,
            savings_goal: 1000.0,
        }
    }
}

/// Parsed dashboard inputs for a single refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardInputs {
    /// Current total balance
    pub balance: f64,
    /// Income for the month
    pub income: f64,
    /// Expenses for the month
    pub expenses: f64,
    /// Savings target the progress gauge measures against
    pub savings_goal: f64,
}

/// Metrics derived from [`DashboardInputs`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// balance + income - expenses (may be negative)
    pub savings: f64,
    /// savings / goal as a percentage, clamped to [0, 100]
    pub progress_percent: f64,
}

/// Expense categories shown in the stacked bar chart, bottom segment first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Rent,
    Food,
    Entertainment,
}

pub const EXPENSE_CATEGORY_COUNT: usize = 3;

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; EXPENSE_CATEGORY_COUNT] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Food,
        ExpenseCategory::Entertainment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Entertainment => "Entertainment",
        }
    }
}

/// Expense amounts for one month, indexed in [`ExpenseCategory::ALL`] order
pub type MonthlyCategoryExpenses = [u32; EXPENSE_CATEGORY_COUNT];

/// Synthetic chart data produced for one refresh cycle.
///
/// Not derived from the dashboard inputs; the charts are illustrative only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSamples {
    /// One spending value per month, oldest first
    pub monthly_spending: Vec<u32>,
    /// Per-category expenses for recent months, oldest first
    pub category_expenses: Vec<MonthlyCategoryExpenses>,
}

//! Monthly Report
//!
//! Spending for one month, broken down by category and compared against the
//! month's budget.

use std::fmt;

use crate::error::TrackerResult;
use crate::models::calendar::parse_month;
use crate::models::{AppState, Money};

/// How a month's spending compares with its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStatus {
    WithinBudget,
    OverBudget,
    NoBudgetSet,
}

impl fmt::Display for MonthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithinBudget => write!(f, "within budget"),
            Self::OverBudget => write!(f, "over budget"),
            Self::NoBudgetSet => write!(f, "no budget set"),
        }
    }
}

/// Spending for one category within the month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
}

/// Monthly Report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Full month name, e.g. "June"
    pub month: String,
    pub total_spent: Money,
    /// Per-category totals in the order categories first appear
    pub breakdown: Vec<CategorySpending>,
    pub budget_limit: Option<Money>,
    pub status: MonthStatus,
    pub expense_count: usize,
}

impl MonthlyReport {
    /// Generate the report for a month name (any case, abbreviations allowed)
    ///
    /// Matches on month name only, so expenses from the same month of
    /// different years are combined.
    pub fn generate(state: &AppState, month: &str) -> TrackerResult<Self> {
        let month = parse_month(month)?;

        let mut breakdown: Vec<CategorySpending> = Vec::new();
        let mut total_spent = Money::zero();
        let mut expense_count = 0;

        for expense in state.expenses.list().filter(|e| e.month() == month) {
            total_spent += expense.amount;
            expense_count += 1;

            match breakdown.iter_mut().find(|c| c.category == expense.category) {
                Some(existing) => existing.total += expense.amount,
                None => breakdown.push(CategorySpending {
                    category: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }

        let budget_limit = state.budgets.get(month);
        let status = match budget_limit {
            None => MonthStatus::NoBudgetSet,
            Some(limit) if total_spent > limit => MonthStatus::OverBudget,
            Some(_) => MonthStatus::WithinBudget,
        };

        Ok(Self {
            month: month.to_string(),
            total_spent,
            breakdown,
            budget_limit,
            status,
            expense_count,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("===== Monthly Report =====\n");
        output.push_str(&format!("Month: {}\n", self.month));
        output.push_str(&format!(
            "Total Spent: {}\n",
            self.total_spent.format_with_symbol(symbol)
        ));

        output.push_str("\n--- Category-wise Breakdown ---\n");
        if self.breakdown.is_empty() {
            output.push_str("No expenses for this month.\n");
        } else {
            for item in &self.breakdown {
                output.push_str(&format!(
                    "{}: {}\n",
                    item.category,
                    item.total.format_with_symbol(symbol)
                ));
            }
        }

        output.push_str("\n--- Budget Status ---\n");
        match self.budget_limit {
            Some(limit) => {
                output.push_str(&format!("Budget: {}\n", limit.format_with_symbol(symbol)));
                if self.status == MonthStatus::OverBudget {
                    output.push_str(&format!(
                        "You exceeded your budget by {}!\n",
                        (self.total_spent - limit).format_with_symbol(symbol)
                    ));
                } else {
                    output.push_str(&format!(
                        "You are within the budget ({} left).\n",
                        (limit - self.total_spent).format_with_symbol(symbol)
                    ));
                }
            }
            None => output.push_str("No budget set for this month.\n"),
        }

        output
    }
}

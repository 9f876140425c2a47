//! Budget Status Report
//!
//! Compares every budget in the registry with all-time spending in the
//! category of the same name.

use std::fmt;

use tabled::{settings::Style, Table, Tabled};

use crate::models::{AppState, Money};

/// Whether a budget still has room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Within,
    Over,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Within => write!(f, "within"),
            Self::Over => write!(f, "over"),
        }
    }
}

/// One row of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatusRow {
    pub category: String,
    pub spent: Money,
    pub limit: Money,
    pub remaining: Money,
    pub status: BudgetStatus,
}

/// Budget Status Report
#[derive(Debug, Clone, Default)]
pub struct BudgetStatusReport {
    /// Rows in registry insertion order
    pub rows: Vec<BudgetStatusRow>,
}

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Budget")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BudgetStatusReport {
    /// Generate the report; spending is not limited to any time period
    pub fn generate(state: &AppState) -> Self {
        let rows = state
            .budgets
            .iter()
            .map(|entry| {
                let spent = state.expenses.total_for_category(&entry.key);
                let remaining = entry.limit - spent;
                BudgetStatusRow {
                    category: entry.key.clone(),
                    spent,
                    limit: entry.limit,
                    remaining,
                    status: if remaining.is_negative() {
                        BudgetStatus::Over
                    } else {
                        BudgetStatus::Within
                    },
                }
            })
            .collect();

        Self { rows }
    }

    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetStatusRow> + '_ {
        self.rows.iter().filter(|r| r.status == BudgetStatus::Over)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.rows.is_empty() {
            return "No budgets set.\n".to_string();
        }

        let display_rows = self.rows.iter().map(|row| DisplayRow {
            category: row.category.clone(),
            spent: row.spent.format_with_symbol(symbol),
            limit: row.limit.format_with_symbol(symbol),
            remaining: row.remaining.format_with_symbol(symbol),
            status: match row.status {
                BudgetStatus::Within => "within".to_string(),
                BudgetStatus::Over => "OVER".to_string(),
            },
        });

        let mut table = Table::new(display_rows);
        table.with(Style::psql());

        let mut output = format!("{}\n", table);
        let over = self.over_budget().count();
        if over > 0 {
            output.push_str(&format!("\n{} budget(s) exceeded.\n", over));
        }
        output
    }
}

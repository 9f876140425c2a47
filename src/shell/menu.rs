//! Main menu options

use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    EditExpense,
    DeleteExpense,
    SetBudget,
    MonthlyReport,
    BudgetStatus,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewExpenses,
        MenuChoice::EditExpense,
        MenuChoice::DeleteExpense,
        MenuChoice::SetBudget,
        MenuChoice::MonthlyReport,
        MenuChoice::BudgetStatus,
        MenuChoice::Exit,
    ];

    /// Number typed to select this entry
    pub fn number(self) -> usize {
        match self {
            MenuChoice::AddExpense => 1,
            MenuChoice::ViewExpenses => 2,
            MenuChoice::EditExpense => 3,
            MenuChoice::DeleteExpense => 4,
            MenuChoice::SetBudget => 5,
            MenuChoice::MonthlyReport => 6,
            MenuChoice::BudgetStatus => 7,
            MenuChoice::Exit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::ViewExpenses => "View Expenses",
            MenuChoice::EditExpense => "Edit Expense",
            MenuChoice::DeleteExpense => "Delete Expense",
            MenuChoice::SetBudget => "Set Budget (month or category)",
            MenuChoice::MonthlyReport => "View Monthly Report",
            MenuChoice::BudgetStatus => "View Budget Status by Category",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(|n| MenuChoice::ALL.into_iter().find(|c| c.number() == n))
            .ok_or_else(|| {
                TrackerError::Input(format!(
                    "'{}' is not a menu option, choose 1-{}",
                    trimmed,
                    MenuChoice::ALL.len()
                ))
            })
    }
}

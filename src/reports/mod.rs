//! Reports module for the expense tracker
//!
//! Read-only summaries derived from the ledger and the budget registry.

pub mod budget_status;
pub mod monthly;

pub use budget_status::{BudgetStatus, BudgetStatusReport, BudgetStatusRow};
pub use monthly::{CategorySpending, MonthStatus, MonthlyReport};

//! Core data models for the expense tracker
//!
//! Expenses, the ledger that orders them, budget limits and the aggregate
//! application state that gets persisted.

pub mod budget;
pub mod calendar;
pub mod expense;
pub mod ledger;
pub mod money;
pub mod state;

pub use budget::{BudgetEntry, BudgetRegistry};
pub use expense::Expense;
pub use ledger::{ExpenseEdit, Ledger};
pub use money::Money;
pub use state::AppState;

//! CLI command handlers
//!
//! This module contains the implementation of the one-shot commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod history;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::handle_export_command;
pub use history::handle_history_command;
pub use report::{handle_report_command, ReportCommands};

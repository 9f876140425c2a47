//! Service layer for the expense tracker
//!
//! Services turn raw user input into validated changes, apply them to the
//! state held by [`Storage`](crate::storage::Storage), record them in the
//! audit log and auto-save. A failed save does not undo the change: it is
//! handed back to the caller in [`Persisted::saved`].

pub mod budget;
pub mod expense;

pub use budget::BudgetService;
pub use expense::{ExpenseService, NewExpenseInput};

use crate::error::TrackerResult;

/// The value produced by a mutation plus the outcome of the auto-save
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub saved: TrackerResult<()>,
}

//! Application state
//!
//! Everything that is persisted: the expense ledger and the budget registry.

use serde::{Deserialize, Serialize};

use super::budget::BudgetRegistry;
use super::ledger::Ledger;

/// The full persisted state of the tracker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub expenses: Ledger,

    #[serde(default)]
    pub budgets: BudgetRegistry,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.budgets.is_empty()
    }
}

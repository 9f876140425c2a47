//! Expense service
//!
//! Add, edit and delete expenses from raw input, with auto-save.

use tracing::info;

use super::Persisted;
use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::calendar::{self, capitalize};
use crate::models::{Expense, ExpenseEdit, Money};
use crate::storage::Storage;

/// Raw answers for a new expense
#[derive(Debug, Clone, Default)]
pub struct NewExpenseInput {
    pub amount: String,
    pub category: String,
    pub description: String,
    /// Blank or `None` means today
    pub date: Option<String>,
}

impl NewExpenseInput {
    /// Validate and convert into an expense
    pub fn parse(&self) -> TrackerResult<Expense> {
        let amount = Money::parse(&self.amount).map_err(|e| TrackerError::Input(e.to_string()))?;

        let category = capitalize(&self.category);

        let date = match self.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => calendar::parse_date(raw)?,
            _ => calendar::today(),
        };

        let expense = Expense::new(amount, category, self.description.trim(), date);
        expense
            .validate()
            .map_err(|e| TrackerError::Input(e.to_string()))?;
        Ok(expense)
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Append a new expense
    pub fn add(&mut self, input: &NewExpenseInput) -> TrackerResult<Persisted<Expense>> {
        let expense = input.parse()?;

        let ledger = &mut self.storage.state_mut().expenses;
        ledger.add(expense.clone());
        let position = ledger.len();

        info!(position, category = %expense.category, amount = %expense.amount, "expense added");
        self.storage.log_create(
            EntityType::Expense,
            format!("#{}", position),
            Some(expense.category.clone()),
            &expense,
        );

        Ok(Persisted {
            value: expense,
            saved: self.storage.save(),
        })
    }

    /// Edit the expense at a 1-based position; blank answers keep values
    ///
    /// Returns the expense after the edit. Nothing changes on any error.
    pub fn edit(
        &mut self,
        index: i64,
        amount: &str,
        category: &str,
        description: &str,
    ) -> TrackerResult<Persisted<Expense>> {
        // Parse everything first so a bad amount never leaves a partial edit
        let edit = ExpenseEdit::from_input(amount, category, description)?;
        let (before, after) = self.storage.state_mut().expenses.edit_at(index, edit)?;

        info!(index, "expense edited");
        self.storage.log_update(
            EntityType::Expense,
            format!("#{}", index),
            Some(after.category.clone()),
            &before,
            &after,
        );

        Ok(Persisted {
            value: after,
            saved: self.storage.save(),
        })
    }

    /// Remove the expense at a 1-based position and return it
    pub fn delete(&mut self, index: i64) -> TrackerResult<Persisted<Expense>> {
        let removed = self.storage.state_mut().expenses.remove_at(index)?;

        info!(index, category = %removed.category, "expense deleted");
        self.storage.log_delete(
            EntityType::Expense,
            format!("#{}", index),
            Some(removed.category.clone()),
            &removed,
        );

        Ok(Persisted {
            value: removed,
            saved: self.storage.save(),
        })
    }
}

/// Parse a 1-based position typed by the user
pub fn parse_index(input: &str) -> TrackerResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| TrackerError::Input(format!("'{}' is not a number", input.trim())))
}

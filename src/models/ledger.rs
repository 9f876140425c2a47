//! Expense ledger
//!
//! The ordered list of expenses. Positions exposed to users are 1-based;
//! removing an entry shifts every later entry down by one.

use serde::{Deserialize, Serialize};

use super::calendar::capitalize;
use super::expense::Expense;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Changes to apply to an existing expense; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseEdit {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ExpenseEdit {
    /// Build an edit from raw prompt answers
    ///
    /// Blank answers keep the existing value. A non-blank amount that does not
    /// parse rejects the whole edit.
    pub fn from_input(amount: &str, category: &str, description: &str) -> TrackerResult<Self> {
        let amount = if amount.trim().is_empty() {
            None
        } else {
            Some(Money::parse(amount).map_err(|e| TrackerError::Input(e.to_string()))?)
        };

        Ok(Self {
            amount,
            category: non_blank(category).map(capitalize),
            description: non_blank(description).map(str::to_string),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.description.is_none()
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Ordered collection of expenses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense at the end
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Iterate over expenses in insertion order
    pub fn list(&self) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses.iter()
    }

    /// Iterate with 1-based positions, as shown to the user
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Expense)> + '_ {
        self.expenses.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Get an expense by 1-based position
    pub fn get(&self, index: i64) -> TrackerResult<&Expense> {
        let pos = self.position(index)?;
        Ok(&self.expenses[pos])
    }

    /// Remove the expense at a 1-based position and return it
    pub fn remove_at(&mut self, index: i64) -> TrackerResult<Expense> {
        let pos = self.position(index)?;
        Ok(self.expenses.remove(pos))
    }

    /// Apply an edit to the expense at a 1-based position
    ///
    /// Returns the expense as it was before the edit and as it is now.
    pub fn edit_at(&mut self, index: i64, edit: ExpenseEdit) -> TrackerResult<(Expense, Expense)> {
        let pos = self.position(index)?;
        let expense = &mut self.expenses[pos];
        let before = expense.clone();

        if let Some(amount) = edit.amount {
            expense.amount = amount;
        }
        if let Some(category) = edit.category {
            expense.category = category;
        }
        if let Some(description) = edit.description {
            expense.description = description;
        }

        Ok((before, expense.clone()))
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of amounts whose derived month equals `month` exactly
    pub fn total_for_month(&self, month: &str) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.month() == month)
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of amounts whose category equals `category` exactly
    pub fn total_for_category(&self, category: &str) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    fn position(&self, index: i64) -> TrackerResult<usize> {
        let len = self.expenses.len();
        if index < 1 || index as u64 > len as u64 {
            return Err(TrackerError::index_out_of_range(index, len));
        }
        Ok((index - 1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn expense(amount: Money, category: &str, ymd: (i32, u32, u32)) -> Expense {
        let date = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap();
        Expense::new(amount, category, "", date)
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add(expense(Money::new(dec!(500)), "Food", (2024, 6, 1)));
        ledger.add(expense(Money::new(dec!(300)), "Travel", (2024, 6, 15)));
        ledger.add(expense(Money::new(dec!(120.5)), "Food", (2024, 7, 3)));
        ledger
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Money::zero());
        assert_eq!(ledger.list().count(), 0);
    }

    #[test]
    fn test_running_total() {
        let mut ledger = Ledger::new();
        ledger.add(expense(Money::new(dec!(500)), "Food", (2024, 6, 1)));
        assert_eq!(ledger.total(), Money::new(dec!(500)));

        ledger.add(expense(Money::new(dec!(300)), "Travel", (2024, 6, 15)));
        assert_eq!(ledger.total(), Money::new(dec!(800)));
    }

    #[test]
    fn test_list_is_restartable_and_ordered() {
        let ledger = sample_ledger();
        let first: Vec<_> = ledger.list().map(|e| e.category.clone()).collect();
        let second: Vec<_> = ledger.list().map(|e| e.category.clone()).collect();

        assert_eq!(first, vec!["Food", "Travel", "Food"]);
        assert_eq!(first, second);
        assert_eq!(ledger.numbered().map(|(i, _)| i).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_filtered_totals() {
        let ledger = sample_ledger();
        assert_eq!(ledger.total_for_month("June"), Money::new(dec!(800)));
        assert_eq!(ledger.total_for_month("July"), Money::new(dec!(120.5)));
        assert_eq!(ledger.total_for_month("june"), Money::zero());
        assert_eq!(ledger.total_for_category("Food"), Money::new(dec!(620.5)));
        assert_eq!(ledger.total_for_category("food"), Money::zero());
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut ledger = sample_ledger();
        let removed = ledger.remove_at(1).unwrap();

        assert_eq!(removed.amount, Money::new(dec!(500)));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(1).unwrap().category, "Travel");
        assert_eq!(ledger.total(), Money::new(dec!(420.5)));
    }

    #[test]
    fn test_out_of_range_indices_leave_ledger_unchanged() {
        let mut ledger = sample_ledger();
        let snapshot = ledger.clone();

        for index in [0, -1, 4, i64::MAX, i64::MIN] {
            assert!(ledger.remove_at(index).unwrap_err().is_index());
            let edit = ExpenseEdit::from_input("1", "X", "y").unwrap();
            assert!(ledger.edit_at(index, edit).unwrap_err().is_index());
        }

        assert_eq!(ledger, snapshot);
    }

    #[test]
    fn test_partial_edit_keeps_blank_fields() {
        let mut ledger = Ledger::new();
        ledger.add(Expense::new(
            Money::new(dec!(500)),
            "Food",
            "Lunch",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        ));

        let edit = ExpenseEdit::from_input("", "Groceries", "").unwrap();
        let (before, after) = ledger.edit_at(1, edit).unwrap();

        assert_eq!(before.category, "Food");
        assert_eq!(after.category, "Groceries");
        assert_eq!(after.amount, Money::new(dec!(500)));
        assert_eq!(after.description, "Lunch");
    }

    #[test]
    fn test_edit_with_bad_amount_is_rejected_before_applying() {
        let err = ExpenseEdit::from_input("lots", "Groceries", "").unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn test_edit_input_normalization() {
        let edit = ExpenseEdit::from_input(" 42 ", "  groceries ", "  weekly shop ").unwrap();
        assert_eq!(edit.amount, Some(Money::new(dec!(42))));
        assert_eq!(edit.category.as_deref(), Some("Groceries"));
        assert_eq!(edit.description.as_deref(), Some("weekly shop"));

        assert!(ExpenseEdit::from_input(" ", "", "\t").unwrap().is_empty());
    }

    #[test]
    fn test_totals_of_huge_amounts_do_not_overflow() {
        let huge = Money::new(dec!(50000000000000000000000000000));
        let mut ledger = Ledger::new();
        ledger.add(expense(huge, "Food", (2024, 6, 1)));
        ledger.add(expense(huge, "Food", (2024, 6, 2)));

        let max = Money::new(rust_decimal::Decimal::MAX);
        assert_eq!(ledger.total(), max);
        assert_eq!(ledger.total_for_month("June"), max);
        assert_eq!(ledger.total_for_category("Food"), max);
    }

    #[test]
    fn test_total_tracks_edits_and_deletes() {
        let mut ledger = sample_ledger();
        ledger
            .edit_at(2, ExpenseEdit::from_input("100", "", "").unwrap())
            .unwrap();
        ledger.remove_at(3).unwrap();

        let expected: Money = ledger.list().map(|e| e.amount).sum();
        assert_eq!(ledger.total(), expected);
        assert_eq!(ledger.total(), Money::new(dec!(600)));
    }
}

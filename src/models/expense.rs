//! Expense model
//!
//! A single spending event. The month is never stored; it is derived from the
//! date whenever it is needed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::calendar::{self, month_name};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent, kept exactly as entered
    pub amount: Money,

    /// Category label, capitalized
    pub category: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Day the money was spent
    #[serde(
        serialize_with = "serialize_date",
        deserialize_with = "calendar::deserialize_date"
    )]
    pub date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(calendar::STORAGE_DATE_FORMAT))
}

impl Expense {
    /// Create a new expense
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    /// Month name derived from the date, e.g. "June"
    pub fn month(&self) -> &'static str {
        month_name(self.date)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.date, self.category, self.amount)?;
        if !self.description.is_empty() {
            write!(f, " | {}", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "category is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

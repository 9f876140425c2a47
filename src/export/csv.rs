//! CSV Export functionality
//!
//! Exports the expense ledger to CSV, one row per expense, numbered with the
//! same 1-based positions the tracker shows.

use std::io::Write;

use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Ledger;

#[derive(Serialize)]
struct ExpenseRecord<'a> {
    #[serde(rename = "Index")]
    index: usize,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Month")]
    month: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Export all expenses to CSV
///
/// Returns the number of rows written, not counting the header.
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: W) -> TrackerResult<usize> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if ledger.is_empty() {
        csv_writer
            .write_record(["Index", "Date", "Month", "Category", "Description", "Amount"])
            .map_err(export_error)?;
    }

    for (index, expense) in ledger.numbered() {
        csv_writer
            .serialize(ExpenseRecord {
                index,
                date: expense.date.to_string(),
                month: expense.month(),
                category: &expense.category,
                description: &expense.description,
                amount: expense.amount.to_string(),
            })
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(ledger.len())
}

fn export_error(e: ::csv::Error) -> TrackerError {
    TrackerError::Export(e.to_string())
}

//! Export module for the expense tracker
//!
//! CSV export of the expense ledger for use in spreadsheets.

pub mod csv;

pub use self::csv::export_expenses_csv;

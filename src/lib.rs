//! Expense Tracker - terminal-based personal expense tracking
//!
//! Records day-to-day spending, keeps spending limits per month or per
//! category, and reports monthly totals and budget status. All data lives in
//! a single JSON file that is saved after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expenses, the ledger, budgets and money amounts
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Validated, audited, auto-saved mutations
//! - `reports`: Monthly report and budget status
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `shell`: Interactive menu
//! - `cli`: One-shot command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let (storage, status) = Storage::open(settings.resolve_data_file(&paths, None));
//! println!("{}", status.message());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{TrackerError, TrackerResult};

//! Audit logging for the expense tracker
//!
//! Every add, edit, delete and budget change is appended to a line-delimited
//! JSON file (`audit.log`) with before/after snapshots.
//!
//! - `AuditEntry`: one recorded change.
//! - `AuditLogger`: appends entries and reads them back.
//! - `generate_diff`: human-readable summary of what an edit changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

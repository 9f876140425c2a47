//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::export::export_expenses_csv;
use crate::storage::Storage;

/// Export all expenses as CSV to `output`, or to stdout when omitted
pub fn handle_export_command(storage: &Storage, output: Option<PathBuf>) -> TrackerResult<()> {
    let ledger = &storage.state().expenses;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let rows = export_expenses_csv(ledger, BufWriter::new(file))?;
            println!("Exported {} expense(s) to {}", rows, path.display());
        }
        None => {
            export_expenses_csv(ledger, io::stdout().lock())?;
        }
    }

    Ok(())
}

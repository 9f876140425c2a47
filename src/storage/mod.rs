//! Storage layer for the expense tracker
//!
//! The whole application state lives in one JSON file. Loading never fails:
//! a missing file starts an empty tracker and a malformed one is reported and
//! replaced by an empty state. Saving writes the full state atomically.

pub mod file_io;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::models::AppState;

/// How the state was obtained when the data file was read
#[derive(Debug)]
pub enum LoadStatus {
    /// The file existed and was parsed
    Loaded,
    /// There was no file yet; starting fresh
    Missing,
    /// The file could not be read or parsed; starting fresh
    Recovered(TrackerError),
}

impl LoadStatus {
    /// Message for the user describing how loading went
    pub fn message(&self) -> String {
        match self {
            LoadStatus::Loaded => "Data loaded successfully!".to_string(),
            LoadStatus::Missing => "No previous data found. Starting fresh.".to_string(),
            LoadStatus::Recovered(err) => {
                format!("Error loading file: {}. Starting with empty data.", err)
            }
        }
    }
}

/// Read the state stored at `path`
pub fn load_state(path: &Path) -> (AppState, LoadStatus) {
    match read_json::<AppState, _>(path) {
        Ok(Some(state)) => {
            debug!(
                path = %path.display(),
                expenses = state.expenses.len(),
                budgets = state.budgets.len(),
                "loaded state"
            );
            (state, LoadStatus::Loaded)
        }
        Ok(None) => {
            debug!(path = %path.display(), "no data file, starting empty");
            (AppState::new(), LoadStatus::Missing)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "data file unusable, starting empty");
            (AppState::new(), LoadStatus::Recovered(err))
        }
    }
}

/// Write the full state to `path`, replacing the previous contents
pub fn save_state(path: &Path, state: &AppState) -> TrackerResult<()> {
    write_json_atomic(path, state)
        .inspect(|()| debug!(path = %path.display(), "saved state"))
        .inspect_err(|err| warn!(path = %path.display(), error = %err, "save failed"))
}

/// Owns the in-memory state together with where it is persisted
pub struct Storage {
    path: PathBuf,
    state: AppState,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Load the data file at `path`
    pub fn open(path: PathBuf) -> (Self, LoadStatus) {
        let (state, status) = load_state(&path);
        let storage = Self {
            path,
            state,
            audit: None,
        };
        (storage, status)
    }

    /// Record every mutation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Persist the current state
    pub fn save(&self) -> TrackerResult<()> {
        save_state(&self.path, &self.state)
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(|| AuditEntry::create(entity_type, entity_id, entity_name, entity));
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        self.write_audit(|| AuditEntry::update(entity_type, entity_id, entity_name, before, after));
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity));
    }

    // Audit failures are logged, never surfaced to the operation
    fn write_audit(&self, build: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(&build()) {
                warn!(path = %logger.path().display(), error = %err, "could not write audit entry");
            }
        }
    }
}

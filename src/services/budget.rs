//! Budget service

use tracing::info;

use super::Persisted;
use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::calendar::{capitalize, parse_month};
use crate::models::{BudgetEntry, Money};
use crate::storage::Storage;

/// Service for setting budget limits
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Set (or overwrite) the limit for a month or category name
    ///
    /// Month names, abbreviated or not, are stored in full ("jun" -> "June")
    /// so the monthly report finds them. Positivity is not checked; any
    /// number is accepted.
    pub fn set(&mut self, key: &str, amount: &str) -> TrackerResult<Persisted<BudgetEntry>> {
        let key = match parse_month(key) {
            Ok(month) => month.to_string(),
            Err(_) => capitalize(key),
        };
        if key.is_empty() {
            return Err(TrackerError::Input(
                "a month or category name is required".into(),
            ));
        }
        let limit = Money::parse(amount).map_err(|e| TrackerError::Input(e.to_string()))?;

        let previous = self.storage.state_mut().budgets.set(&key, limit);

        info!(key = %key, limit = %limit, "budget set");
        match previous {
            Some(old) => self
                .storage
                .log_update(EntityType::Budget, key.clone(), None, &old, &limit),
            None => self
                .storage
                .log_create(EntityType::Budget, key.clone(), None, &limit),
        }

        Ok(Persisted {
            value: BudgetEntry { key, limit },
            saved: self.storage.save(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::reports::MonthlyReport;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let (storage, _) = Storage::open(temp_dir.path().join("expenses.json"));
        let storage = storage.with_audit(AuditLogger::new(temp_dir.path().join("audit.log")));
        (temp_dir, storage)
    }

    #[test]
    fn test_set_normalizes_and_saves() {
        let (_temp_dir, mut storage) = create_test_storage();

        let set = BudgetService::new(&mut storage).set("june", "1500").unwrap();

        assert!(set.saved.is_ok());
        assert_eq!(set.value.key, "June");
        assert_eq!(storage.state().budgets.get("June"), Some(Money::new(dec!(1500))));
    }

    #[test]
    fn test_abbreviated_month_is_stored_in_full() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);

        assert_eq!(service.set("jun", "1000").unwrap().value.key, "June");
        assert_eq!(service.set("SEPTEMBER", "50").unwrap().value.key, "September");
        assert_eq!(service.set("groceries", "75").unwrap().value.key, "Groceries");

        let report = MonthlyReport::generate(storage.state(), "June").unwrap();
        assert_eq!(report.budget_limit, Some(Money::new(dec!(1000))));
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);

        assert!(service.set("Food", "plenty").unwrap_err().is_input());
        assert!(service.set("  ", "100").unwrap_err().is_input());
        assert!(storage.state().budgets.is_empty());
    }

    #[test]
    fn test_overwrite_is_audited_as_update() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);
        service.set("Food", "400").unwrap();
        service.set("food", "450").unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[1].diff_summary.as_deref(), Some("400 -> 450"));
        assert_eq!(storage.state().budgets.len(), 1);
    }
}

// 🗂️ Registry - in-memory arena of records indexed by id
//
// Entities never hold references to each other. A contributor keeps the ids of
// its fee agreements, an agreement keeps the ids of its contributor, editor and
// issue. The registry resolves those ids. Nothing keeps the id lists in sync:
// linking a new agreement into a contributor is an explicit caller step.
//
// Cloning a registry clones the handle, not the records, so a queued command
// and its caller observe the same records.

use crate::entities::{Contributor, FeeAgreement, MagazineIssue};
use crate::error::{PublishingError, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A record that can live in a [`Registry`]
pub trait Record: Clone {
    /// Human-readable kind, used in error messages
    const KIND: &'static str;

    fn record_id(&self) -> &str;
}

pub type AgreementRegistry = Registry<FeeAgreement>;
pub type ContributorRegistry = Registry<Contributor>;
pub type IssueRegistry = Registry<MagazineIssue>;

#[derive(Debug)]
pub struct Registry<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Registry {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> Registry<T> {
    pub fn new() -> Self {
        Registry {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>> {
        self.records
            .read()
            .map_err(|_| PublishingError::RegistryPoisoned(T::KIND))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
        self.records
            .write()
            .map_err(|_| PublishingError::RegistryPoisoned(T::KIND))
    }

    /// Register a record (append-only, ids must be unique)
    pub fn register(&self, record: T) -> Result<()> {
        let mut records = self.write()?;
        if records.iter().any(|r| r.record_id() == record.record_id()) {
            return Err(PublishingError::DuplicateRecord(
                record.record_id().to_string(),
            ));
        }
        records.push(record);
        Ok(())
    }

    /// Get a snapshot of a record by id
    pub fn get(&self, id: &str) -> Result<Option<T>> {
        let records = self.read()?;
        Ok(records.iter().find(|r| r.record_id() == id).cloned())
    }

    /// Get a record by id, failing if it is unknown
    pub fn require(&self, id: &str) -> Result<T> {
        self.get(id)?
            .ok_or_else(|| PublishingError::not_found(T::KIND, id))
    }

    pub fn contains(&self, id: &str) -> Result<bool> {
        let records = self.read()?;
        Ok(records.iter().any(|r| r.record_id() == id))
    }

    /// Mutate a record in place and return the closure's result
    ///
    /// Crate-only: callers outside go through the narrow mutators below, so
    /// ids and one-way flags cannot be rewritten. The closure runs under the
    /// write lock and must not call back into the same registry.
    pub(crate) fn update<F, R>(&self, id: &str, update_fn: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut records = self.write()?;
        let record = records
            .iter_mut()
            .find(|r| r.record_id() == id)
            .ok_or_else(|| PublishingError::not_found(T::KIND, id))?;
        Ok(update_fn(record))
    }

    /// Snapshots of the given ids, in the order the ids were given
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<T>> {
        let records = self.read()?;
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                records
                    .iter()
                    .find(|r| r.record_id() == id)
                    .cloned()
                    .ok_or_else(|| PublishingError::not_found(T::KIND, id))
            })
            .collect()
    }

    /// All records in registration order
    pub fn all(&self) -> Result<Vec<T>> {
        Ok(self.read()?.clone())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}

// ============================================================================
// CONTRIBUTOR MUTATIONS
// ============================================================================

impl Registry<Contributor> {
    /// [`Contributor::update_details`] on the registered contributor
    pub fn update_details(
        &self,
        contributor_id: &str,
        contact_details: Option<&str>,
        bank_details: Option<&str>,
    ) -> Result<()> {
        self.update(contributor_id, |c| c.update_details(contact_details, bank_details))
    }

    /// [`Contributor::link_agreement`] on the registered contributor
    pub fn link_agreement(&self, contributor_id: &str, agreement: &FeeAgreement) -> Result<()> {
        self.update(contributor_id, |c| c.link_agreement(agreement))
    }
}

impl<T: Record> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        body: String,
    }

    impl Record for Note {
        const KIND: &'static str = "Note";

        fn record_id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_register_and_get() {
        let registry = Registry::new();
        registry.register(note("n1", "first")).unwrap();

        assert_eq!(registry.count().unwrap(), 1);
        assert_eq!(registry.get("n1").unwrap(), Some(note("n1", "first")));
        assert_eq!(registry.get("missing").unwrap(), None);
        assert!(registry.contains("n1").unwrap());
    }

    #[test]
    fn test_register_rejects_duplicate_id() {
        let registry = Registry::new();
        registry.register(note("n1", "first")).unwrap();

        let result = registry.register(note("n1", "second"));
        assert!(matches!(result, Err(PublishingError::DuplicateRecord(id)) if id == "n1"));
        assert_eq!(registry.require("n1").unwrap().body, "first");
    }

    #[test]
    fn test_update_is_visible_through_clones() {
        let registry = Registry::new();
        let handle = registry.clone();
        registry.register(note("n1", "first")).unwrap();

        handle
            .update("n1", |n| n.body = "edited".to_string())
            .unwrap();

        assert_eq!(registry.require("n1").unwrap().body, "edited");
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let registry: Registry<Note> = Registry::new();
        let result = registry.update("nope", |n| n.body.clear());

        assert!(matches!(
            result,
            Err(PublishingError::RecordNotFound { kind: "Note", .. })
        ));
    }

    #[test]
    fn test_contributor_mutators() {
        let registry = ContributorRegistry::new();
        registry
            .register(Contributor::new("C001", "Contributor A", "pw", "a@example.com", "123", "1111-2222"))
            .unwrap();
        let issue = MagazineIssue::new(1, "E001");
        let agreement = FeeAgreement::agreed_today(200.0, "C001", "E001", &issue).unwrap();

        registry.update_details("C001", None, Some("9999-0000")).unwrap();
        registry.link_agreement("C001", &agreement).unwrap();

        let c = registry.require("C001").unwrap();
        assert_eq!(c.contact_details, "123");
        assert_eq!(c.bank_details, "9999-0000");
        assert_eq!(c.fee_agreement_ids(), &[agreement.id().to_string()]);

        assert!(registry.update_details("C999", Some("x"), None).is_err());
    }

    #[test]
    fn test_select_preserves_requested_order() {
        let registry = Registry::new();
        registry.register(note("a", "1")).unwrap();
        registry.register(note("b", "2")).unwrap();
        registry.register(note("c", "3")).unwrap();

        let picked = registry.select(&["c", "a"]).unwrap();
        let ids: Vec<&str> = picked.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);

        assert!(registry.select(&["a", "zzz"]).is_err());
    }
}

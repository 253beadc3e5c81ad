//! # API Facade
//!
//! [`ContactsApi`] is the single entry point for every contact book operation,
//! whichever front end is driving it. It owns the session: the book is loaded
//! from the [`DataStore`] once in [`ContactsApi::open`] and then threaded
//! through each command by exclusive borrow. There is no process-wide state.
//!
//! The facade:
//! - **Dispatches** to the matching function in `commands/*.rs`
//! - **Owns** the loaded [`ContactMap`] and the store it was loaded from
//! - **Returns structured types** (`Result<CmdResult>`), never strings for display
//!
//! Mutating calls (`add`, `update`, `delete`) persist through the store as part
//! of the command; read-only calls never touch it.
//!
//! ## Generic Over DataStore
//!
//! - Production: `ContactsApi<FileStore>`
//! - Testing: `ContactsApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::ContactMap;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for contact book operations.
pub struct ContactsApi<S: DataStore> {
    store: S,
    contacts: ContactMap,
    home: PathBuf,
}

impl<S: DataStore> ContactsApi<S> {
    /// Loads the persisted book and starts a session over it.
    pub fn open(store: S, home: impl Into<PathBuf>) -> Result<Self> {
        let contacts = store.load()?;
        Ok(Self {
            store,
            contacts,
            home: home.into(),
        })
    }

    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<&str>,
        group: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.contacts, &mut self.store, name, phone, email, group)
    }

    pub fn update(
        &mut self,
        name: &str,
        update: &commands::ContactUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.contacts, &mut self.store, name, update)
    }

    pub fn delete(&mut self, name: &str, confirmed: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.contacts, &mut self.store, name, confirmed)
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.contacts, term)
    }

    pub fn get(&self, name: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.contacts, name)
    }

    pub fn list_all(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.contacts)
    }

    pub fn statistics(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.contacts)
    }

    pub fn export_csv(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.contacts, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.home, action)
    }

    pub fn contacts(&self) -> &ContactMap {
        &self.contacts
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ContactStats, ContactUpdate, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactsError;
    use crate::model::Contact;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::FailingStore;
    use crate::store::memory::InMemoryStore;
    use tempfile::tempdir;

    fn api() -> ContactsApi<InMemoryStore> {
        ContactsApi::open(InMemoryStore::new(), "/unused").unwrap()
    }

    #[test]
    fn open_loads_existing_contacts() {
        let mut existing = ContactMap::new();
        existing.insert(
            "Alice".into(),
            Contact::new("5551234567".into(), None, "Friends".into()),
        );
        let api = ContactsApi::open(InMemoryStore::with_contacts(existing.clone()), "/unused")
            .unwrap();
        assert_eq!(api.contacts(), &existing);
    }

    #[test]
    fn mutations_persist_and_reads_do_not() {
        let mut api = api();
        api.add("alice", "555-123-4567", Some("a@b.com"), Some("Friends"))
            .unwrap();
        api.add("bob", "5559876543", None, Some("Work")).unwrap();
        assert_eq!(api.store().save_count(), 2);

        api.search("ali").unwrap();
        api.get("Bob").unwrap();
        api.list_all().unwrap();
        api.statistics().unwrap();
        assert_eq!(api.store().save_count(), 2);

        api.update("bob", &ContactUpdate::new().group("Family"))
            .unwrap();
        api.delete("alice", true).unwrap();
        assert_eq!(api.store().save_count(), 4);
        assert_eq!(api.store().snapshot(), api.contacts());
    }

    #[test]
    fn dispatches_errors_from_commands() {
        let mut api = api();
        assert!(matches!(
            api.add("", "5551234567", None, None),
            Err(ContactsError::EmptyName)
        ));
        assert!(matches!(
            api.delete("Bob", true),
            Err(ContactsError::ContactNotFound(_))
        ));
    }

    #[test]
    fn statistics_reports_groups() {
        let mut api = api();
        api.add("Alice", "5551234567", None, Some("Friends")).unwrap();
        api.add("Bob", "5551234568", None, Some("Friends")).unwrap();
        api.add("Carol", "5551234569", None, Some("Work")).unwrap();

        let stats = api.statistics().unwrap().stats.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count_for("Friends"), 2);
        assert_eq!(stats.count_for("Work"), 1);
    }

    #[test]
    fn added_contact_survives_reopening_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let mut api = ContactsApi::open(FileStore::new(&path), dir.path()).unwrap();
        api.add("Alice", "555-123-4567", Some("a@b.com"), Some("Friends"))
            .unwrap();
        let original = api.get("Alice").unwrap().listed.remove(0);

        let reopened = ContactsApi::open(FileStore::new(&path), dir.path()).unwrap();
        let loaded = reopened.get("alice").unwrap().listed.remove(0);
        assert_eq!(loaded, original);
    }

    #[test]
    fn failed_update_does_not_touch_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let mut api = ContactsApi::open(FileStore::new(&path), dir.path()).unwrap();
        api.add("Alice", "5551234567", None, None).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();

        let update = ContactUpdate::new().phone("5550001111").email("bad email");
        assert!(api.update("Alice", &update).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), on_disk);
    }

    #[test]
    fn session_matches_disk_after_a_failed_write() {
        let mut api = ContactsApi::open(FailingStore::new(), "/unused").unwrap();

        let err = api.add("Alice", "5551234567", None, None).unwrap_err();
        assert!(matches!(err, ContactsError::Io(_)));
        assert!(api.contacts().is_empty());
        assert!(api.list_all().unwrap().listed.is_empty());
        assert!(matches!(
            api.add("Alice", "5551234567", None, None),
            Err(ContactsError::Io(_))
        ));
    }

    #[test]
    fn config_uses_the_session_home() {
        let dir = tempdir().unwrap();
        let api = ContactsApi::open(InMemoryStore::new(), dir.path()).unwrap();
        api.config(ConfigAction::Set("export-file".into(), "out.csv".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
    }
}

use super::DataStore;
use crate::error::Result;
use crate::model::ContactMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: ContactMap,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already populated book, as if it had been loaded from disk.
    pub fn with_contacts(contacts: ContactMap) -> Self {
        Self { contacts, saves: 0 }
    }

    /// The last saved snapshot.
    pub fn snapshot(&self) -> &ContactMap {
        &self.contacts
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<ContactMap> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &ContactMap) -> Result<()> {
        self.contacts = contacts.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::ContactsError;
    use crate::model::Contact;
    use std::io;

    /// A store whose every save fails, as if the disk were full.
    #[derive(Default)]
    pub struct FailingStore {
        contacts: ContactMap,
    }

    impl FailingStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_contacts(contacts: ContactMap) -> Self {
            Self { contacts }
        }
    }

    impl DataStore for FailingStore {
        fn load(&self) -> Result<ContactMap> {
            Ok(self.contacts.clone())
        }

        fn save(&mut self, _contacts: &ContactMap) -> Result<()> {
            Err(ContactsError::Io(io::Error::other("disk full")))
        }
    }

    pub struct StoreFixture {
        pub contacts: ContactMap,
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                contacts: ContactMap::new(),
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str, group: &str) -> Self {
            let contact = Contact::new(phone.to_string(), None, group.to_string());
            self.contacts.insert(name.to_string(), contact);
            self.store = InMemoryStore::with_contacts(self.contacts.clone());
            self
        }

        pub fn with_email_contact(mut self, name: &str, phone: &str, email: &str) -> Self {
            let contact = Contact::new(
                phone.to_string(),
                Some(email.to_string()),
                crate::model::DEFAULT_GROUP.to_string(),
            );
            self.contacts.insert(name.to_string(), contact);
            self.store = InMemoryStore::with_contacts(self.contacts.clone());
            self
        }
    }
}

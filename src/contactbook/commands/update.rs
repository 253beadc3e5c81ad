use crate::commands::{non_empty, resolve_key, CmdMessage, CmdResult, ContactUpdate};
use crate::error::{ContactsError, Result};
use crate::model::{ContactEntry, ContactMap};
use crate::store::DataStore;
use crate::validation::{validate_email, validate_phone};
use chrono::Utc;
use tracing::{debug, info};

/// Applies the non-blank fields of `update` to the named contact.
///
/// Every supplied field is validated before anything is written, so a bad
/// email never leaves a half-applied phone change behind. An update with no
/// supplied fields changes nothing, `updated_at` included, and is not saved.
pub fn run<S: DataStore>(
    contacts: &mut ContactMap,
    store: &mut S,
    name: &str,
    update: &ContactUpdate,
) -> Result<CmdResult> {
    let key = resolve_key(contacts, name)?;

    let phone = match non_empty(update.phone.as_deref()) {
        Some(raw) => Some(validate_phone(raw)?),
        None => None,
    };
    let email = non_empty(update.email.as_deref());
    if let Some(email) = email {
        if !validate_email(email) {
            return Err(ContactsError::InvalidEmail(email.to_string()));
        }
    }
    let group = non_empty(update.group.as_deref());

    let mut result = CmdResult::default();
    if phone.is_none() && email.is_none() && group.is_none() {
        debug!(name = %key, "update with no fields, nothing to do");
        result.add_message(CmdMessage::info(format!("Nothing to update for {}", key)));
        return Ok(result);
    }

    let contact = contacts
        .get_mut(&key)
        .ok_or_else(|| ContactsError::ContactNotFound(key.clone()))?;
    let previous = contact.clone();
    if let Some(phone) = phone {
        contact.phone = phone;
    }
    if let Some(email) = email {
        contact.email = Some(email.to_string());
    }
    if let Some(group) = group {
        contact.group = group.to_string();
    }
    contact.updated_at = Some(Utc::now());
    let updated = contact.clone();

    if let Err(e) = store.save(contacts) {
        contacts.insert(key, previous);
        return Err(e);
    }
    info!(name = %key, "contact updated");

    result.add_message(CmdMessage::success(format!("Contact updated: {}", key)));
    Ok(result.with_affected(vec![ContactEntry::new(key, updated)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{FailingStore, StoreFixture};

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_email_contact("Alice", "5551234567", "a@b.com")
            .with_contact("Bob", "5559876543", "Work")
    }

    #[test]
    fn updates_only_supplied_fields() {
        let StoreFixture {
            mut contacts,
            mut store,
        } = fixture();

        let update = ContactUpdate::new().phone("(555) 000-1111").group("Family");
        run(&mut contacts, &mut store, "alice", &update).unwrap();

        let alice = &contacts["Alice"];
        assert_eq!(alice.phone, "5550001111");
        assert_eq!(alice.email.as_deref(), Some("a@b.com"));
        assert_eq!(alice.group, "Family");
        assert!(alice.updated_at.is_some());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.snapshot(), &contacts);
    }

    #[test]
    fn blank_phone_keeps_existing_value() {
        let StoreFixture {
            mut contacts,
            mut store,
        } = fixture();

        let update = ContactUpdate::new().phone("").email("new@b.com");
        run(&mut contacts, &mut store, "Alice", &update).unwrap();

        assert_eq!(contacts["Alice"].phone, "5551234567");
        assert_eq!(contacts["Alice"].email.as_deref(), Some("new@b.com"));
        assert!(contacts["Alice"].updated_at.is_some());
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let StoreFixture {
            mut contacts,
            mut store,
        } = fixture();
        let before = contacts["Alice"].clone();

        let update = ContactUpdate::new().phone("").email("").group("");
        run(&mut contacts, &mut store, "Alice", &update).unwrap();
        run(&mut contacts, &mut store, "Alice", &ContactUpdate::new()).unwrap();

        assert_eq!(contacts["Alice"], before);
        assert!(contacts["Alice"].updated_at.is_none());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn missing_contact_is_not_found() {
        let StoreFixture {
            mut contacts,
            mut store,
        } = fixture();

        let err = run(
            &mut contacts,
            &mut store,
            "Zed",
            &ContactUpdate::new().group("Work"),
        )
        .unwrap_err();
        assert!(matches!(err, ContactsError::ContactNotFound(name) if name == "Zed"));
    }

    #[test]
    fn invalid_email_aborts_the_whole_update() {
        let StoreFixture {
            mut contacts,
            mut store,
        } = fixture();
        let before = contacts["Alice"].clone();

        let update = ContactUpdate::new()
            .phone("5550001111")
            .email("broken")
            .group("Family");
        let err = run(&mut contacts, &mut store, "Alice", &update).unwrap_err();

        assert!(matches!(err, ContactsError::InvalidEmail(_)));
        assert_eq!(contacts["Alice"], before);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn invalid_phone_aborts_the_whole_update() {
        let StoreFixture {
            mut contacts,
            mut store,
        } = fixture();
        let before = contacts["Bob"].clone();

        let update = ContactUpdate::new().phone("123").group("Friends");
        let err = run(&mut contacts, &mut store, "Bob", &update).unwrap_err();

        assert!(matches!(err, ContactsError::InvalidPhone(_)));
        assert_eq!(contacts["Bob"], before);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn failed_save_restores_the_previous_contact() {
        let StoreFixture { mut contacts, .. } = fixture();
        let mut store = FailingStore::with_contacts(contacts.clone());
        let before = contacts.clone();

        let update = ContactUpdate::new().phone("5550001111").group("Family");
        let err = run(&mut contacts, &mut store, "Alice", &update).unwrap_err();

        assert!(matches!(err, ContactsError::Io(_)));
        assert_eq!(contacts, before);
        assert!(contacts["Alice"].updated_at.is_none());
    }
}

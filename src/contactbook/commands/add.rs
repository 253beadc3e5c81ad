use crate::commands::{non_empty, CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::model::{Contact, ContactEntry, ContactMap, DEFAULT_GROUP};
use crate::store::DataStore;
use crate::validation::{clean_name, validate_email, validate_phone};
use tracing::info;

pub fn run<S: DataStore>(
    contacts: &mut ContactMap,
    store: &mut S,
    name: &str,
    phone: &str,
    email: Option<&str>,
    group: Option<&str>,
) -> Result<CmdResult> {
    let key = clean_name(name);
    if key.is_empty() {
        return Err(ContactsError::EmptyName);
    }
    if contacts.contains_key(&key) {
        return Err(ContactsError::DuplicateContact(key));
    }

    let phone = validate_phone(phone)?;

    let email = non_empty(email);
    if let Some(email) = email {
        if !validate_email(email) {
            return Err(ContactsError::InvalidEmail(email.to_string()));
        }
    }

    let group = non_empty(group).unwrap_or(DEFAULT_GROUP);
    let contact = Contact::new(phone, email.map(str::to_string), group.to_string());

    contacts.insert(key.clone(), contact.clone());
    if let Err(e) = store.save(contacts) {
        contacts.shift_remove(&key);
        return Err(e);
    }
    info!(name = %key, group = %contact.group, "contact added");

    let mut result = CmdResult::default().with_affected(vec![ContactEntry::new(&key, contact)]);
    result.add_message(CmdMessage::success(format!("Contact added: {}", key)));
    Ok(result)
}

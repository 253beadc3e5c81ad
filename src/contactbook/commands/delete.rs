use crate::commands::{resolve_key, CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::model::{ContactEntry, ContactMap};
use crate::store::DataStore;
use tracing::{debug, info};

/// Removes the named contact when `confirmed`; otherwise only checks it exists.
pub fn run<S: DataStore>(
    contacts: &mut ContactMap,
    store: &mut S,
    name: &str,
    confirmed: bool,
) -> Result<CmdResult> {
    let key = resolve_key(contacts, name)?;
    let mut result = CmdResult::default();

    if !confirmed {
        debug!(name = %key, "delete not confirmed");
        result.add_message(CmdMessage::info(format!("Deletion cancelled: {}", key)));
        return Ok(result);
    }

    let (index, key, contact) = contacts
        .shift_remove_full(&key)
        .ok_or_else(|| ContactsError::ContactNotFound(key.clone()))?;
    if let Err(e) = store.save(contacts) {
        contacts.shift_insert(index, key, contact);
        return Err(e);
    }
    info!(name = %key, "contact deleted");

    result.add_message(CmdMessage::success(format!("Contact deleted: {}", key)));
    Ok(result.with_affected(vec![ContactEntry::new(key, contact)]))
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{ContactEntry, ContactMap};

pub fn run(contacts: &ContactMap) -> Result<CmdResult> {
    let listed = contacts
        .iter()
        .map(|(name, contact)| ContactEntry::new(name, contact.clone()))
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

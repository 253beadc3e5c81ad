use crate::commands::{resolve_key, CmdResult};
use crate::error::Result;
use crate::model::{ContactEntry, ContactMap};

/// Looks up a single contact by (uncleaned) name.
pub fn run(contacts: &ContactMap, name: &str) -> Result<CmdResult> {
    let key = resolve_key(contacts, name)?;
    let entry = ContactEntry::new(&key, contacts[&key].clone());
    Ok(CmdResult::default().with_listed(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactsError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_contact_by_cleaned_name() {
        let fixture = StoreFixture::new().with_contact("John Smith", "5551234567", "Work");
        let result = run(&fixture.contacts, "  JOHN smith").unwrap();
        assert_eq!(result.listed[0].name, "John Smith");
        assert_eq!(result.listed[0].contact.phone, "5551234567");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let fixture = StoreFixture::new();
        assert!(matches!(
            run(&fixture.contacts, "nobody"),
            Err(ContactsError::ContactNotFound(_))
        ));
    }
}

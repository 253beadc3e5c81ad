use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{ContactEntry, ContactMap};

/// Case-insensitive substring match of `term` against contact names.
pub fn run(contacts: &ContactMap, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();

    let matches = contacts
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&term_lower))
        .map(|(name, contact)| ContactEntry::new(name, contact.clone()))
        .collect();

    Ok(CmdResult::default().with_listed(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn names(result: &CmdResult) -> Vec<&str> {
        result.listed.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn matches_substrings_ignoring_case() {
        let fixture = StoreFixture::new()
            .with_contact("Alice Smith", "5551234567", "Friends")
            .with_contact("Bob Smithers", "5551234568", "Work")
            .with_contact("Carol Jones", "5551234569", "Work");

        let result = run(&fixture.contacts, "SMITH").unwrap();
        assert_eq!(names(&result), vec!["Alice Smith", "Bob Smithers"]);

        let result = run(&fixture.contacts, "ol j").unwrap();
        assert_eq!(names(&result), vec!["Carol Jones"]);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let fixture = StoreFixture::new().with_contact("Alice", "5551234567", "Friends");
        let result = run(&fixture.contacts, "zed").unwrap();
        assert!(result.listed.is_empty());
    }

    #[test]
    fn empty_term_matches_everything() {
        let fixture = StoreFixture::new()
            .with_contact("Alice", "5551234567", "Friends")
            .with_contact("Bob", "5551234568", "Work");
        assert_eq!(run(&fixture.contacts, "").unwrap().listed.len(), 2);
    }
}

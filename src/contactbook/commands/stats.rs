use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ContactMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub total: usize,
    /// Per-group counts, in order of each group's first appearance.
    pub groups: Vec<(String, usize)>,
}

impl ContactStats {
    pub fn from_contacts(contacts: &ContactMap) -> Self {
        let mut groups: Vec<(String, usize)> = Vec::new();
        for contact in contacts.values() {
            match groups.iter_mut().find(|(g, _)| *g == contact.group) {
                Some((_, count)) => *count += 1,
                None => groups.push((contact.group.clone(), 1)),
            }
        }
        Self {
            total: contacts.len(),
            groups,
        }
    }

    pub fn count_for(&self, group: &str) -> usize {
        self.groups
            .iter()
            .find(|(g, _)| g == group)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

pub fn run(contacts: &ContactMap) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(ContactStats::from_contacts(contacts)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn counts_per_group() {
        let fixture = StoreFixture::new()
            .with_contact("Alice", "5551234567", "Friends")
            .with_contact("Bob", "5551234568", "Work")
            .with_contact("Carol", "5551234569", "Friends");

        let stats = run(&fixture.contacts).unwrap().stats.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count_for("Friends"), 2);
        assert_eq!(stats.count_for("Work"), 1);
        assert_eq!(stats.count_for("Family"), 0);
    }

    #[test]
    fn groups_keep_first_occurrence_order() {
        let fixture = StoreFixture::new()
            .with_contact("Alice", "5551234567", "Work")
            .with_contact("Bob", "5551234568", "Friends")
            .with_contact("Carol", "5551234569", "Work")
            .with_contact("Dan", "5551234560", "Other");

        let stats = ContactStats::from_contacts(&fixture.contacts);
        assert_eq!(
            stats.groups,
            vec![
                ("Work".to_string(), 2),
                ("Friends".to_string(), 1),
                ("Other".to_string(), 1),
            ]
        );
    }

    #[test]
    fn group_order_follows_insertion_not_names() {
        let fixture = StoreFixture::new()
            .with_contact("Zed", "5551234567", "Work")
            .with_contact("Amy", "5551234568", "Friends");

        let stats = ContactStats::from_contacts(&fixture.contacts);
        assert_eq!(
            stats.groups,
            vec![("Work".to_string(), 1), ("Friends".to_string(), 1)]
        );
    }

    #[test]
    fn empty_book_has_no_groups() {
        let stats = ContactStats::from_contacts(&ContactMap::new());
        assert_eq!(stats, ContactStats::default());
    }
}

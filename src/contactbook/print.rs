use chrono::{DateTime, Utc};
use colored::*;
use contactbook::api::{CmdMessage, ContactStats, MessageLevel};
use contactbook::model::ContactEntry;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const RULE: &str = "----------------------------";

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
        }
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, error: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

pub fn print_contacts<W: Write>(out: &mut W, entries: &[ContactEntry]) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No contacts found.")?;
        return Ok(());
    }
    for entry in entries {
        print_contact(out, entry)?;
    }
    Ok(())
}

pub fn print_contact<W: Write>(out: &mut W, entry: &ContactEntry) -> io::Result<()> {
    let contact = &entry.contact;
    writeln!(out)?;
    writeln!(out, "{}", RULE.dimmed())?;
    writeln!(out, "Name : {}", entry.name.bold())?;
    writeln!(out, "Phone: {}", contact.phone)?;
    if let Some(email) = &contact.email {
        writeln!(out, "Email: {}", email)?;
    }
    writeln!(out, "Group: {}", contact.group.cyan())?;
    writeln!(out, "Added: {}", format_time_ago(contact.created_at).dimmed())?;
    if let Some(updated) = contact.updated_at {
        writeln!(out, "Edit : {}", format_time_ago(updated).dimmed())?;
    }
    Ok(())
}

pub fn print_stats<W: Write>(out: &mut W, stats: &ContactStats) -> io::Result<()> {
    writeln!(out, "Total contacts: {}", stats.total.to_string().bold())?;

    let width = stats
        .groups
        .iter()
        .map(|(group, _)| group.width())
        .max()
        .unwrap_or(0);
    for (group, count) in &stats.groups {
        let padding = width.saturating_sub(group.width());
        writeln!(out, "  {}{}  {}", group, " ".repeat(padding), count)?;
    }
    Ok(())
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactbook::model::Contact;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn contact_without_email_skips_the_line() {
        let entry = ContactEntry::new(
            "Bob",
            Contact::new("5559876543".into(), None, "Work".into()),
        );
        let text = render(|out| print_contact(out, &entry));
        assert!(text.contains("Name : Bob"));
        assert!(text.contains("Phone: 5559876543"));
        assert!(!text.contains("Email:"));
        assert!(text.contains("Group: Work"));
        assert!(text.contains("Added: "));
    }

    #[test]
    fn messages_print_one_line_each() {
        let messages = [
            CmdMessage::info("Deletion cancelled: Bob"),
            CmdMessage::success("Contact added: Alice"),
        ];
        let text = render(|out| print_messages(out, &messages));
        assert_eq!(text, "Deletion cancelled: Bob\nContact added: Alice\n");
    }

    #[test]
    fn empty_listing_says_so() {
        let text = render(|out| print_contacts(out, &[]));
        assert_eq!(text, "No contacts found.\n");
    }

    #[test]
    fn stats_align_group_names() {
        let stats = ContactStats {
            total: 3,
            groups: vec![("Friends".into(), 2), ("Work".into(), 1)],
        };
        let text = render(|out| print_stats(out, &stats));
        assert_eq!(
            text,
            "Total contacts: 3\n  Friends  2\n  Work     1\n"
        );
    }
}

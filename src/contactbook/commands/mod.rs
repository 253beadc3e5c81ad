use crate::config::ContactsConfig;
use crate::error::{ContactsError, Result};
use crate::model::{ContactEntry, ContactMap};
use crate::validation::clean_name;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

pub use stats::ContactStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<ContactEntry>,
    pub listed: Vec<ContactEntry>,
    pub stats: Option<ContactStats>,
    pub export_path: Option<PathBuf>,
    pub config: Option<ContactsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, entries: Vec<ContactEntry>) -> Self {
        self.affected = entries;
        self
    }

    pub fn with_listed(mut self, entries: Vec<ContactEntry>) -> Self {
        self.listed = entries;
        self
    }

    pub fn with_stats(mut self, stats: ContactStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: ContactsConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field changes for `update`. Blank values count as "keep".
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub group: Option<String>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Cleans `raw` and returns the key if a contact is stored under it.
pub(crate) fn resolve_key(contacts: &ContactMap, raw: &str) -> Result<String> {
    let key = clean_name(raw);
    if contacts.contains_key(&key) {
        Ok(key)
    } else {
        Err(ContactsError::ContactNotFound(key))
    }
}

/// Treats empty strings as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

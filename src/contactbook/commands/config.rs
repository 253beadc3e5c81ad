use crate::commands::{CmdMessage, CmdResult};
use crate::config::ContactsConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(home: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ContactsConfig::load(home)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?.to_string();
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(home)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value.trim())));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactsError;
    use tempfile::tempdir;

    #[test]
    fn show_all_returns_defaults_without_writing() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ContactsConfig::default()));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn set_persists_and_show_key_reads_it_back() {
        let dir = tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("export-file".into(), "book.csv".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("export-file".into())).unwrap();
        assert_eq!(result.messages[0].content, "export-file = book.csv");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = tempdir().unwrap();
        let err = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap_err();
        assert!(matches!(err, ContactsError::Config(_)));
    }
}

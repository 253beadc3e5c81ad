use super::DataStore;
use crate::error::{ContactsError, Result};
use crate::model::ContactMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(ContactsError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .data_file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("contacts");
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<ContactMap> {
        if !self.data_file.exists() {
            debug!(path = %self.data_file.display(), "no contact file yet, starting empty");
            return Ok(ContactMap::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(ContactsError::Io)?;
        let contacts: ContactMap =
            serde_json::from_str(&content).map_err(ContactsError::Serialization)?;
        debug!(path = %self.data_file.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&mut self, contacts: &ContactMap) -> Result<()> {
        let dir = self
            .data_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.ensure_dir(&dir)?;

        let content =
            serde_json::to_string_pretty(contacts).map_err(ContactsError::Serialization)?;

        // Atomic write
        let tmp_file = self.tmp_path(&dir);
        fs::write(&tmp_file, content).map_err(ContactsError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ContactsError::Io(e));
        }

        debug!(path = %self.data_file.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}

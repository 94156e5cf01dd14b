use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SELECTION_FILE: &str = "selection.json";

/// The lesson last picked in the catalog, handed to the practice view and to
/// the next `--practice` run. Not a durable record of progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub language_code: String,
    pub lesson_id: String,
    #[serde(default)]
    pub lesson_title: String,
    pub selected_at: DateTime<Utc>,
}

impl Selection {
    pub fn new(language_code: &str, lesson_id: &str, lesson_title: &str) -> Self {
        Self {
            language_code: language_code.to_string(),
            lesson_id: lesson_id.to_string(),
            lesson_title: lesson_title.to_string(),
            selected_at: Utc::now(),
        }
    }
}

pub struct SelectionStore {
    base_dir: PathBuf,
}

impl SelectionStore {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("glossa");
        Self::with_base_dir(base_dir)
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn path(&self) -> PathBuf {
        self.base_dir.join(SELECTION_FILE)
    }

    /// Returns None when nothing was selected yet or the file is unreadable.
    pub fn load(&self) -> Option<Selection> {
        let content = fs::read_to_string(self.path()).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn save(&self, selection: &Selection) -> Result<()> {
        let path = self.path();
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(selection)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, SelectionStore) {
        let dir = TempDir::new().unwrap();
        let store = SelectionStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let (_dir, store) = make_test_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = make_test_store();
        let selection = Selection::new("el", "4", "Mnemonic Devices for Greek");
        store.save(&selection).unwrap();
        assert_eq!(store.load(), Some(selection));
    }

    #[test]
    fn test_save_replaces_previous_selection() {
        let (_dir, store) = make_test_store();
        store.save(&Selection::new("el", "1", "Greek Alphabet")).unwrap();
        store.save(&Selection::new("el", "2", "Contextual Learning")).unwrap();
        assert_eq!(store.load().unwrap().lesson_id, "2");
    }

    #[test]
    fn test_corrupt_file_loads_nothing() {
        let (dir, store) = make_test_store();
        fs::write(dir.path().join(SELECTION_FILE), "{not json").unwrap();
        assert!(store.load().is_none());
    }
}

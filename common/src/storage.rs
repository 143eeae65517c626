use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::config::{ConfigContentProvider, ConfigSerializer, YamlConfigSerializer};
use crate::log_warn;

pub type SharedStorage = Arc<Mutex<LocalStorage>>;

/// Small string key-value store persisted as a YAML map.
///
/// A missing or malformed backing document reads as empty.
pub struct LocalStorage {
    provider: Box<dyn ConfigContentProvider + Send + Sync>,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    pub fn new(provider: impl ConfigContentProvider + Send + Sync + 'static) -> Self {
        let items: BTreeMap<String, String> = match provider.get_config_content() {
            Ok(Some(content)) => YamlConfigSerializer::new()
                .deserialize(&content)
                .unwrap_or_else(|e: String| {
                    log_warn!("Ignoring malformed storage: {}", e);
                    BTreeMap::new()
                }),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                log_warn!("Storage unavailable, starting empty: {}", e);
                BTreeMap::new()
            }
        };

        Self {
            provider: Box::new(provider),
            items,
        }
    }

    pub fn into_shared(self) -> SharedStorage {
        Arc::new(Mutex::new(self))
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) -> Result<(), String> {
        self.items.insert(key.to_string(), value.into());
        self.flush()
    }

    pub fn remove_item(&mut self, key: &str) -> Result<(), String> {
        if self.items.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn flush(&self) -> Result<(), String> {
        let content = YamlConfigSerializer::new().serialize(&self.items)?;
        self.provider.set_config_content(&content)
    }
}

pub fn with_storage<T>(
    storage: &SharedStorage,
    action: impl FnOnce(&mut LocalStorage) -> T,
) -> Result<T, String> {
    let mut guard = storage
        .lock()
        .map_err(|_| "Storage lock poisoned".to_string())?;
    Ok(action(&mut guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileContentConfigProvider, MemoryContentConfigProvider};

    #[test]
    fn test_set_get_remove() {
        let mut storage = LocalStorage::new(MemoryContentConfigProvider::new());
        assert!(storage.is_empty());

        storage.set_item("miniGames.clicker.best", "42").unwrap();
        assert_eq!(storage.get_item("miniGames.clicker.best"), Some("42"));

        storage.remove_item("miniGames.clicker.best").unwrap();
        assert_eq!(storage.get_item("miniGames.clicker.best"), None);
    }

    #[test]
    fn test_malformed_document_reads_as_empty() {
        let storage =
            LocalStorage::new(MemoryContentConfigProvider::with_content("- not\n- a map\n"));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_items_survive_reopen() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("mini_games_storage_{}.yaml", random_number));

        {
            let mut storage = LocalStorage::new(FileContentConfigProvider::new(path.clone()));
            storage.set_item("miniGames.clicker.best", "17").unwrap();
        }

        let reopened = LocalStorage::new(FileContentConfigProvider::new(path.clone()));
        assert_eq!(reopened.get_item("miniGames.clicker.best"), Some("17"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut storage = LocalStorage::new(MemoryContentConfigProvider::new());
        assert!(storage.remove_item("absent").is_ok());
    }
}

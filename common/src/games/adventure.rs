use crate::config::{ConfigSerializer, YamlConfigSerializer};
use crate::games::SessionRng;
use crate::log_warn;
use crate::storage::{SharedStorage, with_storage};

pub const ADVENTURES_KEY: &str = "miniGames.adventures";
pub const MAX_SAVED_ADVENTURES: usize = 20;

pub const CHARACTERS: [&str; 7] = [
    "knight",
    "mage",
    "thief",
    "hunter",
    "alchemist",
    "traveler",
    "archer",
];

pub const LOCATIONS: [&str; 6] = [
    "a dark forest",
    "an abandoned castle",
    "an underwater kingdom",
    "the desert",
    "a city in the clouds",
    "an ice cave",
];

pub const VILLAINS: [&str; 6] = [
    "a dragon",
    "a sorcerer",
    "a goblin",
    "an ancient spirit",
    "a necromancer",
    "a pirate captain",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdventureSnapshot {
    pub current: Option<String>,
    pub saved: Vec<String>,
}

pub fn generate_adventure(rng: &mut SessionRng) -> String {
    let character = rng.choose(&CHARACTERS).copied().unwrap_or(CHARACTERS[0]);
    let location = rng.choose(&LOCATIONS).copied().unwrap_or(LOCATIONS[0]);
    let villain = rng.choose(&VILLAINS).copied().unwrap_or(VILLAINS[0]);
    format!(
        "Your hero, the {}, is in {} and fights {}.",
        character, location, villain
    )
}

/// Newest first, first occurrence wins, at most [`MAX_SAVED_ADVENTURES`].
pub fn prepend_unique(saved: &[String], text: &str) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(saved.len() + 1);
    for item in std::iter::once(text).chain(saved.iter().map(String::as_str)) {
        if !merged.iter().any(|existing| existing == item) {
            merged.push(item.to_string());
        }
        if merged.len() == MAX_SAVED_ADVENTURES {
            break;
        }
    }
    merged
}

pub fn load_saved_adventures(storage: &SharedStorage) -> Vec<String> {
    let raw = with_storage(storage, |storage| {
        storage.get_item(ADVENTURES_KEY).map(str::to_string)
    })
    .unwrap_or_else(|e| {
        log_warn!("[adventure] Could not read saved adventures: {}", e);
        None
    });

    let Some(raw) = raw else {
        return Vec::new();
    };
    let parsed: Result<Vec<String>, String> = YamlConfigSerializer::new().deserialize(&raw);
    parsed.unwrap_or_else(|e| {
        log_warn!("[adventure] Ignoring malformed saved adventures: {}", e);
        Vec::new()
    })
}

/// Generated text plus the saved list kept in local storage.
pub struct AdventureGenerator {
    rng: SessionRng,
    storage: SharedStorage,
    current: Option<String>,
}

impl AdventureGenerator {
    pub fn new(seed: u64, storage: SharedStorage) -> Self {
        Self {
            rng: SessionRng::new(seed),
            storage,
            current: None,
        }
    }

    pub fn generate(&mut self) -> &str {
        self.current.insert(generate_adventure(&mut self.rng))
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns `Ok(false)` when nothing has been generated yet.
    pub fn save_current(&self) -> Result<bool, String> {
        let Some(current) = &self.current else {
            return Ok(false);
        };
        let merged = prepend_unique(&load_saved_adventures(&self.storage), current);
        let content = YamlConfigSerializer::new().serialize(&merged)?;
        with_storage(&self.storage, |storage| storage.set_item(ADVENTURES_KEY, content))??;
        Ok(true)
    }

    pub fn clear_saved(&self) -> Result<(), String> {
        with_storage(&self.storage, |storage| storage.remove_item(ADVENTURES_KEY))?
    }

    pub fn snapshot(&self) -> AdventureSnapshot {
        AdventureSnapshot {
            current: self.current.clone(),
            saved: load_saved_adventures(&self.storage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;
    use crate::storage::LocalStorage;

    fn empty_storage() -> SharedStorage {
        LocalStorage::new(MemoryContentConfigProvider::new()).into_shared()
    }

    #[test]
    fn test_generated_sentence_uses_lists() {
        let mut rng = SessionRng::new(5);
        let text = generate_adventure(&mut rng);
        assert!(text.starts_with("Your hero, the "));
        assert!(CHARACTERS.iter().any(|c| text.contains(c)));
        assert!(LOCATIONS.iter().any(|l| text.contains(l)));
        assert!(VILLAINS.iter().any(|v| text.ends_with(&format!("{}.", v))));
    }

    #[test]
    fn test_prepend_dedupes_keeping_first() {
        let saved = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        assert_eq!(prepend_unique(&saved, "a"), vec!["a", "b", "c"]);
        assert_eq!(prepend_unique(&saved, "d"), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_prepend_truncates_to_limit() {
        let saved: Vec<String> = (0..MAX_SAVED_ADVENTURES).map(|i| i.to_string()).collect();
        let merged = prepend_unique(&saved, "new");
        assert_eq!(merged.len(), MAX_SAVED_ADVENTURES);
        assert_eq!(merged[0], "new");
        assert_eq!(merged.last().map(String::as_str), Some("18"));
    }

    #[test]
    fn test_save_before_generate_is_noop() {
        let storage = empty_storage();
        let generator = AdventureGenerator::new(1, storage.clone());
        assert_eq!(generator.save_current(), Ok(false));
        assert!(load_saved_adventures(&storage).is_empty());
    }

    #[test]
    fn test_save_and_clear() {
        let storage = empty_storage();
        let mut generator = AdventureGenerator::new(1, storage.clone());
        let first = generator.generate().to_string();
        assert_eq!(generator.save_current(), Ok(true));
        assert_eq!(generator.save_current(), Ok(true));
        assert_eq!(generator.snapshot().saved, vec![first.clone()]);

        generator.clear_saved().unwrap();
        assert!(generator.snapshot().saved.is_empty());
        assert_eq!(generator.current(), Some(first.as_str()));
    }

    #[test]
    fn test_malformed_saved_list_reads_as_empty() {
        let storage = empty_storage();
        with_storage(&storage, |s| s.set_item(ADVENTURES_KEY, "not: [a list")).unwrap().unwrap();
        assert!(load_saved_adventures(&storage).is_empty());
    }
}

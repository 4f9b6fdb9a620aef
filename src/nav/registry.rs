//! Static module-to-navigation registry
//!
//! Three modules have a primary navigation surface (messaging, my-learning,
//! portfolio). Every other module is reachable only through the trailing
//! "More" sheet and maps to no entry here.

use indexmap::IndexMap;

use super::types::{ModuleKey, NavEntry};

/// Maps module keys to their primary navigation entries
///
/// Read-only after construction. Key order is [`ModuleKey::ALL`] order and
/// defines the default navigation ordering between the fixed leading Home
/// entry and the fixed trailing More entry.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    entries: IndexMap<ModuleKey, Option<NavEntry>>,
}

impl ModuleRegistry {
    /// Builds the registry with one slot per module key
    pub fn new() -> Self {
        let mut entries = IndexMap::with_capacity(ModuleKey::ALL.len());
        for key in ModuleKey::ALL {
            entries.insert(key, primary_nav_entry(key));
        }
        Self { entries }
    }

    /// Returns the primary navigation entry for a module key
    ///
    /// `None` means the module has no primary navigation surface, not that
    /// the key is missing: every key has a deterministic slot.
    pub fn lookup_nav_entry(&self, key: ModuleKey) -> Option<&NavEntry> {
        self.entries.get(&key).and_then(|entry| entry.as_ref())
    }

    /// Returns all module keys in navigation order
    pub fn all_module_keys(&self) -> impl Iterator<Item = ModuleKey> + '_ {
        self.entries.keys().copied()
    }

    /// Number of module keys in the registry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fixed leading navigation entry
    pub fn home_entry(&self) -> NavEntry {
        NavEntry::new("/", "Home", "home")
    }

    /// The fixed trailing navigation entry
    pub fn more_entry(&self) -> NavEntry {
        NavEntry::new("/more", "More", "menu")
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn primary_nav_entry(key: ModuleKey) -> Option<NavEntry> {
    match key {
        ModuleKey::Messaging => Some(NavEntry::new("/messaging", "Messages", "message-circle")),
        ModuleKey::MyLearning => Some(NavEntry::new("/my-learning", "My Learning", "book-open")),
        ModuleKey::Portfolio => Some(NavEntry::new("/portfolio", "Portfolio", "images")),
        _ => None,
    }
}

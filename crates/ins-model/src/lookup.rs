//! ASCII case-insensitive index used by tables and the catalog.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Maps ASCII-lowercased keys to positions.
///
/// The first insertion of a key wins; later collisions are reported back to
/// the caller together with the position that already owns the key.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveIndex {
    map: HashMap<String, usize>,
}

impl CaseInsensitiveIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Insert `key`, returning the existing position on collision.
    pub fn insert(&mut self, key: &str, position: usize) -> Result<(), usize> {
        match self.map.entry(fold(key)) {
            Entry::Occupied(existing) => Err(*existing.get()),
            Entry::Vacant(slot) => {
                slot.insert(position);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.map.get(&fold(key)).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(&fold(key))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(folded key, position)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.map.iter().map(|(key, position)| (key.as_str(), *position))
    }
}

impl PartialEq for CaseInsensitiveIndex {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

/// Fold a key the way every index in this crate does.
pub fn fold(key: &str) -> String {
    key.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_ascii_case() {
        let mut index = CaseInsensitiveIndex::default();
        index.insert("Visa", 0).expect("insert");
        assert_eq!(index.get("visa"), Some(0));
        assert_eq!(index.get("VISA"), Some(0));
        assert!(index.contains("vIsA"));
        assert_eq!(index.get("amex"), None);
    }

    #[test]
    fn collision_reports_owner() {
        let mut index = CaseInsensitiveIndex::with_capacity(2);
        index.insert("VA", 3).expect("insert");
        assert_eq!(index.insert("va", 7), Err(3));
        assert_eq!(index.len(), 1);
    }
}

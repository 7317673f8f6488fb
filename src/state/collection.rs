use chrono::Utc;

use super::data::{Entry, ItemDescriptor};

/// The ordered collection of items the user has added.
///
/// Entries keep insertion order: `add` appends at the end and the display
/// order is exactly the order of adds. The collection is created empty
/// with the screen and dropped with it; nothing is persisted.
#[derive(Debug, Default)]
pub struct Collection {
    entries: Vec<Entry>,
    /// Monotonic sequence folded into entry ids.
    /// A timestamp alone can collide when two adds land in the same
    /// millisecond; the sequence keeps ids unique regardless.
    next_seq: u64,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance of the given item to the end of the collection.
    ///
    /// Always succeeds: there is no capacity limit and duplicates are
    /// allowed (two entries may share a title but never an id).
    pub fn add(&mut self, descriptor: &ItemDescriptor) -> &Entry {
        let entry = Entry {
            id: self.mint_id(),
            title: descriptor.title.clone(),
            thumbnail: descriptor.thumbnail,
        };
        let index = self.entries.len();
        self.entries.push(entry);
        &self.entries[index]
    }

    /// Remove the entry with the given id.
    ///
    /// Removing an id that is not present (including removing the same id
    /// twice) is a silent no-op.
    pub fn remove(&mut self, id: &str) {
        if let Some(index) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries.remove(index);
        }
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries currently in the collection.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generate a fresh entry id: millisecond timestamp plus a
    /// per-collection sequence number.
    fn mint_id(&mut self) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        format!("{}-{}", Utc::now().timestamp_millis(), seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Thumbnail;

    fn gloves() -> ItemDescriptor {
        ItemDescriptor {
            title: "Gloves".to_string(),
            thumbnail: Thumbnail::Gloves,
        }
    }

    fn socks() -> ItemDescriptor {
        ItemDescriptor {
            title: "Socks".to_string(),
            thumbnail: Thumbnail::Socks,
        }
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut collection = Collection::new();
        collection.add(&gloves());
        assert_eq!(collection.len(), 1);

        collection.add(&socks());
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.entries()[0].title, "Gloves");
        assert_eq!(collection.entries()[1].title, "Socks");
    }

    #[test]
    fn test_remove_present_id() {
        let mut collection = Collection::new();
        let id = collection.add(&gloves()).id.clone();
        collection.add(&socks());

        collection.remove(&id);

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.entries()[0].title, "Socks");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut collection = Collection::new();
        let id = collection.add(&gloves()).id.clone();

        collection.remove(&id);
        collection.remove(&id);
        collection.remove("never-existed");

        assert!(collection.is_empty());
    }

    #[test]
    fn test_duplicate_adds_get_distinct_ids() {
        let mut collection = Collection::new();
        let first = collection.add(&gloves()).id.clone();
        let second = collection.add(&gloves()).id.clone();

        assert_ne!(first, second);
        assert_eq!(collection.entries()[0].title, collection.entries()[1].title);
    }

    #[test]
    fn test_rapid_adds_never_collide() {
        // No delay between adds: many of these land in the same
        // millisecond, which is exactly where a timestamp-only id fails.
        let mut collection = Collection::new();
        for _ in 0..1000 {
            collection.add(&gloves());
        }

        let mut ids: Vec<&str> = collection
            .entries()
            .iter()
            .map(|entry| entry.id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 1000);
    }
}

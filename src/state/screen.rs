use super::catalog::{Catalog, CatalogError};
use super::collection::Collection;
use super::data::Entry;

/// What happened to a submitted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// The input matched a catalog item and an entry was added.
    Added,
    /// The input matched nothing; no state changed.
    NotRecognized,
}

/// The screen's data model: catalog, collection, and current input text.
///
/// This is the only place the catalog and the collection are wired
/// together. The UI layer translates widget events into the three calls
/// below and renders whatever `entries` returns; it holds no model state
/// of its own.
pub struct Screen {
    catalog: Catalog,
    collection: Collection,
    input: String,
}

impl Screen {
    /// Create a screen with an empty collection and empty input.
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Screen {
            catalog: Catalog::load()?,
            collection: Collection::new(),
            input: String::new(),
        })
    }

    /// Replace the current input text (user typed).
    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// The current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submit the current input.
    ///
    /// On a catalog hit, adds an entry and clears the input. On a miss,
    /// nothing changes: no entry is added and the input is kept so the
    /// user can correct it.
    pub fn submit(&mut self) -> Submit {
        match self.catalog.resolve(&self.input) {
            Some(descriptor) => {
                self.collection.add(descriptor);
                self.input.clear();
                Submit::Added
            }
            None => Submit::NotRecognized,
        }
    }

    /// Remove the entry with the given id (user pressed its card).
    /// No-op when the id is not present.
    pub fn remove_entry(&mut self, id: &str) {
        self.collection.remove(id);
    }

    /// Entries to render, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        self.collection.entries()
    }

    /// Number of recognized names in the catalog.
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen {
        Screen::new().unwrap()
    }

    #[test]
    fn test_submit_match_adds_and_clears_input() {
        let mut screen = screen();
        screen.set_input("GLOVES".to_string());

        assert_eq!(screen.submit(), Submit::Added);
        assert_eq!(screen.entries().len(), 1);
        assert_eq!(screen.entries()[0].title, "Gloves");
        assert_eq!(screen.input(), "");
    }

    #[test]
    fn test_submit_miss_changes_nothing() {
        let mut screen = screen();
        screen.set_input("shoes".to_string());

        assert_eq!(screen.submit(), Submit::NotRecognized);
        assert!(screen.entries().is_empty());
        assert_eq!(screen.input(), "shoes");
    }

    #[test]
    fn test_remove_first_of_two() {
        let mut screen = screen();
        screen.set_input("gloves".to_string());
        screen.submit();
        screen.set_input("socks".to_string());
        screen.submit();

        let first_id = screen.entries()[0].id.clone();
        screen.remove_entry(&first_id);

        assert_eq!(screen.entries().len(), 1);
        assert_eq!(screen.entries()[0].title, "Socks");
    }

    #[test]
    fn test_duplicate_submits_make_independent_entries() {
        let mut screen = screen();
        for _ in 0..2 {
            screen.set_input("gloves".to_string());
            screen.submit();
        }

        assert_eq!(screen.entries().len(), 2);
        assert_eq!(screen.entries()[0].title, "Gloves");
        assert_eq!(screen.entries()[1].title, "Gloves");
        assert_ne!(screen.entries()[0].id, screen.entries()[1].id);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut screen = screen();
        screen.set_input("sandals".to_string());
        screen.submit();

        screen.remove_entry("not-an-id");

        assert_eq!(screen.entries().len(), 1);
    }
}

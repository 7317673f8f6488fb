/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog/collection layer and the UI layer.

use crate::assets::Thumbnail;

/// Display metadata for one recognized catalog item.
///
/// Immutable; owned by the catalog and keyed there by normalized name.
/// The thumbnail reference has already been checked against the bundled
/// asset set when this struct exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDescriptor {
    /// Display title (e.g., "Gloves")
    pub title: String,
    /// Bundled thumbnail for the grid card
    pub thumbnail: Thumbnail,
}

/// One user-added instance in the collection.
///
/// Distinct from its descriptor by carrying a unique id: two entries may
/// share a title and thumbnail but never an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique per live entry, generated at add-time
    pub id: String,
    /// Display title copied from the descriptor
    pub title: String,
    /// Thumbnail copied from the descriptor
    pub thumbnail: Thumbnail,
}

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use super::data::ItemDescriptor;
use crate::assets::Thumbnail;

/// The catalog document bundled into the binary.
/// Maps item name -> { title, thumbnail filename }.
const CATALOG_JSON: &str = include_str!("../../assets/data/known_items.json");

/// A catalog entry as written in the bundled document, before the
/// thumbnail filename has been checked against the asset set.
#[derive(Debug, Deserialize)]
struct RawEntry {
    title: String,
    thumbnail: String,
}

/// Errors raised while loading the catalog document.
///
/// All of these are configuration defects in the bundled assets, not
/// runtime conditions: the application refuses to start rather than
/// showing a broken grid later.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON of the expected shape
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A catalog entry references a thumbnail outside the bundled set
    #[error("catalog entry '{name}' references unknown thumbnail '{thumbnail}'")]
    UnknownThumbnail { name: String, thumbnail: String },

    /// Two document keys collapse to the same normalized name
    #[error("catalog keys '{first}' and '{second}' normalize to the same name")]
    DuplicateKey { first: String, second: String },
}

/// The Catalog is the fixed set of recognized item names.
///
/// It is built once at startup from the bundled document and is read-only
/// for the lifetime of the process. Lookup is exact match on the
/// normalized name; there is no partial, fuzzy, or prefix matching.
#[derive(Debug)]
pub struct Catalog {
    items: HashMap<String, ItemDescriptor>,
}

/// Normalize an item name for catalog lookup: trim surrounding
/// whitespace and lowercase. Matching is case- and whitespace-insensitive.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl Catalog {
    /// Load and validate the bundled catalog document.
    ///
    /// Every key is normalized, and every thumbnail reference is resolved
    /// against the bundled asset set. Any defect fails the load.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Build a catalog from a JSON document string.
    fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, RawEntry> = serde_json::from_str(json)?;

        let mut items = HashMap::with_capacity(raw.len());
        for (name, entry) in raw {
            let thumbnail = Thumbnail::from_ref(&entry.thumbnail).ok_or_else(|| {
                CatalogError::UnknownThumbnail {
                    name: name.clone(),
                    thumbnail: entry.thumbnail.clone(),
                }
            })?;

            let key = normalize(&name);
            let descriptor = ItemDescriptor {
                title: entry.title,
                thumbnail,
            };
            if items.insert(key.clone(), descriptor).is_some() {
                return Err(CatalogError::DuplicateKey {
                    first: key,
                    second: name,
                });
            }
        }

        Ok(Catalog { items })
    }

    /// Resolve raw user input to an item descriptor.
    ///
    /// The input is normalized, then matched exactly against the catalog
    /// keys. A miss returns `None`; it is not an error, the caller simply
    /// does nothing with it.
    pub fn resolve(&self, raw_input: &str) -> Option<&ItemDescriptor> {
        self.items.get(&normalize(raw_input))
    }

    /// Number of recognized item names.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

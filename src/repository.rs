use serde::de::DeserializeOwned;

use crate::domain::category::default_categories;
use crate::domain::color::ColorEntry;
use crate::store::{RecordStore, StoreError};

pub const COLORS_KEY: &str = "pantone_colors";
pub const CATEGORIES_KEY: &str = "pantone_categories";

/// Typed facade over a [`RecordStore`]. Every save replaces the whole document.
pub struct CatalogRepository<S> {
    store: S,
}

impl<S: RecordStore> CatalogRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_colors(&self) -> Vec<ColorEntry> {
        self.load_document(COLORS_KEY).unwrap_or_default()
    }

    pub fn save_colors(&mut self, colors: &[ColorEntry]) -> Result<(), StoreError> {
        self.save_document(COLORS_KEY, colors)
    }

    pub fn load_categories(&self) -> Vec<String> {
        self.load_document(CATEGORIES_KEY)
            .unwrap_or_else(default_categories)
    }

    pub fn save_categories(&mut self, categories: &[String]) -> Result<(), StoreError> {
        self.save_document(CATEGORIES_KEY, categories)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_document<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring unparsable '{}' document: {}", key, err);
                None
            }
        }
    }

    fn save_document<T: serde::Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let document = serde_json::to_string(value)?;
        self.store.put(key, &document)
    }
}

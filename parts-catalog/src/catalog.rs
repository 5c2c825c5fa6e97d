//! Generic per-category catalog: records keyed by canonical key plus an alias index.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{
    alias::{AliasIndex, normalize_phrase},
    category::Category,
    errors::CatalogError,
    field::PartRecord,
};

/// On-disk layout of one category file.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "R: DeserializeOwned"))]
struct CatalogFile<R> {
    records: BTreeMap<String, R>,
    #[serde(default)]
    aliases: HashMap<String, String>,
}

/// A resolved catalog hit.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a, R> {
    pub key: &'a str,
    pub record: &'a R,
}

/// Read-only catalog of one hardware category.
#[derive(Debug, Clone)]
pub struct Catalog<R> {
    category: Category,
    records: BTreeMap<String, R>,
    aliases: AliasIndex,
}

impl<R: PartRecord> Catalog<R> {
    /// Build a catalog and validate its integrity.
    pub fn new(
        category: Category,
        records: BTreeMap<String, R>,
        aliases: AliasIndex,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            category,
            records,
            aliases,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a category file (see `data/*.json`).
    pub fn from_json(category: Category, json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile<R> =
            serde_json::from_str(json).map_err(|source| CatalogError::Json {
                file: category.data_file(),
                source,
            })?;
        Self::new(category, file.records, AliasIndex::new(file.aliases))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let name = self.category.slug();

        if self.records.is_empty() {
            return Err(CatalogError::Empty {
                catalog: name.to_string(),
            });
        }
        for key in self.records.keys() {
            let expected = normalize_phrase(key);
            if &expected != key {
                return Err(CatalogError::UnnormalizedKey {
                    catalog: name.to_string(),
                    key: key.clone(),
                    expected,
                });
            }
        }
        self.aliases
            .validate(name, |target| self.records.contains_key(target))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Canonical key candidate for a raw user phrase (alias hit or the phrase itself).
    pub fn resolve_key(&self, raw: &str) -> String {
        self.aliases.resolve(raw)
    }

    /// Resolve a raw user phrase all the way to a record.
    pub fn lookup(&self, raw: &str) -> Option<Resolved<'_, R>> {
        let key = self.resolve_key(raw);
        self.records
            .get_key_value(&key)
            .map(|(key, record)| Resolved { key, record })
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, &R)> {
        self.records.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn aliases(&self) -> &AliasIndex {
        &self.aliases
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

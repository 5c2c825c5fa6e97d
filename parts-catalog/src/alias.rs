//! Alias resolution: many user phrasings map onto one canonical catalog key.

use std::collections::HashMap;

use crate::errors::CatalogError;

/// Normalize a user supplied phrase into lookup form (trimmed, lowercase).
pub fn normalize_phrase(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Many-to-one map from normalized phrases to canonical keys.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    entries: HashMap<String, String>,
}

impl AliasIndex {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Resolve a raw phrase into a candidate canonical key.
    ///
    /// Unknown phrases fall back to their normalized form, so typing the
    /// canonical key itself works even without an explicit alias entry.
    /// The caller still has to check that the candidate exists.
    pub fn resolve(&self, raw: &str) -> String {
        let normalized = normalize_phrase(raw);
        match self.entries.get(&normalized) {
            Some(target) => target.clone(),
            None => normalized,
        }
    }

    /// Exact lookup of an already normalized alias.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, k)| (a.as_str(), k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every alias is normalized and targets a key accepted by `exists`.
    pub fn validate(
        &self,
        catalog: &str,
        exists: impl Fn(&str) -> bool,
    ) -> Result<(), CatalogError> {
        for (alias, target) in self.iter() {
            let expected = normalize_phrase(alias);
            if expected != alias {
                return Err(CatalogError::UnnormalizedKey {
                    catalog: catalog.to_string(),
                    key: alias.to_string(),
                    expected,
                });
            }
            if !exists(target) {
                return Err(CatalogError::DanglingAlias {
                    catalog: catalog.to_string(),
                    alias: alias.to_string(),
                    target: target.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, String)> for AliasIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

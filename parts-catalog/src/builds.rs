//! Prebuilt configuration tiers (entry-level, mid-range, high-end).

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::{alias::AliasIndex, errors::CatalogError, text::format_pesos};

pub const BUILDS_FILE: &str = "builds.json";

/// One row of a build sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildLineItem {
    pub component: String,
    pub model: String,
    /// Whole pesos.
    pub price: u64,
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildProfile {
    pub name: String,
    /// Whole pesos; must equal the sum of the line items.
    pub total: u64,
    pub components: Vec<BuildLineItem>,
}

impl BuildProfile {
    pub fn line_item_sum(&self) -> u64 {
        self.components.iter().map(|c| c.price).sum()
    }

    /// Render the tier as a headline followed by one line per component.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .components
            .iter()
            .map(|item| {
                format!(
                    "- {}: {} | {} | {}",
                    item.component,
                    item.model,
                    format_pesos(item.price),
                    item.notes
                )
            })
            .collect();
        format!(
            "{} (Total: {})\n\nComponents:\n{}",
            self.name,
            format_pesos(self.total),
            lines.join("\n")
        )
    }
}

#[derive(Debug, Deserialize)]
struct BuildsFile {
    tiers: BTreeMap<String, BuildProfile>,
    #[serde(default)]
    aliases: HashMap<String, String>,
}

/// All build tiers plus the phrasings that select them.
#[derive(Debug, Clone)]
pub struct BuildCatalog {
    tiers: BTreeMap<String, BuildProfile>,
    aliases: AliasIndex,
}

impl BuildCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: BuildsFile = serde_json::from_str(json).map_err(|source| CatalogError::Json {
            file: BUILDS_FILE.to_string(),
            source,
        })?;

        let catalog = Self {
            tiers: file.tiers,
            aliases: AliasIndex::new(file.aliases),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.tiers.is_empty() {
            return Err(CatalogError::Empty {
                catalog: "builds".into(),
            });
        }
        for (tier, profile) in &self.tiers {
            let sum = profile.line_item_sum();
            if sum != profile.total {
                return Err(CatalogError::BuildTotalMismatch {
                    tier: tier.clone(),
                    sum,
                    total: profile.total,
                });
            }
        }
        self.aliases
            .validate("builds", |target| self.tiers.contains_key(target))
    }

    /// Resolve a tier phrase such as "premium" or "Mid Range" to its profile.
    pub fn resolve(&self, raw: &str) -> Option<(&str, &BuildProfile)> {
        let key = self.aliases.resolve(raw);
        self.tiers
            .get_key_value(&key)
            .map(|(k, profile)| (k.as_str(), profile))
    }

    pub fn tier_keys(&self) -> impl Iterator<Item = &str> {
        self.tiers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILTIN: &str = include_str!("../data/builds.json");

    #[test]
    fn premium_resolves_to_high_end_with_eight_items() {
        let builds = BuildCatalog::from_json(BUILTIN).unwrap();
        let (key, profile) = builds.resolve("Premium").unwrap();

        assert_eq!(key, "high-end");
        assert_eq!(profile.components.len(), 8);
        assert_eq!(profile.line_item_sum(), profile.total);
        assert_eq!(profile.total, 85_750);
    }

    #[test]
    fn synonyms_and_canonical_names_resolve() {
        let builds = BuildCatalog::from_json(BUILTIN).unwrap();
        assert_eq!(builds.resolve("mid range").unwrap().0, "mid-range");
        assert_eq!(builds.resolve(" BEGINNER ").unwrap().0, "entry-level");
        assert_eq!(builds.resolve("entry-level").unwrap().0, "entry-level");
        assert!(builds.resolve("workstation").is_none());
    }

    #[test]
    fn render_lists_every_line_item() {
        let builds = BuildCatalog::from_json(BUILTIN).unwrap();
        let (_, profile) = builds.resolve("entry-level").unwrap();
        let text = profile.render();

        assert!(text.starts_with("Entry-Level Build (Total: ₱21,750)\n\nComponents:\n"));
        assert!(text.contains("- CPU: Intel Core i3-13100 (4C/8T, LGA1700) | ₱7,500 | Good for daily use\n"));
        assert!(text.ends_with("- GPU: Integrated (Intel UHD) | ₱0 | No discrete GPU needed"));
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 8);
    }

    #[test]
    fn mismatched_total_is_rejected() {
        let json = r#"{
            "tiers": {
                "tiny": {
                    "name": "Tiny Build",
                    "total": 100,
                    "components": [
                        { "component": "CPU", "model": "X", "price": 60, "notes": "" },
                        { "component": "RAM", "model": "Y", "price": 30, "notes": "" }
                    ]
                }
            }
        }"#;
        let err = BuildCatalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::BuildTotalMismatch { sum: 90, total: 100, .. }
        ));
    }
}

//! Background knowledge for compatibility questions: motherboard form factors,
//! CPU sockets and curated comparisons between them.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::{
    alias::AliasIndex,
    errors::CatalogError,
    text::{lower_first_word, terminate},
};

pub const COMPATIBILITY_FILE: &str = "compatibility.json";

#[derive(Debug, Clone, Deserialize)]
pub struct FormFactor {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Socket {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub compatible_cpus: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Comparison {
    pair: [String; 2],
    text: String,
}

impl Comparison {
    fn matches(&self, a: &str, b: &str) -> bool {
        let [x, y] = &self.pair;
        (x == a && y == b) || (x == b && y == a)
    }
}

#[derive(Debug, Deserialize)]
struct CompatibilityFile {
    form_factors: BTreeMap<String, FormFactor>,
    #[serde(default)]
    form_factor_aliases: HashMap<String, String>,
    sockets: BTreeMap<String, Socket>,
    #[serde(default)]
    socket_aliases: HashMap<String, String>,
    #[serde(default)]
    form_factor_comparisons: Vec<Comparison>,
    #[serde(default)]
    socket_comparisons: Vec<Comparison>,
}

/// What the user asked about; every slot is optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityQuery<'a> {
    pub form_factor: Option<&'a str>,
    pub compare_form_factor: Option<&'a str>,
    pub socket: Option<&'a str>,
    pub compare_socket: Option<&'a str>,
    /// `"cpu-compatibility"` asks for the CPUs that fit a socket.
    pub subject: Option<&'a str>,
}

pub const CPU_COMPATIBILITY_SUBJECT: &str = "cpu-compatibility";

#[derive(Debug, Clone)]
pub struct CompatibilityGuide {
    form_factors: BTreeMap<String, FormFactor>,
    form_factor_aliases: AliasIndex,
    sockets: BTreeMap<String, Socket>,
    socket_aliases: AliasIndex,
    form_factor_comparisons: Vec<Comparison>,
    socket_comparisons: Vec<Comparison>,
}

impl CompatibilityGuide {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CompatibilityFile =
            serde_json::from_str(json).map_err(|source| CatalogError::Json {
                file: COMPATIBILITY_FILE.to_string(),
                source,
            })?;

        let guide = Self {
            form_factors: file.form_factors,
            form_factor_aliases: AliasIndex::new(file.form_factor_aliases),
            sockets: file.sockets,
            socket_aliases: AliasIndex::new(file.socket_aliases),
            form_factor_comparisons: file.form_factor_comparisons,
            socket_comparisons: file.socket_comparisons,
        };
        guide.validate()?;
        Ok(guide)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        self.form_factor_aliases
            .validate("form_factors", |k| self.form_factors.contains_key(k))?;
        self.socket_aliases
            .validate("sockets", |k| self.sockets.contains_key(k))?;

        check_comparisons(
            "form_factor_comparisons",
            &self.form_factor_comparisons,
            |k| self.form_factors.contains_key(k),
        )?;
        check_comparisons("socket_comparisons", &self.socket_comparisons, |k| {
            self.sockets.contains_key(k)
        })?;
        Ok(())
    }

    fn form_factor(&self, raw: &str) -> Option<(String, &FormFactor)> {
        let key = self.form_factor_aliases.resolve(raw);
        self.form_factors.get(&key).map(|f| (key, f))
    }

    fn socket(&self, raw: &str) -> Option<(String, &Socket)> {
        let key = self.socket_aliases.resolve(raw);
        self.sockets.get(&key).map(|s| (key, s))
    }

    /// Answer a compatibility question, `None` when nothing in the query is known.
    pub fn answer(&self, query: &CompatibilityQuery<'_>) -> Option<String> {
        let form_factor = query.form_factor.and_then(|raw| self.form_factor(raw));
        let socket = query.socket.and_then(|raw| self.socket(raw));

        if let (Some((key_a, a)), Some((key_b, b))) = (
            form_factor.as_ref(),
            query.compare_form_factor.and_then(|raw| self.form_factor(raw)),
        ) {
            if *key_a != key_b {
                let curated = self
                    .form_factor_comparisons
                    .iter()
                    .find(|c| c.matches(key_a, &key_b));
                return Some(match curated {
                    Some(c) => c.text.clone(),
                    None => side_by_side(&a.name, &a.description, &b.name, &b.description),
                });
            }
        }

        if let (Some((key_a, a)), Some((key_b, b))) = (
            socket.as_ref(),
            query.compare_socket.and_then(|raw| self.socket(raw)),
        ) {
            if *key_a != key_b {
                let curated = self
                    .socket_comparisons
                    .iter()
                    .find(|c| c.matches(key_a, &key_b));
                return Some(match curated {
                    Some(c) => c.text.clone(),
                    None => side_by_side(&a.name, &a.description, &b.name, &b.description),
                });
            }
        }

        if let Some((_, s)) = socket.as_ref() {
            let wants_cpus = query
                .subject
                .is_some_and(|subject| subject.trim().eq_ignore_ascii_case(CPU_COMPATIBILITY_SUBJECT));
            if wants_cpus && !s.compatible_cpus.is_empty() {
                return Some(format!(
                    "The {} socket is compatible with the following CPUs: {}.",
                    s.name,
                    s.compatible_cpus.join(", ")
                ));
            }
        }

        if let Some((_, f)) = form_factor {
            return Some(terminate(format!(
                "The {} form factor is {}",
                f.name,
                lower_first_word(&f.description)
            )));
        }

        socket.map(|(_, s)| {
            terminate(format!(
                "The {} socket is {}",
                s.name,
                lower_first_word(&s.description)
            ))
        })
    }
}

fn check_comparisons(
    catalog: &str,
    comparisons: &[Comparison],
    exists: impl Fn(&str) -> bool,
) -> Result<(), CatalogError> {
    for comparison in comparisons {
        if let Some(missing) = comparison.pair.iter().find(|key| !exists(key.as_str())) {
            return Err(CatalogError::DanglingAlias {
                catalog: catalog.to_string(),
                alias: comparison.pair.join(" vs "),
                target: missing.clone(),
            });
        }
    }
    Ok(())
}

fn side_by_side(name_a: &str, desc_a: &str, name_b: &str, desc_b: &str) -> String {
    format!(
        "{name_a}: {} {name_b}: {}",
        terminate(desc_a.to_string()),
        terminate(desc_b.to_string())
    )
}

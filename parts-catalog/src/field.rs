//! Typed specification fields and the "requested detail" matcher.
//!
//! Every category declares an enum of the fields a user can ask about. A free
//! form detail such as `"Base Clock"`, `"baseClock"` or `"frequency"` is mapped
//! onto one of those variants; anything that does not map is an unsupported
//! detail and gets an apology instead of a guess.

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;

use crate::text::terminate;

/// Shortest normalized detail that may be matched by substring.
const MIN_PARTIAL_LEN: usize = 3;

/// Synonyms understood by every category, expressed as target field keys.
const SHARED_SYNONYMS: &[(&str, &str)] = &[
    ("cost", "price"),
    ("how_much", "price"),
    ("srp", "price"),
    ("compatible", "compatibility"),
    ("compat", "compatibility"),
    ("works_with", "compatibility"),
    ("model", "name"),
    ("full_name", "name"),
];

/// A closed set of fields of one category.
pub trait SpecField: Copy + Eq + Hash + Debug + 'static {
    /// All variants, in template order.
    const ALL: &'static [Self];
    /// Category specific phrasings, keyed by normalized detail.
    const SYNONYMS: &'static [(&'static str, Self)];

    /// Stable snake_case key.
    fn key(self) -> &'static str;
    /// Human label used in single-field answers.
    fn label(self) -> &'static str;
}

/// One purchasable part of a category.
pub trait PartRecord: DeserializeOwned + Debug + Send + Sync + 'static {
    type Field: SpecField;

    fn name(&self) -> &str;

    /// Raw stored value of a field, `None` when the record does not carry it.
    fn field(&self, field: Self::Field) -> Option<&str>;

    /// Full multi-clause description of the record.
    fn describe(&self) -> String;

    /// Record specific override for a normalized detail, checked before the
    /// category wide matching.
    fn preferred_field(&self, _detail: &str) -> Option<Self::Field> {
        None
    }

    /// Stored value with blank strings treated as absent.
    fn value(&self, field: Self::Field) -> Option<&str> {
        self.field(field).filter(|v| !v.trim().is_empty())
    }
}

/// Declares a field enum and its [`SpecField`] implementation.
macro_rules! spec_fields {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
        synonyms {
            $($syn:literal => $target:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::field::SpecField for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];
            const SYNONYMS: &'static [(&'static str, Self)] = &[$(($syn, $name::$target)),*];

            fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }
    };
}

/// Normalize a requested detail into snake_case.
///
/// camelCase boundaries become `_`, and runs of whitespace, `-`, `_` and `.`
/// collapse into a single `_`.
pub fn normalize_detail(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;
    let mut pending_sep = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() || matches!(ch, '-' | '_' | '.') {
            pending_sep = !out.is_empty();
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            pending_sep = true;
        }
        if pending_sep {
            out.push('_');
            pending_sep = false;
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        out.extend(ch.to_lowercase());
    }

    out
}

/// Map a free-form detail onto a field of `F`.
///
/// Order: exact key, category synonyms, shared synonyms, then substring match
/// against field keys in either direction.
pub fn match_field<F: SpecField>(detail: &str) -> Option<F> {
    let wanted = normalize_detail(detail);
    if wanted.is_empty() {
        return None;
    }

    let by_key = |key: &str| F::ALL.iter().copied().find(|f| f.key() == key);

    if let Some(field) = by_key(&wanted) {
        return Some(field);
    }
    if let Some((_, field)) = F::SYNONYMS.iter().find(|(syn, _)| *syn == wanted) {
        return Some(*field);
    }
    if let Some(field) = SHARED_SYNONYMS
        .iter()
        .find(|(syn, _)| *syn == wanted)
        .and_then(|(_, key)| by_key(key))
    {
        return Some(field);
    }

    if wanted.len() < MIN_PARTIAL_LEN {
        return None;
    }
    F::ALL
        .iter()
        .copied()
        .find(|f| f.key().contains(wanted.as_str()) || wanted.contains(f.key()))
}

/// Find the field a detail refers to and its non-empty value on `record`.
pub fn lookup_detail<'r, R: PartRecord>(record: &'r R, detail: &str) -> Option<(R::Field, &'r str)> {
    let field = record
        .preferred_field(&normalize_detail(detail))
        .or_else(|| match_field::<R::Field>(detail))?;
    record.value(field).map(|v| (field, v))
}

/// Render the answer to "what is the <detail> of <record>".
pub fn render_detail<R: PartRecord>(record: &R, detail: &str) -> String {
    match lookup_detail(record, detail) {
        Some((field, value)) => terminate(format!(
            "For the {}, the {} is: {}",
            record.name(),
            field.label(),
            value
        )),
        None => format!(
            "Sorry, I don't have info about the {} for {}.",
            detail.trim(),
            record.name()
        ),
    }
}

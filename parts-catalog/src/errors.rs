//! Unified error type for the parts-catalog crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or validating catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    // ── I/O & parsing ───────────────────────────────────────────────────────
    /// A catalog file exists but could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid JSON for its category.
    #[error("invalid catalog data in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    // ── Integrity ───────────────────────────────────────────────────────────
    /// An alias points at a canonical key that has no record.
    #[error("{catalog}: alias '{alias}' points at unknown key '{target}'")]
    DanglingAlias {
        catalog: String,
        alias: String,
        target: String,
    },

    /// A canonical key or alias is not stored in normalized (trimmed, lowercase) form.
    #[error("{catalog}: key '{key}' is not normalized, expected '{expected}'")]
    UnnormalizedKey {
        catalog: String,
        key: String,
        expected: String,
    },

    /// A build tier's line items do not add up to its advertised total.
    #[error("build '{tier}': line items sum to {sum}, but total is {total}")]
    BuildTotalMismatch { tier: String, sum: u64, total: u64 },

    /// A catalog was loaded without a single record.
    #[error("{catalog}: catalog has no records")]
    Empty { catalog: String },
}

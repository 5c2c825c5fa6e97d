use parts_catalog::CatalogError;
use thiserror::Error;

use crate::core::app_state::ConfigError;

/// Startup and serving failures.
///
/// Conversational failures (unknown model, unknown intent, bad payload) are
/// reply texts with HTTP 200 and never become an `AppError`.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    // --- IO / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),
}

/// Handy result alias for startup code.
pub type AppResult<T> = Result<T, AppError>;

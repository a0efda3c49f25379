//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

pub use category_admin_api::ApiError;

use crate::schema::FieldErrors;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// One or more form fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Collection API error
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing record), used
    /// to pick the log level.
    ///
    /// `true` logs at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Api(e) => e.is_expected(),
            Self::Config(_) => false,
        }
    }

    /// Log this error at the level [`is_expected`](Self::is_expected) selects.
    pub fn log(&self, action: &str) {
        if self.is_expected() {
            log::warn!("{action} failed: {self}");
        } else {
            log::error!("{action} failed: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

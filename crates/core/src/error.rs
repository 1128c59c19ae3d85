//! Error types for the swatch core.
//!
//! The core operations themselves never fail: unparseable colors degrade to
//! the default palette and unknown mood tags fall back to `vibrant`. These
//! errors are produced only when a caller converts a raw string into one of
//! the closed core types (CLI arguments, WASM inputs).

use thiserror::Error;

/// Errors produced when parsing string inputs into core types.
#[derive(Debug, Error)]
pub enum SwatchError {
    /// A color string was not `#RRGGBB` / `RRGGBB`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A mood tag did not name one of the ten generators.
    #[error("unknown mood: {0}")]
    UnknownMood(String),

    /// An export format tag did not name one of the seven formats.
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    /// A language code was not one of the supported languages.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

//! Crate-level error types.
//!
//! [`LimitpadError`] unifies every fallible surface (configuration, terminal
//! I/O, JSON, HTTP) behind a single enum so callers can match on the variant
//! they care about while still using the `?` operator for easy propagation.
//!
//! Price calculation failures live in
//! [`PriceError`]; the button engine turns them into disabled buttons rather
//! than propagating them.

use crate::models::PriceType;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LimitpadError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum LimitpadError {
    /// Settings could not be found, read, or validated.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request to the positions API failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A price could not be produced.
    #[error("price error: {0}")]
    Price(#[from] PriceError),
}

/// Reasons a price is unavailable.
///
/// Both cases are expected while the quote source is loading, so the engine
/// reports them as absent prices instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    /// The input text is not a number.
    #[error("unparsable price: {0:?}")]
    Unparsable(String),

    /// The quote source has no current value for this price type.
    #[error("no active {0} price")]
    NoActivePrice(PriceType),
}

//! Crate-wide error type.

use thiserror::Error;

/// The unified error type for the `replenish_engine` crate.
///
/// Every failure is local and synchronous; the engine never retries. Each
/// variant carries the offending field and value so the caller can act on it.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation parameter outside its domain (e.g., non-positive or
    /// non-finite coverage weeks).
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The rejected value, rendered for diagnostics.
        value: String,
    },

    /// A malformed or out-of-domain ingestion record.
    #[error("invalid record at period `{period}`: {field} = {value}")]
    InvalidRecord {
        /// Period label the record addressed.
        period: String,
        /// The offending field.
        field: &'static str,
        /// The offending value, rendered for diagnostics.
        value: String,
    },

    /// Lookup of a period absent from the store.
    #[error("period `{period}` not found")]
    NotFound {
        /// The period label that was looked up.
        period: String,
    },
}

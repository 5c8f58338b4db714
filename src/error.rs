//! Error types for Shields tooltip catalog operations
//!
//! This module defines the error types used throughout the bstv library.
//! All fallible functions return [`Result<T, Error>`] for consistent error
//! handling. The catalog accessors themselves are total functions over a
//! closed enum and have no failure mode; errors only arise at the lookup and
//! query seams, where callers hand in untyped ids, names, or patterns.

/// Errors that can occur during tooltip catalog lookups and queries
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Persisted id outside the catalog's id range
    #[error("Unknown tooltip variant id: {id}")]
    UnknownVariantId { id: u32 },

    /// Name that does not match any variant
    #[error("Unknown tooltip variant: {0}")]
    UnknownVariant(String),

    /// Invalid glob pattern in query
    #[error("Invalid glob pattern: {0}")]
    InvalidGlobPattern(String),
}

/// Result type alias for convenience
///
/// All fallible functions in the bstv library return this type alias for
/// consistent error handling.
///
/// # Example
///
/// ```rust
/// use bstv::{Result, TooltipVariant};
///
/// fn rehydrate(last_shown_id: u32) -> Result<TooltipVariant> {
///     let variant = TooltipVariant::try_from(last_shown_id)?;
///     Ok(variant)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

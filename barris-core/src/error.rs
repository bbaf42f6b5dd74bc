//! Error types raised while building catalogs and recommendation requests.

use thiserror::Error;

use crate::Category;

/// Errors returned by [`OptionCatalog::new`](crate::OptionCatalog::new).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A base weight was not a finite value in `0.0..=1.0`.
    #[error("base weight {weight} for option '{option}' must be within 0.0..=1.0")]
    WeightOutOfRange {
        /// Offending option identifier.
        option: String,
        /// Weight supplied for the option.
        weight: f64,
    },
    /// The fallback weight was not a finite value in `0.0..=1.0`.
    #[error("default weight {weight} must be within 0.0..=1.0")]
    DefaultWeightOutOfRange {
        /// Weight supplied as the fallback.
        weight: f64,
    },
    /// The same option identifier appeared under two categories.
    #[error("option '{option}' is listed under both {first} and {second}")]
    DuplicateOption {
        /// Option identifier listed twice.
        option: String,
        /// Category that claimed the option first.
        first: Category,
        /// Category that claimed it again.
        second: Category,
    },
    /// A category listed an option with a blank identifier.
    #[error("category {category} lists an option with an empty id")]
    EmptyOptionId {
        /// Category holding the blank entry.
        category: Category,
    },
}

/// Errors returned by [`RecommendationRequest::new`](crate::RecommendationRequest::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The scoring service must be asked for at least one result.
    #[error("top_k must be at least 1")]
    ZeroTopK,
}

//! Facade crate for the Barris preference engine.
//!
//! This crate re-exports the core domain types: the option catalog, the
//! selection state captured from the UI, and the aggregation that turns a
//! selection into a preference vector plus an override audit log.

#![forbid(unsafe_code)]

pub use barris_core::{
    Aggregation, CatalogError, Category, CategoryScore, CategorySelection, DEFAULT_OPTION_WEIGHT,
    DEFAULT_TOP_K, OptionCatalog, OverrideLog, OverrideRecord, PreferenceVector,
    RecommendationRequest, RequestError, SelectedOption, SelectionState, aggregate,
    effective_weight, percent_to_unit,
};

//! Core preference aggregation for the Barris neighbourhood recommender.
//!
//! The crate turns a user's per-category option selections, and any weights
//! they overrode, into a [`PreferenceVector`] for the scoring service:
//!
//! - an [`OptionCatalog`] maps option identifiers to base weights,
//! - a [`SelectionState`] records what the user picked at submission time,
//! - [`aggregate()`] computes one score per [`Category`] plus an
//!   [`OverrideLog`] auditing accepted overrides,
//! - a [`RecommendationRequest`] packages the result for the wire.
//!
//! Aggregation is pure and never fails; invalid overrides fall back to the
//! catalog weight.
//!
//! # Examples
//!
//! ```
//! use barris_core::{
//!     Category, CategoryScore, CategorySelection, OptionCatalog, SelectedOption,
//!     SelectionState, aggregate,
//! };
//!
//! let selection = SelectionState::new()
//!     .with_category(
//!         Category::Transporte,
//!         CategorySelection::with_options([SelectedOption::new("metro")]),
//!     )
//!     .with_category(Category::Ocio, CategorySelection::default());
//! let result = aggregate(&OptionCatalog::builtin(), &selection);
//!
//! assert_eq!(result.preferences.get(Category::Transporte), CategoryScore::Score(0.37));
//! assert_eq!(result.preferences.get(Category::Ocio), CategoryScore::Score(0.0));
//! assert_eq!(result.preferences.get(Category::Seguridad), CategoryScore::Ignored);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregate;
pub mod catalog;
pub mod category;
mod error;
pub mod preference;
pub mod request;
pub mod selection;

pub use aggregate::{Aggregation, aggregate, effective_weight, percent_to_unit};
pub use catalog::{DEFAULT_OPTION_WEIGHT, OptionCatalog};
pub use category::Category;
pub use error::{CatalogError, RequestError};
pub use preference::{CategoryScore, OverrideLog, OverrideRecord, PreferenceVector};
pub use request::{DEFAULT_TOP_K, RecommendationRequest};
pub use selection::{CategorySelection, SelectedOption, SelectionState};

/// Report whether `value` is a finite weight in `0.0..=1.0`.
pub(crate) fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

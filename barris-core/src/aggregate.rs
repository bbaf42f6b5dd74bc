//! Aggregate a selection into a preference vector.
//!
//! Each category's score is the arithmetic mean of the effective weights of
//! its selected options, so picking more options never inflates a category
//! relative to the others. Ignored categories, and categories absent from
//! the selection, score [`CategoryScore::Ignored`].
//!
//! Invalid overrides never fail aggregation: a touched override that is not
//! finite or falls outside `0..=100` percent is discarded and the option
//! keeps its catalog weight.

use log::debug;

use crate::{
    Category, CategoryScore, CategorySelection, OptionCatalog, OverrideLog, OverrideRecord,
    PreferenceVector, SelectedOption, SelectionState, is_unit_interval,
};

/// Result of aggregating one submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregation {
    /// Per-category scores sent to the scoring service.
    pub preferences: PreferenceVector,
    /// Accepted overrides that changed an option's weight.
    pub overrides: OverrideLog,
}

/// Convert a selection into a preference vector and override log.
///
/// The function is pure: identical inputs always produce identical output.
///
/// # Examples
/// ```
/// use barris_core::{
///     Category, CategoryScore, CategorySelection, OptionCatalog, SelectedOption,
///     SelectionState, aggregate,
/// };
///
/// let selection = SelectionState::new().with_category(
///     Category::Transporte,
///     CategorySelection::with_options([SelectedOption::new("metro").with_override(50.0)]),
/// );
/// let result = aggregate(&OptionCatalog::builtin(), &selection);
///
/// assert_eq!(result.preferences.get(Category::Transporte), CategoryScore::Score(0.5));
/// assert!(result.preferences.get(Category::Ocio).is_ignored());
/// assert_eq!(result.overrides.get("metro").map(|r| r.difference), Some(0.13));
/// ```
#[must_use]
pub fn aggregate(catalog: &OptionCatalog, selection: &SelectionState) -> Aggregation {
    let mut aggregation = Aggregation::default();
    for category in Category::ALL {
        let score = selection
            .category(category)
            .map_or(CategoryScore::Ignored, |state| {
                score_category(catalog, category, state, &mut aggregation.overrides)
            });
        aggregation.preferences.set(category, score);
    }
    aggregation
}

fn score_category(
    catalog: &OptionCatalog,
    category: Category,
    state: &CategorySelection,
    overrides: &mut OverrideLog,
) -> CategoryScore {
    if state.ignored {
        if !state.selected_options.is_empty() {
            debug!(
                "{category} is ignored; dropping {} selected options",
                state.selected_options.len()
            );
        }
        return CategoryScore::Ignored;
    }
    let weights: Vec<f64> = state
        .selected_options
        .iter()
        .inspect(|option| {
            if let Some(listed) = catalog.category_of(&option.id)
                && listed != category
            {
                debug!("option '{}' is listed under {listed}, not {category}", option.id);
            }
        })
        .map(|option| effective_weight(catalog, option, overrides))
        .collect();
    CategoryScore::Score(mean(&weights))
}

/// Resolve the weight an option contributes to its category.
///
/// Accepted overrides that differ from the base weight are recorded in
/// `overrides`.
pub fn effective_weight(
    catalog: &OptionCatalog,
    option: &SelectedOption,
    overrides: &mut OverrideLog,
) -> f64 {
    let base = catalog.get(&option.id).unwrap_or_else(|| {
        debug!(
            "option '{}' is not in the catalog; using default weight {}",
            option.id,
            catalog.default_weight()
        );
        catalog.default_weight()
    });

    let Some(percent) = option.touched_override() else {
        return base;
    };
    let Some(weight) = percent_to_unit(percent) else {
        debug!(
            "discarding override {percent} for option '{}'; keeping base weight {base}",
            option.id
        );
        return base;
    };
    if weight != base {
        overrides.record(&option.id, OverrideRecord::new(base, weight));
    }
    weight
}

/// Convert a percentage into a unit weight, rejecting anything outside
/// `0.0..=1.0` once scaled.
///
/// Negative zero is normalised to `0.0` so it never reaches the wire.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "overrides arrive on a percentage scale"
)]
pub fn percent_to_unit(percent: f64) -> Option<f64> {
    let weight = percent / 100.0 + 0.0;
    is_unit_interval(weight).then_some(weight)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "category scores are arithmetic means of option weights"
)]
fn mean(weights: &[f64]) -> f64 {
    if weights.is_empty() {
        return 0.0;
    }
    weights.iter().sum::<f64>() / weights.len() as f64
}

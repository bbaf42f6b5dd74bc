//! Property-based tests for preference aggregation.
//!
//! # Invariants tested
//!
//! - **Ignore precedence:** ignored categories score `-1` whatever is picked,
//!   and their overrides are never recorded.
//! - **Mean:** scored categories equal the mean of effective weights.
//! - **Range:** scores always lie in `0.0..=1.0`.
//! - **Override acceptance:** a touched override is accepted exactly when
//!   `p / 100` lies in `0.0..=1.0`.
//! - **Idempotence:** aggregating the same input twice gives equal output.

use barris_core::{
    Category, CategoryScore, CategorySelection, OptionCatalog, SelectedOption, SelectionState,
    aggregate,
};
use proptest::prelude::*;

const OPTION_IDS: &[&str] = &[
    "metro",
    "bus",
    "coche",
    "vida_nocturna",
    "parques",
    "vigilancia",
    "coste_de_vida",
    "teleferico",
    "huerto",
];

fn option_strategy() -> impl Strategy<Value = SelectedOption> {
    (
        prop::sample::select(OPTION_IDS),
        prop::option::of(-50.0_f64..200.0),
        any::<bool>(),
    )
        .prop_map(|(id, percent, touched)| SelectedOption {
            id: (*id).to_owned(),
            override_weight_percent: percent,
            touched,
        })
}

fn category_strategy() -> impl Strategy<Value = CategorySelection> {
    (any::<bool>(), prop::collection::vec(option_strategy(), 0..6)).prop_map(
        |(ignored, selected_options)| CategorySelection {
            ignored,
            selected_options,
        },
    )
}

fn selection_strategy() -> impl Strategy<Value = SelectionState> {
    prop::collection::vec(
        (prop::sample::select(Category::ALL.to_vec()), category_strategy()),
        0..6,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .fold(SelectionState::new(), |state, (category, selection)| {
                state.with_category(category, selection)
            })
    })
}

/// Effective weight computed independently of the library.
fn expected_weight(catalog: &OptionCatalog, option: &SelectedOption) -> f64 {
    let base = catalog.lookup(&option.id);
    match option.override_weight_percent {
        Some(percent) if option.touched && (0.0..=1.0).contains(&(percent / 100.0)) => {
            percent / 100.0
        }
        _ => base,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn ignored_categories_always_score_the_sentinel(selection in selection_strategy()) {
        let result = aggregate(&OptionCatalog::builtin(), &selection);
        for category in Category::ALL {
            let ignored = selection.category(category).is_none_or(|state| state.ignored);
            if ignored {
                prop_assert_eq!(result.preferences.get(category), CategoryScore::Ignored);
            }
        }
        let all_ignored = Category::ALL
            .into_iter()
            .all(|category| selection.category(category).is_none_or(|state| state.ignored));
        if all_ignored {
            prop_assert!(result.overrides.is_empty());
        }
    }

    #[test]
    fn overrides_in_ignored_categories_are_never_recorded(
        options in prop::collection::vec(option_strategy(), 1..6),
        percent in 0.0_f64..=100.0,
    ) {
        let picked: Vec<SelectedOption> = options
            .into_iter()
            .map(|option| option.with_override(percent))
            .collect();
        let selection = Category::ALL.into_iter().fold(SelectionState::new(), |state, category| {
            state.with_category(
                category,
                CategorySelection {
                    ignored: true,
                    selected_options: picked.clone(),
                },
            )
        });
        let result = aggregate(&OptionCatalog::builtin(), &selection);
        prop_assert!(result.overrides.is_empty());
        prop_assert_eq!(result.preferences, barris_core::PreferenceVector::all_ignored());
    }

    #[test]
    fn scored_categories_are_means_of_effective_weights(selection in selection_strategy()) {
        let catalog = OptionCatalog::builtin();
        let result = aggregate(&catalog, &selection);
        for (category, state) in selection.iter().filter(|(_, state)| !state.ignored) {
            let weights: Vec<f64> = state
                .selected_options
                .iter()
                .map(|option| expected_weight(&catalog, option))
                .collect();
            let expected = if weights.is_empty() {
                0.0
            } else {
                weights.iter().sum::<f64>() / weights.len() as f64
            };
            let CategoryScore::Score(score) = result.preferences.get(category) else {
                return Err(TestCaseError::fail(format!("{category} should be scored")));
            };
            prop_assert!((score - expected).abs() <= 1e-9, "{} != {}", score, expected);
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn touched_overrides_are_accepted_only_in_range(
        percent in -50.0_f64..200.0,
        id in prop::sample::select(OPTION_IDS),
    ) {
        let catalog = OptionCatalog::builtin();
        let selection = SelectionState::new().with_category(
            Category::Ocio,
            CategorySelection::with_options([SelectedOption::new(id).with_override(percent)]),
        );
        let result = aggregate(&catalog, &selection);
        let base = catalog.lookup(id);
        let unit = percent / 100.0;
        let CategoryScore::Score(score) = result.preferences.get(Category::Ocio) else {
            return Err(TestCaseError::fail("ocio should be scored"));
        };

        if (0.0..=1.0).contains(&unit) {
            prop_assert_eq!(score, unit);
            match result.overrides.get(id) {
                Some(record) => {
                    prop_assert_eq!(record.original, base);
                    prop_assert_eq!(record.new, unit);
                    prop_assert_eq!(record.difference, ((unit - base) * 100.0).round() / 100.0);
                }
                None => prop_assert_eq!(unit, base),
            }
        } else {
            prop_assert_eq!(score, base);
            prop_assert!(result.overrides.is_empty());
        }
    }

    #[test]
    fn aggregation_is_idempotent(selection in selection_strategy()) {
        let catalog = OptionCatalog::builtin();
        let first = aggregate(&catalog, &selection);
        let second = aggregate(&catalog, &selection);
        prop_assert_eq!(first, second);
    }
}

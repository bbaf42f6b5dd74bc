//! Selection state captured from the UI at submission time.
//!
//! A [`SelectionState`] holds, for each category the user touched, whether
//! the category is ignored and which options were picked. Each picked option
//! may carry an override weight expressed as a percentage together with an
//! explicit `touched` flag recording whether the user edited it.

use std::collections::BTreeMap;

use crate::Category;

/// An option picked within a category.
///
/// # Examples
/// ```
/// use barris_core::SelectedOption;
///
/// let option = SelectedOption::new("metro").with_override(50.0);
/// assert!(option.touched);
/// assert_eq!(option.override_weight_percent, Some(50.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SelectedOption {
    /// Catalog identifier of the option.
    pub id: String,
    /// User-supplied weight on the `0..=100` percentage scale.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "percent::deserialize")
    )]
    pub override_weight_percent: Option<f64>,
    /// Whether the user edited the override.
    #[cfg_attr(feature = "serde", serde(default))]
    pub touched: bool,
}

impl SelectedOption {
    /// Pick an option without an override.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            override_weight_percent: None,
            touched: false,
        }
    }

    /// Attach a user-edited override percentage.
    #[must_use]
    pub fn with_override(mut self, percent: f64) -> Self {
        self.override_weight_percent = Some(percent);
        self.touched = true;
        self
    }

    /// Return the override percentage only when the user edited it.
    #[must_use]
    pub fn touched_override(&self) -> Option<f64> {
        self.override_weight_percent.filter(|_| self.touched)
    }
}

/// Selection state of a single category.
///
/// `ignored` and a non-empty option list are expected to be mutually
/// exclusive; when both are present, `ignored` wins.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CategorySelection {
    /// The user asked for this category to carry no preference.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ignored: bool,
    /// Options picked in this category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected_options: Vec<SelectedOption>,
}

impl CategorySelection {
    /// A category the user marked as "no preference".
    #[must_use]
    pub const fn ignored() -> Self {
        Self {
            ignored: true,
            selected_options: Vec::new(),
        }
    }

    /// A category with the given options picked.
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = SelectedOption>,
    {
        Self {
            ignored: false,
            selected_options: options.into_iter().collect(),
        }
    }
}

/// Per-category selection state for one submission.
///
/// # Examples
/// ```
/// use barris_core::{Category, CategorySelection, SelectedOption, SelectionState};
///
/// let state = SelectionState::new()
///     .with_category(
///         Category::Transporte,
///         CategorySelection::with_options([SelectedOption::new("metro")]),
///     )
///     .with_category(Category::Seguridad, CategorySelection::ignored());
/// assert!(state.category(Category::Seguridad).is_some_and(|s| s.ignored));
/// assert!(state.category(Category::Ocio).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "BTreeMap<String, CategorySelection>",
        into = "BTreeMap<Category, CategorySelection>"
    )
)]
pub struct SelectionState {
    categories: BTreeMap<Category, CategorySelection>,
}

impl SelectionState {
    /// Construct an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the selection recorded for `category`, if any.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategorySelection> {
        self.categories.get(&category)
    }

    /// Insert or replace the selection for `category`.
    pub fn set_category(&mut self, category: Category, selection: CategorySelection) {
        self.categories.insert(category, selection);
    }

    /// Set a category selection while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: Category, selection: CategorySelection) -> Self {
        self.set_category(category, selection);
        self
    }

    /// Iterate over the recorded categories in vector order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategorySelection)> {
        self.categories
            .iter()
            .map(|(&category, selection)| (category, selection))
    }
}

impl From<BTreeMap<String, CategorySelection>> for SelectionState {
    fn from(raw: BTreeMap<String, CategorySelection>) -> Self {
        let mut state = Self::new();
        for (name, selection) in raw {
            match name.parse::<Category>() {
                Ok(category) => {
                    if state.categories.contains_key(&category) {
                        log::warn!("selection key '{name}' replaces an earlier {category} entry");
                    }
                    state.set_category(category, selection);
                }
                Err(reason) => log::warn!("skipping selection: {reason}"),
            }
        }
        state
    }
}

impl From<SelectionState> for BTreeMap<Category, CategorySelection> {
    fn from(state: SelectionState) -> Self {
        state.categories
    }
}

/// Lenient decoding for override percentages.
///
/// Form fields arrive as numbers, numeric strings, blanks or junk. Junk is
/// decoded as `NaN` so aggregation discards it like any non-finite value.
#[cfg(feature = "serde")]
mod percent {
    use serde::{Deserialize, Deserializer, de::IgnoredAny};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPercent {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawPercent>::deserialize(deserializer)?;
        Ok(raw.and_then(|value| match value {
            RawPercent::Number(number) => Some(number),
            RawPercent::Text(text) if text.trim().is_empty() => None,
            RawPercent::Text(text) => Some(text.trim().parse().unwrap_or(f64::NAN)),
            RawPercent::Other(_) => Some(f64::NAN),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn untouched_overrides_are_hidden() {
        let option = SelectedOption {
            id: "metro".to_owned(),
            override_weight_percent: Some(80.0),
            touched: false,
        };
        assert!(option.touched_override().is_none());
        assert_eq!(option.with_override(80.0).touched_override(), Some(80.0));
    }

    #[rstest]
    fn later_category_selection_replaces_earlier() {
        let mut state = SelectionState::new();
        state.set_category(Category::Ocio, CategorySelection::ignored());
        state.set_category(
            Category::Ocio,
            CategorySelection::with_options([SelectedOption::new("cultura")]),
        );
        let selection = state.category(Category::Ocio).expect("ocio recorded");
        assert!(!selection.ignored);
        assert_eq!(selection.selected_options.len(), 1);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn case_colliding_keys_resolve_to_the_last_in_key_order() {
        let json = r#"{
            "transporte": { "selectedOptions": [ { "id": "bus" } ] },
            "TRANSPORTE": { "ignored": true }
        }"#;
        let state: SelectionState = serde_json::from_str(json).expect("decode selection");
        assert_eq!(state.iter().count(), 1);
        let transporte = state.category(Category::Transporte).expect("transporte");
        assert!(!transporte.ignored);
        assert_eq!(transporte.selected_options, vec![SelectedOption::new("bus")]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_the_ui_contract() {
        let json = r#"{
            "transporte": {
                "ignored": false,
                "selectedOptions": [
                    { "id": "metro", "overrideWeightPercent": 50, "touched": true },
                    { "id": "bus", "overrideWeightPercent": null, "touched": false },
                    { "id": "coche" }
                ]
            },
            "Seguridad": { "ignored": true },
            "playa": { "ignored": false }
        }"#;
        let state: SelectionState = serde_json::from_str(json).expect("decode selection");

        let transporte = state.category(Category::Transporte).expect("transporte");
        assert_eq!(
            transporte.selected_options,
            vec![
                SelectedOption::new("metro").with_override(50.0),
                SelectedOption::new("bus"),
                SelectedOption::new("coche"),
            ]
        );
        assert!(state.category(Category::Seguridad).is_some_and(|s| s.ignored));
        assert_eq!(state.iter().count(), 2);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#""75""#, Some(75.0))]
    #[case(r#"" 12.5 ""#, Some(12.5))]
    #[case(r#""""#, None)]
    #[case("null", None)]
    fn decodes_lenient_percentages(#[case] raw: &str, #[case] expected: Option<f64>) {
        let json = format!(r#"{{ "id": "metro", "overrideWeightPercent": {raw}, "touched": true }}"#);
        let option: SelectedOption = serde_json::from_str(&json).expect("decode option");
        assert_eq!(option.override_weight_percent, expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#""abc""#)]
    #[case("true")]
    #[case("[50]")]
    fn junk_percentages_decode_as_nan(#[case] raw: &str) {
        let json = format!(r#"{{ "id": "metro", "overrideWeightPercent": {raw}, "touched": true }}"#);
        let option: SelectedOption = serde_json::from_str(&json).expect("decode option");
        assert!(option.override_weight_percent.is_some_and(f64::is_nan));
    }
}

//! Preference vectors and override records produced by aggregation.

use std::collections::BTreeMap;

use crate::{Category, is_unit_interval};

/// Score carried by one category of a [`PreferenceVector`].
///
/// `Ignored` is distinct from a low score: the scoring service treats it as
/// "no preference" and it travels on the wire as the exact integer `-1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryScore {
    /// The category carries no preference signal.
    Ignored,
    /// Mean effective weight of the selected options, in `0.0..=1.0`.
    Score(f64),
}

impl CategoryScore {
    /// Wire value standing in for [`CategoryScore::Ignored`].
    pub const IGNORED_SENTINEL: f64 = -1.0;

    /// Return the numeric value sent to the scoring service.
    ///
    /// # Examples
    /// ```
    /// use barris_core::CategoryScore;
    ///
    /// assert_eq!(CategoryScore::Ignored.value(), -1.0);
    /// assert_eq!(CategoryScore::Score(0.4).value(), 0.4);
    /// ```
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Ignored => Self::IGNORED_SENTINEL,
            Self::Score(score) => score,
        }
    }

    /// Report whether the category was ignored.
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Interpret a wire value, rejecting anything but `-1` or `0.0..=1.0`.
    #[must_use]
    pub fn from_value(value: f64) -> Option<Self> {
        if value == Self::IGNORED_SENTINEL {
            Some(Self::Ignored)
        } else if is_unit_interval(value) {
            Some(Self::Score(value))
        } else {
            None
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CategoryScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            Self::Ignored => serializer.serialize_i8(-1),
            Self::Score(score) => serializer.serialize_f64(score),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CategoryScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::from_value(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "category score {value} must be -1 or within 0.0..=1.0"
            ))
        })
    }
}

/// One score per category, always covering every [`Category`].
///
/// # Examples
/// ```
/// use barris_core::{Category, CategoryScore, PreferenceVector};
///
/// let vector = PreferenceVector::all_ignored();
/// assert!(vector.get(Category::Ocio).is_ignored());
/// assert_eq!(vector.iter().count(), Category::ALL.len());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "BTreeMap<Category, CategoryScore>",
        into = "BTreeMap<Category, CategoryScore>"
    )
)]
pub struct PreferenceVector {
    scores: BTreeMap<Category, CategoryScore>,
}

impl PreferenceVector {
    /// A fully neutral vector.
    #[must_use]
    pub fn all_ignored() -> Self {
        Self::from(BTreeMap::new())
    }

    /// Return the score for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> CategoryScore {
        self.scores
            .get(&category)
            .copied()
            .unwrap_or(CategoryScore::Ignored)
    }

    /// Iterate over categories and their scores in vector order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, CategoryScore)> + '_ {
        self.scores.iter().map(|(&category, &score)| (category, score))
    }

    pub(crate) fn set(&mut self, category: Category, score: CategoryScore) {
        self.scores.insert(category, score);
    }
}

impl Default for PreferenceVector {
    fn default() -> Self {
        Self::all_ignored()
    }
}

impl From<BTreeMap<Category, CategoryScore>> for PreferenceVector {
    fn from(mut scores: BTreeMap<Category, CategoryScore>) -> Self {
        for category in Category::ALL {
            scores.entry(category).or_insert(CategoryScore::Ignored);
        }
        Self { scores }
    }
}

impl From<PreferenceVector> for BTreeMap<Category, CategoryScore> {
    fn from(vector: PreferenceVector) -> Self {
        vector.scores
    }
}

/// Audit entry for an accepted override that changed an option's weight.
///
/// # Examples
/// ```
/// use barris_core::OverrideRecord;
///
/// let record = OverrideRecord::new(0.37, 0.5);
/// assert_eq!(record.difference, 0.13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverrideRecord {
    /// Catalog base weight.
    pub original: f64,
    /// Weight the user chose.
    #[cfg_attr(feature = "serde", serde(rename = "nuevo"))]
    pub new: f64,
    /// `new - original`, rounded to two decimals.
    #[cfg_attr(feature = "serde", serde(rename = "diferencia", with = "cents"))]
    pub difference: f64,
}

impl OverrideRecord {
    /// Record a change from `original` to `new`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the audit difference is a plain subtraction"
    )]
    pub fn new(original: f64, new: f64) -> Self {
        Self {
            original,
            new,
            difference: round_to_cents(new - original),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding to two decimals scales by one hundred"
)]
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two-decimal string encoding used for `diferencia`.
#[cfg(feature = "serde")]
mod cents {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCents {
        Text(String),
        Number(f64),
    }

    pub(super) fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&format_args!("{value:.2}"))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawCents::deserialize(deserializer)? {
            RawCents::Number(number) => Ok(number),
            RawCents::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid difference '{text}'"))),
        }
    }
}

/// Override records keyed by option identifier.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct OverrideLog {
    records: BTreeMap<String, OverrideRecord>,
}

impl OverrideLog {
    /// Construct an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the record for `option_id`, if an override was accepted.
    #[must_use]
    pub fn get(&self, option_id: &str) -> Option<&OverrideRecord> {
        self.records.get(option_id)
    }

    /// Iterate over records in option order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OverrideRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Number of recorded overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether no override was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn record(&mut self, option_id: &str, record: OverrideRecord) {
        self.records.insert(option_id.to_owned(), record);
    }
}

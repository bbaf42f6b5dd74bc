//! Option catalog: base weights for every selectable option.
//!
//! The catalog is a read-only lookup from option identifier to a base weight
//! in `[0.0, 1.0]`. Identifiers the catalog does not know resolve to the
//! catalog's default weight, so [`OptionCatalog::lookup`] is total.

use std::collections::{BTreeMap, HashMap};

use crate::{Category, CatalogError, is_unit_interval};

/// Weight used for options the catalog does not list.
pub const DEFAULT_OPTION_WEIGHT: f64 = 0.5;

const BUILTIN_OPTIONS: &[(Category, &str, f64)] = &[
    (Category::Transporte, "metro", 0.37),
    (Category::Transporte, "bus", 0.3),
    (Category::Transporte, "bicicleta", 0.25),
    (Category::Transporte, "coche", 0.45),
    (Category::Transporte, "a_pie", 0.2),
    (Category::Ocio, "vida_nocturna", 0.6),
    (Category::Ocio, "cultura", 0.5),
    (Category::Ocio, "parques", 0.4),
    (Category::Ocio, "deporte", 0.35),
    (Category::Seguridad, "vigilancia", 0.7),
    (Category::Seguridad, "iluminacion", 0.55),
    (Category::Seguridad, "baja_criminalidad", 0.8),
    (Category::Precio, "alquiler_asequible", 0.65),
    (Category::Precio, "compra_asequible", 0.6),
    (Category::Precio, "coste_de_vida", 0.5),
];

/// Base weights for selectable options, grouped by category.
///
/// # Examples
/// ```
/// use barris_core::{OptionCatalog, DEFAULT_OPTION_WEIGHT};
///
/// let catalog = OptionCatalog::builtin();
/// assert_eq!(catalog.lookup("metro"), 0.37);
/// assert_eq!(catalog.lookup("teleferico"), DEFAULT_OPTION_WEIGHT);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CatalogFile", into = "CatalogFile")
)]
pub struct OptionCatalog {
    categories: BTreeMap<Category, BTreeMap<String, f64>>,
    index: HashMap<String, f64>,
    default_weight: f64,
}

impl OptionCatalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when a weight lies outside `0.0..=1.0` or is
    /// not finite, when an option id is blank, or when the same option id is
    /// listed under more than one category.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeMap;
    /// use barris_core::{Category, OptionCatalog};
    ///
    /// # fn main() -> Result<(), barris_core::CatalogError> {
    /// let categories = BTreeMap::from([(
    ///     Category::Ocio,
    ///     BTreeMap::from([("cine".to_owned(), 0.4)]),
    /// )]);
    /// let catalog = OptionCatalog::new(0.5, categories)?;
    /// assert_eq!(catalog.lookup("cine"), 0.4);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        default_weight: f64,
        categories: BTreeMap<Category, BTreeMap<String, f64>>,
    ) -> Result<Self, CatalogError> {
        if !is_unit_interval(default_weight) {
            return Err(CatalogError::DefaultWeightOutOfRange {
                weight: default_weight,
            });
        }

        let mut owners: HashMap<&str, Category> = HashMap::new();
        for (&category, options) in &categories {
            for (option, &weight) in options {
                if option.trim().is_empty() {
                    return Err(CatalogError::EmptyOptionId { category });
                }
                if !is_unit_interval(weight) {
                    return Err(CatalogError::WeightOutOfRange {
                        option: option.clone(),
                        weight,
                    });
                }
                if let Some(first) = owners.insert(option.as_str(), category) {
                    return Err(CatalogError::DuplicateOption {
                        option: option.clone(),
                        first,
                        second: category,
                    });
                }
            }
        }

        Ok(Self::from_validated(default_weight, categories))
    }

    /// The catalog shipped with the engine.
    #[must_use]
    pub fn builtin() -> Self {
        let mut categories: BTreeMap<Category, BTreeMap<String, f64>> = BTreeMap::new();
        for &(category, option, weight) in BUILTIN_OPTIONS {
            categories
                .entry(category)
                .or_default()
                .insert(option.to_owned(), weight);
        }
        Self::from_validated(DEFAULT_OPTION_WEIGHT, categories)
    }

    fn from_validated(
        default_weight: f64,
        categories: BTreeMap<Category, BTreeMap<String, f64>>,
    ) -> Self {
        let index = categories
            .values()
            .flat_map(|options| options.iter().map(|(id, &weight)| (id.clone(), weight)))
            .collect();
        Self {
            categories,
            index,
            default_weight,
        }
    }

    /// Return the base weight for `option_id`, falling back to the default.
    #[must_use]
    pub fn lookup(&self, option_id: &str) -> f64 {
        self.get(option_id).unwrap_or(self.default_weight)
    }

    /// Return the configured weight for `option_id`, if listed.
    #[must_use]
    pub fn get(&self, option_id: &str) -> Option<f64> {
        self.index.get(option_id).copied()
    }

    /// Weight applied to options the catalog does not list.
    #[must_use]
    pub const fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Return the category an option is listed under, if any.
    #[must_use]
    pub fn category_of(&self, option_id: &str) -> Option<Category> {
        self.categories
            .iter()
            .find(|(_, options)| options.contains_key(option_id))
            .map(|(&category, _)| category)
    }

    /// Number of options listed across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Report whether the catalog lists no options at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// On-disk shape of a catalog.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
pub(crate) struct CatalogFile {
    #[serde(default = "default_weight")]
    default_weight: f64,
    #[serde(default)]
    categories: BTreeMap<Category, BTreeMap<String, f64>>,
}

#[cfg(feature = "serde")]
const fn default_weight() -> f64 {
    DEFAULT_OPTION_WEIGHT
}

#[cfg(feature = "serde")]
impl TryFrom<CatalogFile> for OptionCatalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        Self::new(file.default_weight, file.categories)
    }
}

#[cfg(feature = "serde")]
impl From<OptionCatalog> for CatalogFile {
    fn from(catalog: OptionCatalog) -> Self {
        Self {
            default_weight: catalog.default_weight,
            categories: catalog.categories,
        }
    }
}

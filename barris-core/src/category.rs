//! Categories grouping related neighbourhood options.
//!
//! Each category contributes one scalar to the preference vector. The enum
//! is closed so that every vector carries exactly one entry per category.
//!
//! # Examples
//! ```
//! use barris_core::Category;
//!
//! assert_eq!(Category::Transporte.as_str(), "transporte");
//! assert_eq!(Category::Seguridad.to_string(), "seguridad");
//! ```

/// Category of options contributing one score to a preference vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    /// Public and private transport options.
    Transporte,
    /// Leisure, nightlife and culture.
    Ocio,
    /// Safety and security.
    Seguridad,
    /// Housing and living costs.
    Precio,
}

impl Category {
    /// Every category, in vector order.
    pub const ALL: [Self; 4] = [Self::Transporte, Self::Ocio, Self::Seguridad, Self::Precio];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use barris_core::Category;
    ///
    /// assert_eq!(Category::Precio.as_str(), "precio");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transporte => "transporte",
            Self::Ocio => "ocio",
            Self::Seguridad => "seguridad",
            Self::Precio => "precio",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transporte" => Ok(Self::Transporte),
            "ocio" => Ok(Self::Ocio),
            "seguridad" => Ok(Self::Seguridad),
            "precio" => Ok(Self::Precio),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

//! Recommendation request sent to the neighbourhood scoring service.

use crate::{Aggregation, OverrideLog, PreferenceVector, RequestError};

/// Number of neighbourhoods requested when the caller does not say.
pub const DEFAULT_TOP_K: u16 = 3;

/// Payload consumed by the scoring service.
///
/// Serialises to `{ "prefs": {..}, "sub_prefs": {..}, "top_k": n }`.
///
/// # Examples
/// ```
/// use barris_core::{
///     Aggregation, Category, OptionCatalog, RecommendationRequest, SelectionState, aggregate,
/// };
///
/// # fn main() -> Result<(), barris_core::RequestError> {
/// let aggregation = aggregate(&OptionCatalog::builtin(), &SelectionState::new());
/// let request = RecommendationRequest::new(aggregation, 5)?;
/// assert_eq!(request.top_k, 5);
/// assert!(request.prefs.get(crate::Category::Precio).is_ignored());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RequestFile")
)]
pub struct RecommendationRequest {
    /// Per-category preference scores.
    pub prefs: PreferenceVector,
    /// Accepted overrides, for audit only.
    pub sub_prefs: OverrideLog,
    /// Number of ranked neighbourhoods to return.
    pub top_k: u16,
}

impl RecommendationRequest {
    /// Build a request from an aggregation result.
    ///
    /// # Errors
    /// Returns [`RequestError::ZeroTopK`] when `top_k` is zero.
    pub fn new(aggregation: Aggregation, top_k: u16) -> Result<Self, RequestError> {
        let request = Self {
            prefs: aggregation.preferences,
            sub_prefs: aggregation.overrides,
            top_k,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the request is acceptable to the scoring service.
    ///
    /// # Errors
    /// Returns [`RequestError::ZeroTopK`] when `top_k` is zero.
    pub const fn validate(&self) -> Result<(), RequestError> {
        if self.top_k == 0 {
            return Err(RequestError::ZeroTopK);
        }
        Ok(())
    }
}

/// Decoded request prior to validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RequestFile {
    prefs: PreferenceVector,
    sub_prefs: OverrideLog,
    top_k: u16,
}

#[cfg(feature = "serde")]
impl TryFrom<RequestFile> for RecommendationRequest {
    type Error = RequestError;

    fn try_from(file: RequestFile) -> Result<Self, Self::Error> {
        let request = Self {
            prefs: file.prefs,
            sub_prefs: file.sub_prefs,
            top_k: file.top_k,
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zero_top_k_is_rejected() {
        let err = RecommendationRequest::new(Aggregation::default(), 0)
            .expect_err("zero top_k should fail");
        assert_eq!(err, RequestError::ZeroTopK);
    }

    #[rstest]
    #[case(1)]
    #[case(DEFAULT_TOP_K)]
    #[case(u16::MAX)]
    fn positive_top_k_is_accepted(#[case] top_k: u16) {
        let request =
            RecommendationRequest::new(Aggregation::default(), top_k).expect("valid request");
        assert_eq!(request.top_k, top_k);
        assert!(request.sub_prefs.is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decoding_rejects_zero_top_k() {
        let json = r#"{ "prefs": {}, "sub_prefs": {}, "top_k": 0 }"#;
        let err = serde_json::from_str::<RecommendationRequest>(json)
            .expect_err("zero top_k should not decode");
        assert!(err.to_string().contains("top_k must be at least 1"), "{err}");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decoding_fills_missing_categories_with_the_sentinel() {
        let json = r#"{ "prefs": { "ocio": 0.4 }, "sub_prefs": {}, "top_k": 2 }"#;
        let request: RecommendationRequest = serde_json::from_str(json).expect("valid request");
        assert_eq!(request.top_k, 2);
        assert!(request.prefs.get(crate::Category::Precio).is_ignored());
    }
}

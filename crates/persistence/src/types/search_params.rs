//! Search parameter types.
//!
//! [`SearchParameters`] is the per-request input to the query builder. Every
//! field is independently optional; an empty set of parameters is valid and
//! means "match everything".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Optional filters supplied with a search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Free text matched against the product name.
    pub text_query: Option<String>,
    /// Exact category label.
    pub category: Option<String>,
    /// Inclusive price bounds.
    pub price_range: Option<PriceRange>,
}

impl SearchParameters {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text query.
    pub fn with_text_query(mut self, text: impl Into<String>) -> Self {
        self.text_query = Some(text.into());
        self
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the price range filter.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// Returns true if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.text_query.is_none() && self.category.is_none() && self.price_range.is_none()
    }
}

/// An inclusive price range.
///
/// Parsed from the wire form `<min>-<max>`, e.g. `10-50` or `9.99-100`. The
/// string is split at the first `-`, so negative bounds cannot be expressed
/// and are rejected. `min <= max` is not enforced; an inverted range simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl PriceRange {
    /// Creates a range from its bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Parses a `<min>-<max>` string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.parse()
    }
}

impl FromStr for PriceRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ValidationError::InvalidPriceRange {
            value: s.to_string(),
            reason,
        };

        let (lower, upper) = s
            .split_once('-')
            .ok_or_else(|| invalid("expected '<min>-<max>'".to_string()))?;

        if lower.is_empty() {
            return Err(invalid(if s.starts_with('-') {
                "negative bounds are not supported".to_string()
            } else {
                "missing lower bound".to_string()
            }));
        }

        let min = parse_bound(lower).map_err(|e| invalid(format!("lower bound {}", e)))?;
        let max = parse_bound(upper).map_err(|e| invalid(format!("upper bound {}", e)))?;

        Ok(Self { min, max })
    }
}

/// Bounds are taken as-is; surrounding whitespace makes them unparsable.
fn parse_bound(raw: &str) -> Result<f64, String> {
    if raw.is_empty() {
        return Err("is missing".to_string());
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not finite", raw));
    }
    if value < 0.0 {
        return Err("cannot be negative".to_string());
    }
    Ok(value)
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_bounds() {
        let range = PriceRange::parse("10-50").unwrap();
        assert_eq!(range, PriceRange::new(10.0, 50.0));
    }

    #[test]
    fn test_parse_decimal_bounds() {
        let range = PriceRange::parse("9.99-100.5").unwrap();
        assert_eq!(range.min, 9.99);
        assert_eq!(range.max, 100.5);
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        for input in [" 1-2", "1-2 ", "1 -2", "1- 2", " 1 - 2 "] {
            let err = PriceRange::parse(input).unwrap_err();
            assert!(
                err.to_string().contains("not a number"),
                "unexpected error for {:?}: {}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_inverted_range_passes_through() {
        let range = PriceRange::parse("500-100").unwrap();
        assert_eq!(range, PriceRange::new(500.0, 100.0));
    }

    #[test]
    fn test_parse_malformed() {
        for input in ["abc", "10", "10-", "-", "", "a-b", "10-x", "10-20-30", "inf-5", "1-NaN"] {
            let err = PriceRange::parse(input).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidPriceRange { ref value, .. } if value == input),
                "expected rejection for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_negative_bounds() {
        let err = PriceRange::parse("-10-50").unwrap_err();
        assert!(err.to_string().contains("negative"));

        let err = PriceRange::parse("10--50").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_display_round_trips() {
        let range = PriceRange::new(100.0, 500.0);
        assert_eq!(range.to_string(), "100-500");
        assert_eq!(PriceRange::parse(&range.to_string()).unwrap(), range);
    }

    #[test]
    fn test_parameters_builder() {
        let params = SearchParameters::new()
            .with_text_query("phone")
            .with_category("Electronics")
            .with_price_range(PriceRange::new(1.0, 2.0));
        assert_eq!(params.text_query.as_deref(), Some("phone"));
        assert_eq!(params.category.as_deref(), Some("Electronics"));
        assert!(!params.is_empty());
        assert!(SearchParameters::new().is_empty());
    }
}

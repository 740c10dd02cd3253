//! Property search criteria and their normalization.
//!
//! [`PropertySearch`] is the raw, caller-facing criteria record: every
//! field is independently optional and numeric fields may arrive as
//! numbers or as strings (query-string input). [`PropertySearch::normalize`]
//! validates and coerces the raw record into a [`SearchFilters`] value with
//! canonical types; the query composer only ever sees the canonical form.

use serde::{Deserialize, Serialize};

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;

/// Cents per whole currency unit. Callers supply prices in whole units;
/// `properties.cost_per_night` stores cents.
const CENTS_PER_UNIT: f64 = 100.0;

/// A loosely typed scalar as supplied by a caller.
///
/// Untagged so that `50`, `49.5`, and `"50"` all deserialize; coercion to a
/// canonical numeric type happens during normalization, where failures can
/// be reported instead of silently producing a malformed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A string value, parsed during normalization.
    String(String),
}

impl ScalarValue {
    /// Coerce to a finite float, or fail with a validation error naming
    /// `field`.
    fn to_f64(&self, field: &str) -> AppResult<f64> {
        let value = match self {
            Self::Integer(i) => *i as f64,
            Self::Float(f) => *f,
            Self::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| AppError::validation(format!("{field} must be numeric, got '{s}'")))?,
        };
        if !value.is_finite() {
            return Err(AppError::validation(format!("{field} must be finite")));
        }
        Ok(value)
    }

    /// Coerce to an integer, or fail with a validation error naming `field`.
    fn to_i64(&self, field: &str) -> AppResult<i64> {
        match self {
            Self::Integer(i) => Ok(*i),
            Self::Float(f) if f.fract() == 0.0 => Ok(*f as i64),
            Self::Float(f) => Err(AppError::validation(format!(
                "{field} must be an integer, got {f}"
            ))),
            Self::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::validation(format!("{field} must be an integer, got '{s}'"))),
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Raw property search criteria. Any subset of fields, including none,
/// is a valid search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertySearch {
    /// Substring to match against the property city.
    pub city: Option<String>,
    /// Restrict results to listings owned by this user.
    pub owner_id: Option<ScalarValue>,
    /// Lower bound on nightly cost, in whole currency units.
    pub minimum_price_per_night: Option<ScalarValue>,
    /// Upper bound on nightly cost, in whole currency units.
    pub maximum_price_per_night: Option<ScalarValue>,
    /// Lower bound on the average review rating (1-5 scale).
    pub minimum_rating: Option<ScalarValue>,
}

/// Canonical, fully typed search criteria produced by normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Substring to match against the property city.
    pub city: Option<String>,
    /// Restrict results to listings owned by this user.
    pub owner_id: Option<i64>,
    /// Lower bound on nightly cost, in cents.
    pub min_cost_cents: Option<i64>,
    /// Upper bound on nightly cost, in cents.
    pub max_cost_cents: Option<i64>,
    /// Lower bound on the average review rating.
    pub min_rating: Option<f64>,
}

impl PropertySearch {
    /// Validate and coerce the raw criteria into canonical form.
    ///
    /// Prices are scaled from whole units to cents arithmetically. Fails
    /// with a validation error on non-numeric input, negative prices or
    /// owner ids, and a minimum price above the maximum. Absent fields
    /// stay absent.
    pub fn normalize(&self) -> AppResult<SearchFilters> {
        let owner_id = self
            .owner_id
            .as_ref()
            .map(|v| v.to_i64("owner_id"))
            .transpose()?;
        if owner_id.is_some_and(|id| id < 0) {
            return Err(AppError::validation("owner_id must not be negative"));
        }

        let min_cost_cents = self
            .minimum_price_per_night
            .as_ref()
            .map(|v| price_to_cents(v, "minimum_price_per_night"))
            .transpose()?;
        let max_cost_cents = self
            .maximum_price_per_night
            .as_ref()
            .map(|v| price_to_cents(v, "maximum_price_per_night"))
            .transpose()?;

        if let (Some(min), Some(max)) = (min_cost_cents, max_cost_cents) {
            if min > max {
                return Err(AppError::validation(
                    "minimum_price_per_night exceeds maximum_price_per_night",
                ));
            }
        }

        let min_rating = self
            .minimum_rating
            .as_ref()
            .map(|v| v.to_f64("minimum_rating"))
            .transpose()?;

        Ok(SearchFilters {
            city: self.city.clone(),
            owner_id,
            min_cost_cents,
            max_cost_cents,
            min_rating,
        })
    }
}

/// Convert a whole-unit price into cents.
fn price_to_cents(value: &ScalarValue, field: &str) -> AppResult<i64> {
    let units = value.to_f64(field)?;
    if units < 0.0 {
        return Err(AppError::validation(format!("{field} must not be negative")));
    }
    Ok((units * CENTS_PER_UNIT).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use stayhub_core::error::ErrorKind;

    #[test]
    fn test_empty_criteria_normalize_to_empty_filters() {
        let filters = PropertySearch::default().normalize().unwrap();
        assert_eq!(filters, SearchFilters::default());
    }

    #[test]
    fn test_prices_scale_to_cents() {
        let search = PropertySearch {
            minimum_price_per_night: Some(50.into()),
            maximum_price_per_night: Some(150.into()),
            ..Default::default()
        };
        let filters = search.normalize().unwrap();
        assert_eq!(filters.min_cost_cents, Some(5000));
        assert_eq!(filters.max_cost_cents, Some(15000));
    }

    #[test]
    fn test_fractional_price_scales_to_cents() {
        let search = PropertySearch {
            minimum_price_per_night: Some(49.5.into()),
            ..Default::default()
        };
        let filters = search.normalize().unwrap();
        assert_eq!(filters.min_cost_cents, Some(4950));
    }

    #[test]
    fn test_string_input_is_parsed() {
        let search = PropertySearch {
            owner_id: Some("42".into()),
            minimum_price_per_night: Some(" 50 ".into()),
            minimum_rating: Some("4.5".into()),
            ..Default::default()
        };
        let filters = search.normalize().unwrap();
        assert_eq!(filters.owner_id, Some(42));
        assert_eq!(filters.min_cost_cents, Some(5000));
        assert_eq!(filters.min_rating, Some(4.5));
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let search = PropertySearch {
            minimum_price_per_night: Some("abc".into()),
            ..Default::default()
        };
        let err = search.normalize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_non_numeric_rating_is_rejected() {
        let search = PropertySearch {
            minimum_rating: Some("great".into()),
            ..Default::default()
        };
        let err = search.normalize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_min_price_above_max_is_rejected() {
        let search = PropertySearch {
            minimum_price_per_night: Some(200.into()),
            maximum_price_per_night: Some(100.into()),
            ..Default::default()
        };
        let err = search.normalize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let search = PropertySearch {
            maximum_price_per_night: Some((-10).into()),
            ..Default::default()
        };
        assert!(search.normalize().is_err());
    }

    #[test]
    fn test_fractional_owner_id_is_rejected() {
        let search = PropertySearch {
            owner_id: Some(1.5.into()),
            ..Default::default()
        };
        assert!(search.normalize().is_err());
    }
}

//! Customer Domain Types
//!
//! A `CustomerRecord` is the raw attribute set one prediction request runs
//! on. It is immutable once constructed; field edits from the presentation
//! layer produce a fresh record.
//!
//! Validation lives here, at the boundary. The feature encoder downstream is
//! deliberately lenient (unknown category labels zero the indicator group),
//! so anything that should be rejected must be rejected before encoding.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// CATEGORY ENUMS
// ============================================================================

/// Fixed geography categories the models were trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geography {
    France,
    Germany,
    Spain,
}

impl Geography {
    pub const ALL: [Geography; 3] = [Geography::France, Geography::Germany, Geography::Spain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Geography::France => "France",
            Geography::Germany => "Germany",
            Geography::Spain => "Spain",
        }
    }
}

impl FromStr for Geography {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "France" => Ok(Geography::France),
            "Germany" => Ok(Geography::Germany),
            "Spain" => Ok(Geography::Spain),
            other => Err(ValidationError::UnknownGeography(other.to_string())),
        }
    }
}

/// Fixed gender categories the models were trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(ValidationError::UnknownGender(other.to_string())),
        }
    }
}

// ============================================================================
// CUSTOMER RECORD
// ============================================================================

/// Attribute bounds, matching the edit widgets of the presentation layer
pub const CREDIT_SCORE_RANGE: (i32, i32) = (300, 850);
pub const AGE_RANGE: (i32, i32) = (18, 100);
pub const TENURE_RANGE: (i32, i32) = (0, 50);
pub const NUM_PRODUCTS_RANGE: (i32, i32) = (1, 10);

/// Raw customer attributes for one prediction request.
///
/// Geography and gender are kept as labels: dataset rows and UI edits arrive
/// as text, and `validate()` is the single place they are checked against the
/// fixed category sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub credit_score: i32,
    pub geography: String,
    pub gender: String,
    pub age: i32,
    pub tenure: i32,
    pub balance: f64,
    pub num_products: i32,
    pub has_credit_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f64,
    /// Display only, never encoded
    pub surname: String,
}

impl CustomerRecord {
    /// Reject out-of-range numerics and unknown category labels.
    ///
    /// Returns the first violation found, in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("credit score", self.credit_score, CREDIT_SCORE_RANGE)?;
        Geography::from_str(&self.geography)?;
        Gender::from_str(&self.gender)?;
        check_range("age", self.age, AGE_RANGE)?;
        check_range("tenure", self.tenure, TENURE_RANGE)?;
        if self.balance < 0.0 {
            return Err(ValidationError::NegativeAmount {
                field: "balance",
                value: self.balance,
            });
        }
        check_range("number of products", self.num_products, NUM_PRODUCTS_RANGE)?;
        if self.estimated_salary < 0.0 {
            return Err(ValidationError::NegativeAmount {
                field: "estimated salary",
                value: self.estimated_salary,
            });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: i32, range: (i32, i32)) -> Result<(), ValidationError> {
    if value < range.0 || value > range.1 {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: range.0,
            max: range.1,
        });
    }
    Ok(())
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Validation error raised at the request boundary
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    NegativeAmount {
        field: &'static str,
        value: f64,
    },
    UnknownGeography(String),
    UnknownGender(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::OutOfRange { field, value, min, max } => {
                write!(f, "{} {} outside allowed range {}-{}", field, value, min, max)
            }
            ValidationError::NegativeAmount { field, value } => {
                write!(f, "{} must be non-negative, got {}", field, value)
            }
            ValidationError::UnknownGeography(label) => {
                write!(f, "unknown geography '{}', expected France, Germany or Spain", label)
            }
            ValidationError::UnknownGender(label) => {
                write!(f, "unknown gender '{}', expected Male or Female", label)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CustomerRecord {
        CustomerRecord {
            credit_score: 650,
            geography: "France".to_string(),
            gender: "Female".to_string(),
            age: 40,
            tenure: 5,
            balance: 50_000.0,
            num_products: 2,
            has_credit_card: true,
            is_active_member: true,
            estimated_salary: 60_000.0,
            surname: "Hargrave".to_string(),
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn test_boundary_values_pass() {
        let mut record = sample_record();
        record.credit_score = 300;
        record.age = 100;
        record.tenure = 0;
        record.balance = 0.0;
        record.num_products = 1;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_credit_score_out_of_range() {
        let mut record = sample_record();
        record.credit_score = 299;
        assert!(matches!(
            record.validate(),
            Err(ValidationError::OutOfRange { field: "credit score", .. })
        ));
    }

    #[test]
    fn test_unknown_geography_rejected() {
        let mut record = sample_record();
        record.geography = "Atlantis".to_string();
        assert_eq!(
            record.validate(),
            Err(ValidationError::UnknownGeography("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let mut record = sample_record();
        record.gender = "Unknown".to_string();
        assert!(matches!(record.validate(), Err(ValidationError::UnknownGender(_))));
    }

    #[test]
    fn test_negative_balance_rejected() {
        let mut record = sample_record();
        record.balance = -1.0;
        assert!(matches!(
            record.validate(),
            Err(ValidationError::NegativeAmount { field: "balance", .. })
        ));
    }

    #[test]
    fn test_geography_round_trip() {
        for geo in Geography::ALL {
            assert_eq!(Geography::from_str(geo.as_str()), Ok(geo));
        }
    }
}

//! Feature Encoder - CustomerRecord to FeatureVector
//!
//! Pure transformation, no error path: numeric attributes copy straight
//! through, booleans become 0/1, geography and gender one-hot encode against
//! the fixed category sets in `layout.rs`.
//!
//! An unrecognized category label produces an all-zero indicator group for
//! that category (logged at warn level). Encoding is total; rejection of bad
//! labels happens upstream in `CustomerRecord::validate`.

use crate::logic::customer::CustomerRecord;
use super::vector::FeatureVector;

/// Encode a customer record into the fixed-layout feature vector
pub fn encode(record: &CustomerRecord) -> FeatureVector {
    let mut vector = FeatureVector::new();

    vector.set_by_name("CreditScore", record.credit_score as f32);
    vector.set_by_name("Age", record.age as f32);
    vector.set_by_name("Tenure", record.tenure as f32);
    vector.set_by_name("Balance", record.balance as f32);
    vector.set_by_name("NumOfProducts", record.num_products as f32);
    vector.set_by_name("HasCrCard", if record.has_credit_card { 1.0 } else { 0.0 });
    vector.set_by_name("IsActiveMember", if record.is_active_member { 1.0 } else { 0.0 });
    vector.set_by_name("EstimatedSalary", record.estimated_salary as f32);

    one_hot(&mut vector, "Geography", &record.geography);
    one_hot(&mut vector, "Gender", &record.gender);

    vector
}

/// Set the `{group}_{label}` indicator. The vector starts zeroed, so a label
/// outside the fixed set simply leaves the whole group at zero.
fn one_hot(vector: &mut FeatureVector, group: &str, label: &str) {
    let key = format!("{}_{}", group, label);
    if !vector.set_by_name(&key, 1.0) {
        log::warn!("{} label '{}' not in the trained category set, indicators left zero", group, label);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::customer::{CustomerRecord, Gender, Geography};

    fn record() -> CustomerRecord {
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

    fn geography_indicators(vector: &FeatureVector) -> [f32; 3] {
        [
            vector.get_by_name("Geography_France").unwrap(),
            vector.get_by_name("Geography_Germany").unwrap(),
            vector.get_by_name("Geography_Spain").unwrap(),
        ]
    }

    #[test]
    fn test_encode_known_scenario() {
        let vector = encode(&record());

        assert_eq!(vector.get_by_name("CreditScore"), Some(650.0));
        assert_eq!(vector.get_by_name("Age"), Some(40.0));
        assert_eq!(vector.get_by_name("Tenure"), Some(5.0));
        assert_eq!(vector.get_by_name("Balance"), Some(50_000.0));
        assert_eq!(vector.get_by_name("NumOfProducts"), Some(2.0));
        assert_eq!(vector.get_by_name("HasCrCard"), Some(1.0));
        assert_eq!(vector.get_by_name("IsActiveMember"), Some(1.0));
        assert_eq!(vector.get_by_name("EstimatedSalary"), Some(60_000.0));
        assert_eq!(geography_indicators(&vector), [1.0, 0.0, 0.0]);
        assert_eq!(vector.get_by_name("Gender_Male"), Some(0.0));
        assert_eq!(vector.get_by_name("Gender_Female"), Some(1.0));
    }

    #[test]
    fn test_exactly_one_indicator_per_group() {
        for geo in Geography::ALL {
            for gender in [Gender::Male, Gender::Female] {
                let mut r = record();
                r.geography = geo.as_str().to_string();
                r.gender = gender.as_str().to_string();

                let vector = encode(&r);
                let geo_sum: f32 = geography_indicators(&vector).iter().sum();
                let gender_sum = vector.get_by_name("Gender_Male").unwrap()
                    + vector.get_by_name("Gender_Female").unwrap();

                assert_eq!(geo_sum, 1.0);
                assert_eq!(gender_sum, 1.0);
            }
        }
    }

    #[test]
    fn test_unknown_geography_zeroes_group() {
        let mut r = record();
        r.geography = "Atlantis".to_string();

        let vector = encode(&r);
        assert_eq!(geography_indicators(&vector), [0.0, 0.0, 0.0]);
        // Gender group untouched
        assert_eq!(vector.get_by_name("Gender_Female"), Some(1.0));
    }

    #[test]
    fn test_booleans_encode_as_zero() {
        let mut r = record();
        r.has_credit_card = false;
        r.is_active_member = false;

        let vector = encode(&r);
        assert_eq!(vector.get_by_name("HasCrCard"), Some(0.0));
        assert_eq!(vector.get_by_name("IsActiveMember"), Some(0.0));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let r = record();
        assert_eq!(encode(&r), encode(&r));
    }

    #[test]
    fn test_boundary_record_encodes() {
        let mut r = record();
        r.credit_score = 300;
        r.age = 100;

        let vector = encode(&r);
        assert_eq!(vector.get_by_name("CreditScore"), Some(300.0));
        assert_eq!(vector.get_by_name("Age"), Some(100.0));
        assert!(vector.validate().is_ok());
    }
}

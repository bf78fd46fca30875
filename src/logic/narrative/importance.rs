//! Static Feature Importance Table
//!
//! Precomputed offline by the training process, never recomputed per
//! request. The narrative prompts embed this so the generated explanation
//! can weight its reasoning the way the strongest model does.

/// (feature, importance), sorted by importance descending
pub const FEATURE_IMPORTANCE: &[(&str, f32)] = &[
    ("NumOfProducts", 0.323888),
    ("IsActiveMember", 0.164146),
    ("Age", 0.109550),
    ("Geography_Germany", 0.091373),
    ("Balance", 0.052786),
    ("Geography_France", 0.046463),
    ("Gender_Female", 0.045283),
    ("Geography_Spain", 0.036855),
    ("CreditScore", 0.035005),
    ("EstimatedSalary", 0.032655),
    ("HasCrCard", 0.031940),
    ("Tenure", 0.030054),
    ("Gender_Male", 0.000000),
];

/// Aligned two-column text table for prompt embedding
pub fn render_importance_table() -> String {
    let width = FEATURE_IMPORTANCE
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:>width$} | Importance\n", "Feature"));
    out.push_str(&format!("{}\n", "-".repeat(width + 13)));
    for (name, importance) in FEATURE_IMPORTANCE {
        out.push_str(&format!("{:>width$} | {:.6}\n", name, importance));
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout::FEATURE_LAYOUT;

    #[test]
    fn test_covers_every_layout_feature_exactly_once() {
        assert_eq!(FEATURE_IMPORTANCE.len(), FEATURE_LAYOUT.len());
        for feature in FEATURE_LAYOUT {
            assert!(
                FEATURE_IMPORTANCE.iter().any(|(name, _)| name == feature),
                "missing importance for {}",
                feature
            );
        }
    }

    #[test]
    fn test_sorted_descending() {
        for pair in FEATURE_IMPORTANCE.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_table_lists_all_features() {
        let table = render_importance_table();
        assert!(table.contains("Feature"));
        for (name, _) in FEATURE_IMPORTANCE {
            assert!(table.contains(name));
        }
        assert!(table.contains("0.323888"));
    }
}

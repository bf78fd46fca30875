//! Ensemble Runner & Aggregator
//!
//! Fans one feature vector out to a configured subset of the loaded models
//! and averages the per-model churn probabilities into the single risk
//! score. All invocations see the identical vector; nothing is mutated
//! between calls.

use serde::Serialize;

use crate::logic::features::FeatureVector;
use super::registry::ModelRegistry;
use super::ModelError;

// ============================================================================
// MODEL SCORES
// ============================================================================

/// One model's churn probability
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelScore {
    pub model: String,
    pub probability: f32,
}

/// Per-model probabilities for one request, in invocation order.
/// Produced fresh per request; never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelScores(pub Vec<ModelScore>);

impl ModelScores {
    pub fn get(&self, model: &str) -> Option<f32> {
        self.0.iter().find(|s| s.model == model).map(|s| s.probability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelScore> {
        self.0.iter()
    }
}

// ============================================================================
// ENSEMBLE RUNNER
// ============================================================================

/// Query the named models on the same feature vector.
///
/// `selection` comes from configuration and was validated against the
/// manifest at startup; an unknown name here still fails cleanly.
pub fn run_ensemble(
    registry: &ModelRegistry,
    vector: &FeatureVector,
    selection: &[String],
) -> Result<ModelScores, ModelError> {
    let mut scores = Vec::with_capacity(selection.len());

    for name in selection {
        let model = registry.get(name)?;
        let probability = model.predict_proba(vector)?;
        log::debug!("Model '{}' churn probability: {:.4}", name, probability);
        scores.push(ModelScore {
            model: name.clone(),
            probability,
        });
    }

    Ok(ModelScores(scores))
}

/// Query every loaded model — the side-by-side comparison view. The
/// non-aggregated models stay loaded precisely for this.
pub fn run_all(registry: &ModelRegistry, vector: &FeatureVector) -> Result<ModelScores, ModelError> {
    let mut scores = Vec::with_capacity(registry.len());

    for model in registry.models() {
        let probability = model.predict_proba(vector)?;
        scores.push(ModelScore {
            model: model.name().to_string(),
            probability,
        });
    }

    Ok(ModelScores(scores))
}

// ============================================================================
// AGGREGATOR
// ============================================================================

/// Unweighted arithmetic mean of the selected probabilities.
///
/// An empty score set is a configuration error caught at startup; this
/// guard exists so a misuse can never surface as NaN.
pub fn aggregate(scores: &ModelScores) -> Result<f32, ModelError> {
    if scores.is_empty() {
        return Err(ModelError::EmptyScores);
    }

    let sum: f32 = scores.iter().map(|s| s.probability).sum();
    Ok(sum / scores.len() as f32)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[(&str, f32)]) -> ModelScores {
        ModelScores(
            values
                .iter()
                .map(|(model, probability)| ModelScore {
                    model: model.to_string(),
                    probability: *probability,
                })
                .collect(),
        )
    }

    #[test]
    fn test_aggregate_is_mean() {
        let s = scores(&[("xgboost", 0.2), ("random_forest", 0.4), ("knn", 0.6)]);
        let risk = aggregate(&s).unwrap();
        assert!((risk - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_aggregate_exact_two_thirds() {
        let s = scores(&[("a", 1.0), ("b", 1.0), ("c", 0.0)]);
        let risk = aggregate(&s).unwrap();
        assert!((risk - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let forward = scores(&[("a", 0.1), ("b", 0.5), ("c", 0.9)]);
        let reversed = scores(&[("c", 0.9), ("b", 0.5), ("a", 0.1)]);
        assert_eq!(aggregate(&forward).unwrap(), aggregate(&reversed).unwrap());
    }

    #[test]
    fn test_aggregate_idempotent() {
        let s = scores(&[("a", 0.33), ("b", 0.77)]);
        let first = aggregate(&s).unwrap();
        let second = aggregate(&s).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_single_model() {
        let s = scores(&[("xgboost", 0.73)]);
        assert_eq!(aggregate(&s).unwrap(), 0.73);
    }

    #[test]
    fn test_aggregate_empty_rejected() {
        let s = ModelScores::default();
        assert!(matches!(aggregate(&s), Err(ModelError::EmptyScores)));
    }

    #[test]
    fn test_aggregate_stays_in_unit_interval() {
        let s = scores(&[("a", 0.0), ("b", 1.0)]);
        let risk = aggregate(&s).unwrap();
        assert!((0.0..=1.0).contains(&risk));
    }

    #[test]
    fn test_scores_lookup() {
        let s = scores(&[("xgboost", 0.2), ("knn", 0.6)]);
        assert_eq!(s.get("knn"), Some(0.6));
        assert_eq!(s.get("svm"), None);
    }
}

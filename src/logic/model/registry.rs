//! Model Registry - Startup Loading of the Nine Classifiers
//!
//! Every artifact in the manifest must deserialize at startup; a missing or
//! corrupt file aborts initialization, because no prediction can proceed
//! without the full model set. After load the registry is read-only — each
//! session sits behind a mutex only because the runtime's run call needs
//! exclusive access.

use std::path::{Path, PathBuf};
use parking_lot::Mutex;
use ort::session::{builder::GraphOptimizationLevel, Session};

use crate::logic::features::FeatureVector;
use super::inference;
use super::ModelError;

// ============================================================================
// MODEL MANIFEST
// ============================================================================

/// One entry of the fixed model set
#[derive(Debug, Clone, Copy)]
pub struct ModelSpec {
    /// Stable name used in configuration and score maps
    pub name: &'static str,
    /// Artifact file name inside the model directory
    pub file: &'static str,
    /// Human-readable algorithm, for logs and the comparison view
    pub algorithm: &'static str,
}

/// The nine artifacts produced by the offline training process
pub const MODEL_MANIFEST: &[ModelSpec] = &[
    ModelSpec { name: "xgboost", file: "xgb_model.onnx", algorithm: "Gradient-boosted trees" },
    ModelSpec { name: "naive_bayes", file: "nb_model.onnx", algorithm: "Naive Bayes" },
    ModelSpec { name: "random_forest", file: "rf_model.onnx", algorithm: "Random forest" },
    ModelSpec { name: "decision_tree", file: "dt_model.onnx", algorithm: "Decision tree" },
    ModelSpec { name: "svm", file: "svm_model.onnx", algorithm: "Support-vector machine" },
    ModelSpec { name: "knn", file: "knn_model.onnx", algorithm: "K-nearest neighbors" },
    ModelSpec { name: "voting_classifier", file: "voting_clf.onnx", algorithm: "Voting ensemble" },
    ModelSpec { name: "xgboost_smote", file: "xgb_smote.onnx", algorithm: "Gradient-boosted trees (SMOTE)" },
    ModelSpec { name: "xgboost_fe", file: "xgb_feature_engineered.onnx", algorithm: "Gradient-boosted trees (feature-engineered)" },
];

/// Check a name against the manifest
pub fn manifest_contains(name: &str) -> bool {
    MODEL_MANIFEST.iter().any(|spec| spec.name == name)
}

// ============================================================================
// LOADED MODEL
// ============================================================================

/// One deserialized classifier, immutable for the process lifetime
pub struct LoadedModel {
    pub spec: ModelSpec,
    pub path: PathBuf,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    session: Mutex<Session>,
}

impl LoadedModel {
    fn load(dir: &Path, spec: ModelSpec) -> Result<Self, ModelError> {
        let path = dir.join(spec.file);

        if !path.exists() {
            return Err(ModelError::Artifact {
                model: spec.name.to_string(),
                message: format!("artifact not found: {}", path.display()),
            });
        }

        let session = Session::builder()
            .map_err(|e| artifact_error(spec.name, "session builder", e))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| artifact_error(spec.name, "optimization level", e))?
            .commit_from_file(&path)
            .map_err(|e| artifact_error(spec.name, "deserialize", e))?;

        log::info!("Model '{}' loaded from {}", spec.name, path.display());

        Ok(Self {
            spec,
            path,
            loaded_at: chrono::Utc::now(),
            session: Mutex::new(session),
        })
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Probability assigned to the "churned" class for one feature vector.
    /// The vector's layout hash is checked before it reaches the session.
    pub fn predict_proba(&self, vector: &FeatureVector) -> Result<f32, ModelError> {
        vector.validate()?;

        let mut session = self.session.lock();
        inference::churn_probability(&mut session, vector).map_err(|e| ModelError::Inference {
            model: self.spec.name.to_string(),
            message: e.0,
        })
    }
}

fn artifact_error(model: &str, stage: &str, e: impl std::fmt::Display) -> ModelError {
    ModelError::Artifact {
        model: model.to_string(),
        message: format!("{}: {}", stage, e),
    }
}

// ============================================================================
// MODEL REGISTRY
// ============================================================================

/// Owned set of all loaded models, built once at startup and passed by
/// reference into request-handling code
pub struct ModelRegistry {
    models: Vec<LoadedModel>,
}

impl ModelRegistry {
    /// Load every manifest entry from `dir`. Any failure is fatal.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let mut models = Vec::with_capacity(MODEL_MANIFEST.len());
        for &spec in MODEL_MANIFEST {
            models.push(LoadedModel::load(dir, spec)?);
        }

        log::info!("Model registry ready: {} models loaded from {}", models.len(), dir.display());
        Ok(Self { models })
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn models(&self) -> &[LoadedModel] {
        &self.models
    }

    pub fn get(&self, name: &str) -> Result<&LoadedModel, ModelError> {
        self.models
            .iter()
            .find(|m| m.spec.name == name)
            .ok_or_else(|| ModelError::UnknownModel(name.to_string()))
    }

    /// Registry status for the presentation layer
    pub fn status(&self) -> Vec<ModelInfo> {
        self.models
            .iter()
            .map(|m| ModelInfo {
                name: m.spec.name,
                algorithm: m.spec.algorithm,
                path: m.path.display().to_string(),
                loaded_at: m.loaded_at,
            })
            .collect()
    }
}

/// Metadata of one loaded model
#[derive(Debug, Clone, serde::Serialize)]
pub struct ModelInfo {
    pub name: &'static str,
    pub algorithm: &'static str,
    pub path: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_has_nine_models() {
        assert_eq!(MODEL_MANIFEST.len(), 9);
    }

    #[test]
    fn test_manifest_names_are_unique() {
        for (i, a) in MODEL_MANIFEST.iter().enumerate() {
            for b in &MODEL_MANIFEST[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.file, b.file);
            }
        }
    }

    #[test]
    fn test_manifest_contains() {
        assert!(manifest_contains("xgboost"));
        assert!(manifest_contains("knn"));
        assert!(!manifest_contains("linear_regression"));
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        match ModelRegistry::load(dir.path()) {
            Err(ModelError::Artifact { model, .. }) => {
                assert_eq!(model, MODEL_MANIFEST[0].name);
            }
            other => panic!("expected artifact error, got {:?}", other.err()),
        }
    }
}

//! Model Module - Pre-trained Classifier Inference
//!
//! Nine classifiers exported to ONNX by the offline training process load
//! once at startup into an owned registry. Request code receives the
//! registry by reference; there is no ambient global model state.

pub mod registry;
pub mod inference;
pub mod ensemble;

// Re-export common types
pub use registry::{LoadedModel, ModelRegistry, ModelSpec, MODEL_MANIFEST};
pub use ensemble::{aggregate, run_all, run_ensemble, ModelScore, ModelScores};

use crate::logic::features::layout::LayoutMismatchError;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Model-side failures. Artifact problems are fatal at startup; the
/// remaining variants indicate programming or configuration errors, since
/// inference on a valid vector is expected to succeed.
#[derive(Debug, Clone)]
pub enum ModelError {
    /// Missing or undeserializable model artifact (initialization time)
    Artifact { model: String, message: String },
    /// Requested model name is not in the manifest
    UnknownModel(String),
    /// Feature vector built under a different layout than this build
    Layout(LayoutMismatchError),
    /// Session run or output extraction failed
    Inference { model: String, message: String },
    /// Aggregation over an empty score set (rejected, never NaN)
    EmptyScores,
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::Artifact { model, message } => {
                write!(f, "model '{}' failed to load: {}", model, message)
            }
            ModelError::UnknownModel(name) => write!(f, "unknown model '{}'", name),
            ModelError::Layout(e) => write!(f, "{}", e),
            ModelError::Inference { model, message } => {
                write!(f, "inference failed on model '{}': {}", model, message)
            }
            ModelError::EmptyScores => {
                write!(f, "cannot aggregate an empty model score set")
            }
        }
    }
}

impl std::error::Error for ModelError {}

impl From<LayoutMismatchError> for ModelError {
    fn from(e: LayoutMismatchError) -> Self {
        ModelError::Layout(e)
    }
}

//! Inference - ONNX Runtime Session Query
//!
//! One classifier, one feature vector, one churned-class probability.
//! The artifact format is opaque: load, run, read the probability output.

use ndarray::Array2;
use ort::session::Session;
use ort::value::Value;

use crate::logic::features::{FeatureVector, FEATURE_COUNT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// PROBABILITY QUERY
// ============================================================================

/// Run one session on a single-row batch and extract the probability the
/// model assigns to the "churned" class (class label 1).
pub fn churn_probability(
    session: &mut Session,
    vector: &FeatureVector,
) -> Result<f32, InferenceError> {
    // Input tensor: shape (1, features)
    let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), vector.as_slice().to_vec())
        .map_err(|e| InferenceError(format!("Failed to create array: {}", e)))?;

    // Exported classifiers emit a label output plus a probability output;
    // pick the probability one. Resolve the name BEFORE run to avoid a
    // borrow conflict.
    let output_name = session
        .outputs
        .iter()
        .find(|o| o.name.to_ascii_lowercase().contains("probab"))
        .or_else(|| session.outputs.last())
        .map(|o| o.name.clone())
        .ok_or_else(|| InferenceError("No output defined".to_string()))?;

    let input_tensor = Value::from_array(input_array)
        .map_err(|e| InferenceError(format!("Failed to create tensor: {}", e)))?;

    let outputs = session
        .run(ort::inputs![input_tensor])
        .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

    let output = outputs
        .get(&output_name)
        .ok_or_else(|| InferenceError(format!("No output '{}' from model", output_name)))?;

    let output_tensor = output
        .try_extract_tensor::<f32>()
        .map_err(|e| InferenceError(format!("Failed to extract output: {}", e)))?;

    let data = output_tensor.1; // (shape, data) tuple

    // Class order is [retained, churned]; for a single-row batch the last
    // element is the churned-class probability in both the (1, 2) and the
    // single-output (1, 1) export shapes.
    let probability = data
        .last()
        .copied()
        .ok_or_else(|| InferenceError("Empty probability output".to_string()))?;

    if !probability.is_finite() {
        return Err(InferenceError(format!("Non-finite probability: {}", probability)));
    }

    Ok(probability.clamp(0.0, 1.0))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_error_display() {
        let err = InferenceError("boom".to_string());
        assert_eq!(err.to_string(), "InferenceError: boom");
    }
}

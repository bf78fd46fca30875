//! Features Module - Feature Encoding Engine
//!
//! Turns raw customer attributes into the fixed-layout numeric vector the
//! trained models expect. Layout is versioned and hashed so a vector built
//! under one schema can never silently feed a model trained under another.

pub mod layout;
pub mod vector;
pub mod encoder;

// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, feature_index, feature_name, layout_hash};
pub use vector::FeatureVector;
pub use encoder::encode;

//! Logic Module - Prediction Pipeline & Engines
//!
//! The pipeline, leaves first:
//! - `features/` - fixed-layout feature encoding (one-hot categoricals)
//! - `model/` - startup model registry, ONNX inference, ensemble + aggregation
//! - `dataset/` - reference customer table and population statistics
//! - `narrative/` - prompt construction and the chat-completion client

pub mod config;
pub mod customer;
pub mod dataset;
pub mod features;
pub mod model;
pub mod narrative;

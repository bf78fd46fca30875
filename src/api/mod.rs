//! API Module - Surface for the Presentation Collaborator

pub mod commands;

pub use commands::{AppContext, ChurnAssessment, CommandError};

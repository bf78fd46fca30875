//! Commands - The Operations the UI Invokes
//!
//! One `AppContext` is built at startup and passed by reference into every
//! command. Prediction (assess) and narrative generation (explain,
//! draft_email) are separate commands on purpose: a collaborator failure in
//! the narrative step must not invalidate an already computed risk score.

use serde::Serialize;

use crate::logic::config::{AppConfig, ConfigError};
use crate::logic::customer::{CustomerRecord, ValidationError};
use crate::logic::dataset::{CustomerChoice, DatasetError, PopulationStats, ReferenceDataset};
use crate::logic::features::{self, FeatureVector};
use crate::logic::model::{self, ModelError, ModelRegistry, ModelScores};
use crate::logic::narrative::{self, ChatClient, NarrativeError, NarrativePolicy, PromptContext};

// ============================================================================
// APP CONTEXT
// ============================================================================

/// Process-wide read-only state, initialized once at startup
pub struct AppContext {
    pub config: AppConfig,
    pub registry: ModelRegistry,
    pub dataset: ReferenceDataset,
    pub stats: PopulationStats,
    pub chat: ChatClient,
    pub policy: NarrativePolicy,
}

impl AppContext {
    /// Validate configuration, load the reference dataset, compute the
    /// population statistics and deserialize all models. Any failure here
    /// aborts startup.
    pub fn initialize(config: AppConfig) -> Result<Self, InitError> {
        config.validate()?;

        let dataset = ReferenceDataset::load(&config.dataset_path)?;
        let stats = PopulationStats::compute(&dataset);
        let registry = ModelRegistry::load(&config.model_dir)?;

        let chat = ChatClient::new(
            config.chat_api_base.clone(),
            config.chat_api_key.clone(),
            config.chat_model.clone(),
        );
        if chat.is_configured() {
            log::info!("Chat client ready (model '{}')", chat.model());
        } else {
            log::warn!("No chat API key configured - narrative generation will be unavailable");
        }

        Ok(Self {
            config,
            registry,
            dataset,
            stats,
            chat,
            policy: NarrativePolicy::default(),
        })
    }
}

// ============================================================================
// ASSESSMENT
// ============================================================================

/// Outcome of one prediction request
#[derive(Debug, Clone, Serialize)]
pub struct ChurnAssessment {
    pub surname: String,
    /// Unweighted mean of the ensemble probabilities, in [0, 1]
    pub risk_score: f32,
    /// Per-model probabilities behind the risk score
    pub scores: ModelScores,
    /// The encoded vector the models saw
    pub vector: FeatureVector,
}

/// List the reference dataset customers for the selector
pub fn list_customers(ctx: &AppContext) -> Vec<CustomerChoice> {
    ctx.dataset.choices()
}

/// Default attribute set for a known customer id
pub fn customer_record(ctx: &AppContext, customer_id: u64) -> Result<CustomerRecord, CommandError> {
    ctx.dataset
        .find(customer_id)
        .map(|row| row.to_customer_record())
        .ok_or(CommandError::UnknownCustomer(customer_id))
}

/// Validate, encode, run the ensemble and aggregate the risk score
pub fn assess(ctx: &AppContext, record: &CustomerRecord) -> Result<ChurnAssessment, CommandError> {
    record.validate()?;

    let vector = features::encode(record);
    log::debug!("Encoded vector: {}", vector.to_log_entry());

    let scores = model::run_ensemble(&ctx.registry, &vector, &ctx.config.ensemble)?;
    let risk_score = model::aggregate(&scores)?;

    log::info!(
        "Customer '{}' risk score {:.4} over {} models",
        record.surname,
        risk_score,
        scores.len()
    );

    Ok(ChurnAssessment {
        surname: record.surname.clone(),
        risk_score,
        scores,
        vector,
    })
}

/// Probabilities from every loaded model, including the non-aggregated ones
pub fn compare_all_models(ctx: &AppContext, assessment: &ChurnAssessment) -> Result<ModelScores, CommandError> {
    Ok(model::run_all(&ctx.registry, &assessment.vector)?)
}

// ============================================================================
// NARRATIVE
// ============================================================================

/// Generate the churn explanation for an assessment
pub fn explain(ctx: &AppContext, assessment: &ChurnAssessment) -> Result<String, NarrativeError> {
    let prompt_ctx = PromptContext {
        surname: &assessment.surname,
        risk_score: assessment.risk_score,
        vector: &assessment.vector,
        stats: &ctx.stats,
    };
    narrative::explain(&ctx.chat, &ctx.policy, &prompt_ctx)
}

/// Draft the retention email for an assessment, given its explanation
pub fn draft_email(
    ctx: &AppContext,
    assessment: &ChurnAssessment,
    explanation: &str,
) -> Result<String, NarrativeError> {
    let prompt_ctx = PromptContext {
        surname: &assessment.surname,
        risk_score: assessment.risk_score,
        vector: &assessment.vector,
        stats: &ctx.stats,
    };
    narrative::draft_email(&ctx.chat, &prompt_ctx, explanation)
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Fatal startup failure
#[derive(Debug)]
pub enum InitError {
    Config(ConfigError),
    Dataset(DatasetError),
    Model(ModelError),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::Config(e) => write!(f, "configuration error: {}", e),
            InitError::Dataset(e) => write!(f, "dataset error: {}", e),
            InitError::Model(e) => write!(f, "model error: {}", e),
        }
    }
}

impl std::error::Error for InitError {}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError::Config(e)
    }
}

impl From<DatasetError> for InitError {
    fn from(e: DatasetError) -> Self {
        InitError::Dataset(e)
    }
}

impl From<ModelError> for InitError {
    fn from(e: ModelError) -> Self {
        InitError::Model(e)
    }
}

/// Per-request command failure
#[derive(Debug)]
pub enum CommandError {
    UnknownCustomer(u64),
    Validation(ValidationError),
    Model(ModelError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::UnknownCustomer(id) => {
                write!(f, "no customer with id {} in the reference dataset", id)
            }
            CommandError::Validation(e) => write!(f, "invalid customer attributes: {}", e),
            CommandError::Model(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ValidationError> for CommandError {
    fn from(e: ValidationError) -> Self {
        CommandError::Validation(e)
    }
}

impl From<ModelError> for CommandError {
    fn from(e: ModelError) -> Self {
        CommandError::Model(e)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::model::ModelScore;

    #[test]
    fn test_assessment_serializes_for_presentation() {
        let assessment = ChurnAssessment {
            surname: "Hargrave".to_string(),
            risk_score: 0.4,
            scores: ModelScores(vec![ModelScore {
                model: "xgboost".to_string(),
                probability: 0.4,
            }]),
            vector: FeatureVector::new(),
        };

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["surname"], "Hargrave");
        assert_eq!(json["scores"][0]["model"], "xgboost");
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::UnknownCustomer(15634602);
        assert!(err.to_string().contains("15634602"));
    }
}

//! Narrative Module - Explanation & Retention Email Generation
//!
//! Builds structured prompts from the prediction outcome, the customer's
//! encoded attributes, the static feature-importance table and the
//! population statistics, then delegates the actual wording to the external
//! text-generation collaborator.

pub mod types;
pub mod importance;
pub mod prompts;
pub mod client;

pub use client::ChatClient;
pub use prompts::{NarrativePolicy, PromptContext};
pub use types::NarrativeError;

/// Generate the churn explanation for one prediction outcome
pub fn explain(
    client: &ChatClient,
    policy: &NarrativePolicy,
    ctx: &PromptContext,
) -> Result<String, NarrativeError> {
    let prompt = prompts::build_explanation_prompt(policy, ctx);
    log::debug!("Explanation prompt:\n{}", prompt);
    client.complete(&prompt)
}

/// Draft the retention email, embedding the explanation text
pub fn draft_email(
    client: &ChatClient,
    ctx: &PromptContext,
    explanation: &str,
) -> Result<String, NarrativeError> {
    let prompt = prompts::build_email_prompt(ctx, explanation);
    log::debug!("Email prompt:\n{}", prompt);
    client.complete(&prompt)
}

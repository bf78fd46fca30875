//! Prompt Builders
//!
//! Deterministic text templates for the two narrative requests. The policy
//! rules live in `NarrativePolicy` as explicit parameters rather than prose
//! buried in a template: the risk threshold picks the stance of the
//! explanation, the sentence count bounds its length, and both prompts carry
//! the non-disclosure rule (never reveal the probability or the existence of
//! a predictive model).

use crate::constants;
use crate::logic::dataset::PopulationStats;
use crate::logic::features::FeatureVector;
use super::importance::render_importance_table;

// ============================================================================
// POLICY
// ============================================================================

/// Explicit narrative policy knobs
#[derive(Debug, Clone, Copy)]
pub struct NarrativePolicy {
    /// Risk above this fraction gets the "at risk" stance
    pub risk_threshold: f32,
    /// Number of sentences requested from the explanation
    pub explanation_sentences: usize,
}

impl Default for NarrativePolicy {
    fn default() -> Self {
        Self {
            risk_threshold: constants::RISK_THRESHOLD,
            explanation_sentences: constants::EXPLANATION_SENTENCES,
        }
    }
}

impl NarrativePolicy {
    /// Strictly above the threshold counts as at-risk; at or below gets the
    /// stabilizing-factors stance.
    pub fn is_at_risk(&self, risk_score: f32) -> bool {
        risk_score > self.risk_threshold
    }
}

// ============================================================================
// PROMPT CONTEXT
// ============================================================================

/// Everything a narrative request embeds besides the policy
pub struct PromptContext<'a> {
    pub surname: &'a str,
    pub risk_score: f32,
    pub vector: &'a FeatureVector,
    pub stats: &'a PopulationStats,
}

/// One line per encoded feature, in layout order
fn customer_profile(vector: &FeatureVector) -> String {
    vector
        .named_values()
        .map(|(name, value)| format!("  {}: {}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// EXPLANATION PROMPT
// ============================================================================

/// Prompt for the churn explanation request
pub fn build_explanation_prompt(policy: &NarrativePolicy, ctx: &PromptContext) -> String {
    let stance = if policy.is_at_risk(ctx.risk_score) {
        format!(
            "Write exactly {} sentences explaining why this customer is at risk of leaving the bank.",
            policy.explanation_sentences
        )
    } else {
        format!(
            "Write exactly {} sentences explaining why this customer is likely to stay with the bank.",
            policy.explanation_sentences
        )
    };

    format!(
        r#"You are an expert data scientist at a bank, where you specialize in interpreting and explaining customer retention outcomes.

A customer named {surname} has a {risk:.1}% chance of churning, based on the information provided below.

Here is the customer's information:
{profile}

Here are the most important features for predicting churn:

{importance}
Here are summary statistics for churned customers:
{churned}
Here are summary statistics for non-churned customers:
{retained}
{stance}
Base the explanation on the customer's information, the summary statistics of churned and non-churned customers, and the feature importances provided.

Don't mention the probability of churning, or any machine learning model, or say anything like "Based on the model's prediction and the most important features" - just explain the prediction."#,
        surname = ctx.surname,
        risk = ctx.risk_score * 100.0,
        profile = customer_profile(ctx.vector),
        importance = render_importance_table(),
        churned = ctx.stats.churned_table(),
        retained = ctx.stats.retained_table(),
        stance = stance,
    )
}

// ============================================================================
// EMAIL PROMPT
// ============================================================================

/// Prompt for the retention email request; embeds the explanation text
pub fn build_email_prompt(ctx: &PromptContext, explanation: &str) -> String {
    format!(
        r#"You are a manager at HS Bank. You are responsible for ensuring customers stay with the bank and are incentivized with various offers.

You noticed a customer named {surname} has a {risk:.1}% probability of churning.

Here is the customer's information:
{profile}

Here is some explanation as to why the customer may be churning:
{explanation}

Generate an email to the customer based on their information, asking them to stay if they are at risk of churning, or offering them incentives so that they become more loyal to the bank.

Make sure to list out a set of incentives to stay based on their information, in bullet point format. Don't ever mention the probability of churning, or any machine learning model, to the customer."#,
        surname = ctx.surname,
        risk = ctx.risk_score * 100.0,
        profile = customer_profile(ctx.vector),
        explanation = explanation,
    )
}

// ============================================================================
// TESTS
// ============================================================================

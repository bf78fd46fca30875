//! ChurnSight Core - Main Entry Point
//!
//! Startup order matters: configuration first, then the reference dataset
//! and its population statistics, then the model registry. Any failure in
//! that sequence aborts the process; a narrative failure later does not.

mod api;
mod constants;
mod logic;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use api::commands;
use api::AppContext;
use logic::config::AppConfig;
use logic::customer::CustomerRecord;

#[derive(Parser)]
#[command(name = "churnsight")]
#[command(version, about = "Customer churn prediction core service")]
struct Cli {
    /// Directory holding the ONNX model artifacts
    #[arg(long, global = true)]
    model_dir: Option<PathBuf>,

    /// Path to the churn reference dataset
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the customers available in the reference dataset
    List,

    /// Show the loaded models and their artifacts
    Models,

    /// Predict churn risk for a customer and generate the narrative
    Predict {
        /// Customer id from the reference dataset
        #[arg(long)]
        customer_id: u64,

        /// Skip explanation and email generation
        #[arg(long)]
        no_narrative: bool,

        /// Also print probabilities from every loaded model
        #[arg(long)]
        all_models: bool,

        // Field overrides; unset fields default to the selected row's
        // values, mirroring the edit widgets of the presentation layer.
        #[arg(long)]
        credit_score: Option<i32>,
        #[arg(long)]
        geography: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        age: Option<i32>,
        #[arg(long)]
        tenure: Option<i32>,
        #[arg(long)]
        balance: Option<f64>,
        #[arg(long)]
        num_products: Option<i32>,
        #[arg(long)]
        has_credit_card: Option<bool>,
        #[arg(long)]
        is_active_member: Option<bool>,
        #[arg(long)]
        estimated_salary: Option<f64>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("Starting {} v{}", constants::APP_NAME, constants::APP_VERSION);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.model_dir {
        config.model_dir = dir;
    }
    if let Some(path) = cli.dataset {
        config.dataset_path = path;
    }

    let ctx = AppContext::initialize(config)?;

    match cli.command {
        Commands::List => {
            for choice in commands::list_customers(&ctx) {
                println!("{} - {}", choice.customer_id, choice.surname);
            }
            Ok(())
        }

        Commands::Models => {
            for info in ctx.registry.status() {
                println!("{:<18} {:<42} {}", info.name, info.algorithm, info.path);
            }
            Ok(())
        }

        Commands::Predict {
            customer_id,
            no_narrative,
            all_models,
            credit_score,
            geography,
            gender,
            age,
            tenure,
            balance,
            num_products,
            has_credit_card,
            is_active_member,
            estimated_salary,
        } => {
            let mut record = commands::customer_record(&ctx, customer_id)?;
            apply_overrides(
                &mut record,
                credit_score,
                geography,
                gender,
                age,
                tenure,
                balance,
                num_products,
                has_credit_card,
                is_active_member,
                estimated_salary,
            );

            let assessment = commands::assess(&ctx, &record)?;

            println!(
                "Customer {} ({}) has a {:.1}% probability of churning.",
                customer_id,
                assessment.surname,
                assessment.risk_score * 100.0
            );
            println!();
            println!("Ensemble probabilities:");
            for score in assessment.scores.iter() {
                println!("  {:<16} {:.4}", score.model, score.probability);
            }

            if all_models {
                let comparison = commands::compare_all_models(&ctx, &assessment)?;
                println!();
                println!("All loaded models:");
                for score in comparison.iter() {
                    println!("  {:<16} {:.4}", score.model, score.probability);
                }
            }

            if no_narrative {
                return Ok(());
            }

            // Narrative failures are terminal for this step only; the risk
            // score above has already been presented.
            match commands::explain(&ctx, &assessment) {
                Ok(explanation) => {
                    println!();
                    println!("--- Explanation ---");
                    println!("{}", explanation);

                    match commands::draft_email(&ctx, &assessment, &explanation) {
                        Ok(email) => {
                            println!();
                            println!("--- Retention Email ---");
                            println!("{}", email);
                        }
                        Err(e) => log::error!("Email generation failed: {}", e),
                    }
                }
                Err(e) => log::error!("Explanation generation failed: {}", e),
            }

            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn apply_overrides(
    record: &mut CustomerRecord,
    credit_score: Option<i32>,
    geography: Option<String>,
    gender: Option<String>,
    age: Option<i32>,
    tenure: Option<i32>,
    balance: Option<f64>,
    num_products: Option<i32>,
    has_credit_card: Option<bool>,
    is_active_member: Option<bool>,
    estimated_salary: Option<f64>,
) {
    if let Some(v) = credit_score {
        record.credit_score = v;
    }
    if let Some(v) = geography {
        record.geography = v;
    }
    if let Some(v) = gender {
        record.gender = v;
    }
    if let Some(v) = age {
        record.age = v;
    }
    if let Some(v) = tenure {
        record.tenure = v;
    }
    if let Some(v) = balance {
        record.balance = v;
    }
    if let Some(v) = num_products {
        record.num_products = v;
    }
    if let Some(v) = has_credit_card {
        record.has_credit_card = v;
    }
    if let Some(v) = is_active_member {
        record.is_active_member = v;
    }
    if let Some(v) = estimated_salary {
        record.estimated_salary = v;
    }
}

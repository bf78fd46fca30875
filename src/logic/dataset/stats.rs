//! Population Statistics
//!
//! Descriptive statistics over the churned and retained subsets of the
//! reference table, computed once at startup. The narrative prompts embed
//! these as fixed-width tables so the text generator can contrast a customer
//! against both populations.
//!
//! Quantiles use linear interpolation and std is the sample deviation,
//! matching the describe() output the offline analysis was built on.

use serde::Serialize;
use super::{CustomerRow, ReferenceDataset};

/// Numeric columns that appear in the statistics tables, in display order
pub const STAT_COLUMNS: &[&str] = &[
    "CreditScore",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
];

const STAT_ROWS: &[&str] = &["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

// ============================================================================
// COLUMN SUMMARY
// ============================================================================

/// describe()-style summary of one numeric column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarize a non-empty value set
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;

        // Sample standard deviation; a single observation has no spread
        let std = if count > 1 {
            let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (sum_sq / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.50),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    fn stat(&self, name: &str) -> f64 {
        match name {
            "count" => self.count as f64,
            "mean" => self.mean,
            "std" => self.std,
            "min" => self.min,
            "25%" => self.q25,
            "50%" => self.q50,
            "75%" => self.q75,
            "max" => self.max,
            _ => f64::NAN,
        }
    }
}

/// Linear-interpolation quantile over pre-sorted values
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

// ============================================================================
// POPULATION STATS
// ============================================================================

/// Per-column summaries for the churned and retained populations
#[derive(Debug, Clone, Serialize)]
pub struct PopulationStats {
    pub churned: Vec<(String, ColumnSummary)>,
    pub retained: Vec<(String, ColumnSummary)>,
}

impl PopulationStats {
    pub fn compute(dataset: &ReferenceDataset) -> Self {
        let (churned_rows, retained_rows): (Vec<&CustomerRow>, Vec<&CustomerRow>) =
            dataset.rows().iter().partition(|r| r.has_churned());

        log::info!(
            "Population stats: {} churned, {} retained customers",
            churned_rows.len(),
            retained_rows.len()
        );

        Self {
            churned: summarize_rows(&churned_rows),
            retained: summarize_rows(&retained_rows),
        }
    }

    /// Churned-subset table for prompt embedding
    pub fn churned_table(&self) -> String {
        render_table(&self.churned)
    }

    /// Retained-subset table for prompt embedding
    pub fn retained_table(&self) -> String {
        render_table(&self.retained)
    }
}

fn summarize_rows(rows: &[&CustomerRow]) -> Vec<(String, ColumnSummary)> {
    STAT_COLUMNS
        .iter()
        .filter_map(|&column| {
            let values: Vec<f64> = rows.iter().map(|r| column_value(r, column)).collect();
            ColumnSummary::from_values(&values).map(|s| (column.to_string(), s))
        })
        .collect()
}

fn column_value(row: &CustomerRow, column: &str) -> f64 {
    match column {
        "CreditScore" => row.credit_score as f64,
        "Age" => row.age as f64,
        "Tenure" => row.tenure as f64,
        "Balance" => row.balance,
        "NumOfProducts" => row.num_products as f64,
        "HasCrCard" => row.has_cr_card as f64,
        "IsActiveMember" => row.is_active_member as f64,
        "EstimatedSalary" => row.estimated_salary,
        _ => f64::NAN,
    }
}

/// Fixed-width table: one column per feature, one row per statistic
fn render_table(columns: &[(String, ColumnSummary)]) -> String {
    const CELL: usize = 16;
    const LABEL: usize = 6;

    let mut out = String::new();

    out.push_str(&format!("{:LABEL$}", ""));
    for (name, _) in columns {
        out.push_str(&format!("{:>CELL$}", name));
    }
    out.push('\n');

    for &stat in STAT_ROWS {
        out.push_str(&format!("{:LABEL$}", stat));
        for (_, summary) in columns {
            out.push_str(&format!("{:>CELL$.2}", summary.stat(stat)));
        }
        out.push('\n');
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================

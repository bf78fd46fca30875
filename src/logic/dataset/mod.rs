//! Dataset Module - Reference Customer Table
//!
//! Loads the churn reference CSV once at startup. The rows serve two
//! consumers: the customer selector of the presentation layer (id - surname
//! pairs, row lookup for edit defaults) and the population statistics
//! embedded into narrative prompts.
//!
//! A missing or malformed file is an initialization error; nothing here is
//! touched per request.

pub mod record;
pub mod stats;

pub use record::CustomerRow;
pub use stats::PopulationStats;

use serde::Serialize;
use std::path::Path;

// ============================================================================
// REFERENCE DATASET
// ============================================================================

/// In-memory copy of the reference table, read-only after load
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    rows: Vec<CustomerRow>,
}

/// One entry of the customer selector
#[derive(Debug, Clone, Serialize)]
pub struct CustomerChoice {
    pub customer_id: u64,
    pub surname: String,
}

impl ReferenceDataset {
    /// Load the reference CSV. Fatal on IO errors, malformed rows, or an
    /// empty table.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| DatasetError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut rows = Vec::new();
        for (index, result) in reader.deserialize::<CustomerRow>().enumerate() {
            let row = result.map_err(|e| DatasetError::Malformed {
                // +2: header line plus 1-based counting
                line: index + 2,
                message: e.to_string(),
            })?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(DatasetError::Empty {
                path: path.display().to_string(),
            });
        }

        log::info!("Reference dataset loaded: {} customers from {}", rows.len(), path.display());
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[CustomerRow] {
        &self.rows
    }

    /// Selector entries in file order
    pub fn choices(&self) -> Vec<CustomerChoice> {
        self.rows
            .iter()
            .map(|r| CustomerChoice {
                customer_id: r.customer_id,
                surname: r.surname.clone(),
            })
            .collect()
    }

    /// Look up a row by customer id
    pub fn find(&self, customer_id: u64) -> Option<&CustomerRow> {
        self.rows.iter().find(|r| r.customer_id == customer_id)
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone)]
pub enum DatasetError {
    Open { path: String, message: String },
    Malformed { line: usize, message: String },
    Empty { path: String },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Open { path, message } => {
                write!(f, "cannot open reference dataset {}: {}", path, message)
            }
            DatasetError::Malformed { line, message } => {
                write!(f, "malformed dataset row at line {}: {}", line, message)
            }
            DatasetError::Empty { path } => {
                write!(f, "reference dataset {} contains no rows", path)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    pub(crate) const HEADER: &str = "RowNumber,CustomerId,Surname,CreditScore,Geography,Gender,Age,Tenure,Balance,NumOfProducts,HasCrCard,IsActiveMember,EstimatedSalary,Exited";

    pub(crate) fn write_dataset(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_load_and_lookup() {
        let file = write_dataset(&[
            "1,15634602,Hargrave,619,France,Female,42,2,0.0,1,1,1,101348.88,1",
            "2,15647311,Hill,608,Spain,Female,41,1,83807.86,1,0,1,112542.58,0",
        ]);

        let dataset = ReferenceDataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);

        let row = dataset.find(15647311).unwrap();
        assert_eq!(row.surname, "Hill");
        assert_eq!(row.geography, "Spain");
        assert!(!row.has_churned());
        assert!(dataset.find(1).is_none());
    }

    #[test]
    fn test_choices_preserve_order() {
        let file = write_dataset(&[
            "1,10,Hargrave,619,France,Female,42,2,0.0,1,1,1,101348.88,1",
            "2,20,Hill,608,Spain,Female,41,1,83807.86,1,0,1,112542.58,0",
        ]);

        let dataset = ReferenceDataset::load(file.path()).unwrap();
        let choices = dataset.choices();
        assert_eq!(choices[0].customer_id, 10);
        assert_eq!(choices[1].surname, "Hill");
    }

    #[test]
    fn test_row_converts_to_record() {
        let file = write_dataset(&[
            "1,10,Hargrave,619,France,Female,42,2,0.0,1,1,1,101348.88,1",
        ]);

        let dataset = ReferenceDataset::load(file.path()).unwrap();
        let record = dataset.find(10).unwrap().to_customer_record();
        assert_eq!(record.credit_score, 619);
        assert!(record.has_credit_card);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_empty_dataset_is_error() {
        let file = write_dataset(&[]);
        assert!(matches!(
            ReferenceDataset::load(file.path()),
            Err(DatasetError::Empty { .. })
        ));
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let file = write_dataset(&[
            "1,10,Hargrave,619,France,Female,42,2,0.0,1,1,1,101348.88,1",
            "2,not-a-number,Hill,608,Spain,Female,41,1,83807.86,1,0,1,112542.58,0",
        ]);

        match ReferenceDataset::load(file.path()) {
            Err(DatasetError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(matches!(
            ReferenceDataset::load(Path::new("/nonexistent/churn.csv")),
            Err(DatasetError::Open { .. })
        ));
    }
}

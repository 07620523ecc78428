//! CSV loader for payroll adjustments
//!
//! Back-office users keep ad-hoc payments and deductions in a small CSV
//! next to the exported documents:
//!
//! ```csv
//! kind,label,amount
//! payment,diwali bonus,200
//! deduction,mess advance,50
//! ```

use std::path::Path;

use thiserror::Error;

use haulbook_domain::model::{AdditionalDeduction, AdditionalPayment};

#[derive(Error, Debug)]
pub enum AdjustmentsCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid amount in row {row}: {value}")]
    InvalidAmount { row: usize, value: String },

    #[error("Unknown adjustment kind in row {row}: {value} (expected payment or deduction)")]
    UnknownKind { row: usize, value: String },
}

/// Parsed adjustment file: payments and deductions in input order
#[derive(Debug, Default)]
pub struct Adjustments {
    pub payments: Vec<AdditionalPayment>,
    pub deductions: Vec<AdditionalDeduction>,
}

/// Load adjustments from a CSV file with a `kind,label,amount` header
pub fn load_adjustments<P: AsRef<Path>>(path: P) -> Result<Adjustments, AdjustmentsCsvError> {
    let content = std::fs::read_to_string(path)?;
    load_adjustments_from_str(&content)
}

/// Load adjustments from CSV text
pub fn load_adjustments_from_str(content: &str) -> Result<Adjustments, AdjustmentsCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut adjustments = Adjustments::default();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        let kind = record.get(0).unwrap_or("");
        let label = record.get(1).unwrap_or("").to_string();
        let amount_str = record.get(2).unwrap_or("");
        let amount: f64 =
            amount_str
                .parse()
                .map_err(|_| AdjustmentsCsvError::InvalidAmount {
                    row: row_num,
                    value: amount_str.to_string(),
                })?;

        match kind.to_lowercase().as_str() {
            "payment" => adjustments.payments.push(AdditionalPayment { label, amount }),
            "deduction" => adjustments
                .deductions
                .push(AdditionalDeduction { label, amount }),
            other => {
                return Err(AdjustmentsCsvError::UnknownKind {
                    row: row_num,
                    value: other.to_string(),
                })
            }
        }
    }

    Ok(adjustments)
}

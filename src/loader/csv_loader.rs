use std::path::PathBuf;

use csv::{ErrorKind, ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::loader::{DecodeError, TransactionSource};
use crate::models::Transaction;

const UNKNOWN_AGE: &str = "U";
const FRAUD_FLAG: &str = "1";

/// Raw CSV row as the reader hands it over, before field-level decoding.
///
/// Fields are matched to the file's header names; single-quote wrapping is
/// already stripped by the reader. Age, amount, and the fraud flag stay
/// strings here so their quirky encodings decode with row-numbered errors.
#[derive(Debug, Deserialize)]
struct RawRow {
    /// Simulation step from the source data, carried by the format but unused.
    #[serde(rename = "step")]
    _step: String,
    #[serde(rename = "customer")]
    customer_id: String,
    age: String,
    gender: String,
    #[serde(rename = "zipcodeOri")]
    zip_code_origin: String,
    #[serde(rename = "merchant")]
    merchant_id: String,
    #[serde(rename = "zipMerchant")]
    zip_code_merchant: String,
    category: String,
    amount: String,
    #[serde(rename = "fraud")]
    fraud_flag: String
}

impl RawRow {
    fn decode(self, row: u64) -> Result<Transaction, DecodeError> {
        Ok(Transaction {
            customer_id: self.customer_id,
            age: decode_age(&self.age, row)?,
            gender: decode_gender(&self.gender, row)?,
            zip_code_origin: self.zip_code_origin,
            merchant_id: self.merchant_id,
            zip_code_merchant: self.zip_code_merchant,
            category: self.category,
            amount: decode_amount(&self.amount, row)?,
            is_fraud: self.fraud_flag == FRAUD_FLAG
        })
    }
}

/// Decodes a header-plus-data CSV file of payment records.
///
/// Each data row carries 10 comma-separated fields, string fields wrapped
/// in single quotes: `[step, customerId, age, gender, zipCodeOrigin,
/// merchantId, zipCodeMerchant, category, amount, fraudFlag]`.
pub struct CsvLoader {
    path: PathBuf
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }
}

impl TransactionSource for CsvLoader {
    fn load(&self) -> Result<Vec<Transaction>, DecodeError> {
        let mut reader = ReaderBuilder::new()
            .quote(b'\'')
            .trim(Trim::All)
            .from_path(&self.path)?;

        let mut transactions = Vec::new();

        for (index, result) in reader.deserialize::<RawRow>().enumerate() {
            let raw = result.map_err(read_failure)?;
            transactions.push(raw.decode(index as u64 + 1)?);
        }

        debug!("Decoded {} transactions from {}", transactions.len(), self.path.display());

        Ok(transactions)
    }
}

/// A row whose length disagrees with the header surfaces as a reader-level
/// error before deserialization; report it as a field-count failure with
/// its row number instead of a generic read error.
fn read_failure(error: csv::Error) -> DecodeError {
    if let ErrorKind::UnequalLengths { pos, len, .. } = error.kind() {
        return DecodeError::WrongFieldCount {
            row: pos.as_ref().map_or(0, |position| position.record()),
            count: *len as usize
        };
    }

    DecodeError::Read(error)
}

fn decode_age(value: &str, row: u64) -> Result<u32, DecodeError> {
    if value == UNKNOWN_AGE {
        return Ok(0)
    }

    value.parse().map_err(|_| DecodeError::InvalidAge {
        row,
        value: value.to_string()
    })
}

fn decode_gender(value: &str, row: u64) -> Result<char, DecodeError> {
    let mut chars = value.chars();

    match (chars.next(), chars.next()) {
        (Some(code), None) => Ok(code),
        _ => Err(DecodeError::InvalidGender {
            row,
            value: value.to_string()
        })
    }
}

fn decode_amount(value: &str, row: u64) -> Result<f64, DecodeError> {
    let amount: f64 = value.parse().map_err(|_| DecodeError::InvalidAmount {
        row,
        value: value.to_string()
    })?;

    // Rejecting NaN here as well keeps the bitwise record equality honest.
    if !(amount >= 0.0) {
        return Err(DecodeError::InvalidAmount {
            row,
            value: value.to_string()
        })
    }

    Ok(amount)
}

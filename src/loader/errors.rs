use thiserror::Error;

/// Failure while decoding the input file into transaction records.
///
/// Decoding is all-or-nothing: the first bad row aborts the load and no
/// partial collection is returned. Row numbers are 1-based and count data
/// rows only (the header is row 0).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to read input: {0}")]
    Read(#[from] csv::Error),
    #[error("Expected 10 fields but found [{count}] on row [{row}]")]
    WrongFieldCount {
        row: u64,
        count: usize
    },
    #[error("Invalid age [{value}] on row [{row}]")]
    InvalidAge {
        row: u64,
        value: String
    },
    #[error("Invalid gender code [{value}] on row [{row}]")]
    InvalidGender {
        row: u64,
        value: String
    },
    #[error("Invalid amount [{value}] on row [{row}]")]
    InvalidAmount {
        row: u64,
        value: String
    }
}

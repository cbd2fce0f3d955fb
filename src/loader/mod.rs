mod csv_loader;
mod errors;

use crate::models::Transaction;

pub use csv_loader::CsvLoader;
pub use errors::DecodeError;

/// One-shot source of decoded transaction records.
///
/// The analytics layer never touches raw text itself; anything that can
/// produce a full record collection (a CSV file, a fixture in tests) sits
/// behind this trait.
pub trait TransactionSource {
    fn load(&self) -> Result<Vec<Transaction>, DecodeError>;
}

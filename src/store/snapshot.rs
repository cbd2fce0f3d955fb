use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::loader::{DecodeError, TransactionSource};
use crate::models::Transaction;

/// Running counts for one feature value, accumulated over the full record
/// collection in a single pass at snapshot construction.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Tally {
    /// Records carrying this feature value.
    pub total: u64,
    /// Fraudulent records carrying this feature value.
    pub fraud: u64
}

impl Tally {
    fn record(&mut self, is_fraud: bool) {
        self.total += 1;

        if is_fraud {
            self.fraud += 1;
        }
    }
}

/// Immutable in-memory record store.
///
/// Holds the full decoded collection plus per-feature tallies keyed by
/// customer id, age, gender, merchant id, category, and rounded-amount
/// bucket. The tallies are built once and let the risk scorer answer its
/// six conditional probabilities without rescanning the collection; query
/// results are identical to re-deriving everything from the records.
pub struct Snapshot {
    records: Vec<Transaction>,
    customers: HashMap<String, Tally>,
    ages: HashMap<u32, Tally>,
    genders: HashMap<char, Tally>,
    merchants: HashMap<String, Tally>,
    categories: HashMap<String, Tally>,
    amount_buckets: BTreeMap<i64, Tally>,
    /// Summed amount over fraudulent records per merchant; merchants with
    /// no fraud have no entry.
    merchant_fraud_amounts: HashMap<String, f64>
}

impl Snapshot {
    /// Builds a snapshot and its grouping tallies from an already decoded
    /// record collection. Input order is preserved.
    pub fn from_records(records: Vec<Transaction>) -> Self {
        let mut customers = HashMap::<String, Tally>::new();
        let mut ages = HashMap::<u32, Tally>::new();
        let mut genders = HashMap::<char, Tally>::new();
        let mut merchants = HashMap::<String, Tally>::new();
        let mut categories = HashMap::<String, Tally>::new();
        let mut amount_buckets = BTreeMap::<i64, Tally>::new();
        let mut merchant_fraud_amounts = HashMap::<String, f64>::new();

        for transaction in &records {
            customers.entry(transaction.customer_id.clone()).or_default().record(transaction.is_fraud);
            ages.entry(transaction.age).or_default().record(transaction.is_fraud);
            genders.entry(transaction.gender).or_default().record(transaction.is_fraud);
            merchants.entry(transaction.merchant_id.clone()).or_default().record(transaction.is_fraud);
            categories.entry(transaction.category.clone()).or_default().record(transaction.is_fraud);
            amount_buckets.entry(transaction.amount.round() as i64).or_default().record(transaction.is_fraud);

            if transaction.is_fraud {
                *merchant_fraud_amounts.entry(transaction.merchant_id.clone()).or_default() += transaction.amount;
            }
        }

        debug!(
            "Snapshot built: {} records, {} customers, {} merchants, {} categories",
            records.len(),
            customers.len(),
            merchants.len(),
            categories.len()
        );

        Self {
            records,
            customers,
            ages,
            genders,
            merchants,
            categories,
            amount_buckets,
            merchant_fraud_amounts
        }
    }

    /// Loads and decodes the full collection from the given source, then
    /// builds the snapshot.
    pub fn from_source(source: &impl TransactionSource) -> Result<Self, DecodeError> {
        Ok(Self::from_records(source.load()?))
    }

    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn customer_tally(&self, customer_id: &str) -> Tally {
        self.customers.get(customer_id).copied().unwrap_or_default()
    }

    pub(crate) fn age_tally(&self, age: u32) -> Tally {
        self.ages.get(&age).copied().unwrap_or_default()
    }

    pub(crate) fn gender_tally(&self, gender: char) -> Tally {
        self.genders.get(&gender).copied().unwrap_or_default()
    }

    pub(crate) fn merchant_tally(&self, merchant_id: &str) -> Tally {
        self.merchants.get(merchant_id).copied().unwrap_or_default()
    }

    pub(crate) fn category_tally(&self, category: &str) -> Tally {
        self.categories.get(category).copied().unwrap_or_default()
    }

    /// Combined tally over every rounded-amount bucket within `tolerance`
    /// currency units of `target`.
    pub(crate) fn amount_window_tally(&self, target: i64, tolerance: i64) -> Tally {
        let mut combined = Tally::default();

        for tally in self.amount_buckets.range(target - tolerance..=target + tolerance).map(|(_, tally)| tally) {
            combined.total += tally.total;
            combined.fraud += tally.fraud;
        }

        combined
    }

    pub(crate) fn customer_tallies(&self) -> &HashMap<String, Tally> {
        &self.customers
    }

    pub(crate) fn merchant_tallies(&self) -> &HashMap<String, Tally> {
        &self.merchants
    }

    pub(crate) fn merchant_fraud_amounts(&self) -> &HashMap<String, f64> {
        &self.merchant_fraud_amounts
    }
}

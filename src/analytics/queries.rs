use std::collections::{HashMap, HashSet};

use crate::analytics::Analytics;
use crate::models::Transaction;

impl Analytics {
    /// Distinct merchant ids across the whole collection.
    pub fn unique_merchant_ids(&self) -> HashSet<String> {
        self.snapshot().merchant_tallies().keys().cloned().collect()
    }

    /// Number of records flagged as fraudulent.
    pub fn count_fraudulent(&self) -> usize {
        self.count_by_fraud_flag(true)
    }

    /// Number of records whose fraud flag matches `is_fraud`.
    pub fn count_by_fraud_flag(&self, is_fraud: bool) -> usize {
        self.snapshot()
            .records()
            .iter()
            .filter(|transaction| transaction.is_fraud == is_fraud)
            .count()
    }

    /// Fraudulent records for the given merchant. Duplicate-by-value rows
    /// collapse in the returned set.
    pub fn fraudulent_transactions_for(&self, merchant_id: &str) -> HashSet<Transaction> {
        self.transactions_for(merchant_id, true)
    }

    /// Records for the given merchant whose fraud flag matches `is_fraud`.
    /// Duplicate-by-value rows collapse in the returned set.
    pub fn transactions_for(&self, merchant_id: &str, is_fraud: bool) -> HashSet<Transaction> {
        self.snapshot()
            .records()
            .iter()
            .filter(|transaction| transaction.merchant_id == merchant_id && transaction.is_fraud == is_fraud)
            .cloned()
            .collect()
    }

    /// All records sorted ascending by amount. The sort is stable, so
    /// records with equal amounts keep their original input order.
    pub fn sorted_by_amount(&self) -> Vec<Transaction> {
        let mut sorted = self.snapshot().records().to_vec();
        sorted.sort_by(|left, right| left.amount.total_cmp(&right.amount));
        sorted
    }

    /// Share of all fraudulent records committed by the given gender:
    /// count(gender and fraud) / count(fraud).
    ///
    /// Deliberately NOT the fraud rate within the gender; the historical
    /// contract divides by the total fraud count and is preserved as-is.
    /// Returns NaN when the collection contains no fraud at all.
    pub fn fraud_percentage_for_gender(&self, gender: char) -> f64 {
        let matching = self
            .snapshot()
            .records()
            .iter()
            .filter(|transaction| transaction.gender == gender && transaction.is_fraud)
            .count();

        matching as f64 / self.count_fraudulent() as f64
    }

    /// Customer ids with at least `threshold` fraudulent records. Customers
    /// with zero fraud never appear, even for a threshold of zero.
    pub fn customer_ids_with_fraud_count_at_least(&self, threshold: u64) -> HashSet<String> {
        self.snapshot()
            .customer_tallies()
            .iter()
            .filter(|(_, tally)| tally.fraud > 0 && tally.fraud >= threshold)
            .map(|(customer_id, _)| customer_id.clone())
            .collect()
    }

    /// Customer id to fraudulent-record count; only customers with at least
    /// one fraudulent record appear.
    pub fn customer_id_to_fraud_count(&self) -> HashMap<String, u64> {
        self.snapshot()
            .customer_tallies()
            .iter()
            .filter(|(_, tally)| tally.fraud > 0)
            .map(|(customer_id, tally)| (customer_id.clone(), tally.fraud))
            .collect()
    }

    /// Merchant id to summed amount over that merchant's fraudulent records;
    /// only merchants with at least one fraudulent record appear.
    pub fn merchant_id_to_total_fraud_amount(&self) -> HashMap<String, f64> {
        self.snapshot().merchant_fraud_amounts().clone()
    }
}

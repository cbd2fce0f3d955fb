use crate::analytics::Analytics;
use crate::models::Transaction;
use crate::store::Tally;

/// Width of the matching window around a rounded amount, in currency units.
const AMOUNT_TOLERANCE: i64 = 5;

impl Analytics {
    /// Naive fraud-risk estimate for a transaction, in `[0, 1]`.
    ///
    /// The score is the product of six conditional fraud probabilities,
    /// one per feature: customer id, age, gender, merchant id, category,
    /// and amount. Features are assumed independent; the product is a
    /// simplification, not a calibrated probability. Zip-code fields are
    /// excluded, being constant in the source data.
    ///
    /// Each factor is `fraud_count / total_count` over the records whose
    /// feature equals the transaction's — except amount, which matches
    /// within ±5 currency units of the rounded amount.
    ///
    /// Known quirk, preserved from the historical behavior: a feature
    /// value with zero observed fraud contributes a factor of **1**, not
    /// 0, so unseen values score as maximally risky instead of collapsing
    /// the product.
    pub fn risk_of_fraud(&self, transaction: &Transaction) -> f64 {
        let customer = conditional_fraud_probability(self.snapshot().customer_tally(&transaction.customer_id));
        let age = conditional_fraud_probability(self.snapshot().age_tally(transaction.age));
        let gender = conditional_fraud_probability(self.snapshot().gender_tally(transaction.gender));
        let merchant = conditional_fraud_probability(self.snapshot().merchant_tally(&transaction.merchant_id));
        let category = conditional_fraud_probability(self.snapshot().category_tally(&transaction.category));
        let amount = conditional_fraud_probability(
            self.snapshot().amount_window_tally(transaction.amount.round() as i64, AMOUNT_TOLERANCE)
        );

        customer * age * gender * merchant * category * amount
    }
}

fn conditional_fraud_probability(tally: Tally) -> f64 {
    if tally.fraud == 0 {
        return 1.0
    }

    tally.fraud as f64 / tally.total as f64
}

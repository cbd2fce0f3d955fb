use std::hash::{Hash, Hasher};

/// A single decoded payment record.
///
/// Records are value objects: equality and hashing cover every field, so
/// duplicate-by-value rows silently collapse when a query collects them
/// into a `HashSet`. The `amount` field is compared and hashed bitwise to
/// make that possible for an `f64`.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// The customer who made the payment.
    pub customer_id: String,
    /// Customer age in years; 0 when unknown in the source data.
    pub age: u32,
    /// Single-character gender code as present in the source data.
    pub gender: char,
    pub zip_code_origin: String,
    /// The merchant who received the payment.
    pub merchant_id: String,
    pub zip_code_merchant: String,
    /// Spending category label, e.g. `es_transportation`.
    pub category: String,
    /// Payment amount in currency units, always non-negative.
    pub amount: f64,
    /// Whether the record was flagged as fraudulent in the source data.
    pub is_fraud: bool,
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.customer_id == other.customer_id
            && self.age == other.age
            && self.gender == other.gender
            && self.zip_code_origin == other.zip_code_origin
            && self.merchant_id == other.merchant_id
            && self.zip_code_merchant == other.zip_code_merchant
            && self.category == other.category
            && self.amount.to_bits() == other.amount.to_bits()
            && self.is_fraud == other.is_fraud
    }
}

impl Eq for Transaction {}

impl Hash for Transaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.customer_id.hash(state);
        self.age.hash(state);
        self.gender.hash(state);
        self.zip_code_origin.hash(state);
        self.merchant_id.hash(state);
        self.zip_code_merchant.hash(state);
        self.category.hash(state);
        self.amount.to_bits().hash(state);
        self.is_fraud.hash(state);
    }
}

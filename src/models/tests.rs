use std::collections::HashSet;

use super::Transaction;

fn transaction(amount: f64) -> Transaction {
    Transaction {
        customer_id: "C1093826151".to_string(),
        age: 4,
        gender: 'M',
        zip_code_origin: "28007".to_string(),
        merchant_id: "M348934600".to_string(),
        zip_code_merchant: "28007".to_string(),
        category: "es_transportation".to_string(),
        amount,
        is_fraud: false
    }
}

#[test]
fn test_identical_records_are_equal_and_collapse_in_a_set() {
    let first = transaction(4.55);
    let second = transaction(4.55);

    assert_eq!(first, second);

    let set: HashSet<Transaction> = [first, second].into_iter().collect();

    assert_eq!(set.len(), 1);
}

#[test]
fn test_records_differing_only_by_amount_stay_distinct() {
    let set: HashSet<Transaction> = [transaction(4.55), transaction(4.56)].into_iter().collect();

    assert_eq!(set.len(), 2);
}

#[test]
fn test_records_differing_only_by_fraud_flag_stay_distinct() {
    let mut flagged = transaction(4.55);
    flagged.is_fraud = true;

    let set: HashSet<Transaction> = [transaction(4.55), flagged].into_iter().collect();

    assert_eq!(set.len(), 2);
}

#[test]
fn test_cloned_record_stays_equal_to_the_original() {
    let original = transaction(18.25);

    assert_eq!(original.clone(), original);
}

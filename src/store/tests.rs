use super::Snapshot;
use crate::models::Transaction;

fn transaction(customer_id: &str, age: u32, gender: char, merchant_id: &str, category: &str, amount: f64, is_fraud: bool) -> Transaction {
    Transaction {
        customer_id: customer_id.to_string(),
        age,
        gender,
        zip_code_origin: "28007".to_string(),
        merchant_id: merchant_id.to_string(),
        zip_code_merchant: "28007".to_string(),
        category: category.to_string(),
        amount,
        is_fraud
    }
}

#[test]
fn test_tallies_count_totals_and_fraud_per_feature_value() {
    let snapshot = Snapshot::from_records(vec![
        transaction("C1", 4, 'M', "M1", "es_transportation", 10.0, true),
        transaction("C1", 4, 'M', "M1", "es_transportation", 12.0, false),
        transaction("C2", 3, 'F', "M2", "es_health", 100.0, false)
    ]);

    let customer = snapshot.customer_tally("C1");

    assert_eq!(customer.total, 2);
    assert_eq!(customer.fraud, 1);

    let gender = snapshot.gender_tally('M');

    assert_eq!(gender.total, 2);
    assert_eq!(gender.fraud, 1);

    assert_eq!(snapshot.age_tally(3).total, 1);
    assert_eq!(snapshot.age_tally(3).fraud, 0);
    assert_eq!(snapshot.merchant_tally("M1").fraud, 1);
    assert_eq!(snapshot.merchant_tally("M2").fraud, 0);
    assert_eq!(snapshot.category_tally("es_transportation").total, 2);
}

#[test]
fn test_unseen_feature_values_tally_to_zero() {
    let snapshot = Snapshot::from_records(vec![
        transaction("C1", 4, 'M', "M1", "es_transportation", 10.0, true)
    ]);

    assert_eq!(snapshot.customer_tally("C9").total, 0);
    assert_eq!(snapshot.customer_tally("C9").fraud, 0);
    assert_eq!(snapshot.gender_tally('X').total, 0);
    assert_eq!(snapshot.age_tally(99).total, 0);
}

#[test]
fn test_merchant_fraud_amounts_cover_only_fraudulent_records() {
    let snapshot = Snapshot::from_records(vec![
        transaction("C1", 4, 'M', "M1", "es_transportation", 10.0, true),
        transaction("C2", 3, 'F', "M1", "es_transportation", 25.5, true),
        transaction("C2", 3, 'F', "M1", "es_transportation", 99.0, false),
        transaction("C3", 5, 'M', "M2", "es_health", 40.0, false)
    ]);

    let amounts = snapshot.merchant_fraud_amounts();

    assert!((amounts["M1"] - 35.5).abs() < 1e-9);
    assert!(!amounts.contains_key("M2"));
}

#[test]
fn test_amount_window_combines_nearby_rounded_buckets() {
    let snapshot = Snapshot::from_records(vec![
        transaction("C1", 4, 'M', "M1", "es_transportation", 10.2, true),
        transaction("C1", 4, 'M', "M1", "es_transportation", 12.0, false),
        transaction("C1", 4, 'M', "M1", "es_transportation", 15.4, false),
        transaction("C1", 4, 'M', "M1", "es_transportation", 16.0, false),
        transaction("C2", 3, 'F', "M2", "es_health", 100.0, true)
    ]);

    // Buckets 5..=15: rounded amounts 10, 12 and 15 fall inside, 16 and 100 do not.
    let window = snapshot.amount_window_tally(10, 5);

    assert_eq!(window.total, 3);
    assert_eq!(window.fraud, 1);

    let empty = snapshot.amount_window_tally(50, 5);

    assert_eq!(empty.total, 0);
    assert_eq!(empty.fraud, 0);
}

#[test]
fn test_records_preserve_input_order() {
    let snapshot = Snapshot::from_records(vec![
        transaction("C1", 4, 'M', "M1", "es_transportation", 10.0, false),
        transaction("C2", 3, 'F', "M2", "es_health", 5.0, false)
    ]);

    assert_eq!(snapshot.records()[0].customer_id, "C1");
    assert_eq!(snapshot.records()[1].customer_id, "C2");
}

#[test]
fn test_empty_snapshot() {
    let snapshot = Snapshot::from_records(Vec::new());

    assert!(snapshot.is_empty());
    assert_eq!(snapshot.len(), 0);
    assert_eq!(snapshot.amount_window_tally(0, 5).total, 0);
}

//! Behavioral tests for the transaction record through the public API.

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use payment_transactions::filter::{amount_above, for_merchant, in_currency};
use payment_transactions::{filter, process_payable, Payable, PaymentTransaction};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn jan_15() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

fn record(id: Option<&str>, amount: Option<Decimal>) -> PaymentTransaction {
    PaymentTransaction::new(id.map(str::to_string), amount, "USD", "M1", Some(jan_15()))
}

// ==================== FEE ====================

#[test]
fn test_fee_matches_round_half_up_formula() {
    let cases = [
        (dec!(250.00), 2.5, dec!(6.25)),
        (dec!(10), 12.5, dec!(1.25)),
        (dec!(10), 12.55, dec!(1.26)),
        (dec!(99.99), 3.0, dec!(3.00)),
        (dec!(0.01), 50.0, dec!(0.01)),
        (dec!(-10), 12.55, dec!(-1.26)),
        (dec!(1000000), 0.001, dec!(10.00)),
    ];

    for (amount, percentage, expected) in cases {
        let fee = record(Some("TX"), Some(amount)).calculate_fee(percentage);
        assert_eq!(fee, expected, "{} at {}%", amount, percentage);
        assert_eq!(fee.scale(), 2, "{} at {}%", amount, percentage);
    }
}

#[test]
fn test_fee_without_amount_is_zero_for_any_percentage() {
    let tx = record(Some("TX"), None);
    for percentage in [0.0, 2.5, -7.0, 250.0, f64::INFINITY] {
        assert_eq!(tx.calculate_fee(percentage), Decimal::ZERO);
    }
}

// ==================== PAYMENT ====================

#[test]
fn test_payment_eligibility_table() {
    assert!(record(Some("TX1"), Some(dec!(100.00))).process_payment());
    assert!(!record(Some("TX1"), Some(dec!(0))).process_payment());
    assert!(!record(Some("TX1"), Some(dec!(-5))).process_payment());
    assert!(!record(Some(""), Some(dec!(100.00))).process_payment());
    assert!(!record(None, Some(dec!(100.00))).process_payment());
    assert!(!record(None, None).process_payment());
}

#[test]
fn test_payment_smallest_positive_amount() {
    assert!(record(Some("TX1"), Some(dec!(0.0001))).process_payment());
}

#[test]
fn test_payment_through_capability() {
    let tx = record(Some("TX1"), Some(dec!(1)));
    let payable: &dyn Payable = &tx;
    assert!(process_payable(payable));
    assert!(process_payable(payable));
}

// ==================== DISPLAY ====================

#[test]
fn test_display_info_scenario() {
    let tx = record(Some("TX100"), Some(dec!(250.00)));
    let info = tx.display_info();

    assert_eq!(info.lines().count(), 5);
    assert!(info.contains("$250.00"));
    assert!(info.contains("2024-01-15 10:30:00"));
}

#[test]
fn test_display_info_invalid_currency_keeps_amount() {
    let mut tx = record(Some("TX1"), Some(dec!(250.00)));
    tx.set_currency("ZZZ");

    let info = tx.display_info();
    assert!(info.contains("250.00"));
    assert!(info.contains("Currency: ZZZ"));
}

#[test]
fn test_display_info_absent_amount_and_timestamp() {
    let tx = PaymentTransaction::new(Some("TX7".to_string()), None, "CHF", "M7", None);
    let lines: Vec<String> = tx.display_info().lines().map(str::to_string).collect();

    assert_eq!(lines[0], "Transaction ID: TX7");
    assert_eq!(lines[1], "Amount: N/A");
    assert_eq!(lines[2], "Currency: CHF");
    assert_eq!(lines[3], "Merchant ID: M7");
    assert_eq!(lines[4], "Timestamp: N/A");
}

#[test]
fn test_diagnostic_string_differs_from_display_info() {
    let tx = record(Some("TX100"), Some(dec!(1234.5)));
    let diagnostic = tx.to_string();

    assert!(diagnostic.contains("amount=1234.5"));
    assert!(diagnostic.contains("timestamp=2024-01-15 10:30:00"));
    assert!(tx.display_info().contains("$1,234.50"));
}

// ==================== MUTATION ====================

#[test]
fn test_mutations_are_never_stale() {
    let mut tx = record(Some("TX1"), None);
    assert_eq!(tx.calculate_fee(10.0), Decimal::ZERO);
    assert!(!tx.process_payment());
    assert!(tx.display_info().contains("Amount: N/A"));

    tx.set_amount(Some(dec!(80)));
    assert_eq!(tx.calculate_fee(10.0), dec!(8.00));
    assert!(tx.process_payment());
    assert!(tx.display_info().contains("Amount: $80.00"));

    tx.set_transaction_id(Some(String::new()));
    assert!(!tx.process_payment());

    tx.set_timestamp(None);
    assert!(tx.display_info().contains("Timestamp: N/A"));
}

// ==================== FILTER ====================

#[test]
fn test_filters_compose_over_batch() {
    let batch = vec![
        PaymentTransaction::new(Some("TXN-001".into()), Some(dec!(150)), "USD", "MERCH-123", None),
        PaymentTransaction::new(Some("TXN-002".into()), Some(dec!(50)), "EUR", "MERCH-456", None),
        PaymentTransaction::new(Some("TXN-003".into()), Some(dec!(250)), "USD", "MERCH-123", None),
        PaymentTransaction::new(Some("TXN-005".into()), Some(dec!(300)), "USD", "MERCH-456", None),
    ];

    let usd = filter(&batch, in_currency("USD"));
    let large_usd = filter(&usd, amount_above(dec!(200)));
    let merchant = filter(&large_usd, for_merchant("MERCH-456"));

    assert_eq!(usd.len(), 3);
    assert_eq!(large_usd.len(), 2);
    assert_eq!(merchant.len(), 1);
    assert_eq!(merchant[0].transaction_id(), Some("TXN-005"));
}

//! Selecting transactions by predicate.
//!
//! `filter` works over any slice; the predicate constructors below cover the
//! usual questions asked of a batch of transactions.

use crate::transaction::PaymentTransaction;
use log::debug;
use rust_decimal::Decimal;

/// Returns the items matching `predicate`, preserving their order.
///
/// # Examples
///
/// ```
/// use payment_transactions::filter::filter;
///
/// let evens = filter(&[1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let selected: Vec<T> = items.iter().filter(|item| predicate(*item)).cloned().collect();
    debug!("Filter kept {} of {} items", selected.len(), items.len());
    selected
}

/// Matches transactions whose amount is strictly greater than `threshold`.
/// Transactions without an amount never match.
pub fn amount_above(threshold: Decimal) -> impl Fn(&PaymentTransaction) -> bool {
    move |tx| tx.amount().is_some_and(|amount| amount > threshold)
}

/// Matches transactions carrying exactly the currency code `code`.
pub fn in_currency(code: &str) -> impl Fn(&PaymentTransaction) -> bool + '_ {
    move |tx| tx.currency() == code
}

/// Matches transactions for the merchant `merchant_id`.
pub fn for_merchant(merchant_id: &str) -> impl Fn(&PaymentTransaction) -> bool + '_ {
    move |tx| tx.merchant_id() == merchant_id
}

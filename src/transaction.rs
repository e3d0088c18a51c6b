//! The payment transaction record.

use crate::currency::CurrencyFormatter;
use crate::decimal::{fee_for, zero_fee};
use crate::payable::Payable;
use chrono::NaiveDateTime;
use log::info;
use rust_decimal::Decimal;
use std::fmt;

/// Pattern used for timestamps in `display_info`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder shown for an absent amount or timestamp in `display_info`.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rendering of an absent id, in `display_info` and in the diagnostic form.
const NULL: &str = "null";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// A single payment transaction.
///
/// Nothing is validated on construction or through the setters. Each
/// operation checks the fields it depends on when it runs:
///
/// - `process_payment` needs a positive amount and a non-empty id
/// - `display_info` tolerates unknown currency codes and absent values
/// - `calculate_fee` treats an absent amount as a zero fee
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentTransaction {
    transaction_id: Option<String>,
    amount: Option<Decimal>,
    currency: String,
    merchant_id: String,
    timestamp: Option<NaiveDateTime>,
}

impl PaymentTransaction {
    /// Creates a transaction from its five fields, stored as given.
    pub fn new(
        transaction_id: Option<String>,
        amount: Option<Decimal>,
        currency: impl Into<String>,
        merchant_id: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
    ) -> Self {
        PaymentTransaction {
            transaction_id,
            amount,
            currency: currency.into(),
            merchant_id: merchant_id.into(),
            timestamp,
        }
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn set_transaction_id(&mut self, transaction_id: Option<String>) {
        self.transaction_id = transaction_id;
    }

    pub fn amount(&self) -> Option<Decimal> {
        self.amount
    }

    pub fn set_amount(&mut self, amount: Option<Decimal>) {
        self.amount = amount;
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn set_merchant_id(&mut self, merchant_id: impl Into<String>) {
        self.merchant_id = merchant_id.into();
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: Option<NaiveDateTime>) {
        self.timestamp = timestamp;
    }

    /// Calculates the fee for `fee_percentage` percent of the amount.
    ///
    /// The result is rounded half-up to two decimal places. Any percentage
    /// is accepted, including negative values and values above 100. An
    /// absent amount yields `0.00`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payment_transactions::PaymentTransaction;
    /// use rust_decimal::Decimal;
    ///
    /// let tx = PaymentTransaction::new(
    ///     Some("TX1".to_string()),
    ///     Some(Decimal::from(10)),
    ///     "USD",
    ///     "M1",
    ///     None,
    /// );
    /// assert_eq!(tx.calculate_fee(12.55).to_string(), "1.26");
    /// ```
    pub fn calculate_fee(&self, fee_percentage: f64) -> Decimal {
        match self.amount {
            Some(amount) => fee_for(amount, fee_percentage),
            None => zero_fee(),
        }
    }

    /// Renders the five-line display block using the default formatter.
    pub fn display_info(&self) -> String {
        self.display_info_with(&CurrencyFormatter::default())
    }

    /// Renders the five-line display block.
    ///
    /// Lines are `Transaction ID`, `Amount`, `Currency`, `Merchant ID` and
    /// `Timestamp`, separated by the platform line ending. An absent amount
    /// or timestamp shows as `N/A`; an absent id shows as `null`.
    pub fn display_info_with(&self, formatter: &CurrencyFormatter) -> String {
        let amount = match self.amount {
            Some(amount) => formatter.format(amount, &self.currency),
            None => NOT_AVAILABLE.to_string(),
        };
        let timestamp = match self.timestamp {
            Some(timestamp) => timestamp.format(TIMESTAMP_FORMAT).to_string(),
            None => NOT_AVAILABLE.to_string(),
        };

        [
            format!(
                "Transaction ID: {}",
                self.transaction_id().unwrap_or(NULL)
            ),
            format!("Amount: {}", amount),
            format!("Currency: {}", self.currency),
            format!("Merchant ID: {}", self.merchant_id),
            format!("Timestamp: {}", timestamp),
        ]
        .join(LINE_ENDING)
    }
}

impl Payable for PaymentTransaction {
    /// Stub payment: checks eligibility and reports the payment.
    ///
    /// Returns `false` when the amount is absent or not positive, or when the
    /// id is absent or empty. No gateway is contacted and the record is left
    /// untouched, so repeated calls give the same answer.
    fn process_payment(&self) -> bool {
        match self.amount {
            Some(amount) if amount > Decimal::ZERO => {}
            _ => return false,
        }

        let transaction_id = match self.transaction_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return false,
        };

        info!("Processing payment: {}", transaction_id);
        true
    }
}

/// Writes an absent value as `null`.
struct OrNull<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str(NULL),
        }
    }
}

/// Diagnostic form with raw field values, e.g.
/// `PaymentTransaction{transaction_id='TX1', amount=250.00, ...}`.
impl fmt::Display for PaymentTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.transaction_id {
            Some(id) => write!(f, "PaymentTransaction{{transaction_id='{}'", id)?,
            None => write!(f, "PaymentTransaction{{transaction_id=null")?,
        }
        write!(
            f,
            ", amount={}, currency='{}', merchant_id='{}', timestamp={}}}",
            OrNull(&self.amount),
            self.currency,
            self.merchant_id,
            OrNull(&self.timestamp)
        )
    }
}

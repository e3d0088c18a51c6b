//! Loading transactions from CSV.
//!
//! Expected header: `transaction_id,amount,currency,merchant_id,timestamp`.
//! Empty cells become absent values; malformed rows are logged and skipped.

use crate::error::{Result, TransactionError};
use crate::transaction::{PaymentTransaction, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

/// Alternate timestamp layout accepted on input (ISO-8601 with `T`).
const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Raw transaction row as read from CSV.
///
/// Every column is optional so short rows still deserialize; the row is
/// turned into a `PaymentTransaction` by `parse`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransactionRow {
    pub transaction_id: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub merchant_id: Option<String>,
    pub timestamp: Option<String>,
}

impl TransactionRow {
    /// Converts the raw row into a transaction.
    ///
    /// Fails if a present amount or timestamp cannot be parsed. Missing
    /// currency or merchant columns become empty strings.
    pub fn parse(&self, row: usize) -> Result<PaymentTransaction> {
        let amount = match non_empty(&self.amount) {
            Some(raw) => Some(Decimal::from_str(raw).map_err(|e| {
                TransactionError::InvalidRecord {
                    row,
                    message: format!("amount {:?}: {}", raw, e),
                }
            })?),
            None => None,
        };

        let timestamp = match non_empty(&self.timestamp) {
            Some(raw) => Some(parse_timestamp(raw).ok_or_else(|| {
                TransactionError::InvalidRecord {
                    row,
                    message: format!("timestamp {:?} is not YYYY-MM-DD HH:MM:SS", raw),
                }
            })?),
            None => None,
        };

        Ok(PaymentTransaction::new(
            non_empty(&self.transaction_id).map(str::to_string),
            amount,
            self.currency.as_deref().unwrap_or_default(),
            self.merchant_id.as_deref().unwrap_or_default(),
            timestamp,
        ))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Parses `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, ISO_TIMESTAMP_FORMAT))
        .ok()
}

/// Reads all valid transactions from a CSV reader.
///
/// Invalid rows are logged at warn level and skipped.
pub fn load_transactions<R: Read>(reader: R) -> Result<Vec<PaymentTransaction>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for (row_idx, result) in csv_reader.deserialize::<TransactionRow>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row

        match result {
            Ok(record) => match record.parse(row_num) {
                Ok(tx) => {
                    debug!("Row {}: Loaded {}", row_num, tx);
                    transactions.push(tx);
                }
                Err(e) => warn!("{}", e),
            },
            Err(e) => {
                warn!("Row {}: CSV parse error: {}", row_num, e);
            }
        }
    }

    Ok(transactions)
}

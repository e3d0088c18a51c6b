//! Plain-text report of a batch of transactions.

use crate::currency::CurrencyFormatter;
use crate::error::Result;
use crate::payable::process_payable;
use crate::transaction::PaymentTransaction;
use log::debug;
use std::io::Write;

/// Writes one block per transaction followed by a summary line.
///
/// Each block holds the display info, the fee at `fee_percentage` and the
/// payment outcome, and is followed by a blank line:
///
/// ```text
/// Transaction ID: TX100
/// Amount: $250.00
/// Currency: USD
/// Merchant ID: M1
/// Timestamp: 2024-01-15 10:30:00
/// Fee (2.5%): 6.25
/// Payment: processed
///
/// Processed 1 of 1 payments
/// ```
pub fn write_report<W: Write>(
    mut writer: W,
    transactions: &[PaymentTransaction],
    fee_percentage: f64,
    formatter: &CurrencyFormatter,
) -> Result<()> {
    let mut processed = 0usize;

    for tx in transactions {
        let paid = process_payable(tx);
        if paid {
            processed += 1;
        } else {
            debug!("Payment rejected for {}", tx);
        }

        writeln!(writer, "{}", tx.display_info_with(formatter))?;
        writeln!(
            writer,
            "Fee ({}%): {}",
            fee_percentage,
            tx.calculate_fee(fee_percentage)
        )?;
        writeln!(
            writer,
            "Payment: {}",
            if paid { "processed" } else { "rejected" }
        )?;
        writeln!(writer)?;
    }

    writeln!(
        writer,
        "Processed {} of {} payments",
        processed,
        transactions.len()
    )?;
    writer.flush()?;
    Ok(())
}

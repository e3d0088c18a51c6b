//! Payment Transactions CLI
//!
//! Loads transactions from CSV and prints, for each one, its display info,
//! the fee and whether the payment went through.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv 2.5
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` to see processed payments, `debug` for more
//! - `PAYMENTS_DEFAULT_CURRENCY`: Currency used for unrecognized codes (default `USD`)

use log::warn;
use payment_transactions::{
    load_transactions, write_report, Currency, CurrencyFormatter, Result, TransactionError,
};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

const DEFAULT_FEE_PERCENTAGE: f64 = 2.5;
const DEFAULT_CURRENCY_VAR: &str = "PAYMENTS_DEFAULT_CURRENCY";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(TransactionError::MissingArgument);
    }

    let input_path = &args[1];
    let fee_percentage = match args.get(2) {
        Some(raw) => parse_fee(raw)?,
        None => DEFAULT_FEE_PERCENTAGE,
    };

    let file = File::open(input_path)?;
    let transactions = load_transactions(BufReader::new(file))?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    write_report(handle, &transactions, fee_percentage, &formatter_from_env())?;

    Ok(())
}

fn parse_fee(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|fee| fee.is_finite())
        .ok_or_else(|| TransactionError::InvalidArgument {
            name: "fee_percentage",
            value: raw.to_string(),
        })
}

fn formatter_from_env() -> CurrencyFormatter {
    match env::var(DEFAULT_CURRENCY_VAR) {
        Ok(code) => match code.parse::<Currency>() {
            Ok(currency) => CurrencyFormatter::new(currency),
            Err(e) => {
                warn!("{}: {}, using USD", DEFAULT_CURRENCY_VAR, e);
                CurrencyFormatter::default()
            }
        },
        Err(_) => CurrencyFormatter::default(),
    }
}

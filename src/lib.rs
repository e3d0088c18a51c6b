//! # Payment Transactions
//!
//! A single payment transaction record with fee calculation, localized
//! display and a stubbed payment check.
//!
//! ## Design Principles
//!
//! - **Decimal arithmetic**: fees are computed with `rust_decimal` and
//!   rounded half-up to 2 decimal places
//! - **Lazy validation**: records accept any field values; each operation
//!   checks only what it needs and degrades to a safe default
//! - **Narrow capability**: payment is exposed through the one-method
//!   `Payable` trait
//!
//! ## Example
//!
//! ```
//! use payment_transactions::{Payable, PaymentTransaction};
//! use rust_decimal::Decimal;
//!
//! let tx = PaymentTransaction::new(
//!     Some("TX100".to_string()),
//!     Some(Decimal::new(25000, 2)),
//!     "USD",
//!     "M1",
//!     None,
//! );
//! assert_eq!(tx.calculate_fee(2.5).to_string(), "6.25");
//! assert!(tx.process_payment());
//! println!("{}", tx.display_info());
//! ```

pub mod currency;
pub mod decimal;
pub mod error;
pub mod filter;
pub mod loader;
pub mod payable;
pub mod report;
pub mod transaction;

pub use currency::{Currency, CurrencyFormatter};
pub use error::{CurrencyError, Result, TransactionError};
pub use filter::filter;
pub use loader::load_transactions;
pub use payable::{process_payable, Payable};
pub use report::write_report;
pub use transaction::PaymentTransaction;

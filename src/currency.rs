//! ISO-4217 currency table and localized amount formatting.
//!
//! Formatting follows en-US conventions: the currency symbol precedes the
//! digits, the integer part is grouped by thousands with `,`, and the amount
//! is rounded to the currency's minor units with banker's rounding.

use crate::error::CurrencyError;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// An ISO-4217 currency known to the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    symbol: &'static str,
    minor_units: u32,
}

/// A currency displayed by its code, e.g. `PKR100.00`.
const fn iso(code: &'static str, minor_units: u32) -> Currency {
    currency(code, code, minor_units)
}

const fn currency(code: &'static str, symbol: &'static str, minor_units: u32) -> Currency {
    Currency {
        code,
        symbol,
        minor_units,
    }
}

/// The ISO-4217 registry. Symbols are the en-US display forms; currencies
/// without one display their code. Codes without minor units in the
/// registry (precious metals, testing codes) use 2 digits.
const CURRENCIES: &[Currency] = &[
    iso("AED", 2),
    iso("AFN", 2),
    iso("ALL", 2),
    iso("AMD", 2),
    iso("ANG", 2),
    iso("AOA", 2),
    iso("ARS", 2),
    currency("AUD", "A$", 2),
    iso("AWG", 2),
    iso("AZN", 2),
    iso("BAM", 2),
    iso("BBD", 2),
    iso("BDT", 2),
    iso("BGN", 2),
    iso("BHD", 3),
    iso("BIF", 0),
    iso("BMD", 2),
    iso("BND", 2),
    iso("BOB", 2),
    iso("BOV", 2),
    currency("BRL", "R$", 2),
    iso("BSD", 2),
    iso("BTN", 2),
    iso("BWP", 2),
    iso("BYN", 2),
    iso("BZD", 2),
    currency("CAD", "CA$", 2),
    iso("CDF", 2),
    iso("CHE", 2),
    iso("CHF", 2),
    iso("CHW", 2),
    iso("CLF", 4),
    iso("CLP", 0),
    currency("CNY", "CN¥", 2),
    iso("COP", 2),
    iso("COU", 2),
    iso("CRC", 2),
    iso("CUC", 2),
    iso("CUP", 2),
    iso("CVE", 2),
    iso("CZK", 2),
    iso("DJF", 0),
    iso("DKK", 2),
    iso("DOP", 2),
    iso("DZD", 2),
    iso("EGP", 2),
    iso("ERN", 2),
    iso("ETB", 2),
    currency("EUR", "€", 2),
    iso("FJD", 2),
    iso("FKP", 2),
    currency("GBP", "£", 2),
    iso("GEL", 2),
    iso("GHS", 2),
    iso("GIP", 2),
    iso("GMD", 2),
    iso("GNF", 0),
    iso("GTQ", 2),
    iso("GYD", 2),
    currency("HKD", "HK$", 2),
    iso("HNL", 2),
    iso("HRK", 2),
    iso("HTG", 2),
    iso("HUF", 2),
    iso("IDR", 2),
    currency("ILS", "₪", 2),
    currency("INR", "₹", 2),
    iso("IQD", 3),
    iso("IRR", 2),
    iso("ISK", 0),
    iso("JMD", 2),
    iso("JOD", 3),
    currency("JPY", "¥", 0),
    iso("KES", 2),
    iso("KGS", 2),
    iso("KHR", 2),
    iso("KMF", 0),
    iso("KPW", 2),
    currency("KRW", "₩", 0),
    iso("KWD", 3),
    iso("KYD", 2),
    iso("KZT", 2),
    iso("LAK", 2),
    iso("LBP", 2),
    iso("LKR", 2),
    iso("LRD", 2),
    iso("LSL", 2),
    iso("LYD", 3),
    iso("MAD", 2),
    iso("MDL", 2),
    iso("MGA", 2),
    iso("MKD", 2),
    iso("MMK", 2),
    iso("MNT", 2),
    iso("MOP", 2),
    iso("MRU", 2),
    iso("MUR", 2),
    iso("MVR", 2),
    iso("MWK", 2),
    currency("MXN", "MX$", 2),
    iso("MXV", 2),
    iso("MYR", 2),
    iso("MZN", 2),
    iso("NAD", 2),
    iso("NGN", 2),
    iso("NIO", 2),
    iso("NOK", 2),
    iso("NPR", 2),
    currency("NZD", "NZ$", 2),
    iso("OMR", 3),
    iso("PAB", 2),
    iso("PEN", 2),
    iso("PGK", 2),
    currency("PHP", "₱", 2),
    iso("PKR", 2),
    iso("PLN", 2),
    iso("PYG", 0),
    iso("QAR", 2),
    iso("RON", 2),
    iso("RSD", 2),
    iso("RUB", 2),
    iso("RWF", 0),
    iso("SAR", 2),
    iso("SBD", 2),
    iso("SCR", 2),
    iso("SDG", 2),
    iso("SEK", 2),
    iso("SGD", 2),
    iso("SHP", 2),
    iso("SLE", 2),
    iso("SLL", 2),
    iso("SOS", 2),
    iso("SRD", 2),
    iso("SSP", 2),
    iso("STN", 2),
    iso("SVC", 2),
    iso("SYP", 2),
    iso("SZL", 2),
    iso("THB", 2),
    iso("TJS", 2),
    iso("TMT", 2),
    iso("TND", 3),
    iso("TOP", 2),
    iso("TRY", 2),
    iso("TTD", 2),
    currency("TWD", "NT$", 2),
    iso("TZS", 2),
    iso("UAH", 2),
    iso("UGX", 0),
    currency("USD", "$", 2),
    iso("USN", 2),
    iso("UYI", 0),
    iso("UYU", 2),
    iso("UYW", 4),
    iso("UZS", 2),
    iso("VED", 2),
    iso("VES", 2),
    currency("VND", "₫", 0),
    iso("VUV", 0),
    iso("WST", 2),
    currency("XAF", "FCFA", 0),
    iso("XAG", 2),
    iso("XAU", 2),
    iso("XBA", 2),
    iso("XBB", 2),
    iso("XBC", 2),
    iso("XBD", 2),
    currency("XCD", "EC$", 2),
    iso("XCG", 2),
    iso("XDR", 2),
    currency("XOF", "F CFA", 0),
    iso("XPD", 2),
    currency("XPF", "CFPF", 0),
    iso("XPT", 2),
    iso("XSU", 2),
    iso("XTS", 2),
    iso("XUA", 2),
    iso("XXX", 2),
    iso("YER", 2),
    iso("ZAR", 2),
    iso("ZMW", 2),
    iso("ZWG", 2),
    iso("ZWL", 2),
];

impl Currency {
    /// US Dollar, the ambient currency of the default formatter.
    pub const USD: Currency = currency("USD", "$", 2);

    /// Looks up a currency by its exact, upper-case ISO-4217 code.
    pub fn from_code(code: &str) -> Option<Currency> {
        CURRENCIES.iter().copied().find(|c| c.code == code)
    }

    /// The three-letter ISO-4217 code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The en-US display symbol.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Number of fractional digits used when displaying amounts.
    pub fn minor_units(&self) -> u32 {
        self.minor_units
    }

    /// Formats `amount` in this currency, e.g. `-$1,234.50`.
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded =
            amount.round_dp_with_strategy(self.minor_units, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(self.minor_units);

        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = rounded.abs().to_string();
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push_str(&group_thousands(integer));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| CurrencyError::Unknown(s.to_string()))
    }
}

/// Inserts `,` between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats amounts for a currency code, degrading to a fallback currency
/// when the code is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    fallback: Currency,
}

impl CurrencyFormatter {
    /// Creates a formatter that uses `fallback` for unrecognized codes.
    pub fn new(fallback: Currency) -> Self {
        CurrencyFormatter { fallback }
    }

    /// The currency used for unrecognized codes.
    pub fn fallback(&self) -> Currency {
        self.fallback
    }

    /// Formats `amount` using the currency named by `code`.
    ///
    /// An unknown code never fails: the amount is rendered in the fallback
    /// currency instead.
    pub fn format(&self, amount: Decimal, code: &str) -> String {
        let currency = match Currency::from_code(code) {
            Some(currency) => currency,
            None => {
                debug!(
                    "Unknown currency code {:?}, formatting in {}",
                    code, self.fallback
                );
                self.fallback
            }
        };
        currency.format(amount)
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

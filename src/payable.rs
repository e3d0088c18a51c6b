//! The payable capability.

use log::debug;

/// Anything that can attempt a payment and report whether it went through.
///
/// Ineligibility is signalled through the return value only; implementors
/// never panic or return errors for invalid state.
pub trait Payable {
    /// Attempts the payment, returning `true` on success.
    fn process_payment(&self) -> bool;
}

/// Runs the payment for any payable entity.
pub fn process_payable(payable: &dyn Payable) -> bool {
    debug!("Starting payment processing...");
    payable.process_payment()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Invoice {
        paid: bool,
        attempts: Cell<u32>,
    }

    impl Payable for Invoice {
        fn process_payment(&self) -> bool {
            self.attempts.set(self.attempts.get() + 1);
            self.paid
        }
    }

    #[test]
    fn test_process_payable_delegates() {
        let invoice = Invoice {
            paid: true,
            attempts: Cell::new(0),
        };
        assert!(process_payable(&invoice));
        assert_eq!(invoice.attempts.get(), 1);
    }

    #[test]
    fn test_process_payable_over_mixed_entities() {
        let paid = Invoice {
            paid: true,
            attempts: Cell::new(0),
        };
        let unpaid = Invoice {
            paid: false,
            attempts: Cell::new(0),
        };
        let payables: Vec<&dyn Payable> = vec![&paid, &unpaid];

        let results: Vec<bool> = payables.into_iter().map(process_payable).collect();
        assert_eq!(results, vec![true, false]);
    }
}

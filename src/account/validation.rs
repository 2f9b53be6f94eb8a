//! Balance invariant checks
//!
//! The overdraft rule lives here so it is defined and tested exactly once.

use rust_decimal::Decimal;

/// Whether `amount` can be debited from `balance` without going negative.
///
/// Pure function: `balance - amount >= 0`.
pub fn can_debit(balance: Decimal, amount: Decimal) -> bool {
    balance - amount >= Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_can_debit_with_funds() {
        assert!(can_debit(dec("500.00"), dec("125.00")));
        assert!(can_debit(dec("0.00000001"), dec("0.00000001")));
    }

    #[test]
    fn test_can_debit_exact_balance() {
        // Draining the account to exactly zero is allowed
        assert!(can_debit(dec("100.00"), dec("100.00")));
    }

    #[test]
    fn test_cannot_overdraft() {
        assert!(!can_debit(dec("100.00"), dec("125.00")));
        assert!(!can_debit(Decimal::ZERO, dec("0.00000001")));
    }

    #[test]
    fn test_fractional_cent_precision() {
        // Decimal comparison is exact, no float rounding
        assert!(can_debit(dec("1.00000002"), dec("1.00000001")));
        assert!(!can_debit(dec("1.00000001"), dec("1.00000002")));
    }
}

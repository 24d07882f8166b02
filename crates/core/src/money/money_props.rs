//! Property-based tests for money arithmetic and text round-trips.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::Money;
use crate::currency::{CurrencyInfo, CurrencyRegistry};
use crate::error::CurrencyError;
use crate::locale::Locale;

/// Strategy to pick any registered currency.
fn any_currency() -> impl Strategy<Value = CurrencyInfo> {
    let all: Vec<_> = CurrencyRegistry::global().currencies().collect();
    prop::sample::select(all)
}

/// Strategy to generate amounts with up to 4 decimals.
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate non-negative amounts with up to 4 decimals.
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding, subtracting or comparing different currencies always fails
    /// with a currency mismatch.
    #[test]
    fn prop_currency_mismatch_guard(
        a in any_currency(),
        b in any_currency(),
        x in amount(),
        y in amount(),
    ) {
        prop_assume!(a != b);
        let left = Money::new(a, x);
        let right = Money::new(b, y);
        let is_mismatch = |e: CurrencyError| matches!(e, CurrencyError::CurrencyMismatch { .. });

        prop_assert!(left.checked_add(&right).is_err_and(is_mismatch));
        prop_assert!(left.checked_sub(&right).is_err_and(is_mismatch));
        prop_assert!(left.compare(&right).is_err_and(is_mismatch));
        prop_assert_eq!(left.partial_cmp(&right), None);
    }

    /// Same-currency addition and subtraction are inverse.
    #[test]
    fn prop_add_then_sub(currency in any_currency(), x in amount(), y in amount()) {
        let left = Money::new(currency, x);
        let right = Money::new(currency, y);
        let sum = left.checked_add(&right).unwrap();
        prop_assert_eq!(sum.checked_sub(&right).unwrap(), left);
        prop_assert_eq!(sum.currency(), currency);
    }

    /// Negation is an involution and keeps the currency.
    #[test]
    fn prop_negate_twice(currency in any_currency(), x in amount()) {
        let money = Money::new(currency, x);
        prop_assert_eq!(-(-money), money);
        prop_assert_eq!(money.negate().currency(), currency);
    }

    /// format(parse(format(m))) == format(m) under the code format.
    #[test]
    fn prop_code_format_round_trip(currency in any_currency(), x in non_negative_amount()) {
        let format = Locale::find("en-US").unwrap().number_format();
        let money = Money::new(currency, x);

        let text = money.format_with(Some("I"), &format).unwrap();
        let parsed = Money::parse_with(&text, None, &format).unwrap();
        prop_assert_eq!(parsed.currency(), currency);
        prop_assert_eq!(parsed.format_with(Some("I"), &format).unwrap(), text);
    }

    /// Parsing a code-prefixed literal recovers the exact amount.
    #[test]
    fn prop_parse_exact_amount(currency in any_currency(), x in amount()) {
        let format = Locale::find("en-US").unwrap().number_format();
        let text = format!("{} {}", currency.code(), x);
        prop_assert_eq!(Money::parse_with(&text, None, &format).unwrap(), Money::new(currency, x));
    }
}

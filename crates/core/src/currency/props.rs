//! Property-based tests for currency lookup, ordering and conversion.

use std::cmp::Ordering;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{convert_amount, round_amount};
use super::{CurrencyInfo, CurrencyRegistry, ExchangeRate};
use crate::money::Money;

/// Strategy to pick any registered currency.
fn any_currency() -> impl Strategy<Value = CurrencyInfo> {
    let all: Vec<_> = CurrencyRegistry::global().currencies().collect();
    prop::sample::select(all)
}

/// Strategy to pick two different currencies.
fn currency_pair() -> impl Strategy<Value = (CurrencyInfo, CurrencyInfo)> {
    (any_currency(), any_currency()).prop_filter("distinct currencies", |(a, b)| a != b)
}

/// Strategy to generate amounts from -1,000,000.00 to 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Randomises the letter case of a code.
fn mixed_case(code: &str, mask: u8) -> String {
    code.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << i) == 0 {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Lookup round-trip
    // =========================================================================

    /// Resolving a registered code in any letter case yields the canonical
    /// uppercase code.
    #[test]
    fn prop_code_round_trip(currency in any_currency(), mask in 0u8..8) {
        let resolved = CurrencyInfo::from_code(&mixed_case(currency.code(), mask)).unwrap();
        prop_assert_eq!(resolved.code(), currency.code());
        prop_assert_eq!(CurrencyInfo::from_numeric(currency.numeric()).unwrap(), currency);
    }

    // =========================================================================
    // Ordering totality
    // =========================================================================

    /// Ordering agrees with ASCII case-insensitive code comparison and is
    /// reflexive and antisymmetric.
    #[test]
    fn prop_ordering_matches_codes((a, b) in (any_currency(), any_currency())) {
        let expected = a.code().to_ascii_uppercase().cmp(&b.code().to_ascii_uppercase());
        prop_assert_eq!(a.compare_to(Some(&b)), expected);
        prop_assert_eq!(b.compare_to(Some(&a)), expected.reverse());
        prop_assert_eq!(a.compare_to(Some(&a)), Ordering::Equal);
        prop_assert_eq!(a == b, expected == Ordering::Equal);
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converting there and back recovers the amount within one minor unit of
    /// each currency scaled by the rate.
    #[test]
    fn prop_conversion_inverse(
        (base, quote) in currency_pair(),
        n in amount(),
        rate in positive_rate(),
    ) {
        let exchange = ExchangeRate::new(base, quote, rate).unwrap();
        let original = Money::new(base, n);
        let there = exchange.convert(&original).unwrap();
        let back = exchange.convert(&there).unwrap();

        prop_assert_eq!(there.currency(), quote);
        prop_assert_eq!(back.currency(), base);

        let tolerance = quote.minor_unit() / rate + base.minor_unit();
        let error = (back.amount() - round_amount(n, base.decimal_digits())).abs();
        prop_assert!(
            error <= tolerance,
            "{} -> {} -> {} exceeds {}",
            original.amount(), there.amount(), back.amount(), tolerance
        );
    }

    /// Conversion output never has more digits than the target currency.
    #[test]
    fn prop_conversion_rounds_to_target_digits(
        (base, quote) in currency_pair(),
        n in amount(),
        rate in positive_rate(),
    ) {
        let converted = ExchangeRate::new(base, quote, rate).unwrap()
            .convert(&Money::new(base, n))
            .unwrap();
        let digits = quote.decimal_digits();
        prop_assert_eq!(round_amount(converted.amount(), digits), converted.amount());
    }

    /// Rounding is deterministic and a rate of one only rounds.
    #[test]
    fn prop_unit_rate_preserves_amount(n in amount(), digits in 0u32..=4) {
        prop_assert_eq!(convert_amount(n, Decimal::ONE, digits), Some(round_amount(n, digits)));
    }

    /// Display and parse round-trip for exchange rates.
    #[test]
    fn prop_exchange_rate_text_round_trip((base, quote) in currency_pair(), rate in positive_rate()) {
        let exchange = ExchangeRate::new(base, quote, rate).unwrap();
        prop_assert_eq!(ExchangeRate::parse(&exchange.to_string()).unwrap(), exchange);
    }
}

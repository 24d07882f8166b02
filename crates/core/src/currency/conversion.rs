//! Currency conversion arithmetic.
//!
//! Every result is rounded to the target currency's decimal digits with
//! banker's rounding (round half to even).

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Rounds to `decimal_places` with banker's rounding.
#[must_use]
pub fn round_amount(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// `amount * rate`, rounded. `None` on overflow.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Option<Decimal> {
    amount
        .checked_mul(rate)
        .map(|converted| round_amount(converted, decimal_places))
}

/// `amount / rate`, rounded. `None` for a zero rate or on overflow.
#[must_use]
pub fn invert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Option<Decimal> {
    amount
        .checked_div(rate)
        .map(|converted| round_amount(converted, decimal_places))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_amount() {
        // 100 USD * 15000 = 1,500,000 IDR
        assert_eq!(convert_amount(dec!(100), dec!(15000), 0), Some(dec!(1500000)));
    }

    #[test]
    fn test_convert_with_rounding() {
        // 100.50 USD * 15000.5 = 1,507,550.25 IDR -> rounds to 1,507,550
        assert_eq!(convert_amount(dec!(100.50), dec!(15000.5), 0), Some(dec!(1507550)));
    }

    #[test]
    fn test_bankers_rounding() {
        // 2.5 rounds to 2, 3.5 rounds to 4
        assert_eq!(convert_amount(dec!(1), dec!(2.5), 0), Some(dec!(2)));
        assert_eq!(convert_amount(dec!(1), dec!(3.5), 0), Some(dec!(4)));
        assert_eq!(round_amount(dec!(2.25), 1), dec!(2.2));
        assert_eq!(round_amount(dec!(2.35), 1), dec!(2.4));
    }

    #[test]
    fn test_usd_cny_examples() {
        let rate = dec!(7.0074);
        assert_eq!(convert_amount(dec!(1), rate, 2), Some(dec!(7.01)));
        assert_eq!(convert_amount(dec!(2), rate, 2), Some(dec!(14.01)));
        assert_eq!(convert_amount(dec!(99), rate, 2), Some(dec!(693.73)));
        assert_eq!(invert_amount(dec!(1), rate, 2), Some(dec!(0.14)));
        assert_eq!(invert_amount(dec!(2), rate, 2), Some(dec!(0.29)));
        assert_eq!(invert_amount(dec!(99), rate, 2), Some(dec!(14.13)));
    }

    #[test]
    fn test_overflow_and_zero_rate() {
        assert_eq!(convert_amount(Decimal::MAX, dec!(2), 2), None);
        assert_eq!(invert_amount(dec!(1), Decimal::ZERO, 2), None);
    }
}

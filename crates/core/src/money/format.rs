//! Rendering money as text.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::Money;
use crate::currency::conversion::round_amount;
use crate::error::{CurrencyError, CurrencyResult};
use crate::locale::{self, NumberFormat, build_number_format, pattern};

const MAX_PRECISION: u32 = 28;

/// A money format specifier.
///
/// | Spec     | Output                                    |
/// |----------|-------------------------------------------|
/// | `C[d]`   | currency symbol, locale patterns          |
/// | `I[d]`   | ISO code, code-style patterns             |
/// | `N[d]`   | grouped number, no currency               |
/// | `F[d]`   | ungrouped number, no currency             |
/// | `G`      | the stored amount, unrounded              |
///
/// `d` overrides the number of digits. `I` is case-sensitive and takes at
/// most one digit; the rest ignore case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyFormat {
    /// Symbol-based currency format.
    Currency(Option<u32>),
    /// Code-based currency format.
    Code(Option<u32>),
    /// Grouped number.
    Number(Option<u32>),
    /// Fixed-point number.
    Fixed(Option<u32>),
    /// Raw stored amount.
    General,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::Currency(None)
    }
}

impl FromStr for MoneyFormat {
    type Err = CurrencyError;

    /// Parses a specifier; empty input is the default `C`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = || CurrencyError::format(spec, "money format");

        let mut chars = spec.chars();
        let Some(kind) = chars.next() else {
            return Ok(Self::default());
        };
        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else if digits.len() <= 2 && digits.bytes().all(|b| b.is_ascii_digit()) {
            let value: u32 = digits.parse().map_err(|_| invalid())?;
            if value > MAX_PRECISION {
                return Err(invalid());
            }
            Some(value)
        } else {
            return Err(invalid());
        };

        match kind {
            'C' | 'c' => Ok(Self::Currency(precision)),
            'I' if spec.len() <= 2 => Ok(Self::Code(precision)),
            'N' | 'n' => Ok(Self::Number(precision)),
            'F' | 'f' => Ok(Self::Fixed(precision)),
            'G' | 'g' if precision.is_none() => Ok(Self::General),
            _ => Err(invalid()),
        }
    }
}

/// Rounds half-to-even and pads to exactly `digits` places.
///
/// Returns the sign of the rounded value and its unsigned digits.
/// The padding is textual: a `Decimal` near its 96-bit limit cannot hold
/// the extra scale.
fn fixed_digits(amount: Decimal, digits: u32) -> (bool, String) {
    let rounded = round_amount(amount, digits);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut text = rounded.abs().to_string();
    let written = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    let missing = usize::try_from(digits).unwrap_or(usize::MAX).saturating_sub(written);
    if missing > 0 {
        if written == 0 {
            text.push('.');
        }
        text.extend(std::iter::repeat_n('0', missing));
    }
    (negative, text)
}

impl Money {
    /// Formats with `spec` (default `C`) using the ambient locale.
    ///
    /// # Errors
    ///
    /// `Format` for an unknown specifier.
    pub fn format(&self, spec: Option<&str>) -> CurrencyResult<String> {
        self.format_with(spec, locale::ambient().number_format())
    }

    /// Formats with `spec` (default `C`) using `base` for separators and
    /// placement patterns.
    ///
    /// # Errors
    ///
    /// `Format` for an unknown specifier.
    pub fn format_with(&self, spec: Option<&str>, base: &NumberFormat) -> CurrencyResult<String> {
        let spec = spec.map_or(Ok(MoneyFormat::default()), MoneyFormat::from_str)?;
        Ok(self.render(spec, base))
    }

    /// Renders with an already parsed specifier.
    #[must_use]
    pub fn render(&self, spec: MoneyFormat, base: &NumberFormat) -> String {
        match spec {
            MoneyFormat::Currency(precision) | MoneyFormat::Code(precision) => {
                let use_code = matches!(spec, MoneyFormat::Code(_));
                let format = build_number_format(&self.currency, base, use_code);
                let (negative, digits) = fixed_digits(
                    self.amount,
                    precision.unwrap_or(format.currency_decimal_digits),
                );
                let number = format.layout_digits(&digits, true);
                let template = if negative {
                    format.currency_negative_pattern.template()
                } else {
                    format.currency_positive_pattern.template()
                };
                pattern::render(template, &format.currency_symbol, &number, &format.negative_sign)
            }
            MoneyFormat::Number(precision) | MoneyFormat::Fixed(precision) => {
                let grouped = matches!(spec, MoneyFormat::Number(_));
                let (negative, digits) =
                    fixed_digits(self.amount, precision.unwrap_or(base.number_decimal_digits));
                signed(negative, base, base.layout_digits(&digits, grouped))
            }
            MoneyFormat::General => {
                let digits = self.amount.abs().to_string();
                signed(self.is_negative(), base, base.layout_digits(&digits, false))
            }
        }
    }
}

fn signed(negative: bool, format: &NumberFormat, number: String) -> String {
    if negative {
        format!("{}{number}", format.negative_sign)
    } else {
        number
    }
}

impl fmt::Display for Money {
    /// Default `C` format in the ambient locale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(MoneyFormat::default(), locale::ambient().number_format()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyInfo;
    use crate::locale::Locale;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn money(code: &str, amount: Decimal) -> Money {
        Money::new(CurrencyInfo::from_code(code).unwrap(), amount)
    }

    fn format_in(locale: &str, value: Money, spec: Option<&str>) -> String {
        value
            .format_with(spec, &Locale::find(locale).unwrap().number_format())
            .unwrap()
    }

    #[rstest]
    #[case("C", MoneyFormat::Currency(None))]
    #[case("c4", MoneyFormat::Currency(Some(4)))]
    #[case("I", MoneyFormat::Code(None))]
    #[case("I3", MoneyFormat::Code(Some(3)))]
    #[case("N28", MoneyFormat::Number(Some(28)))]
    #[case("f0", MoneyFormat::Fixed(Some(0)))]
    #[case("G", MoneyFormat::General)]
    #[case("", MoneyFormat::Currency(None))]
    fn test_parse_format_spec(#[case] spec: &str, #[case] expected: MoneyFormat) {
        assert_eq!(spec.parse::<MoneyFormat>().unwrap(), expected);
    }

    #[rstest]
    #[case("i")]
    #[case("I10")]
    #[case("C29")]
    #[case("N123")]
    #[case("G2")]
    #[case("X")]
    #[case("C-1")]
    fn test_parse_format_spec_rejects(#[case] spec: &str) {
        assert!(matches!(
            spec.parse::<MoneyFormat>(),
            Err(CurrencyError::Format { expected: "money format", .. })
        ));
    }

    #[test]
    fn test_default_format_uses_symbol() {
        assert_eq!(format_in("en-US", money("CNY", dec!(1)), None), "¥1.00");
        assert_eq!(format_in("en-US", money("CNY", dec!(1)), Some("C")), "¥1.00");
    }

    #[test]
    fn test_code_format() {
        assert_eq!(format_in("en-US", money("CNY", dec!(1)), Some("I")), "CNY 1.00");
        assert_eq!(format_in("en-US", money("CNY", dec!(-1)), Some("I")), "-CNY 1.00");
        assert_eq!(format_in("de-DE", money("EUR", dec!(1234.5)), Some("I")), "1.234,50 EUR");
        assert_eq!(format_in("", money("USD", dec!(-2)), Some("I")), "(USD 2.00)");
    }

    #[rstest]
    #[case(dec!(1.1251), "¥1.13")]
    #[case(dec!(1.1268), "¥1.13")]
    #[case(dec!(1.125), "¥1.12")]
    #[case(dec!(1.135), "¥1.14")]
    #[case(dec!(1234567.891), "¥1,234,567.89")]
    #[case(dec!(-1.5), "-¥1.50")]
    #[case(dec!(-0.001), "¥0.00")]
    fn test_currency_rounding_half_even(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_in("en-US", money("CNY", amount), None), expected);
    }

    #[test]
    fn test_currency_digits_follow_currency() {
        assert_eq!(format_in("en-US", money("CLP", dec!(1234.5)), None), "$1,234");
        assert_eq!(format_in("en-US", money("BHD", dec!(1)), None), "د.ب.1.000");
        assert_eq!(format_in("en-US", money("CNY", dec!(1)), Some("C0")), "¥1");
        assert_eq!(format_in("en-US", money("CNY", dec!(1)), Some("I4")), "CNY 1.0000");
    }

    #[rstest]
    #[case(Decimal::MAX, None, "¥79,228,162,514,264,337,593,543,950,335.00")]
    #[case(Decimal::MIN, Some("I"), "-CNY 79,228,162,514,264,337,593,543,950,335.00")]
    #[case(dec!(12345678901234567890), Some("C28"), "¥12,345,678,901,234,567,890.0000000000000000000000000000")]
    #[case(Decimal::MAX, Some("C28"), "¥79,228,162,514,264,337,593,543,950,335.0000000000000000000000000000")]
    #[case(dec!(1.5), Some("F4"), "1.5000")]
    fn test_large_amounts_keep_requested_digits(
        #[case] amount: Decimal,
        #[case] spec: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(format_in("en-US", money("CNY", amount), spec), expected);
    }

    #[rstest]
    #[case("de-DE", "1.234,50 €")]
    #[case("fr-FR", "1\u{202f}234,50 €")]
    #[case("nl-NL", "€ 1.234,50")]
    #[case("pt-BR", "€ 1.234,50")]
    #[case("en-IN", "€1,234.50")]
    #[case("", "€1,234.50")]
    fn test_locale_patterns(#[case] locale: &str, #[case] expected: &str) {
        assert_eq!(format_in(locale, money("EUR", dec!(1234.5)), None), expected);
    }

    #[rstest]
    #[case("de-DE", "-1.234,50 €")]
    #[case("nl-NL", "€ -1.234,50")]
    #[case("pt-BR", "-€ 1.234,50")]
    #[case("", "(€1,234.50)")]
    fn test_locale_negative_patterns(#[case] locale: &str, #[case] expected: &str) {
        assert_eq!(format_in(locale, money("EUR", dec!(-1234.5)), None), expected);
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(
            format_in("en-IN", money("INR", dec!(12345678.9)), None),
            "₹1,23,45,678.90"
        );
    }

    #[test]
    fn test_number_fixed_and_general() {
        let value = money("CNY", dec!(-1234.5678));
        assert_eq!(format_in("en-US", value, Some("N")), "-1,234.57");
        assert_eq!(format_in("en-US", value, Some("F3")), "-1234.568");
        assert_eq!(format_in("en-US", value, Some("G")), "-1234.5678");
        assert_eq!(format_in("de-DE", value, Some("G")), "-1234,5678");
    }

    #[test]
    fn test_unknown_spec_fails() {
        let base = NumberFormat::invariant();
        assert!(money("CNY", dec!(1)).format_with(Some("Z"), &base).is_err());
    }

    #[test]
    fn test_display_matches_default_format() {
        let value = money("CNY", dec!(1));
        assert_eq!(value.to_string(), value.format(None).unwrap());
    }
}

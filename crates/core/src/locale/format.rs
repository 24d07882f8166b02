//! Number format settings and the digit-level helpers built on them.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::pattern::{NegativePattern, PositivePattern};
use crate::currency::CurrencyInfo;

/// Culture-specific number and currency formatting rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Decimal separator.
    pub decimal_separator: String,
    /// Digit group separator.
    pub group_separator: String,
    /// Group sizes from the decimal point outward; the last size repeats and
    /// a trailing zero stops grouping.
    pub group_sizes: Vec<usize>,
    /// Negative sign.
    pub negative_sign: String,
    /// Default digits for `N` and `F` formats.
    pub number_decimal_digits: u32,
    /// Currency symbol.
    pub currency_symbol: String,
    /// Default digits for `C` and `I` formats.
    pub currency_decimal_digits: u32,
    /// Currency placement for non-negative amounts.
    pub currency_positive_pattern: PositivePattern,
    /// Currency placement for negative amounts.
    pub currency_negative_pattern: NegativePattern,
}

impl NumberFormat {
    /// Culture-independent settings.
    #[must_use]
    pub fn invariant() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            group_sizes: vec![3],
            negative_sign: "-".to_string(),
            number_decimal_digits: 2,
            currency_symbol: "¤".to_string(),
            currency_decimal_digits: 2,
            currency_positive_pattern: PositivePattern::SymbolNumber,
            currency_negative_pattern: NegativePattern::ParenSymbolNumber,
        }
    }

    /// Groups the integer digits and joins the fraction.
    ///
    /// `digits` is an unsigned plain decimal literal such as `1234567.50`.
    pub(crate) fn layout_digits(&self, digits: &str, grouped: bool) -> String {
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits, None),
        };

        let mut out = if grouped {
            group_integer(integer, &self.group_sizes, &self.group_separator)
        } else {
            integer.to_string()
        };
        if let Some(fraction) = fraction {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    /// Parses a decimal literal written with these separators.
    ///
    /// Accepts an optional leading sign, group separators between integer
    /// digits and at most one decimal separator.
    pub(crate) fn parse_decimal(&self, text: &str) -> Option<Decimal> {
        let (negative, unsigned) = self.strip_sign(text);
        if unsigned.is_empty() {
            return None;
        }

        let (integer, fraction) = match unsigned.split_once(self.decimal_separator.as_str()) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let integer = self.ungroup(integer)?;
        if let Some(fraction) = fraction
            && !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        if integer.is_empty() && fraction.is_none_or(str::is_empty) {
            return None;
        }

        let mut literal = String::with_capacity(unsigned.len() + 2);
        if negative {
            literal.push('-');
        }
        literal.push_str(if integer.is_empty() { "0" } else { &integer });
        if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
            literal.push('.');
            literal.push_str(fraction);
        }
        Decimal::from_str(&literal).ok()
    }

    pub(crate) fn strip_sign<'a>(&self, text: &'a str) -> (bool, &'a str) {
        if !self.negative_sign.is_empty()
            && let Some(rest) = text.strip_prefix(self.negative_sign.as_str())
        {
            return (true, rest);
        }
        if let Some(rest) = text.strip_prefix('-') {
            return (true, rest);
        }
        (false, text.strip_prefix('+').unwrap_or(text))
    }

    /// Removes group separators, which may only sit between digits.
    fn ungroup(&self, integer: &str) -> Option<String> {
        if self.group_separator.is_empty() {
            return integer
                .bytes()
                .all(|b| b.is_ascii_digit())
                .then(|| integer.to_string());
        }

        let mut digits = String::with_capacity(integer.len());
        for (i, part) in integer.split(self.group_separator.as_str()).enumerate() {
            if part.is_empty() {
                // Leading, trailing or doubled separator. An empty integer
                // part only passes when there is no separator at all.
                return (i == 0 && integer.is_empty()).then(String::new);
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.push_str(part);
        }
        Some(digits)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

/// Derives the format used to render money in `currency`.
///
/// The currency's digits replace the base currency digits. With `use_code`
/// the ISO code replaces the symbol and the placement patterns switch to
/// their spaced code-style equivalents.
#[must_use]
pub fn build_number_format(
    currency: &CurrencyInfo,
    base: &NumberFormat,
    use_code: bool,
) -> NumberFormat {
    let mut format = base.clone();
    format.currency_decimal_digits = currency.decimal_digits();
    if use_code {
        format.currency_symbol = currency.code().to_string();
        format.currency_positive_pattern = base.currency_positive_pattern.to_code_style();
        format.currency_negative_pattern = base.currency_negative_pattern.to_code_style();
    } else {
        format.currency_symbol = currency.symbol().to_string();
    }
    format
}

fn group_integer(digits: &str, sizes: &[usize], separator: &str) -> String {
    let Some(&last) = sizes.last() else {
        return digits.to_string();
    };

    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut sizes = sizes.iter().copied();
    while end > 0 {
        let size = sizes.next().unwrap_or(last);
        if size == 0 {
            groups.push(&digits[..end]);
            break;
        }
        let start = end.saturating_sub(size);
        groups.push(&digits[start..end]);
        end = start;
    }
    groups.reverse();
    groups.join(separator)
}

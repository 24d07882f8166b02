//! Reading money from text.
//!
//! Accepted shapes, after trimming:
//!
//! - `11.1`: a bare literal in the default currency
//! - `CNY`: zero of the named currency
//! - `CNY0.99`, `CNY 0.99`, `CNY ¥1.11`, `CNY -¥1.11`: code, optional symbol,
//!   literal

use std::str::FromStr;

use rust_decimal::Decimal;

use super::Money;
use crate::currency::CurrencyInfo;
use crate::error::{CurrencyError, CurrencyResult};
use crate::locale::{self, NumberFormat};

impl Money {
    /// Parses money using the ambient locale and currency.
    ///
    /// # Errors
    ///
    /// `Format` for malformed text. A bare literal additionally fails when
    /// the ambient region has no registered currency.
    pub fn parse(text: &str) -> CurrencyResult<Self> {
        Self::parse_with(text, None, locale::ambient().number_format())
    }

    /// Parses money using the ambient locale and currency.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Parses money with explicit settings.
    ///
    /// `default_currency` applies to bare literals; `None` means the ambient
    /// currency, looked up only when needed.
    ///
    /// # Errors
    ///
    /// `Format` for malformed text.
    pub fn parse_with(
        text: &str,
        default_currency: Option<CurrencyInfo>,
        format: &NumberFormat,
    ) -> CurrencyResult<Self> {
        let invalid = || CurrencyError::format(text, "money");
        let trimmed = text.trim();
        let first = trimmed.chars().next().ok_or_else(invalid)?;

        if first.is_ascii_digit() {
            let amount = format.parse_decimal(trimmed).ok_or_else(invalid)?;
            let currency = match default_currency {
                Some(currency) => currency,
                None => CurrencyInfo::current()?,
            };
            return Ok(Self::new(currency, amount));
        }

        let split = trimmed.char_indices().nth(3).map_or(trimmed.len(), |(at, _)| at);
        let (code, rest) = trimmed.split_at(split);
        let currency = CurrencyInfo::try_from_code(code).ok_or_else(invalid)?;

        let rest = rest.trim();
        if rest.is_empty() {
            return Ok(Self::zero(currency));
        }
        parse_amount(rest, &currency, format)
            .map(|amount| Self::new(currency, amount))
            .ok_or_else(invalid)
    }
}

/// A literal optionally marked with the currency symbol, before or after the
/// sign.
fn parse_amount(text: &str, currency: &CurrencyInfo, format: &NumberFormat) -> Option<Decimal> {
    let symbol = currency.symbol();
    if let Some(rest) = text.strip_prefix(symbol) {
        return format.parse_decimal(rest.trim_start());
    }

    let (negative, unsigned) = format.strip_sign(text);
    if negative && let Some(rest) = unsigned.strip_prefix(symbol) {
        let rest = rest.trim_start();
        if format.strip_sign(rest).0 || rest.starts_with('+') {
            return None;
        }
        return format.parse_decimal(rest).map(|amount| -amount);
    }

    format.parse_decimal(text)
}

impl FromStr for Money {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

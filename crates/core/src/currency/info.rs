//! Validated currency metadata.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::data::CurrencyRecord;
use super::registry::CurrencyRegistry;
use crate::error::{CurrencyError, CurrencyResult};
use crate::money::Money;

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_DIGITS: u32 = 28;

/// An ISO 4217 currency.
///
/// Values are only produced by [`CurrencyRegistry`] (directly or through the
/// `from_*` shortcuts below), so two values with the same code always carry
/// the same metadata. Equality, hashing and ordering look at the code alone.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyInfo {
    code: &'static str,
    numeric: &'static str,
    decimal_digits: u32,
    english_name: &'static str,
    symbol: &'static str,
    is_fund: bool,
}

impl CurrencyInfo {
    /// Validates a table row.
    ///
    /// Negative `decimal_digits` are clamped to zero.
    ///
    /// # Errors
    ///
    /// - `InvalidCurrencyCode` unless the code is 3 uppercase ASCII letters
    /// - `InvalidCurrencyNumeric` unless the numeric code is 3 ASCII digits
    /// - `MissingArgument` for a blank symbol
    /// - `InvalidArgument` when the digits exceed the decimal scale limit
    pub fn from_record(record: &CurrencyRecord) -> CurrencyResult<Self> {
        if !is_alpha_code(record.code) || record.code.bytes().any(|b| b.is_ascii_lowercase()) {
            return Err(CurrencyError::InvalidCurrencyCode(record.code.to_string()));
        }
        if record.numeric.len() != 3 || !record.numeric.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CurrencyError::InvalidCurrencyNumeric(
                record.numeric.to_string(),
            ));
        }
        if record.symbol.trim().is_empty() {
            return Err(CurrencyError::MissingArgument("symbol"));
        }

        let decimal_digits = record.decimal_digits.max(0).unsigned_abs();
        if decimal_digits > MAX_DECIMAL_DIGITS {
            return Err(CurrencyError::invalid_argument(
                "decimal_digits",
                format!("{decimal_digits} exceeds {MAX_DECIMAL_DIGITS}"),
            ));
        }

        Ok(Self {
            code: record.code,
            numeric: record.numeric,
            decimal_digits,
            english_name: record.english_name,
            symbol: record.symbol,
            is_fund: record.is_fund,
        })
    }

    /// Resolves a currency by alphabetic code, case-insensitively.
    pub fn from_code(code: &str) -> CurrencyResult<Self> {
        CurrencyRegistry::global().resolve_by_code(code)
    }

    /// Resolves a currency by alphabetic code.
    #[must_use]
    pub fn try_from_code(code: &str) -> Option<Self> {
        CurrencyRegistry::global().try_resolve_by_code(code)
    }

    /// Resolves a currency by ISO 4217 numeric code.
    pub fn from_numeric(numeric: &str) -> CurrencyResult<Self> {
        CurrencyRegistry::global().resolve_by_numeric(numeric)
    }

    /// Resolves a currency by ISO 4217 numeric code.
    #[must_use]
    pub fn try_from_numeric(numeric: &str) -> Option<Self> {
        CurrencyRegistry::global().try_resolve_by_numeric(numeric)
    }

    /// Resolves the currency of an ISO 3166 region.
    pub fn from_region(region: &str) -> CurrencyResult<Self> {
        CurrencyRegistry::global().resolve_by_region(region)
    }

    /// Resolves the currency of an ISO 3166 region.
    #[must_use]
    pub fn try_from_region(region: &str) -> Option<Self> {
        CurrencyRegistry::global().try_resolve_by_region(region)
    }

    /// Resolves the currency of a region-qualified locale tag such as `zh-CN`.
    pub fn from_locale(tag: &str) -> CurrencyResult<Self> {
        CurrencyRegistry::global().resolve_by_locale(tag)
    }

    /// Resolves the currency of a region-qualified locale tag.
    #[must_use]
    pub fn try_from_locale(tag: &str) -> Option<Self> {
        CurrencyRegistry::global().try_resolve_by_locale(tag)
    }

    /// The currency of the ambient region.
    pub fn current() -> CurrencyResult<Self> {
        CurrencyRegistry::global().current_currency()
    }

    /// ISO 4217 alphabetic code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// ISO 4217 numeric code.
    #[must_use]
    pub const fn numeric(&self) -> &'static str {
        self.numeric
    }

    /// Number of digits after the decimal separator.
    #[must_use]
    pub const fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }

    /// English name.
    #[must_use]
    pub const fn english_name(&self) -> &'static str {
        self.english_name
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Whether this is a fund (special settlement) currency.
    #[must_use]
    pub const fn is_fund(&self) -> bool {
        self.is_fund
    }

    /// The major unit, always one.
    #[must_use]
    pub const fn major_unit(&self) -> Decimal {
        Decimal::ONE
    }

    /// The smallest subdivision: `10^-decimal_digits`, or one for currencies
    /// without a minor unit.
    #[must_use]
    pub fn minor_unit(&self) -> Decimal {
        if self.decimal_digits == 0 {
            Decimal::ONE
        } else {
            Decimal::new(1, self.decimal_digits)
        }
    }

    /// Compares codes; a missing currency orders before any currency.
    #[must_use]
    pub fn compare_to(&self, other: Option<&Self>) -> Ordering {
        other.map_or(Ordering::Greater, |other| self.cmp(other))
    }

    /// Compares numeric codes.
    #[must_use]
    pub fn compare_numeric(&self, other: Option<&Self>) -> Ordering {
        other.map_or(Ordering::Greater, |other| self.numeric.cmp(other.numeric))
    }

    /// An amount in this currency.
    #[must_use]
    pub fn money(self, amount: impl Into<Decimal>) -> Money {
        Money::new(self, amount.into())
    }

    /// Zero in this currency.
    #[must_use]
    pub fn zero(self) -> Money {
        Money::zero(self)
    }
}

pub(crate) fn is_alpha_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

impl PartialEq for CurrencyInfo {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for CurrencyInfo {}

impl Hash for CurrencyInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Ord for CurrencyInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.code.bytes().map(|b| b.to_ascii_uppercase());
        let right = other.code.bytes().map(|b| b.to_ascii_uppercase());
        left.cmp(right)
    }
}

impl PartialOrd for CurrencyInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CurrencyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for CurrencyInfo {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl Serialize for CurrencyInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for CurrencyInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).map_err(serde::de::Error::custom)
    }
}

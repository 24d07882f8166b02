//! Exchange rate types and logic.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conversion::{convert_amount, invert_amount};
use super::info::{CurrencyInfo, is_alpha_code};
use crate::error::{CurrencyError, CurrencyResult};
use crate::locale::NumberFormat;
use crate::money::Money;

/// Exchange rate between two currencies: one unit of `base` buys `rate`
/// units of `quote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawExchangeRate")]
pub struct ExchangeRate {
    base: CurrencyInfo,
    quote: CurrencyInfo,
    rate: Decimal,
}

#[derive(Deserialize)]
struct RawExchangeRate {
    base: CurrencyInfo,
    quote: CurrencyInfo,
    rate: Decimal,
}

impl TryFrom<RawExchangeRate> for ExchangeRate {
    type Error = CurrencyError;

    fn try_from(raw: RawExchangeRate) -> Result<Self, Self::Error> {
        Self::new(raw.base, raw.quote, raw.rate)
    }
}

impl ExchangeRate {
    /// Creates an exchange rate.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when both sides are the same currency or the rate
    /// is negative.
    pub fn new(base: CurrencyInfo, quote: CurrencyInfo, rate: Decimal) -> CurrencyResult<Self> {
        if base == quote {
            return Err(CurrencyError::invalid_argument(
                "quote",
                format!("base and quote are both {base}"),
            ));
        }
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(CurrencyError::invalid_argument(
                "rate",
                format!("{rate} is negative"),
            ));
        }
        Ok(Self { base, quote, rate })
    }

    /// The currency being priced.
    #[must_use]
    pub const fn base(&self) -> CurrencyInfo {
        self.base
    }

    /// The currency the price is expressed in.
    #[must_use]
    pub const fn quote(&self) -> CurrencyInfo {
        self.quote
    }

    /// Units of quote per unit of base.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Converts money on either side of the pair into the other side,
    /// rounded half-to-even to the target currency's digits.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when the money's currency is neither base nor quote
    /// - `DivideByZero` converting quote to base at a zero rate
    /// - `Overflow` when the product leaves the decimal range
    pub fn convert(&self, money: &Money) -> CurrencyResult<Money> {
        let currency = money.currency();
        if currency == self.base {
            let amount = convert_amount(money.amount(), self.rate, self.quote.decimal_digits())
                .ok_or(CurrencyError::Overflow {
                    target: "Decimal",
                    value: money.amount(),
                })?;
            Ok(Money::new(self.quote, amount))
        } else if currency == self.quote {
            if self.rate.is_zero() {
                return Err(CurrencyError::DivideByZero);
            }
            let amount = invert_amount(money.amount(), self.rate, self.base.decimal_digits())
                .ok_or(CurrencyError::Overflow {
                    target: "Decimal",
                    value: money.amount(),
                })?;
            Ok(Money::new(self.base, amount))
        } else {
            Err(CurrencyError::invalid_argument(
                "money",
                format!("{currency} is neither {} nor {}", self.base, self.quote),
            ))
        }
    }

    /// Returns the inverse rate.
    ///
    /// # Errors
    ///
    /// `DivideByZero` for a zero rate.
    pub fn inverse(&self) -> CurrencyResult<Self> {
        let rate = Decimal::ONE
            .checked_div(self.rate)
            .ok_or(CurrencyError::DivideByZero)?;
        Ok(Self {
            base: self.quote,
            quote: self.base,
            rate,
        })
    }

    /// Parses `USD/CNY 7.0074` or `USDCNY 7.0074`.
    ///
    /// # Errors
    ///
    /// `Format` for any malformed input, unknown code, identical codes or a
    /// negative rate.
    pub fn parse(text: &str) -> CurrencyResult<Self> {
        Self::try_parse(text).ok_or_else(|| CurrencyError::format(text, "exchange rate"))
    }

    /// Parses `USD/CNY 7.0074` or `USDCNY 7.0074`.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let (pair, rate) = (tokens.next()?, tokens.next()?);
        if tokens.next().is_some() || !pair.is_ascii() {
            return None;
        }

        let (base, quote) = match pair.len() {
            6 => pair.split_at(3),
            7 if pair.as_bytes()[3] == b'/' => (&pair[..3], &pair[4..]),
            _ => return None,
        };
        if !is_alpha_code(base) || !is_alpha_code(quote) {
            return None;
        }

        let rate = parse_rate(rate)?;
        Self::new(
            CurrencyInfo::try_from_code(base)?,
            CurrencyInfo::try_from_code(quote)?,
            rate,
        )
        .ok()
    }
}

/// A decimal literal in the invariant culture; `-0` reads as zero.
fn parse_rate(text: &str) -> Option<Decimal> {
    let rate = NumberFormat::invariant().parse_decimal(text)?;
    Some(if rate.is_zero() { Decimal::ZERO } else { rate })
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.base, self.quote, self.rate)
    }
}

impl FromStr for ExchangeRate {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

//! Currency-tagged amounts.
//!
//! `Money` pairs a `Decimal` with a [`CurrencyInfo`]. Operations between two
//! `Money` values require the same currency; operations with a bare decimal
//! keep the money's currency and never check anything.

mod format;
mod parse;

#[cfg(test)]
mod money_props;

use std::cmp::Ordering;
use std::ops::Neg;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyInfo, ExchangeRate};
use crate::error::{CurrencyError, CurrencyResult};

pub use format::MoneyFormat;

/// An amount of a specific currency.
///
/// Equality compares the stored amount at full precision, so `1.1251` and
/// `1.13` differ even though both display as `¥1.13` in CNY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyInfo,
}

impl Money {
    /// Creates an amount of `currency`.
    #[must_use]
    pub const fn new(currency: CurrencyInfo, amount: Decimal) -> Self {
        Self { amount, currency }
    }

    /// Zero of `currency`.
    #[must_use]
    pub const fn zero(currency: CurrencyInfo) -> Self {
        Self::new(currency, Decimal::ZERO)
    }

    /// Creates an amount of the ambient currency.
    ///
    /// Accepts anything that widens losslessly into a decimal (`i32`, `u64`,
    /// `Decimal`, ...).
    ///
    /// # Errors
    ///
    /// Fails when the ambient region has no registered currency.
    pub fn in_current(amount: impl Into<Decimal>) -> CurrencyResult<Self> {
        Ok(Self::new(CurrencyInfo::current()?, amount.into()))
    }

    /// Creates an amount from a double, keeping the shortest decimal that
    /// round-trips (`1.11` stays `1.11`).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for NaN, infinities and values outside the decimal
    /// range.
    pub fn from_f64(currency: CurrencyInfo, value: f64) -> CurrencyResult<Self> {
        Decimal::from_f64(value)
            .map(|amount| Self::new(currency, amount))
            .ok_or_else(|| {
                CurrencyError::invalid_argument("value", format!("{value} is not representable"))
            })
    }

    /// Creates an amount from a single-precision float.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_f64`].
    pub fn from_f32(currency: CurrencyInfo, value: f32) -> CurrencyResult<Self> {
        Decimal::from_f32(value)
            .map(|amount| Self::new(currency, amount))
            .ok_or_else(|| {
                CurrencyError::invalid_argument("value", format!("{value} is not representable"))
            })
    }

    /// The stored amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyInfo {
        self.currency
    }

    /// True for zero of any scale or sign.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// True when the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    fn ensure_same_currency(&self, other: &Self) -> CurrencyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(CurrencyError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })
        }
    }

    fn with_amount(&self, amount: Option<Decimal>) -> CurrencyResult<Self> {
        amount
            .map(|amount| Self::new(self.currency, amount))
            .ok_or(CurrencyError::Overflow {
                target: "Decimal",
                value: self.amount,
            })
    }

    // ========== Money op Money ==========

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` for different currencies, `Overflow` when the sum
    /// leaves the decimal range.
    pub fn checked_add(&self, other: &Self) -> CurrencyResult<Self> {
        self.ensure_same_currency(other)?;
        self.with_amount(self.amount.checked_add(other.amount))
    }

    /// Subtracts an amount of the same currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` for different currencies, `Overflow` when the
    /// difference leaves the decimal range.
    pub fn checked_sub(&self, other: &Self) -> CurrencyResult<Self> {
        self.ensure_same_currency(other)?;
        self.with_amount(self.amount.checked_sub(other.amount))
    }

    /// Orders two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` for different currencies.
    pub fn compare(&self, other: &Self) -> CurrencyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    // ========== Money op Decimal ==========

    /// `self + value`.
    ///
    /// # Errors
    ///
    /// `Overflow` when the result leaves the decimal range.
    pub fn add_decimal(&self, value: Decimal) -> CurrencyResult<Self> {
        self.with_amount(self.amount.checked_add(value))
    }

    /// `self - value`.
    ///
    /// # Errors
    ///
    /// `Overflow` when the result leaves the decimal range.
    pub fn sub_decimal(&self, value: Decimal) -> CurrencyResult<Self> {
        self.with_amount(self.amount.checked_sub(value))
    }

    /// `value - self`.
    ///
    /// # Errors
    ///
    /// `Overflow` when the result leaves the decimal range.
    pub fn rsub_decimal(&self, value: Decimal) -> CurrencyResult<Self> {
        self.with_amount(value.checked_sub(self.amount))
    }

    /// `self * value`.
    ///
    /// # Errors
    ///
    /// `Overflow` when the result leaves the decimal range.
    pub fn mul_decimal(&self, value: Decimal) -> CurrencyResult<Self> {
        self.with_amount(self.amount.checked_mul(value))
    }

    /// `self / value`.
    ///
    /// # Errors
    ///
    /// `DivideByZero` for a zero divisor, `Overflow` when the quotient leaves
    /// the decimal range.
    pub fn div_decimal(&self, value: Decimal) -> CurrencyResult<Self> {
        if value.is_zero() {
            return Err(CurrencyError::DivideByZero);
        }
        self.with_amount(self.amount.checked_div(value))
    }

    /// `value / self`.
    ///
    /// # Errors
    ///
    /// `DivideByZero` when this amount is zero, `Overflow` when the quotient
    /// leaves the decimal range.
    pub fn rdiv_decimal(&self, value: Decimal) -> CurrencyResult<Self> {
        if self.amount.is_zero() {
            return Err(CurrencyError::DivideByZero);
        }
        self.with_amount(value.checked_div(self.amount))
    }

    /// Flips the sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(self.currency, -self.amount)
    }

    // ========== Conversions ==========

    fn to_integral<T>(
        &self,
        target: &'static str,
        convert: impl FnOnce(&Decimal) -> Option<T>,
    ) -> CurrencyResult<T> {
        let mut truncated = self.amount.trunc();
        if truncated.is_zero() {
            truncated = Decimal::ZERO;
        }
        convert(&truncated).ok_or(CurrencyError::Overflow {
            target,
            value: truncated,
        })
    }

    /// Truncates to `u8`.
    ///
    /// # Errors
    ///
    /// `Overflow` outside the `u8` range.
    pub fn to_u8(&self) -> CurrencyResult<u8> {
        self.to_integral("u8", <Decimal as ToPrimitive>::to_u8)
    }

    /// Truncates to `i8`.
    ///
    /// # Errors
    ///
    /// `Overflow` outside the `i8` range.
    pub fn to_i8(&self) -> CurrencyResult<i8> {
        self.to_integral("i8", <Decimal as ToPrimitive>::to_i8)
    }

    /// Truncates to `i16`.
    ///
    /// # Errors
    ///
    /// `Overflow` outside the `i16` range.
    pub fn to_i16(&self) -> CurrencyResult<i16> {
        self.to_integral("i16", <Decimal as ToPrimitive>::to_i16)
    }

    /// Truncates to `u16`.
    ///
    /// # Errors
    ///
    /// `Overflow` outside the `u16` range.
    pub fn to_u16(&self) -> CurrencyResult<u16> {
        self.to_integral("u16", <Decimal as ToPrimitive>::to_u16)
    }

    /// Truncates to `i32`.
    ///
    /// # Errors
    ///
    /// `Overflow` outside the `i32` range.
    pub fn to_i32(&self) -> CurrencyResult<i32> {
        self.to_integral("i32", <Decimal as ToPrimitive>::to_i32)
    }

    /// Truncates to `u32`.
    ///
    /// # Errors
    ///
    /// `Overflow` outside the `u32` range.
    pub fn to_u32(&self) -> CurrencyResult<u32> {
        self.to_integral("u32", <Decimal as ToPrimitive>::to_u32)
    }

    /// Truncates to `i64`.
    ///
    /// # Errors
    ///
    /// `Overflow` outside the `i64` range.
    pub fn to_i64(&self) -> CurrencyResult<i64> {
        self.to_integral("i64", <Decimal as ToPrimitive>::to_i64)
    }

    /// Truncates to `u64`.
    ///
    /// # Errors
    ///
    /// `Overflow` outside the `u64` range.
    pub fn to_u64(&self) -> CurrencyResult<u64> {
        self.to_integral("u64", <Decimal as ToPrimitive>::to_u64)
    }

    /// Lossy conversion to `f32`.
    #[must_use]
    pub fn to_f32(&self) -> f32 {
        self.amount.to_f32().unwrap_or_default()
    }

    /// Lossy conversion to `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or_default()
    }

    /// The stored amount.
    #[must_use]
    pub const fn to_decimal(&self) -> Decimal {
        self.amount
    }

    /// The decimal's 4-word layout: `[lo, mid, hi, flags]`, where `flags`
    /// holds the scale in bits 16..24 and the sign in bit 31.
    #[must_use]
    pub fn bits(&self) -> [u32; 4] {
        let raw = self.amount.serialize();
        let word = |at: usize| u32::from_le_bytes([raw[at], raw[at + 1], raw[at + 2], raw[at + 3]]);
        [word(4), word(8), word(12), word(0)]
    }

    /// Amount expressed in minor units, truncated (CNY 1.23 is 123).
    ///
    /// # Errors
    ///
    /// `Overflow` when the count does not fit an `i64`.
    pub fn to_minor_units(&self) -> CurrencyResult<i64> {
        let minor = self
            .amount
            .checked_div(self.currency.minor_unit())
            .ok_or(CurrencyError::Overflow {
                target: "i64",
                value: self.amount,
            })?;
        Self::new(self.currency, minor).to_integral("i64", <Decimal as ToPrimitive>::to_i64)
    }

    /// Converts into `currency` at `rate` units of `currency` per unit of
    /// this money's currency. Same-currency conversion returns `self`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a negative rate, plus anything
    /// [`ExchangeRate::convert`] reports.
    pub fn convert_to(&self, currency: CurrencyInfo, rate: Decimal) -> CurrencyResult<Self> {
        if self.currency == currency {
            return Ok(*self);
        }
        ExchangeRate::new(self.currency, currency, rate)?.convert(self)
    }

    /// Converts through `rate`.
    ///
    /// # Errors
    ///
    /// See [`ExchangeRate::convert`].
    pub fn convert_with(&self, rate: &ExchangeRate) -> CurrencyResult<Self> {
        rate.convert(self)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl PartialOrd for Money {
    /// `None` across currencies.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

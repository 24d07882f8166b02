//! Core money types for Coinage.
//!
//! Pure value types with no I/O beyond reading the ambient configuration
//! once. Every currency handed out comes from a single immutable registry.
//!
//! # Modules
//!
//! - `currency` - ISO 4217 registry, `CurrencyInfo` and exchange rates
//! - `money` - currency-safe amounts, parsing and formatting
//! - `locale` - number formats and the ambient locale
//! - `error` - the shared error type

pub mod currency;
pub mod error;
pub mod locale;
pub mod money;

pub use currency::{CurrencyInfo, CurrencyRegistry, ExchangeRate};
pub use error::{CurrencyError, CurrencyResult};
pub use locale::{Locale, NumberFormat};
pub use money::{Money, MoneyFormat};

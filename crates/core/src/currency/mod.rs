//! ISO 4217 currencies and exchange rates.
//!
//! - `data` - bundled ISO 4217 and ISO 3166 tables
//! - `registry` - lookup by code, numeric code, region and locale
//! - `info` - the validated `CurrencyInfo` value
//! - `exchange` - exchange rates between two currencies
//! - `conversion` - banker's rounding helpers

pub mod conversion;
pub mod data;
pub mod exchange;
pub mod info;
pub mod registry;

#[cfg(test)]
mod props;

pub use conversion::{convert_amount, invert_amount, round_amount};
pub use data::CurrencyRecord;
pub use exchange::ExchangeRate;
pub use info::CurrencyInfo;
pub use registry::CurrencyRegistry;

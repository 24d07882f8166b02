//! Currency lookup by code, numeric code, region and locale.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use super::data::{CurrencyRecord, ISO_4217, REGION_CURRENCIES};
use super::info::{CurrencyInfo, is_alpha_code};
use crate::error::{CurrencyError, CurrencyResult};
use crate::locale::{self, LocaleTag};

static GLOBAL: Lazy<CurrencyRegistry> = Lazy::new(|| {
    let registry = CurrencyRegistry::from_tables(ISO_4217, REGION_CURRENCIES);
    debug!(
        currencies = registry.len(),
        regions = registry.regions.len(),
        "currency registry initialised"
    );
    registry
});

/// Immutable table of known currencies.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    currencies: Vec<CurrencyInfo>,
    by_code: HashMap<&'static str, usize>,
    by_numeric: HashMap<&'static str, usize>,
    regions: HashMap<&'static str, &'static str>,
}

impl CurrencyRegistry {
    /// Builds a registry from currency rows and `(region, code)` pairs.
    ///
    /// Rows that fail validation, or repeat an earlier code or numeric code,
    /// are skipped with a warning.
    #[must_use]
    pub fn from_tables(
        records: &'static [CurrencyRecord],
        regions: &'static [(&'static str, &'static str)],
    ) -> Self {
        let mut currencies = Vec::with_capacity(records.len());
        let mut by_code = HashMap::with_capacity(records.len());
        let mut by_numeric = HashMap::with_capacity(records.len());

        for record in records {
            let info = match CurrencyInfo::from_record(record) {
                Ok(info) => info,
                Err(error) => {
                    warn!(code = record.code, %error, "skipping invalid currency row");
                    continue;
                }
            };
            if by_code.contains_key(info.code()) || by_numeric.contains_key(info.numeric()) {
                warn!(code = info.code(), numeric = info.numeric(), "skipping duplicate currency row");
                continue;
            }
            by_code.insert(info.code(), currencies.len());
            by_numeric.insert(info.numeric(), currencies.len());
            currencies.push(info);
        }

        Self {
            currencies,
            by_code,
            by_numeric,
            regions: regions.iter().copied().collect(),
        }
    }

    /// The process-wide registry built from the bundled ISO tables.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Resolves a 3-letter alphabetic code, ignoring case.
    ///
    /// # Errors
    ///
    /// `InvalidCurrencyCode` for anything that is not a known code, including
    /// empty input.
    pub fn resolve_by_code(&self, code: &str) -> CurrencyResult<CurrencyInfo> {
        self.try_resolve_by_code(code)
            .ok_or_else(|| CurrencyError::InvalidCurrencyCode(code.to_string()))
    }

    /// Resolves a 3-letter alphabetic code, ignoring case.
    #[must_use]
    pub fn try_resolve_by_code(&self, code: &str) -> Option<CurrencyInfo> {
        if !is_alpha_code(code) {
            return None;
        }
        let upper = code.to_ascii_uppercase();
        self.by_code.get(upper.as_str()).map(|&i| self.currencies[i])
    }

    /// Resolves a 3-digit numeric code.
    ///
    /// # Errors
    ///
    /// `InvalidCurrencyNumeric` when nothing matches exactly.
    pub fn resolve_by_numeric(&self, numeric: &str) -> CurrencyResult<CurrencyInfo> {
        self.try_resolve_by_numeric(numeric)
            .ok_or_else(|| CurrencyError::InvalidCurrencyNumeric(numeric.to_string()))
    }

    /// Resolves a 3-digit numeric code.
    #[must_use]
    pub fn try_resolve_by_numeric(&self, numeric: &str) -> Option<CurrencyInfo> {
        self.by_numeric.get(numeric).map(|&i| self.currencies[i])
    }

    /// Resolves the currency used in an ISO 3166 alpha-2 region.
    ///
    /// # Errors
    ///
    /// - `MissingArgument` for a blank region
    /// - `InvalidArgument` for an unknown region
    /// - `InvalidCurrencyCode` when the region's currency is not registered
    pub fn resolve_by_region(&self, region: &str) -> CurrencyResult<CurrencyInfo> {
        let region = region.trim();
        if region.is_empty() {
            return Err(CurrencyError::MissingArgument("region"));
        }
        let code = self
            .regions
            .get(region.to_ascii_uppercase().as_str())
            .ok_or_else(|| {
                CurrencyError::invalid_argument("region", format!("unknown region [{region}]"))
            })?;
        self.resolve_by_code(code)
    }

    /// Resolves the currency used in an ISO 3166 alpha-2 region.
    #[must_use]
    pub fn try_resolve_by_region(&self, region: &str) -> Option<CurrencyInfo> {
        self.resolve_by_region(region).ok()
    }

    /// Resolves the currency of a region-qualified locale tag (`zh-CN`,
    /// `zh_Hans_CN`, `en-US`).
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for the invariant (empty) tag, neutral tags such as
    ///   `en`, and malformed tags
    /// - `MissingArgument` for whitespace-only input
    /// - anything [`Self::resolve_by_region`] reports for the derived region
    pub fn resolve_by_locale(&self, tag: &str) -> CurrencyResult<CurrencyInfo> {
        if tag.is_empty() {
            return Err(CurrencyError::invalid_argument(
                "locale",
                "the invariant locale has no region",
            ));
        }
        let parsed = LocaleTag::parse(tag)?;
        let region = parsed.region().ok_or_else(|| {
            CurrencyError::invalid_argument("locale", format!("[{tag}] is a neutral locale"))
        })?;
        self.resolve_by_region(region)
    }

    /// Resolves the currency of a region-qualified locale tag.
    #[must_use]
    pub fn try_resolve_by_locale(&self, tag: &str) -> Option<CurrencyInfo> {
        self.resolve_by_locale(tag).ok()
    }

    /// Every registered currency, in table order.
    pub fn currencies(&self) -> impl Iterator<Item = CurrencyInfo> + '_ {
        self.currencies.iter().copied()
    }

    /// The currency of the ambient region.
    ///
    /// # Errors
    ///
    /// Whatever [`Self::resolve_by_region`] reports for the configured region.
    pub fn current_currency(&self) -> CurrencyResult<CurrencyInfo> {
        self.resolve_by_region(locale::ambient().region())
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// True when no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    static SMALL: &[CurrencyRecord] = &[
        CurrencyRecord {
            code: "CNY",
            numeric: "156",
            decimal_digits: 2,
            english_name: "Yuan Renminbi",
            symbol: "¥",
            is_fund: false,
        },
        CurrencyRecord {
            code: "bad",
            numeric: "000",
            decimal_digits: 2,
            english_name: "Bad",
            symbol: "B",
            is_fund: false,
        },
        CurrencyRecord {
            code: "CNY",
            numeric: "999",
            decimal_digits: 2,
            english_name: "Duplicate",
            symbol: "¥",
            is_fund: false,
        },
    ];

    static SMALL_REGIONS: &[(&str, &str)] = &[("CN", "CNY"), ("US", "USD")];

    fn small() -> CurrencyRegistry {
        CurrencyRegistry::from_tables(SMALL, SMALL_REGIONS)
    }

    #[test]
    fn test_from_tables_skips_invalid_and_duplicate_rows() {
        let registry = small();
        assert_eq!(registry.len(), 1);
        assert!(registry.try_resolve_by_numeric("999").is_none());
        assert_eq!(
            registry.resolve_by_code("CNY").unwrap().english_name(),
            "Yuan Renminbi"
        );
    }

    #[test]
    fn test_region_with_unregistered_currency_reports_code() {
        assert_eq!(
            small().resolve_by_region("US"),
            Err(CurrencyError::InvalidCurrencyCode("USD".into()))
        );
    }

    #[rstest]
    #[case("CNY")]
    #[case("cny")]
    #[case("Cny")]
    fn test_resolve_by_code(#[case] code: &str) {
        let info = CurrencyRegistry::global().resolve_by_code(code).unwrap();
        assert_eq!(info.code(), "CNY");
    }

    #[rstest]
    #[case("BDE")]
    #[case("")]
    #[case("CN")]
    #[case("CNYY")]
    #[case("1NY")]
    #[case("Ｃ")]
    fn test_resolve_by_code_failures(#[case] code: &str) {
        assert_eq!(
            CurrencyRegistry::global().resolve_by_code(code),
            Err(CurrencyError::InvalidCurrencyCode(code.to_string()))
        );
        assert!(CurrencyRegistry::global().try_resolve_by_code(code).is_none());
    }

    #[test]
    fn test_resolve_by_numeric() {
        let registry = CurrencyRegistry::global();
        assert_eq!(
            registry.resolve_by_numeric("156").unwrap(),
            registry.resolve_by_code("CNY").unwrap()
        );
        assert_eq!(
            registry.resolve_by_numeric("123"),
            Err(CurrencyError::InvalidCurrencyNumeric("123".into()))
        );
        assert!(registry.try_resolve_by_numeric("").is_none());
    }

    #[rstest]
    #[case("CN", "CNY")]
    #[case("us", "USD")]
    #[case("DE", "EUR")]
    #[case("JP", "JPY")]
    fn test_resolve_by_region(#[case] region: &str, #[case] code: &str) {
        assert_eq!(
            CurrencyRegistry::global().resolve_by_region(region).unwrap().code(),
            code
        );
    }

    #[test]
    fn test_resolve_by_region_failures() {
        let registry = CurrencyRegistry::global();
        assert_eq!(
            registry.resolve_by_region(" "),
            Err(CurrencyError::MissingArgument("region"))
        );
        assert!(matches!(
            registry.resolve_by_region("QQ"),
            Err(CurrencyError::InvalidArgument { name: "region", .. })
        ));
    }

    #[rstest]
    #[case("zh-CN", "CNY")]
    #[case("en-US", "USD")]
    #[case("en_GB", "GBP")]
    #[case("zh-Hans-CN", "CNY")]
    #[case("de-CH", "CHF")]
    fn test_resolve_by_locale(#[case] tag: &str, #[case] code: &str) {
        assert_eq!(
            CurrencyRegistry::global().resolve_by_locale(tag).unwrap().code(),
            code
        );
    }

    #[rstest]
    #[case("")]
    #[case("aa")]
    #[case("zh")]
    #[case("zh-Hans")]
    #[case("not a locale")]
    #[case("en-US-x-private")]
    fn test_resolve_by_locale_rejects_non_regional_tags(#[case] tag: &str) {
        assert!(matches!(
            CurrencyRegistry::global().resolve_by_locale(tag),
            Err(CurrencyError::InvalidArgument { .. })
        ));
        assert!(CurrencyRegistry::global().try_resolve_by_locale(tag).is_none());
    }

    #[test]
    fn test_resolve_by_locale_blank_is_missing() {
        assert_eq!(
            CurrencyRegistry::global().resolve_by_locale("   "),
            Err(CurrencyError::MissingArgument("locale"))
        );
    }

    #[test]
    fn test_currencies_are_stable_and_round_trip() {
        let registry = CurrencyRegistry::global();
        let first: Vec<_> = registry.currencies().collect();
        let second: Vec<_> = registry.currencies().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), registry.len());
        assert!(!registry.is_empty());

        for info in first {
            assert_eq!(registry.resolve_by_code(info.code()).unwrap().code(), info.code());
            assert_eq!(registry.resolve_by_numeric(info.numeric()).unwrap(), info);
        }
    }

    #[test]
    fn test_global_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| std::ptr::from_ref(CurrencyRegistry::global()) as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}

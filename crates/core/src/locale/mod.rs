//! Locale data used for formatting and for the ambient currency.
//!
//! The ambient locale and region come from [`coinage_shared::AppConfig`] and
//! are read once per process.

pub mod format;
pub mod pattern;
pub mod tag;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use coinage_shared::{AppConfig, LocaleConfig};

pub use format::{NumberFormat, build_number_format};
pub use pattern::{NegativePattern, PositivePattern};
pub use tag::LocaleTag;

/// Region used when neither the configuration nor the locale names one.
pub const DEFAULT_REGION: &str = "US";

/// Static formatting data for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    name: &'static str,
    decimal_separator: &'static str,
    group_separator: &'static str,
    group_sizes: &'static [usize],
    negative_sign: &'static str,
    number_decimal_digits: u32,
    currency_symbol: &'static str,
    currency_decimal_digits: u32,
    positive_pattern: PositivePattern,
    negative_pattern: NegativePattern,
}

const INVARIANT: Locale = Locale {
    name: "",
    decimal_separator: ".",
    group_separator: ",",
    group_sizes: &[3],
    negative_sign: "-",
    number_decimal_digits: 2,
    currency_symbol: "¤",
    currency_decimal_digits: 2,
    positive_pattern: PositivePattern::SymbolNumber,
    negative_pattern: NegativePattern::ParenSymbolNumber,
};

const EN_US: Locale = Locale {
    name: "en-US",
    currency_symbol: "$",
    negative_pattern: NegativePattern::SignSymbolNumber,
    ..INVARIANT
};

const DE_DE: Locale = Locale {
    name: "de-DE",
    decimal_separator: ",",
    group_separator: ".",
    currency_symbol: "€",
    positive_pattern: PositivePattern::NumberSpaceSymbol,
    negative_pattern: NegativePattern::SignNumberSpaceSymbol,
    ..INVARIANT
};

const ZH_CN: Locale = Locale {
    name: "zh-CN",
    currency_symbol: "¥",
    ..EN_US
};

const FR_FR: Locale = Locale {
    name: "fr-FR",
    group_separator: "\u{202f}",
    ..DE_DE
};

const JA_JP: Locale = Locale {
    name: "ja-JP",
    currency_symbol: "¥",
    currency_decimal_digits: 0,
    ..EN_US
};

static LOCALES: &[Locale] = &[
    INVARIANT,
    Locale { name: "en", ..EN_US },
    EN_US,
    Locale { name: "en-GB", currency_symbol: "£", ..EN_US },
    Locale { name: "en-CA", ..EN_US },
    Locale { name: "en-AU", ..EN_US },
    Locale {
        name: "en-IN",
        currency_symbol: "₹",
        group_sizes: &[3, 2],
        ..EN_US
    },
    Locale { name: "zh", ..ZH_CN },
    ZH_CN,
    Locale { name: "zh-TW", currency_symbol: "$", ..ZH_CN },
    Locale { name: "zh-HK", currency_symbol: "HK$", ..ZH_CN },
    Locale { name: "ja", ..JA_JP },
    JA_JP,
    Locale {
        name: "ko-KR",
        currency_symbol: "₩",
        currency_decimal_digits: 0,
        ..EN_US
    },
    Locale { name: "de", ..DE_DE },
    DE_DE,
    Locale {
        name: "de-CH",
        decimal_separator: ".",
        group_separator: "’",
        currency_symbol: "CHF",
        positive_pattern: PositivePattern::SymbolSpaceNumber,
        negative_pattern: NegativePattern::SymbolSpaceSignNumber,
        ..DE_DE
    },
    Locale { name: "fr", ..FR_FR },
    FR_FR,
    Locale { name: "es-ES", ..DE_DE },
    Locale { name: "es-MX", ..EN_US },
    Locale { name: "it-IT", ..DE_DE },
    Locale {
        name: "nl-NL",
        positive_pattern: PositivePattern::SymbolSpaceNumber,
        negative_pattern: NegativePattern::SymbolSpaceSignNumber,
        ..DE_DE
    },
    Locale {
        name: "pt-BR",
        currency_symbol: "R$",
        positive_pattern: PositivePattern::SymbolSpaceNumber,
        negative_pattern: NegativePattern::SignSymbolSpaceNumber,
        ..DE_DE
    },
    Locale {
        name: "ru-RU",
        group_separator: "\u{a0}",
        currency_symbol: "₽",
        ..DE_DE
    },
    Locale {
        name: "sv-SE",
        group_separator: "\u{a0}",
        currency_symbol: "kr",
        ..DE_DE
    },
];

impl Locale {
    /// Looks up a locale by tag, ignoring case and accepting `_`.
    ///
    /// The empty tag names the invariant locale.
    #[must_use]
    pub fn find(tag: &str) -> Option<&'static Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Some(Self::invariant());
        }
        let normalised = LocaleTag::parse(tag).ok()?.to_string();
        LOCALES
            .iter()
            .find(|locale| locale.name.eq_ignore_ascii_case(&normalised))
    }

    /// The culture-independent locale.
    #[must_use]
    pub fn invariant() -> &'static Self {
        &LOCALES[0]
    }

    /// The ambient locale.
    #[must_use]
    pub fn current() -> &'static Self {
        ambient().locale()
    }

    /// Every known locale, invariant first.
    pub fn all() -> impl Iterator<Item = &'static Self> {
        LOCALES.iter()
    }

    /// Tag of this locale; empty for the invariant locale.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this is a language-only locale.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        !self.name.is_empty() && !self.name.contains('-')
    }

    /// Region subtag, if the locale has one.
    #[must_use]
    pub fn region(&self) -> Option<&'static str> {
        self.name.rsplit_once('-').map(|(_, region)| region)
    }

    /// Number format of this locale.
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            decimal_separator: self.decimal_separator.to_string(),
            group_separator: self.group_separator.to_string(),
            group_sizes: self.group_sizes.to_vec(),
            negative_sign: self.negative_sign.to_string(),
            number_decimal_digits: self.number_decimal_digits,
            currency_symbol: self.currency_symbol.to_string(),
            currency_decimal_digits: self.currency_decimal_digits,
            currency_positive_pattern: self.positive_pattern,
            currency_negative_pattern: self.negative_pattern,
        }
    }
}

/// The process-wide locale and region.
#[derive(Debug, Clone)]
pub struct AmbientLocale {
    locale: &'static Locale,
    region: String,
    format: NumberFormat,
}

impl AmbientLocale {
    /// Resolves the ambient settings from configuration.
    ///
    /// Unknown locale names fall back to the invariant locale. The region is
    /// the configured override, else the locale's region, else `US`.
    #[must_use]
    pub fn from_config(config: &LocaleConfig) -> Self {
        let locale = Locale::find(&config.name).unwrap_or_else(|| {
            warn!(locale = %config.name, "unknown locale, using invariant formatting");
            Locale::invariant()
        });

        let region = config
            .region
            .as_deref()
            .map(str::trim)
            .filter(|region| !region.is_empty())
            .map(str::to_ascii_uppercase)
            .or_else(|| {
                LocaleTag::parse(&config.name)
                    .ok()
                    .and_then(|tag| tag.region().map(str::to_string))
            })
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Self {
            locale,
            region,
            format: locale.number_format(),
        }
    }

    /// Ambient locale.
    #[must_use]
    pub const fn locale(&self) -> &'static Locale {
        self.locale
    }

    /// Ambient ISO 3166 region.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Number format of the ambient locale.
    #[must_use]
    pub const fn number_format(&self) -> &NumberFormat {
        &self.format
    }
}

static AMBIENT: Lazy<AmbientLocale> = Lazy::new(|| {
    let config = AppConfig::load().unwrap_or_else(|error| {
        warn!(%error, "failed to load configuration, using defaults");
        AppConfig::default()
    });
    let ambient = AmbientLocale::from_config(&config.locale);
    debug!(
        locale = ambient.locale.name,
        region = %ambient.region,
        "ambient locale initialised"
    );
    ambient
});

/// The ambient locale, loaded from configuration on first use.
#[must_use]
pub fn ambient() -> &'static AmbientLocale {
    &AMBIENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(name: &str, region: Option<&str>) -> LocaleConfig {
        LocaleConfig {
            name: name.to_string(),
            region: region.map(str::to_string),
        }
    }

    #[rstest]
    #[case("en-US", "en-US")]
    #[case("en_us", "en-US")]
    #[case("ZH-cn", "zh-CN")]
    #[case("de", "de")]
    #[case("", "")]
    fn test_find(#[case] tag: &str, #[case] name: &str) {
        assert_eq!(Locale::find(tag).unwrap().name(), name);
    }

    #[test]
    fn test_find_unknown() {
        assert!(Locale::find("xx-YY").is_none());
        assert!(Locale::find("not a locale").is_none());
    }

    #[test]
    fn test_locale_names_are_unique_and_parse() {
        let names: Vec<_> = Locale::all().map(Locale::name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate {name}");
            if !name.is_empty() {
                assert_eq!(LocaleTag::parse(name).unwrap().to_string(), *name);
            }
        }
    }

    #[test]
    fn test_neutral_and_region() {
        let en = Locale::find("en").unwrap();
        assert!(en.is_neutral());
        assert_eq!(en.region(), None);

        let en_us = Locale::find("en-US").unwrap();
        assert!(!en_us.is_neutral());
        assert_eq!(en_us.region(), Some("US"));

        assert!(!Locale::invariant().is_neutral());
    }

    #[test]
    fn test_number_format_from_locale() {
        let format = Locale::find("de-DE").unwrap().number_format();
        assert_eq!(format.decimal_separator, ",");
        assert_eq!(format.group_separator, ".");
        assert_eq!(format.currency_positive_pattern, PositivePattern::NumberSpaceSymbol);
        assert_eq!(Locale::invariant().number_format(), NumberFormat::invariant());
    }

    #[test]
    fn test_ambient_from_config() {
        let ambient = AmbientLocale::from_config(&config("zh-CN", None));
        assert_eq!(ambient.locale().name(), "zh-CN");
        assert_eq!(ambient.region(), "CN");

        let overridden = AmbientLocale::from_config(&config("en-US", Some(" hk ")));
        assert_eq!(overridden.region(), "HK");

        let neutral = AmbientLocale::from_config(&config("de", None));
        assert_eq!(neutral.region(), DEFAULT_REGION);
    }

    #[test]
    fn test_ambient_from_unknown_locale() {
        let ambient = AmbientLocale::from_config(&config("xx-QQ", None));
        assert_eq!(ambient.locale(), Locale::invariant());
        assert_eq!(ambient.region(), "QQ");
        assert_eq!(ambient.number_format(), &NumberFormat::invariant());
    }
}

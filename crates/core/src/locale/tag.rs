//! BCP 47 style locale tags: `language[-Script][-REGION]`.

use std::fmt;

use crate::error::{CurrencyError, CurrencyResult};

/// A parsed locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LocaleTag {
    /// Parses `zh-CN`, `zh-Hans-CN`, `en_US` and neutral tags such as `en`.
    ///
    /// Subtags are normalised: lowercase language, title-case script,
    /// uppercase region.
    ///
    /// # Errors
    ///
    /// `MissingArgument` for blank input and `InvalidArgument` for anything
    /// that does not follow the grammar, including extension subtags.
    pub fn parse(tag: &str) -> CurrencyResult<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(CurrencyError::MissingArgument("locale"));
        }
        let malformed =
            || CurrencyError::invalid_argument("locale", format!("[{tag}] is not a locale tag"));

        let mut parts = trimmed.split(['-', '_']).peekable();
        let language = parts
            .next()
            .filter(|p| (2..=3).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_alphabetic()))
            .ok_or_else(malformed)?
            .to_ascii_lowercase();

        let script = parts
            .next_if(|p| p.len() == 4 && p.bytes().all(|b| b.is_ascii_alphabetic()))
            .map(title_case);

        let region = parts
            .next_if(|p| {
                (p.len() == 2 && p.bytes().all(|b| b.is_ascii_alphabetic()))
                    || (p.len() == 3 && p.bytes().all(|b| b.is_ascii_digit()))
            })
            .map(str::to_ascii_uppercase);

        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// Language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Script subtag, if any.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Region subtag, if any. `None` marks a neutral locale.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

fn title_case(subtag: &str) -> String {
    let mut out = subtag.to_ascii_lowercase();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

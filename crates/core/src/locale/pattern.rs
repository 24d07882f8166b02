//! Currency placement patterns.
//!
//! Templates use `$` for the currency symbol, `n` for the digits and `-` for
//! the negative sign.

/// Placement of the symbol around a non-negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositivePattern {
    /// `$n`
    #[default]
    SymbolNumber,
    /// `n$`
    NumberSymbol,
    /// `$ n`
    SymbolSpaceNumber,
    /// `n $`
    NumberSpaceSymbol,
}

impl PositivePattern {
    /// Pattern for a numeric pattern index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::SymbolNumber),
            1 => Some(Self::NumberSymbol),
            2 => Some(Self::SymbolSpaceNumber),
            3 => Some(Self::NumberSpaceSymbol),
            _ => None,
        }
    }

    /// Numeric pattern index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Template string.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::SymbolNumber => "$n",
            Self::NumberSymbol => "n$",
            Self::SymbolSpaceNumber => "$ n",
            Self::NumberSpaceSymbol => "n $",
        }
    }

    /// Equivalent pattern with a space between a code and the digits.
    #[must_use]
    pub const fn to_code_style(self) -> Self {
        match self {
            Self::SymbolNumber => Self::SymbolSpaceNumber,
            Self::NumberSymbol => Self::NumberSpaceSymbol,
            other => other,
        }
    }
}

/// Placement of the symbol and sign around a negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativePattern {
    /// `($n)`
    #[default]
    ParenSymbolNumber,
    /// `-$n`
    SignSymbolNumber,
    /// `$-n`
    SymbolSignNumber,
    /// `$n-`
    SymbolNumberSign,
    /// `(n$)`
    ParenNumberSymbol,
    /// `-n$`
    SignNumberSymbol,
    /// `n-$`
    NumberSignSymbol,
    /// `n$-`
    NumberSymbolSign,
    /// `-n $`
    SignNumberSpaceSymbol,
    /// `-$ n`
    SignSymbolSpaceNumber,
    /// `n $-`
    NumberSpaceSymbolSign,
    /// `$ n-`
    SymbolSpaceNumberSign,
    /// `$ -n`
    SymbolSpaceSignNumber,
    /// `n- $`
    NumberSignSpaceSymbol,
    /// `($ n)`
    ParenSymbolSpaceNumber,
    /// `(n $)`
    ParenNumberSpaceSymbol,
    /// `$- n`
    SymbolSignSpaceNumber,
}

impl NegativePattern {
    const ALL: [Self; 17] = [
        Self::ParenSymbolNumber,
        Self::SignSymbolNumber,
        Self::SymbolSignNumber,
        Self::SymbolNumberSign,
        Self::ParenNumberSymbol,
        Self::SignNumberSymbol,
        Self::NumberSignSymbol,
        Self::NumberSymbolSign,
        Self::SignNumberSpaceSymbol,
        Self::SignSymbolSpaceNumber,
        Self::NumberSpaceSymbolSign,
        Self::SymbolSpaceNumberSign,
        Self::SymbolSpaceSignNumber,
        Self::NumberSignSpaceSymbol,
        Self::ParenSymbolSpaceNumber,
        Self::ParenNumberSpaceSymbol,
        Self::SymbolSignSpaceNumber,
    ];

    /// Pattern for a numeric pattern index.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Numeric pattern index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Template string.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::ParenSymbolNumber => "($n)",
            Self::SignSymbolNumber => "-$n",
            Self::SymbolSignNumber => "$-n",
            Self::SymbolNumberSign => "$n-",
            Self::ParenNumberSymbol => "(n$)",
            Self::SignNumberSymbol => "-n$",
            Self::NumberSignSymbol => "n-$",
            Self::NumberSymbolSign => "n$-",
            Self::SignNumberSpaceSymbol => "-n $",
            Self::SignSymbolSpaceNumber => "-$ n",
            Self::NumberSpaceSymbolSign => "n $-",
            Self::SymbolSpaceNumberSign => "$ n-",
            Self::SymbolSpaceSignNumber => "$ -n",
            Self::NumberSignSpaceSymbol => "n- $",
            Self::ParenSymbolSpaceNumber => "($ n)",
            Self::ParenNumberSpaceSymbol => "(n $)",
            Self::SymbolSignSpaceNumber => "$- n",
        }
    }

    /// Equivalent pattern with a space between a code and the digits.
    #[must_use]
    pub const fn to_code_style(self) -> Self {
        match self {
            Self::ParenSymbolNumber => Self::ParenSymbolSpaceNumber,
            Self::SignSymbolNumber => Self::SignSymbolSpaceNumber,
            Self::SymbolSignNumber => Self::SymbolSpaceSignNumber,
            Self::SymbolNumberSign => Self::SymbolSpaceNumberSign,
            Self::ParenNumberSymbol => Self::ParenNumberSpaceSymbol,
            Self::SignNumberSymbol => Self::SignNumberSpaceSymbol,
            Self::NumberSignSymbol => Self::NumberSignSpaceSymbol,
            Self::NumberSymbolSign => Self::NumberSpaceSymbolSign,
            other => other,
        }
    }
}

/// Expands a template.
pub(crate) fn render(template: &str, symbol: &str, number: &str, negative_sign: &str) -> String {
    let mut out = String::with_capacity(template.len() + symbol.len() + number.len());
    for ch in template.chars() {
        match ch {
            '$' => out.push_str(symbol),
            'n' => out.push_str(number),
            '-' => out.push_str(negative_sign),
            other => out.push(other),
        }
    }
    out
}

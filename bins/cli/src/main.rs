//! Coinage command-line front end.
//!
//! ```bash
//! coinage info CNY
//! coinage info --locale zh-CN
//! coinage list --funds
//! coinage format "CNY 1234.5" --spec I --locale de-DE
//! coinage convert "USD/CNY 7.0074" "USD 99"
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use coinage_core::locale;
use coinage_core::{CurrencyInfo, CurrencyRegistry, ExchangeRate, Locale, Money, NumberFormat};
use coinage_shared::{AppConfig, telemetry};

/// Currency-safe money, ISO 4217 lookups and exchange rates
#[derive(Parser)]
#[command(name = "coinage")]
#[command(version)]
#[command(about = "ISO 4217 currency lookups, money formatting and conversion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show metadata for one currency (the ambient one by default)
    Info {
        /// Alphabetic (CNY) or numeric (156) ISO 4217 code
        currency: Option<String>,

        /// Look up by ISO 3166 region instead
        #[arg(long, conflicts_with_all = ["currency", "locale"])]
        region: Option<String>,

        /// Look up by region-qualified locale tag instead
        #[arg(long, conflicts_with = "currency")]
        locale: Option<String>,
    },

    /// List every known currency, sorted by code
    List {
        /// Only fund currencies
        #[arg(long)]
        funds: bool,
    },

    /// Parse money text and print it in another format
    Format {
        /// Money text such as "CNY 1.5" or "11.1"
        money: String,

        /// Format specifier: C, I, N, F or G, with optional digits
        #[arg(short, long, default_value = "C")]
        spec: String,

        /// Locale used for parsing and output
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Convert money through an exchange rate
    Convert {
        /// Exchange rate such as "USD/CNY 7.0074"
        rate: String,

        /// Money text on either side of the rate
        money: String,

        /// Format specifier for both amounts
        #[arg(short, long, default_value = "I")]
        spec: String,

        /// Locale used for parsing and output
        #[arg(short, long)]
        locale: Option<String>,
    },
}

fn number_format(tag: Option<&str>) -> Result<NumberFormat> {
    match tag {
        Some(tag) => Locale::find(tag)
            .map(Locale::number_format)
            .with_context(|| format!("unknown locale [{tag}]")),
        None => Ok(locale::ambient().number_format().clone()),
    }
}

fn resolve(
    currency: Option<&str>,
    region: Option<&str>,
    locale: Option<&str>,
) -> Result<CurrencyInfo> {
    let info = if let Some(region) = region {
        CurrencyInfo::from_region(region)?
    } else if let Some(tag) = locale {
        CurrencyInfo::from_locale(tag)?
    } else if let Some(code) = currency {
        if code.bytes().all(|b| b.is_ascii_digit()) {
            CurrencyInfo::from_numeric(code)?
        } else {
            CurrencyInfo::from_code(code)?
        }
    } else {
        CurrencyInfo::current().context("no currency for the ambient region")?
    };
    Ok(info)
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Info {
            currency,
            region,
            locale,
        } => {
            let info = resolve(currency.as_deref(), region.as_deref(), locale.as_deref())?;
            writeln!(out, "code:     {}", info.code())?;
            writeln!(out, "numeric:  {}", info.numeric())?;
            writeln!(out, "name:     {}", info.english_name())?;
            writeln!(out, "symbol:   {}", info.symbol())?;
            writeln!(out, "digits:   {}", info.decimal_digits())?;
            writeln!(out, "minor:    {}", info.minor_unit())?;
            writeln!(out, "fund:     {}", if info.is_fund() { "yes" } else { "no" })?;
        }
        Command::List { funds } => {
            let mut currencies: Vec<_> = CurrencyRegistry::global()
                .currencies()
                .filter(|info| !funds || info.is_fund())
                .collect();
            currencies.sort();
            for info in currencies {
                writeln!(
                    out,
                    "{} {} {} {}",
                    info.code(),
                    info.numeric(),
                    info.decimal_digits(),
                    info.english_name()
                )?;
            }
        }
        Command::Format {
            money,
            spec,
            locale,
        } => {
            let format = number_format(locale.as_deref())?;
            let value = Money::parse_with(&money, None, &format)?;
            debug!(amount = %value.amount(), currency = %value.currency(), "parsed money");
            writeln!(out, "{}", value.format_with(Some(&spec), &format)?)?;
        }
        Command::Convert {
            rate,
            money,
            spec,
            locale,
        } => {
            let format = number_format(locale.as_deref())?;
            let rate = ExchangeRate::parse(&rate)?;
            let value = Money::parse_with(&money, None, &format)?;
            let converted = rate
                .convert(&value)
                .with_context(|| format!("cannot convert {money} with {rate}"))?;
            writeln!(
                out,
                "{} = {}",
                value.format_with(Some(&spec), &format)?,
                converted.format_with(Some(&spec), &format)?
            )?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init(&config.logging).context("failed to initialise logging")?;

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli.command, &mut stdout.lock())
}

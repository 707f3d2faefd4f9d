//! Money CLI - inspect currencies and evaluate money expressions
//!
//! Usage:
//! ```bash
//! money currencies
//! money format EUR 1234.5 --template "{amount} {code}"
//! money sum EUR 19.99 5.01 NaN
//! money units JPY 10.7
//! money schema
//! ```
//!
//! Settings come from `--config <file>` or the `SHOP_*` environment variables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shop_money::config::MoneySettings;
use shop_money::currency::CURRENCIES;
use shop_money::money::{MoneyParts, MoneyTypeRegistry, MoneyValue, install_registry};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Currency-safe money arithmetic from the command line
#[derive(Parser)]
#[command(name = "money")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML settings file (default_currency, money_format)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bundled currencies
    Currencies,

    /// Render an amount through the display template
    Format {
        /// Currency code; the configured default if omitted with `-`
        currency: String,
        /// Amount, e.g. 12.34 or NaN
        amount: String,
        /// Template overriding the configured one
        #[arg(long)]
        template: Option<String>,
    },

    /// Sum amounts of one currency
    Sum {
        /// Currency code
        currency: String,
        /// Amounts to add
        amounts: Vec<String>,
    },

    /// Show the quantized decimal, minor units and storage pair of an amount
    Units {
        /// Currency code
        currency: String,
        /// Amount
        amount: String,
    },

    /// Print the JSON schema of the storage pair
    Schema,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<MoneySettings> {
    let settings = match path {
        Some(path) => MoneySettings::from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => MoneySettings::load().context("loading settings from environment")?,
    };
    Ok(settings)
}

fn money(registry: &MoneyTypeRegistry, currency: &str, amount: &str) -> Result<MoneyValue> {
    let code = (currency != "-").then_some(currency);
    let money_type = registry.type_for(code)?;
    money_type
        .parse(amount)
        .with_context(|| format!("parsing amount '{amount}'"))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let registry = install_registry(load_settings(cli.config.as_ref())?)?;

    match cli.command {
        Commands::Currencies => {
            for c in CURRENCIES {
                println!(
                    "{}  {:>3}  {}  {:<6} {}",
                    c.code, c.numeric_code, c.minor_digits, c.symbol, c.display_name
                );
            }
        }
        Commands::Format {
            currency,
            amount,
            template,
        } => {
            let value = money(registry, &currency, &amount)?;
            let rendered = match template {
                Some(template) => value.format_with(&template)?,
                None => value.format()?,
            };
            println!("{rendered}");
        }
        Commands::Sum { currency, amounts } => {
            let money_type = registry.type_for((currency != "-").then_some(currency.as_str()))?;
            let values = amounts
                .iter()
                .map(|amount| money(registry, &currency, amount))
                .collect::<Result<Vec<_>>>()?;
            let total = money_type.sum(&values)?;
            println!("{}", total.format()?);
        }
        Commands::Units { currency, amount } => {
            let value = money(registry, &currency, &amount)?;
            let parts = value.quantized()?.to_parts();
            let minor = value
                .as_integer()?
                .map_or_else(|| "-".to_string(), |m| m.to_string());
            println!("{}", serde_json::json!({
                "type": value.money_type().name(),
                "decimal": &parts.amount,
                "minor_units": minor,
                "subunits": value.money_type().subunits(),
                "parts": parts,
            }));
        }
        Commands::Schema => {
            let schema = schemars::schema_for!(MoneyParts);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}

//! # Money Settings
//!
//! Process-level inputs to the money subsystem: the default currency used
//! when no code is supplied, and the template used to render amounts.
//!
//! Settings are layered with the `config` crate:
//!
//! ```text
//! built-in defaults  →  optional TOML file  →  SHOP_* environment variables
//! ```
//!
//! # Examples
//!
//! ```
//! use shop_money::config::MoneySettings;
//!
//! let settings = MoneySettings::from_toml_str(
//!     r#"
//!     default_currency = "usd"
//!     money_format = "{amount} {code}"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(settings.default_currency(), "USD");
//! assert_eq!(settings.money_format(), "{amount} {code}");
//! ```

use crate::currency;
use crate::error::{MoneyError, MoneyResult};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default currency when none is configured.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Default display template.
pub const DEFAULT_MONEY_FORMAT: &str = "{symbol} {amount}";

/// Environment variable prefix (`SHOP_DEFAULT_CURRENCY`, `SHOP_MONEY_FORMAT`).
pub const ENV_PREFIX: &str = "SHOP";

/// Placeholders a display template may use.
pub const PLACEHOLDERS: [&str; 4] = ["amount", "code", "symbol", "currency"];

/// Settings consumed by the money type registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneySettings {
    /// Currency used when a money type is requested without a code.
    default_currency: String,
    /// Display template with `{amount}`, `{code}`, `{symbol}`, `{currency}`.
    money_format: String,
}

impl Default for MoneySettings {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            money_format: DEFAULT_MONEY_FORMAT.to_string(),
        }
    }
}

impl MoneySettings {
    /// Creates validated settings.
    ///
    /// The currency code is normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Configuration` if the currency is unknown or the
    /// template is malformed.
    pub fn new(
        default_currency: impl Into<String>,
        money_format: impl Into<String>,
    ) -> MoneyResult<Self> {
        Self {
            default_currency: default_currency.into(),
            money_format: money_format.into(),
        }
        .validated()
    }

    /// Returns the default currency code.
    #[must_use]
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// Returns the display template.
    #[must_use]
    pub fn money_format(&self) -> &str {
        &self.money_format
    }

    /// Loads settings from a `.env` file (if present) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Configuration` if a value cannot be read or fails
    /// validation.
    pub fn load() -> MoneyResult<Self> {
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!(error = %err, "no .env file loaded");
        }
        Self::layered(None, Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads settings from a TOML file, overridden by the environment.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Configuration` if the file cannot be read or a
    /// value fails validation.
    pub fn from_file(path: impl AsRef<Path>) -> MoneyResult<Self> {
        Self::layered(Some(path.as_ref()), Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads settings from TOML text on top of the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Configuration` if the text is not valid TOML or a
    /// value fails validation.
    pub fn from_toml_str(toml: &str) -> MoneyResult<Self> {
        Self::from_builder(Self::defaults()?.add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Loads settings from an explicit set of environment variables instead
    /// of the process environment.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Configuration` if a value fails validation.
    pub fn from_env_map(vars: HashMap<String, String>) -> MoneyResult<Self> {
        Self::layered(None, Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    /// Defaults, then the TOML file if given, then `env`.
    fn layered(file: Option<&Path>, env: Environment) -> MoneyResult<Self> {
        let mut builder = Self::defaults()?;
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        Self::from_builder(builder.add_source(env))
    }

    fn defaults() -> MoneyResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("default_currency", DEFAULT_CURRENCY)?
            .set_default("money_format", DEFAULT_MONEY_FORMAT)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> MoneyResult<Self> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validated()
    }

    fn validated(mut self) -> MoneyResult<Self> {
        self.default_currency = self.default_currency.trim().to_uppercase();
        currency::lookup(&self.default_currency).map_err(|_| {
            MoneyError::configuration(format!(
                "default currency '{}' is not a known currency code",
                self.default_currency
            ))
        })?;
        validate_template(&self.money_format)?;
        Ok(self)
    }
}

/// Checks that `template` only uses known placeholders and renders the amount.
///
/// # Errors
///
/// Returns `MoneyError::Configuration` on unknown placeholders, unbalanced
/// braces, or a missing `{amount}`.
pub fn validate_template(template: &str) -> MoneyResult<()> {
    let mut rest = template;
    let mut has_amount = false;
    while let Some(open) = rest.find('{') {
        let after = rest.get(open + 1..).unwrap_or_default();
        let close = after.find('}').ok_or_else(|| {
            MoneyError::configuration(format!("unbalanced '{{' in money format '{template}'"))
        })?;
        let name = after.get(..close).unwrap_or_default();
        if !PLACEHOLDERS.contains(&name) {
            return Err(MoneyError::configuration(format!(
                "unknown placeholder '{{{name}}}' in money format '{template}'"
            )));
        }
        has_amount |= name == "amount";
        rest = after.get(close + 1..).unwrap_or_default();
    }
    if rest.contains('}') {
        return Err(MoneyError::configuration(format!(
            "unbalanced '}}' in money format '{template}'"
        )));
    }
    if !has_amount {
        return Err(MoneyError::configuration(format!(
            "money format '{template}' does not render {{amount}}"
        )));
    }
    Ok(())
}

//! # Money Type Registry
//!
//! Memoizing factory for [`MoneyType`]s.
//!
//! Uses [`DashMap`] for thread-safe concurrent access, keyed by currency code.
//! The first request for a code creates and caches its money type; later
//! requests return a clone of the cached handle. Concurrent first use of the
//! same code converges on a single cached instance through
//! insert-if-absent.
//!
//! A process-wide registry is available through [`global`]; it is created
//! with [`MoneySettings::default`] unless [`install_registry`] runs first.
//!
//! # Examples
//!
//! ```
//! use shop_money::config::MoneySettings;
//! use shop_money::money::MoneyTypeRegistry;
//!
//! let registry = MoneyTypeRegistry::new(MoneySettings::default());
//! let a = registry.type_for(Some("chf")).unwrap();
//! let b = registry.type_for(Some("CHF")).unwrap();
//! assert!(a.same_instance(&b));
//!
//! // No code: the configured default currency.
//! assert_eq!(registry.type_for(None).unwrap().currency(), "EUR");
//! ```

use super::money_type::MoneyType;
use super::parts::MoneyParts;
use super::value::MoneyValue;
use crate::config::MoneySettings;
use crate::currency;
use crate::error::{MoneyError, MoneyResult};
use dashmap::DashMap;
use std::sync::OnceLock;

static GLOBAL: OnceLock<MoneyTypeRegistry> = OnceLock::new();

/// Cache of money types, one per currency code.
#[derive(Debug, Default)]
pub struct MoneyTypeRegistry {
    settings: MoneySettings,
    /// Cached types keyed by uppercase currency code.
    types: DashMap<&'static str, MoneyType>,
}

impl MoneyTypeRegistry {
    /// Creates an empty registry with the given settings.
    #[must_use]
    pub fn new(settings: MoneySettings) -> Self {
        Self {
            settings,
            types: DashMap::new(),
        }
    }

    /// Returns the settings this registry was created with.
    #[must_use]
    pub fn settings(&self) -> &MoneySettings {
        &self.settings
    }

    /// Returns the money type for a currency code.
    ///
    /// The code is trimmed and uppercased. `None` selects the configured
    /// default currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` if the code is not in the
    /// currency table.
    pub fn type_for(&self, code: Option<&str>) -> MoneyResult<MoneyType> {
        let normalized = match code {
            Some(code) => code.trim().to_uppercase(),
            None => self.settings.default_currency().to_string(),
        };
        if let Some(cached) = self.types.get(normalized.as_str()) {
            return Ok(cached.value().clone());
        }
        let descriptor = currency::lookup(&normalized)?;
        let money_type = self
            .types
            .entry(descriptor.code)
            .or_insert_with(|| {
                tracing::debug!(currency = descriptor.code, "money type created");
                MoneyType::new(descriptor, self.settings.money_format())
            })
            .value()
            .clone();
        Ok(money_type)
    }

    /// Returns the money type of the configured default currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` if the default currency is not
    /// in the currency table.
    pub fn default_type(&self) -> MoneyResult<MoneyType> {
        self.type_for(None)
    }

    /// Rebuilds a value from its `(currency, amount)` pair.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` or `MoneyError::InvalidAmount`
    /// if either half of the pair is invalid.
    pub fn from_parts(&self, parts: &MoneyParts) -> MoneyResult<MoneyValue> {
        self.type_for(Some(&parts.currency))?.parse(&parts.amount)
    }

    /// Returns the number of cached money types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no money type has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Returns the process-wide registry, creating it with default settings on
/// first use.
pub fn global() -> &'static MoneyTypeRegistry {
    GLOBAL.get_or_init(|| {
        tracing::debug!("money type registry created with default settings");
        MoneyTypeRegistry::default()
    })
}

/// Installs the process-wide registry with explicit settings.
///
/// # Errors
///
/// Returns `MoneyError::Configuration` if the registry was already created,
/// either by an earlier install or by first use of [`global`].
pub fn install_registry(settings: MoneySettings) -> MoneyResult<&'static MoneyTypeRegistry> {
    GLOBAL
        .set(MoneyTypeRegistry::new(settings))
        .map_err(|_| MoneyError::configuration("money type registry is already initialised"))?;
    Ok(global())
}

/// Returns the money type for `code` from the process-wide registry.
///
/// # Errors
///
/// Returns `MoneyError::UnknownCurrency` if the code is not in the currency
/// table.
pub fn type_for(code: &str) -> MoneyResult<MoneyType> {
    global().type_for(Some(code))
}

/// Returns the default money type from the process-wide registry.
///
/// # Errors
///
/// Returns `MoneyError::UnknownCurrency` if the default currency is unknown.
pub fn default_type() -> MoneyResult<MoneyType> {
    global().default_type()
}

/// Builds a value from a currency code and a numeric string.
///
/// This is the inverse of [`MoneyValue::to_parts`].
///
/// # Errors
///
/// Returns `MoneyError::UnknownCurrency` or `MoneyError::InvalidAmount`.
pub fn make_money(code: &str, amount: &str) -> MoneyResult<MoneyValue> {
    type_for(code)?.parse(amount)
}

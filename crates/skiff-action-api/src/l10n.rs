//! Translation lookup for user-facing strings.
//!
//! Lookups are gettext style: the message key is the English source string,
//! scoped by the application domain that owns it. A catalog maps source
//! strings to translations; anything missing falls back to the source
//! string itself, so English wording needs no catalog at all.

use std::collections::HashMap;
use std::path::Path;

use skiff_core::{config_dir, ConfigError};

/// Catalog type: domain -> source string -> translation.
pub type Catalog = HashMap<String, HashMap<String, String>>;

/// Synchronous, side-effect-free translation lookup.
#[derive(Debug, Clone, Default)]
pub struct L10n {
    locale: String,
    catalog: Catalog,
}

impl L10n {
    /// Create an identity lookup for the given locale (English wording).
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            catalog: Catalog::new(),
        }
    }

    /// Create a lookup backed by an explicit catalog.
    pub fn with_catalog(locale: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            locale: locale.into(),
            catalog,
        }
    }

    /// Load the catalog for `locale` from the config directory.
    ///
    /// Reads `skiff/l10n/<locale>.toml`. The builtin "en" locale and a
    /// missing catalog file both yield the identity lookup.
    pub fn load(locale: &str) -> Result<Self, ConfigError> {
        if locale == "en" {
            return Ok(Self::new(locale));
        }
        let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(locale, &dir.join("l10n").join(format!("{locale}.toml")))
    }

    /// Load the catalog for `locale` from a specific file.
    pub fn load_from(locale: &str, path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new(locale));
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let catalog: Catalog =
            toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self::with_catalog(locale, catalog))
    }

    /// Locale this lookup serves.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate `source` within `domain`.
    ///
    /// Returns the catalog entry if present, otherwise `source` unchanged.
    pub fn t(&self, domain: &str, source: &str) -> String {
        self.catalog
            .get(domain)
            .and_then(|messages| messages.get(source))
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }
}

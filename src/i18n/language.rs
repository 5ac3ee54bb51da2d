//! Language type: validated language representation.
//!
//! `Language` can only be built from a code the registry knows and has
//! enabled, so holding one means the site can serve it.

use std::fmt;

use anyhow::{bail, Result};
use serde::{Serialize, Serializer};

use crate::i18n::{LanguageConfig, LanguageRegistry};

/// Reading direction of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code ("en" or "fa")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const FARSI: Language = Language { code: "fa" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Every language the site is served in, in registry order.
    pub fn enabled() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

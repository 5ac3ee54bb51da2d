//! Language registry: Single source of truth for all supported languages.
//!
//! The site is served in English and Farsi. Every language-aware
//! part of the crate (URL prefixes, template directories, reading direction)
//! reads its metadata from here. The registry is a `OnceLock` singleton,
//! initialised on first access and immutable afterwards.

use std::sync::OnceLock;

use crate::i18n::TextDirection;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also used as URL prefix and template directory
    pub code: &'static str,

    /// English name of the language, matching the `Language` snippet name
    pub name: &'static str,

    /// Reading direction of rendered pages
    pub direction: TextDirection,

    /// Whether this language is served
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }
}

/// English and Farsi.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            direction: TextDirection::Ltr,
            enabled: true,
        },
        LanguageConfig {
            code: "fa",
            name: "Persian",
            direction: TextDirection::Rtl,
            enabled: true,
        },
    ]
}

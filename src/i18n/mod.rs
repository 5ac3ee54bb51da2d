//! Internationalization (i18n) for the bilingual site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe `Language` and `TextDirection`
//! - `active`: Thread-scoped ambient language with a restoring guard
//! - `resolver`: Which translation of a page to render, with which template
//!
//! # Example
//!
//! ```rust,ignore
//! use dotahub::i18n::{select_template, Language};
//!
//! let selection = select_template(&page, Language::FARSI)?;
//! assert_eq!(selection.template, "home/fa/hero_page.html");
//! ```

pub mod active;
mod language;
mod registry;
mod resolver;

pub use language::{Language, TextDirection};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{
    english_url, farsi_url, resolve_template_locale, resolve_template_locale_code, select_template,
    template_path, text_direction, url_for_locale, LocaleUrlBuilder, ResolveError,
    TemplateSelection, Translatable,
};

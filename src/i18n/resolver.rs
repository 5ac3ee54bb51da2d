//! Per-request language resolution for multilingual pages.
//!
//! Decides which translation of a page to render for the language the
//! request came in, which template renders it, which way the text reads, and
//! what the page's URL is in a given language.

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::i18n::{active, Language, TextDirection};
use crate::text::upper_camel_to_snake;

/// Anything that can be rendered in English and/or Farsi.
pub trait Translatable {
    fn english_translated(&self) -> bool;

    fn farsi_translated(&self) -> bool;

    /// Concrete kind of the page in UpperCamelCase, e.g. `"HeroPage"`.
    fn type_name(&self) -> &str;
}

/// Builds a page URL for an explicit language.
pub trait LocaleUrlBuilder {
    fn build_url(&self, language: Language) -> Result<String>;
}

impl<F> LocaleUrlBuilder for F
where
    F: Fn(Language) -> Result<String>,
{
    fn build_url(&self, language: Language) -> Result<String> {
        self(language)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{type_name} has no renderable translation")]
    NoRenderableTranslation { type_name: String },
}

/// Outcome of resolving a page for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSelection {
    pub locale: Language,
    pub template: String,
    pub dir: TextDirection,
}

/// Pick the language to render `page` in for a request in `current`.
///
/// Farsi requests prefer Farsi and fall back to English; every other request
/// prefers English and falls back to Farsi. A page translated in neither is
/// not servable.
pub fn resolve_template_locale<P>(page: &P, current: Language) -> Result<Language, ResolveError>
where
    P: Translatable + ?Sized,
{
    resolve_template_locale_code(page, current.code())
}

/// Same as [`resolve_template_locale`] for a raw language code; any code
/// other than `"fa"` prefers English.
pub fn resolve_template_locale_code<P>(page: &P, current: &str) -> Result<Language, ResolveError>
where
    P: Translatable + ?Sized,
{
    let (preferred, fallback) = if current == Language::FARSI.code() {
        (Language::FARSI, Language::ENGLISH)
    } else {
        (Language::ENGLISH, Language::FARSI)
    };

    [preferred, fallback]
        .into_iter()
        .find(|language| is_translated(page, *language))
        .ok_or_else(|| ResolveError::NoRenderableTranslation {
            type_name: page.type_name().to_string(),
        })
}

fn is_translated<P>(page: &P, language: Language) -> bool
where
    P: Translatable + ?Sized,
{
    if language == Language::FARSI {
        page.farsi_translated()
    } else {
        page.english_translated()
    }
}

/// `home/<code>/<snake_case(type_name)>.html`
pub fn template_path<P>(page: &P, language: Language) -> String
where
    P: Translatable + ?Sized,
{
    format!(
        "home/{}/{}.html",
        language.code(),
        upper_camel_to_snake(page.type_name())
    )
}

/// Reading direction registered for `code`; `ltr` for codes the site does
/// not serve.
pub fn text_direction(code: &str) -> TextDirection {
    Language::from_code(code)
        .map(|language| language.direction())
        .unwrap_or(TextDirection::Ltr)
}

/// Resolve language, template and direction in one go.
pub fn select_template<P>(page: &P, current: Language) -> Result<TemplateSelection, ResolveError>
where
    P: Translatable + ?Sized,
{
    let locale = resolve_template_locale(page, current)?;
    let selection = TemplateSelection {
        locale,
        template: template_path(page, locale),
        dir: text_direction(locale.code()),
    };
    debug!(
        "Resolved {} for {} request: {}",
        page.type_name(),
        current,
        selection.template
    );
    Ok(selection)
}

/// URL of `page` in `target`, whatever language is currently active.
///
/// `target` is active on this thread while the builder runs and the
/// previously active language is back in place afterwards, whether the
/// builder succeeds, fails or panics.
pub fn url_for_locale<P, B>(page: &P, target: Language, builder: &B) -> Result<String>
where
    P: Translatable + ?Sized,
    B: LocaleUrlBuilder + ?Sized,
{
    let _guard = active::activate(target);
    let url = builder.build_url(target)?;
    debug!("{} URL in {}: {}", page.type_name(), target, url);
    Ok(url)
}

pub fn farsi_url<P, B>(page: &P, builder: &B) -> Result<String>
where
    P: Translatable + ?Sized,
    B: LocaleUrlBuilder + ?Sized,
{
    url_for_locale(page, Language::FARSI, builder)
}

pub fn english_url<P, B>(page: &P, builder: &B) -> Result<String>
where
    P: Translatable + ?Sized,
    B: LocaleUrlBuilder + ?Sized,
{
    url_for_locale(page, Language::ENGLISH, builder)
}

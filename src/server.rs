//! Read-only HTTP surface over a site snapshot.
//!
//! Page routes are prefixed with a language code (`/fa/heroes/axe/`) and
//! answer with the render plan for that page: which template to render, in
//! which language and direction, with which SEO metadata and alternate URLs,
//! plus the site chrome every template shows (logo, favicon, language
//! switcher).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use crate::i18n::{self, select_template, Language, ResolveError, TextDirection};
use crate::site::seo::seo_for;
use crate::site::snippets::{Image, VideoField};
use crate::site::{Ego, Hero, HeroAttribute, LanguageSnippet, Logo, PageKind, PageView, Site};

pub struct AppState {
    pub site: Site,
    pub default_language: Language,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(e) => {
                error!("Request failed: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct Alternates {
    pub en: String,
    pub fa: String,
}

#[derive(Debug, Serialize)]
pub struct RenderPlan {
    pub page_id: u32,
    pub locale: Language,
    pub template: String,
    pub dir: TextDirection,
    pub seo_title: String,
    pub search_description: String,
    pub alternates: Alternates,
    pub logo: Option<Logo>,
    pub favicon: Option<Image>,
    /// Switcher entries for every served language that has a snippet
    pub languages: Vec<LanguageSnippet>,
    /// Heroes index only: live hero pages by attribute and ego
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_groups: Option<Vec<HeroGroup>>,
}

#[derive(Debug, Serialize)]
pub struct HeroGroup {
    pub ego: Ego,
    pub attribute: HeroAttribute,
    pub heroes: Vec<HeroLink>,
}

#[derive(Debug, Serialize)]
pub struct HeroLink {
    pub page_id: u32,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ApiPage<'a> {
    pub id: u32,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub title: &'a str,
    pub slug: &'a str,
    pub english_url: String,
    pub farsi_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<&'a Hero>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoField<'a>>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(redirect_to_default_language))
        .route("/health", get(health))
        .route("/api/v2/pages/:id", get(api_page))
        .fallback(serve_page)
        .with_state(state)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

async fn health() -> &'static str {
    "ok"
}

async fn redirect_to_default_language(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::temporary(&format!("/{}/", state.default_language.code()))
}

/// `/<lang>/<slug>/<slug>/...`
async fn serve_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Json<RenderPlan>, AppError> {
    let path = uri.path().trim_start_matches('/');
    let (code, rest) = path.split_once('/').unwrap_or((path, ""));

    let language = Language::from_code(code)
        .map_err(|_| AppError::NotFound(format!("no such language: {}", code)))?;
    let view = state
        .site
        .find_by_path(rest)
        .ok_or_else(|| AppError::NotFound(format!("no page at {}", uri.path())))?;

    let plan = render_plan(&view, language)?;
    debug!("{} -> {}", uri.path(), plan.template);
    Ok(Json(plan))
}

pub fn render_plan(view: &PageView<'_>, language: Language) -> Result<RenderPlan, AppError> {
    let selection = select_template(view, language)?;
    let seo = seo_for(view, language);
    let site = view.site;
    let logo = site.active_logo();

    let hero_groups = match view.page.kind {
        PageKind::HeroesPage => Some(hero_groups(site, language)),
        _ => None,
    };

    Ok(RenderPlan {
        page_id: view.page.id,
        locale: selection.locale,
        template: selection.template,
        dir: selection.dir,
        seo_title: seo.seo_title,
        search_description: seo.search_description,
        alternates: Alternates {
            en: i18n::english_url(view, view)?,
            fa: i18n::farsi_url(view, view)?,
        },
        logo: logo.cloned(),
        favicon: logo.and_then(Logo::favicon).cloned(),
        languages: Language::enabled()
            .into_iter()
            .filter_map(|language| site.language_snippet(language).cloned())
            .collect(),
        hero_groups,
    })
}

/// Six groups, strength to intelligence, Radiant before Dire.
fn hero_groups(site: &Site, language: Language) -> Vec<HeroGroup> {
    HeroAttribute::ALL
        .into_iter()
        .flat_map(|attribute| Ego::ALL.into_iter().map(move |ego| (ego, attribute)))
        .map(|(ego, attribute)| HeroGroup {
            ego,
            attribute,
            heroes: site
                .hero_pages(ego, attribute)
                .into_iter()
                .map(|view| HeroLink {
                    page_id: view.page.id,
                    title: view.page.title.clone(),
                    url: view.url(language),
                })
                .collect(),
        })
        .collect()
}

async fn api_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Response, AppError> {
    let view = state
        .site
        .view(id)
        .filter(|view| view.page.live)
        .ok_or_else(|| AppError::NotFound(format!("page {} not found", id)))?;

    let body = ApiPage {
        id: view.page.id,
        type_name: view.page.kind.type_name(),
        title: &view.page.title,
        slug: &view.page.slug,
        english_url: i18n::english_url(&view, &view)?,
        farsi_url: i18n::farsi_url(&view, &view)?,
        hero: view.hero(),
        video: view.video().map(|video| video.api_field()),
    };
    Ok(Json(body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::fixtures::site;

    #[test]
    fn test_render_plan_for_farsi_hero() {
        let site = site();
        let plan = render_plan(&site.view(3).unwrap(), Language::FARSI).unwrap();

        assert_eq!(plan.locale, Language::FARSI);
        assert_eq!(plan.template, "home/fa/hero_page.html");
        assert_eq!(plan.dir, TextDirection::Rtl);
        assert_eq!(plan.alternates.en, "/en/heroes/axe/");
        assert_eq!(plan.alternates.fa, "/fa/heroes/axe/");
    }

    #[test]
    fn test_render_plan_carries_logo_and_languages() {
        let site = site();
        let plan = render_plan(&site.view(3).unwrap(), Language::ENGLISH).unwrap();

        assert_eq!(plan.logo.unwrap().id, 1);
        assert_eq!(plan.favicon.unwrap().file, "logo.png");
        let names: Vec<&str> = plan.languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["English", "Persian"]);
        assert!(plan.hero_groups.is_none());
    }

    #[test]
    fn test_heroes_page_plan_groups_heroes() {
        let site = site();
        let plan = render_plan(&site.view(2).unwrap(), Language::FARSI).unwrap();
        let groups = plan.hero_groups.unwrap();

        assert_eq!(groups.len(), 6);
        assert_eq!(groups[0].attribute, HeroAttribute::Strength);
        assert_eq!(groups[0].ego, Ego::Radiant);
        assert!(groups[0].heroes.is_empty());

        let dire_strength = &groups[1];
        assert_eq!(dire_strength.ego, Ego::Dire);
        assert_eq!(dire_strength.heroes.len(), 1);
        assert_eq!(dire_strength.heroes[0].title, "Axe");
        assert_eq!(dire_strength.heroes[0].url, "/fa/heroes/axe/");

        let radiant_agility = &groups[2];
        assert_eq!(radiant_agility.heroes[0].title, "Anti-Mage");
    }

    #[test]
    fn test_render_plan_untranslated_page_is_not_found() {
        let site = site();
        let err = render_plan(&site.view(5).unwrap(), Language::ENGLISH).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_render_plan_restores_active_language() {
        let site = site();
        let _guard = i18n::active::activate(Language::ENGLISH);
        render_plan(&site.view(3).unwrap(), Language::FARSI).unwrap();
        assert_eq!(i18n::active::current(), Some(Language::ENGLISH));
    }

    #[test]
    fn test_app_error_status() {
        let response = AppError::NotFound("gone".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

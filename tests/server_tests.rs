//! Integration tests for the HTTP surface.
//!
//! These load a site snapshot from disk the way the binary does and drive the
//! router in-process.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use dotahub::i18n::Language;
use dotahub::server::{router, AppState};
use dotahub::site::Site;

// ==================== Test Helpers ====================

fn site_json() -> Value {
    serde_json::json!({
        "pages": [
            {"id": 1, "parent": null, "type": "HomePage", "title": "Dota Hub", "slug": "home"},
            {"id": 2, "parent": 1, "type": "HeroesPage"},
            {"id": 3, "parent": 2, "type": "HeroPage", "hero": 10},
            {"id": 4, "parent": 2, "type": "HeroPage", "hero": 11},
            {"id": 5, "parent": 1, "type": "Dota2IntroductionPage",
             "english_translated": false, "farsi_translated": false},
            {"id": 6, "parent": 1, "type": "ShortVideoPage", "video": 20,
             "english_title": "<p>Rampage</p>"},
            {"id": 7, "parent": 1, "type": "ShortVideoPage", "video": 21,
             "farsi_title": "<p>رمپیج</p>"}
        ],
        "heroes": [
            {"id": 10, "name": "Axe", "farsi_name": "اکس", "ego": "Dire", "type": "Strength",
             "farsi_translated": true},
            {"id": 11, "name": "Anti-Mage", "farsi_name": "انتی مج", "ego": "Radiant",
             "type": "Agility"}
        ],
        "videos": [
            {"id": 20, "title": "Rampage", "url": "/media/rampage.mp4",
             "file": "media/rampage.mp4", "thumbnail": "media/rampage.png"},
            {"id": 21, "title": "Farsi Rampage", "url": "/media/rampage_fa.mp4",
             "file": "media/rampage_fa.mp4", "thumbnail": null}
        ],
        "logos": [
            {"id": 1, "enabled": true, "logo_image_dark": {"file": "logo_dark.png"}},
            {"id": 2, "enabled": true, "logo_image_dark": {"file": "other_dark.png"}}
        ],
        "languages": [
            {"name": "English", "farsi_name": "انگلیسی", "flag": null},
            {"name": "Persian", "farsi_name": "فارسی", "flag": {"file": "ir.png"}}
        ]
    })
}

/// Write the snapshot to a temp dir and load it through `Site::load`.
fn create_app(default_language: Language) -> (axum::Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("site.json");
    std::fs::write(&path, site_json().to_string()).expect("Failed to write site file");

    let site = Site::load(&path).expect("Failed to load site");
    let state = Arc::new(AppState {
        site,
        default_language,
    });
    (router(state), dir)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// ==================== Page Rendering Tests ====================

#[tokio::test]
async fn test_farsi_hero_page_renders_farsi() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, body) = get(app, "/fa/heroes/axe/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locale"], "fa");
    assert_eq!(body["template"], "home/fa/hero_page.html");
    assert_eq!(body["dir"], "rtl");
    assert_eq!(body["seo_title"], "Axe - اکس - Hero - هيرو - Dota2");
    assert_eq!(body["alternates"]["en"], "/en/heroes/axe/");
    assert_eq!(body["alternates"]["fa"], "/fa/heroes/axe/");
}

#[tokio::test]
async fn test_english_only_hero_falls_back_to_english() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, body) = get(app, "/fa/heroes/anti-mage/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locale"], "en");
    assert_eq!(body["template"], "home/en/hero_page.html");
    assert_eq!(body["dir"], "ltr");
}

#[tokio::test]
async fn test_home_page() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, body) = get(app, "/en/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page_id"], 1);
    assert_eq!(body["template"], "home/en/home_page.html");
}

#[tokio::test]
async fn test_every_page_carries_logo_and_language_switcher() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, body) = get(app, "/fa/heroes/axe/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["logo"]["id"], 1);
    assert_eq!(body["favicon"]["file"], "logo_dark.png");
    assert_eq!(body["languages"][0]["name"], "English");
    assert_eq!(body["languages"][1]["flag"]["file"], "ir.png");
    assert!(body.get("hero_groups").is_none());
}

#[tokio::test]
async fn test_heroes_page_lists_hero_groups() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, body) = get(app, "/en/heroes/").await;

    assert_eq!(status, StatusCode::OK);
    let groups = body["hero_groups"].as_array().unwrap();
    assert_eq!(groups.len(), 6);
    assert_eq!(groups[1]["ego"], "Dire");
    assert_eq!(groups[1]["attribute"], "Strength");
    assert_eq!(groups[1]["heroes"][0]["url"], "/en/heroes/axe/");
    assert_eq!(groups[2]["heroes"][0]["title"], "Anti-Mage");
}

#[tokio::test]
async fn test_farsi_only_short_video_is_reachable_at_its_url() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, api) = get(app.clone(), "/api/v2/pages/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(api["title"], "رمپیج");

    let farsi_url = api["farsi_url"].as_str().unwrap().to_string();
    assert!(!farsi_url.contains("//"));

    let (status, body) = get(app, &farsi_url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page_id"], 7);
    assert_eq!(body["template"], "home/fa/short_video_page.html");
    assert_eq!(body["dir"], "rtl");
}

#[tokio::test]
async fn test_untranslated_page_is_not_found() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, body) = get(app, "/en/dota2-introduction/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "Dota2IntroductionPage has no renderable translation"
    );
}

#[tokio::test]
async fn test_unknown_language_and_path_are_not_found() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, _) = get(app.clone(), "/es/heroes/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app, "/en/heroes/zeus/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_redirects_to_default_language() {
    let (app, _dir) = create_app(Language::FARSI);
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/fa/");
}

#[tokio::test]
async fn test_health() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ==================== API Tests ====================

#[tokio::test]
async fn test_api_hero_page() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, body) = get(app, "/api/v2/pages/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "HeroPage");
    assert_eq!(body["title"], "Axe");
    assert_eq!(body["english_url"], "/en/heroes/axe/");
    assert_eq!(body["farsi_url"], "/fa/heroes/axe/");
    assert_eq!(body["hero"]["farsi_name"], "اکس");
    assert!(body.get("video").is_none());
}

#[tokio::test]
async fn test_api_short_video_page() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, body) = get(app, "/api/v2/pages/6").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "rampage");
    assert_eq!(body["video"]["thumbnail"], "media/rampage.png");
    assert!(body.get("hero").is_none());
}

#[tokio::test]
async fn test_api_missing_page() {
    let (app, _dir) = create_app(Language::ENGLISH);
    let (status, _) = get(app, "/api/v2/pages/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

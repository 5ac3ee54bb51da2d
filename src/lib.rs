//! Bilingual (English/Farsi) Dota 2 content site.
//!
//! A site snapshot (page tree plus hero, video and logo snippets) is served
//! per language: each request resolves which translation of a page to render,
//! with which template, reading direction and SEO metadata.

pub mod config;
pub mod error;
pub mod i18n;
pub mod server;
pub mod site;
pub mod text;

//! Per-request SEO title and search description.
//!
//! These follow the language the request came in, not the translation that
//! ends up rendered, so a Farsi visitor on an English-only page still gets
//! Farsi metadata.

use serde::Serialize;

use crate::i18n::Language;
use crate::site::{PageKind, PageView};
use crate::text::html_to_str;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seo {
    pub seo_title: String,
    pub search_description: String,
}

impl Seo {
    fn new(seo_title: impl Into<String>, search_description: impl Into<String>) -> Self {
        Self {
            seo_title: seo_title.into(),
            search_description: search_description.into(),
        }
    }
}

pub fn seo_for(view: &PageView<'_>, language: Language) -> Seo {
    let farsi = language == Language::FARSI;

    match &view.page.kind {
        PageKind::HomePage => Seo::new(view.page.title.clone(), ""),
        PageKind::HeroesPage if farsi => Seo::new(
            "تمام هيرو هاى دوتا - All Dota2 Heroes",
            "تمام هيرو هاى دوتا 2",
        ),
        PageKind::HeroesPage => Seo::new(
            "All Dota2 Heroes",
            "Every thing you need to know about Dota2 Heroes.",
        ),
        PageKind::HeroPage { .. } => match view.hero() {
            Some(hero) if farsi => Seo::new(
                format!(
                    "{} - {} - Hero - هيرو - Dota2",
                    hero.name, hero.farsi_name
                ),
                format!(
                    "هر آنچه كه در مورد {} در دوتا بايد بدانيد. شامل مطالب آموزشى، تمام قابليت ها و جديد ترين تغييرات",
                    hero.farsi_name
                ),
            ),
            Some(hero) => Seo::new(
                format!("{} - Hero - Dota2", hero.name),
                format!(
                    "Every thing you need to know about Dota2 Hero named {}.",
                    hero.name
                ),
            ),
            None => Seo::new(view.page.title.clone(), ""),
        },
        PageKind::Dota2IntroductionPage { .. } if farsi => Seo::new(
            "Dota2 - رايگان بازى كنيد",
            "محبوب ترين بازى استيم. هر روز ميليون ها بازيكن از سراسر جهان، با انتخاب يكى از هيروها وارد نبرد ميشوند. مهم نيست مبتدى باشيد يا حرفه اى. هميشه چيزى براى كشف كردن هست.",
        ),
        PageKind::Dota2IntroductionPage { .. } => Seo::new(
            "Dota2 - Play for Free",
            "The most-played game on Steam. Every day, millions of players worldwide enter battle as one of over a hundred Dota heroes. And no matter if it's their 10th hour of play or 1,000th, there's always something new to discover.",
        ),
        PageKind::ShortVideoPage {
            english_title,
            farsi_title,
            ..
        } => {
            let english = html_to_str(english_title, false);
            let farsi_text = html_to_str(farsi_title, false);
            let title = if farsi && !farsi_text.is_empty() {
                farsi_text
            } else {
                english
            };
            Seo::new(format!("{} - Dota2", title), title)
        }
    }
}

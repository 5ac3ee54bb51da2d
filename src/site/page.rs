//! Page kinds and the rules each kind carries: where it may live in the tree,
//! how its title and slug are derived, and which translations it has.

use serde::{Deserialize, Serialize};

use crate::site::snippets::{Hero, Image, Video};
use crate::text::{html_to_str, slugify};

/// Quotation block of an introduction section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    pub name: String,
    #[serde(default)]
    pub farsi_name: String,
    pub text: String,
    #[serde(default)]
    pub farsi_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPlace {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroductionSection {
    pub background: Option<Image>,
    pub text_place: TextPlace,
    pub title: String,
    #[serde(default)]
    pub farsi_title: String,
    pub description: String,
    #[serde(default)]
    pub farsi_description: String,
    pub quotation: Option<Quotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PageKind {
    HomePage,
    HeroesPage,
    HeroPage {
        hero: u32,
    },
    Dota2IntroductionPage {
        #[serde(default)]
        sections: Vec<IntroductionSection>,
        #[serde(default)]
        english_translated: bool,
        #[serde(default)]
        farsi_translated: bool,
    },
    ShortVideoPage {
        video: u32,
        /// Rich text
        #[serde(default)]
        english_title: String,
        /// Rich text
        #[serde(default)]
        farsi_title: String,
        #[serde(default)]
        thumbnail: Option<Image>,
    },
}

impl PageKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            PageKind::HomePage => "HomePage",
            PageKind::HeroesPage => "HeroesPage",
            PageKind::HeroPage { .. } => "HeroPage",
            PageKind::Dota2IntroductionPage { .. } => "Dota2IntroductionPage",
            PageKind::ShortVideoPage { .. } => "ShortVideoPage",
        }
    }

    /// Whether a page of this kind may sit directly under `parent`.
    /// `None` means the site root, which only a home page may be.
    pub fn allowed_under(&self, parent: Option<&PageKind>) -> bool {
        match (self, parent) {
            (PageKind::HomePage, None) => true,
            (
                PageKind::HeroesPage
                | PageKind::Dota2IntroductionPage { .. }
                | PageKind::ShortVideoPage { .. },
                Some(PageKind::HomePage),
            ) => true,
            (PageKind::HeroPage { .. }, Some(PageKind::HeroesPage)) => true,
            _ => false,
        }
    }

    /// (english, farsi) translation flags. Hero pages take theirs from the hero.
    pub fn translation_flags(&self, hero: Option<&Hero>) -> (bool, bool) {
        match self {
            PageKind::HomePage | PageKind::HeroesPage => (true, true),
            PageKind::HeroPage { .. } => hero
                .map(|hero| (hero.english_translated, hero.farsi_translated))
                .unwrap_or((false, false)),
            PageKind::Dota2IntroductionPage {
                english_translated,
                farsi_translated,
                ..
            } => (*english_translated, *farsi_translated),
            PageKind::ShortVideoPage {
                english_title,
                farsi_title,
                ..
            } => (
                !html_to_str(english_title, false).is_empty(),
                !html_to_str(farsi_title, false).is_empty(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: u32,
    pub parent: Option<u32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default = "default_live")]
    pub live: bool,
    #[serde(default)]
    pub search_image: Option<Image>,
    #[serde(flatten)]
    pub kind: PageKind,
}

fn default_live() -> bool {
    true
}

impl Page {
    /// Derive title, slug and search image from the page's content, as the
    /// admin does before every save. Home pages keep what they were given.
    ///
    /// A short video is titled by its English title, then its Farsi title,
    /// then the title of the video itself.
    pub fn clean(&mut self, hero: Option<&Hero>, video: Option<&Video>) {
        let title = match &self.kind {
            PageKind::HomePage => return,
            PageKind::HeroesPage => "Heroes".to_string(),
            PageKind::HeroPage { .. } => match hero {
                Some(hero) => {
                    self.search_image = hero.horizontal_image.clone();
                    hero.name.clone()
                }
                None => return,
            },
            PageKind::Dota2IntroductionPage { .. } => "Dota2 Introduction".to_string(),
            PageKind::ShortVideoPage {
                english_title,
                farsi_title,
                ..
            } => {
                let title = [english_title, farsi_title]
                    .into_iter()
                    .map(|rich| html_to_str(rich, false))
                    .find(|plain| !plain.is_empty())
                    .or_else(|| video.map(|video| video.title.trim().to_string()));
                match title {
                    Some(title) => title,
                    None => return,
                }
            }
        };
        self.slug = slugify(&title);
        self.title = title;
    }
}

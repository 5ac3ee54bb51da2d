//! Reusable content objects referenced by pages: heroes, logos, languages
//! and videos.

use serde::{Deserialize, Serialize};
use tracing::info;

// ==================== Heroes ====================

/// Faction a hero fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ego {
    Radiant,
    Dire,
}

impl Ego {
    pub const ALL: [Ego; 2] = [Ego::Radiant, Ego::Dire];
}

/// Primary attribute, shown as the hero type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroAttribute {
    Strength,
    Agility,
    Intelligence,
}

impl HeroAttribute {
    pub const ALL: [HeroAttribute; 3] = [
        HeroAttribute::Strength,
        HeroAttribute::Agility,
        HeroAttribute::Intelligence,
    ];
}

/// Attribute value at level one plus gain per level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerLevel {
    pub base: i32,
    pub per_level: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Damage {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStats {
    pub intelligence: PerLevel,
    pub agility: PerLevel,
    pub strength: PerLevel,
    pub damage: Damage,
    pub move_speed: i32,
    pub armor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub image: Option<Image>,
    /// Rich text
    pub summary: String,
    /// Rich text
    #[serde(default)]
    pub farsi_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    pub farsi_name: String,
    pub ego: Option<Ego>,
    #[serde(rename = "type")]
    pub attribute: Option<HeroAttribute>,
    #[serde(default)]
    pub attack_types: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub stats: Option<HeroStats>,
    pub horizontal_image: Option<Image>,
    pub vertical_image: Option<Image>,
    /// Rich text
    #[serde(default)]
    pub biography: String,
    /// Rich text
    #[serde(default)]
    pub farsi_biography: String,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default = "default_true")]
    pub english_translated: bool,
    #[serde(default)]
    pub farsi_translated: bool,
}

fn default_true() -> bool {
    true
}

impl Hero {
    /// Titles hero and ability images after the hero, as done on every save.
    pub fn title_images(&mut self) {
        if self.name.is_empty() {
            return;
        }

        let hero_title = format!("Dota 2 Hero named {}", self.name);
        for image in [&mut self.horizontal_image, &mut self.vertical_image]
            .into_iter()
            .flatten()
        {
            image.title = hero_title.clone();
        }

        for ability in &mut self.abilities {
            if ability.name.is_empty() {
                continue;
            }
            if let Some(image) = ability.image.as_mut() {
                image.title = format!("{} ability of {}", ability.name, self.name);
            }
        }
    }
}

// ==================== Images ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub title: String,
    pub file: String,
}

// ==================== Logos ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub id: u32,
    pub logo_image_light: Option<Image>,
    pub logo_image_dark: Option<Image>,
    pub text_image_light: Option<Image>,
    pub text_image_dark: Option<Image>,
    #[serde(default)]
    pub enabled: bool,
}

impl Logo {
    pub fn favicon(&self) -> Option<&Image> {
        self.logo_image_dark.as_ref()
    }
}

/// Enable logo `id` and disable every other one. Returns false if no logo
/// has that id, in which case nothing changes.
pub fn enable_logo(logos: &mut [Logo], id: u32) -> bool {
    if !logos.iter().any(|logo| logo.id == id) {
        return false;
    }
    for logo in logos.iter_mut() {
        logo.enabled = logo.id == id;
    }
    info!("Logo-{} enabled", id);
    true
}

/// The logo pages show, if one is enabled.
pub fn active_logo(logos: &[Logo]) -> Option<&Logo> {
    logos.iter().find(|logo| logo.enabled)
}

// ==================== Languages ====================

/// Language shown in the site's language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSnippet {
    /// English name, e.g. "Persian"
    pub name: String,
    pub farsi_name: String,
    pub flag: Option<Image>,
}

// ==================== Videos ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub url: String,
    /// Path of the uploaded video file
    pub file: String,
    pub thumbnail: Option<String>,
}

/// Shape a video takes in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoField<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub thumbnail: Option<&'a str>,
}

impl Video {
    pub fn api_field(&self) -> VideoField<'_> {
        VideoField {
            url: &self.url,
            title: &self.title,
            thumbnail: self.thumbnail.as_deref(),
        }
    }
}

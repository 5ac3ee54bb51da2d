//! In-memory snapshot of the site: page tree plus the snippets pages refer to.
//!
//! The snapshot is loaded once from a JSON export, validated, and cleaned
//! (titles and slugs derived) before it is served.

pub mod page;
pub mod seo;
pub mod snippets;
pub mod video;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SiteError;
use crate::i18n::{Language, LocaleUrlBuilder, Translatable};

pub use page::{Page, PageKind};
pub use snippets::{Ego, Hero, HeroAttribute, LanguageSnippet, Logo, Video};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub heroes: Vec<Hero>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub logos: Vec<Logo>,
    #[serde(default)]
    pub languages: Vec<LanguageSnippet>,
}

impl Site {
    /// Load, validate and clean a site export.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site file {}", path.display()))?;
        let site: Site = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse site file {}", path.display()))?;
        let site = site.prepare()?;
        info!(
            "Loaded site with {} pages and {} heroes from {}",
            site.pages.len(),
            site.heroes.len(),
            path.display()
        );
        Ok(site)
    }

    /// Validate the tree and derive titles, slugs and image titles.
    pub fn prepare(mut self) -> Result<Self, SiteError> {
        self.validate()?;

        for hero in &mut self.heroes {
            hero.title_images();
        }

        let heroes: HashMap<u32, &Hero> = self.heroes.iter().map(|h| (h.id, h)).collect();
        let videos: HashMap<u32, &Video> = self.videos.iter().map(|v| (v.id, v)).collect();
        for page in &mut self.pages {
            let (hero, video) = match page.kind {
                PageKind::HeroPage { hero } => (heroes.get(&hero).copied(), None),
                PageKind::ShortVideoPage { video, .. } => (None, videos.get(&video).copied()),
                _ => (None, None),
            };
            page.clean(hero, video);
        }
        self.validate_slugs()?;

        let enabled: Vec<u32> = self
            .logos
            .iter()
            .filter(|logo| logo.enabled)
            .map(|logo| logo.id)
            .collect();
        if enabled.len() > 1 {
            warn!(
                "{} logos are enabled, keeping only Logo-{}",
                enabled.len(),
                enabled[0]
            );
            snippets::enable_logo(&mut self.logos, enabled[0]);
        }

        Ok(self)
    }

    /// Every page below the root needs a slug, unique among its siblings,
    /// or its URL would not lead back to it.
    fn validate_slugs(&self) -> Result<(), SiteError> {
        let mut seen: HashSet<(u32, &str)> = HashSet::new();
        for page in &self.pages {
            let parent = match page.parent {
                Some(parent) => parent,
                None => continue,
            };
            if page.slug.is_empty() {
                return Err(SiteError::EmptySlug(page.id));
            }
            if !seen.insert((parent, page.slug.as_str())) {
                return Err(SiteError::DuplicateSlug {
                    parent,
                    slug: page.slug.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), SiteError> {
        let mut by_id: HashMap<u32, &Page> = HashMap::new();
        for page in &self.pages {
            if by_id.insert(page.id, page).is_some() {
                return Err(SiteError::DuplicatePage(page.id));
            }
        }

        let mut root: Option<u32> = None;
        for page in &self.pages {
            let parent: Option<&Page> = match page.parent {
                Some(parent_id) => Some(by_id.get(&parent_id).copied().ok_or(
                    SiteError::MissingParent {
                        page: page.id,
                        parent: parent_id,
                    },
                )?),
                None => {
                    if let Some(existing) = root {
                        return Err(SiteError::MultipleRoots(existing, page.id));
                    }
                    root = Some(page.id);
                    None
                }
            };

            let parent_kind = parent.map(|p| &p.kind);
            if !page.kind.allowed_under(parent_kind) {
                return Err(SiteError::InvalidParent {
                    page: page.id,
                    child: page.kind.type_name(),
                    parent: parent_kind.map(PageKind::type_name).unwrap_or("the site root"),
                });
            }

            match page.kind {
                PageKind::HeroPage { hero } if self.hero(hero).is_none() => {
                    return Err(SiteError::MissingHero { page: page.id, hero });
                }
                PageKind::ShortVideoPage { video, .. } if self.video(video).is_none() => {
                    return Err(SiteError::MissingVideo { page: page.id, video });
                }
                _ => {}
            }
        }

        if root.is_none() {
            return Err(SiteError::NoRoot);
        }
        Ok(())
    }

    pub fn hero(&self, id: u32) -> Option<&Hero> {
        self.heroes.iter().find(|hero| hero.id == id)
    }

    pub fn video(&self, id: u32) -> Option<&Video> {
        self.videos.iter().find(|video| video.id == id)
    }

    pub fn page(&self, id: u32) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn root(&self) -> Option<&Page> {
        self.pages.iter().find(|page| page.parent.is_none())
    }

    /// Live children of `id`, in snapshot order.
    pub fn children(&self, id: u32) -> impl Iterator<Item = &Page> + '_ {
        self.pages
            .iter()
            .filter(move |page| page.parent == Some(id) && page.live)
    }

    /// The `Language` snippet by English name, e.g. "Persian".
    pub fn language_snippet(&self, language: Language) -> Option<&LanguageSnippet> {
        self.languages
            .iter()
            .find(|snippet| snippet.name == language.name())
    }

    pub fn active_logo(&self) -> Option<&Logo> {
        snippets::active_logo(&self.logos)
    }

    pub fn view(&self, id: u32) -> Option<PageView<'_>> {
        self.page(id).map(|page| PageView::new(self, page))
    }

    /// Follow slugs from the root. An empty path is the home page.
    pub fn find_by_path(&self, path: &str) -> Option<PageView<'_>> {
        let mut current = self.root().filter(|root| root.live)?;
        for slug in path.split('/').filter(|segment| !segment.is_empty()) {
            current = self.children(current.id).find(|child| child.slug == slug)?;
        }
        Some(PageView::new(self, current))
    }

    /// Live hero pages whose hero matches `ego` and `attribute`, by hero name.
    pub fn hero_pages(&self, ego: Ego, attribute: HeroAttribute) -> Vec<PageView<'_>> {
        let mut views: Vec<PageView<'_>> = self
            .pages
            .iter()
            .filter(|page| page.live)
            .map(|page| PageView::new(self, page))
            .filter(|view| {
                view.hero()
                    .map(|hero| hero.ego == Some(ego) && hero.attribute == Some(attribute))
                    .unwrap_or(false)
            })
            .collect();
        views.sort_by(|a, b| a.page.title.cmp(&b.page.title));
        views
    }

    /// Slugs from below the root down to `page`.
    fn slug_path<'a>(&'a self, page: &'a Page) -> Vec<&'a str> {
        let mut slugs = Vec::new();
        let mut current = page;
        while let Some(parent_id) = current.parent {
            slugs.push(current.slug.as_str());
            match self.page(parent_id) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        slugs.reverse();
        slugs
    }
}

/// A page together with the site it lives in.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub site: &'a Site,
    pub page: &'a Page,
}

impl<'a> PageView<'a> {
    pub fn new(site: &'a Site, page: &'a Page) -> Self {
        Self { site, page }
    }

    pub fn hero(&self) -> Option<&'a Hero> {
        match self.page.kind {
            PageKind::HeroPage { hero } => self.site.hero(hero),
            _ => None,
        }
    }

    pub fn video(&self) -> Option<&'a Video> {
        match self.page.kind {
            PageKind::ShortVideoPage { video, .. } => self.site.video(video),
            _ => None,
        }
    }

    /// The page's URL under `language`: `/<code>/` then the slug path.
    pub fn url(&self, language: Language) -> String {
        let slugs = self.site.slug_path(self.page);
        if slugs.is_empty() {
            format!("/{}/", language.code())
        } else {
            format!("/{}/{}/", language.code(), slugs.join("/"))
        }
    }
}

impl Translatable for PageView<'_> {
    fn english_translated(&self) -> bool {
        self.page.kind.translation_flags(self.hero()).0
    }

    fn farsi_translated(&self) -> bool {
        self.page.kind.translation_flags(self.hero()).1
    }

    fn type_name(&self) -> &str {
        self.page.kind.type_name()
    }
}

impl LocaleUrlBuilder for PageView<'_> {
    fn build_url(&self, language: Language) -> Result<String> {
        if !self.page.live {
            anyhow::bail!("page {} is not live", self.page.id);
        }
        Ok(self.url(language))
    }
}

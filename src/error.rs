use thiserror::Error;

/// Inconsistencies in a site snapshot, reported when it is loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("duplicate page id {0}")]
    DuplicatePage(u32),

    #[error("site has no root page")]
    NoRoot,

    #[error("site has more than one root page ({0} and {1})")]
    MultipleRoots(u32, u32),

    #[error("page {page} refers to missing parent {parent}")]
    MissingParent { page: u32, parent: u32 },

    #[error("{child} (page {page}) cannot be placed under {parent}")]
    InvalidParent {
        page: u32,
        child: &'static str,
        parent: &'static str,
    },

    #[error("page {page} refers to missing hero {hero}")]
    MissingHero { page: u32, hero: u32 },

    #[error("page {page} refers to missing video {video}")]
    MissingVideo { page: u32, video: u32 },

    #[error("page {0} has an empty slug")]
    EmptySlug(u32),

    #[error("slug {slug:?} is used twice under page {parent}")]
    DuplicateSlug { parent: u32, slug: String },

    #[error("page {0} not found")]
    PageNotFound(u32),
}

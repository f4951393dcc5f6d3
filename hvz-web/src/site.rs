//! Web-side access to the site data.
//!
//! Re-exports the core content types and keeps one immutable copy of the
//! embedded data per thread, loaded on first use.

use std::rc::Rc;

pub use hvz_core::*;

/// Loaded site data shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteData {
    pub resources: Rc<[ResourceLink]>,
    pub content: Rc<SiteContent>,
}

impl From<Site> for SiteData {
    fn from(site: Site) -> Self {
        Self {
            resources: Rc::from(site.resources.0),
            content: Rc::new(site.content),
        }
    }
}

/// Load through `loader`, falling back to empty content when it fails.
/// Rendering never fails; a broken data file only empties the page.
pub fn load_or_default<L: ContentLoader>(loader: &L) -> SiteData {
    match Site::load(loader) {
        Ok(site) => SiteData::from(site),
        Err(err) => {
            log::error!("Failed to load site content: {err}");
            SiteData::default()
        }
    }
}

thread_local! {
    static CURRENT: SiteData = load_or_default(&EmbeddedContent);
}

#[must_use]
pub fn current() -> SiteData {
    CURRENT.with(Clone::clone)
}

#[must_use]
pub fn resources() -> Rc<[ResourceLink]> {
    CURRENT.with(|site| Rc::clone(&site.resources))
}

#[must_use]
pub fn content() -> Rc<SiteContent> {
    CURRENT.with(|site| Rc::clone(&site.content))
}

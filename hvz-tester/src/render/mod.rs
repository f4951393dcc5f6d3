//! Server-side renders of every page, for checks that need no browser.

use anyhow::Result;
use futures::executor::block_on;
use hvz_core::{ResourceLink, SiteContent};
use hvz_web::pages::{HomePage, HomePageProps, NotFound, ResourcesPage, ResourcesPageProps};
use hvz_web::site;
use regex::Regex;
use std::rc::Rc;
use yew::{BaseComponent, LocalServerRenderer};

const OPENING_TAG: &str = r"<([a-z][a-z0-9]*)(\s[^>]*)?>";
const ATTRIBUTE: &str = r#"\s([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:="([^"]*)")?"#;

/// Markup of each page plus the data it was rendered from.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub home: String,
    pub resources_page: String,
    pub not_found: String,
    pub resources: Vec<ResourceLink>,
    pub content: SiteContent,
}

fn render<C: BaseComponent>(props: C::Properties) -> String {
    block_on(
        LocalServerRenderer::<C>::with_props(props)
            .hydratable(false)
            .render(),
    )
}

impl RenderedSite {
    /// Render with the embedded site data.
    pub fn render_embedded() -> Self {
        Self::render_with(site::resources(), site::content())
    }

    pub fn render_with(resources: Rc<[ResourceLink]>, content: Rc<SiteContent>) -> Self {
        let home = render::<HomePage>(HomePageProps {
            content: Rc::clone(&content),
            resources: Rc::clone(&resources),
        });
        let resources_page = render::<ResourcesPage>(ResourcesPageProps {
            resources: Rc::clone(&resources),
            content: Rc::clone(&content),
        });
        let not_found = render::<NotFound>(());
        log::debug!(
            "rendered pages: home {} bytes, resources {} bytes",
            home.len(),
            resources_page.len()
        );
        Self {
            home,
            resources_page,
            not_found,
            resources: resources.to_vec(),
            content: SiteContent::clone(&content),
        }
    }
}

/// One opening tag and its attributes, values unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    attrs: Vec<(String, Option<String>)>,
}

impl Tag {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(key, _)| key == name)
    }
}

/// Text as it appears in rendered markup.
pub fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape(raw: &str) -> String {
    raw.replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Opening tags in document order.
pub fn tags(html: &str) -> Result<Vec<Tag>> {
    let opening = Regex::new(OPENING_TAG)?;
    let attribute = Regex::new(ATTRIBUTE)?;
    let parsed = opening
        .captures_iter(html)
        .map(|caps| {
            let name = caps[1].to_string();
            let attrs = caps
                .get(2)
                .map(|body| {
                    attribute
                        .captures_iter(body.as_str())
                        .map(|attr| {
                            let value = attr.get(2).map(|v| unescape(v.as_str()));
                            (attr[1].to_string(), value)
                        })
                        .collect()
                })
                .unwrap_or_default();
            Tag { name, attrs }
        })
        .collect();
    Ok(parsed)
}

/// Opening tags carrying `attr`, in document order.
pub fn tags_with(html: &str, attr: &str) -> Result<Vec<Tag>> {
    Ok(tags(html)?
        .into_iter()
        .filter(|tag| tag.has_attr(attr))
        .collect())
}

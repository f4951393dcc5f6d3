//! Authoring checks for the embedded data files. Rendering never calls these;
//! they back the tester's `content` scenario and the crate's data tests.

use std::collections::HashSet;

use thiserror::Error;

use crate::content::{Block, SiteContent};
use crate::resources::ResourceLink;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIssue {
    #[error("section id `{0}` is used more than once")]
    DuplicateSectionId(String),
    #[error("section `{0}` has no content")]
    EmptySection(String),
    #[error("notice panel has no content")]
    EmptyNotice,
    #[error("resource list is empty")]
    EmptyResourceList,
    #[error("resource `{0}` is listed more than once")]
    DuplicateResourceKey(String),
    #[error("`{label}` links to `{href}`, which is not an absolute http(s) or mailto URL")]
    InvalidHref { label: String, href: String },
}

/// True for absolute `http(s)://` URLs and `mailto:` addresses.
#[must_use]
pub fn is_external_href(href: &str) -> bool {
    regex::Regex::new(r"^(https?://[^\s/]+\S*|mailto:[^\s@]+@[^\s@]+)$")
        .map(|re| re.is_match(href))
        .unwrap_or(false)
}

fn check_href(label: &str, href: &str, issues: &mut Vec<ContentIssue>) {
    if !is_external_href(href) {
        issues.push(ContentIssue::InvalidHref {
            label: label.to_string(),
            href: href.to_string(),
        });
    }
}

fn check_blocks(blocks: &[Block], issues: &mut Vec<ContentIssue>) {
    for text in blocks.iter().flat_map(Block::texts) {
        for (label, href) in text.links() {
            check_href(label, href, issues);
        }
    }
}

fn blocks_empty(blocks: &[Block]) -> bool {
    blocks
        .iter()
        .flat_map(Block::texts)
        .all(crate::content::RichText::is_empty)
}

#[must_use]
pub fn validate_resources(links: &[ResourceLink]) -> Vec<ContentIssue> {
    let mut issues = Vec::new();
    if links.is_empty() {
        issues.push(ContentIssue::EmptyResourceList);
    }
    let mut seen = HashSet::new();
    for link in links {
        let key = link.display_key();
        if !seen.insert(key.clone()) {
            issues.push(ContentIssue::DuplicateResourceKey(key));
        }
        check_href(&link.label, &link.href, &mut issues);
    }
    issues
}

impl SiteContent {
    /// Collect every authoring problem in the page copy.
    #[must_use]
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        check_href(&self.hero.cta.text, &self.hero.cta.href, &mut issues);

        if blocks_empty(&self.notice.blocks) {
            issues.push(ContentIssue::EmptyNotice);
        }
        check_blocks(&self.notice.blocks, &mut issues);

        let mut ids = HashSet::new();
        for section in self.sections() {
            if !ids.insert(section.id.as_str()) {
                issues.push(ContentIssue::DuplicateSectionId(section.id.clone()));
            }
            if blocks_empty(&section.blocks) {
                issues.push(ContentIssue::EmptySection(section.id.clone()));
            }
            check_blocks(&section.blocks, &mut issues);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Inline, RichText, Section};
    use crate::resources::ResourceIcon;

    #[test]
    fn external_href_accepts_http_and_mailto_only() {
        assert!(is_external_href("https://docs.google.com/forms/d/e/x/viewform"));
        assert!(is_external_href("http://example.com"));
        assert!(is_external_href("mailto:community.csa@gmail.com"));
        assert!(!is_external_href("/resources"));
        assert!(!is_external_href("docs.google.com"));
        assert!(!is_external_href("https://"));
        assert!(!is_external_href(""));
    }

    #[test]
    fn resource_checks_flag_duplicates_and_bad_links() {
        let link = ResourceLink::new("A", "B", "https://a.example", ResourceIcon::Link);
        let bad = ResourceLink::new("C", "D", "not a url", ResourceIcon::Folder);
        let issues = validate_resources(&[link.clone(), link, bad]);
        assert_eq!(
            issues,
            vec![
                ContentIssue::DuplicateResourceKey("A-B".into()),
                ContentIssue::InvalidHref {
                    label: "C".into(),
                    href: "not a url".into()
                },
            ]
        );
        assert_eq!(validate_resources(&[]), vec![ContentIssue::EmptyResourceList]);
    }

    #[test]
    fn site_checks_cover_sections_and_inline_links() {
        let mut content = SiteContent::default();
        content.hero.cta.href = "https://forms.example".into();
        content.notice.blocks = vec![Block::paragraph(RichText(vec![Inline::Link {
            link: "email".into(),
            href: "community".into(),
        }]))];
        content.rule_sections = vec![
            Section::new("basic", "BASIC", vec![Block::paragraph("x")]),
            Section::new("basic", "AGAIN", vec![]),
        ];

        let issues = content.validate();
        assert!(issues.contains(&ContentIssue::InvalidHref {
            label: "email".into(),
            href: "community".into()
        }));
        assert!(issues.contains(&ContentIssue::DuplicateSectionId("basic".into())));
        assert!(issues.contains(&ContentIssue::EmptySection("basic".into())));
        assert!(!issues.contains(&ContentIssue::EmptyNotice));
    }
}

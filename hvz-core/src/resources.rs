use serde::{Deserialize, Serialize};

/// Glyph shown on a resource card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceIcon {
    Target,
    Users,
    Skull,
    Scroll,
    FileText,
    Link,
    Folder,
}

/// An outbound link to a third-party spreadsheet, document or form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub label: String,
    pub title: String,
    pub href: String,
    pub icon: ResourceIcon,
}

impl ResourceLink {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
        icon: ResourceIcon,
    ) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            href: href.into(),
            icon,
        }
    }

    /// Key used when rendering the card list.
    #[must_use]
    pub fn display_key(&self) -> String {
        format!("{}-{}", self.label, self.title)
    }

    #[must_use]
    pub fn aria_label(&self) -> String {
        format!("{}: {}", self.label, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceList(pub Vec<ResourceLink>);

impl ResourceList {
    /// Parse the ordered resource list.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an array of resource entries.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ResourceLink] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResourceLink> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ResourceList {
    type Item = &'a ResourceLink;
    type IntoIter = std::slice::Iter<'a, ResourceLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_labels_join_label_and_title() {
        let link = ResourceLink::new(
            "Points List",
            "Family Standings",
            "https://example.com/points",
            ResourceIcon::Target,
        );
        assert_eq!(link.display_key(), "Points List-Family Standings");
        assert_eq!(link.aria_label(), "Points List: Family Standings");
    }

    #[test]
    fn parses_kebab_case_icons_in_declared_order() {
        let json = r#"[
            {"label": "B", "title": "second?", "href": "https://b.example", "icon": "file-text"},
            {"label": "A", "title": "first?", "href": "https://a.example", "icon": "skull"}
        ]"#;
        let list = ResourceList::from_json(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].label, "B");
        assert_eq!(list.as_slice()[0].icon, ResourceIcon::FileText);
        assert_eq!(list.as_slice()[1].icon, ResourceIcon::Skull);
    }

    #[test]
    fn rejects_unknown_icon() {
        let json = r#"[{"label": "A", "title": "T", "href": "https://a", "icon": "rocket"}]"#;
        assert!(ResourceList::from_json(json).is_err());
    }
}

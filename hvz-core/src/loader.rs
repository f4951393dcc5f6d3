use serde::de::DeserializeOwned;

use crate::content::SiteContent;
use crate::error::ContentError;
use crate::resources::ResourceList;

const RESOURCES_DATA: &str = include_str!("../../hvz-web/static/assets/data/resources.json");
const SITE_DATA: &str = include_str!("../../hvz-web/static/assets/data/site.json");

/// Source of the authored site data.
/// Platform-specific implementations may fetch, embed or stub it.
pub trait ContentLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a named content document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unknown or cannot be parsed.
    fn load_config<T>(&self, name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned;

    /// Load the ordered resource link list.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource list cannot be loaded or parsed.
    fn load_resources(&self) -> Result<ResourceList, Self::Error> {
        self.load_config("resources")
    }

    /// Load the page copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the site content cannot be loaded or parsed.
    fn load_site(&self) -> Result<SiteContent, Self::Error> {
        self.load_config("site")
    }
}

/// Loader backed by the data files compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedContent;

impl EmbeddedContent {
    #[must_use]
    pub fn raw(name: &str) -> Option<&'static str> {
        match name {
            "resources" => Some(RESOURCES_DATA),
            "site" => Some(SITE_DATA),
            _ => None,
        }
    }
}

impl ContentLoader for EmbeddedContent {
    type Error = ContentError;

    fn load_config<T>(&self, name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = Self::raw(name).ok_or_else(|| ContentError::UnknownContent(name.to_string()))?;
        serde_json::from_str(json).map_err(ContentError::Json)
    }
}

/// Everything a page needs, loaded together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Site {
    pub resources: ResourceList,
    pub content: SiteContent,
}

impl Site {
    /// Load resources and copy through the given loader.
    ///
    /// # Errors
    ///
    /// Returns the first loader error encountered.
    pub fn load<L: ContentLoader>(loader: &L) -> Result<Self, L::Error> {
        Ok(Self {
            resources: loader.load_resources()?,
            content: loader.load_site()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapLoader {
        docs: HashMap<String, String>,
        requests: RefCell<Vec<String>>,
    }

    impl ContentLoader for MapLoader {
        type Error = ContentError;

        fn load_config<T>(&self, name: &str) -> Result<T, Self::Error>
        where
            T: DeserializeOwned,
        {
            self.requests.borrow_mut().push(name.to_string());
            let json = self
                .docs
                .get(name)
                .ok_or_else(|| ContentError::UnknownContent(name.to_string()))?;
            Ok(serde_json::from_str(json)?)
        }
    }

    #[test]
    fn embedded_loader_rejects_unknown_names() {
        let err = EmbeddedContent
            .load_config::<serde_json::Value>("weather")
            .unwrap_err();
        assert!(matches!(err, ContentError::UnknownContent(name) if name == "weather"));
    }

    #[test]
    fn site_load_uses_resources_and_site_documents() {
        let mut loader = MapLoader::default();
        loader.docs.insert(
            "resources".into(),
            r#"[{"label":"L","title":"T","href":"https://x.example","icon":"link"}]"#.into(),
        );
        loader.docs.insert(
            "site".into(),
            r#"{"hero":{"title":"H","tagline":"t","cta":{"text":"Go","href":"https://f.example"}},
                "notice":{"title":"N","blocks":[]},"rule_sections":[],"safe_zones":[],"footer":"F"}"#
                .into(),
        );
        let site = Site::load(&loader).unwrap();
        assert_eq!(site.resources.len(), 1);
        assert_eq!(site.content.footer, "F");
        assert_eq!(*loader.requests.borrow(), vec!["resources", "site"]);
    }

    #[test]
    fn site_load_surfaces_parse_errors() {
        let mut loader = MapLoader::default();
        loader.docs.insert("resources".into(), "{not json".into());
        assert!(matches!(Site::load(&loader), Err(ContentError::Json(_))));
    }
}

//! Structured page copy: hero, the always-visible notice, rule sections and
//! safe-zone sections. Everything here is authored data; nothing is evaluated.

use serde::{Deserialize, Serialize};

use crate::disclosure::Tone;

/// One inline run of text inside a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inline {
    Text(String),
    Strong { strong: String },
    Em { em: String },
    Link { link: String, href: String },
}

impl Inline {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Strong { strong } => strong,
            Self::Em { em } => em,
            Self::Link { link, .. } => link,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RichTextRepr {
    Plain(String),
    Pieces(Vec<Inline>),
}

/// Text that may be authored either as a bare string or as inline pieces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RichTextRepr")]
pub struct RichText(pub Vec<Inline>);

impl From<RichTextRepr> for RichText {
    fn from(repr: RichTextRepr) -> Self {
        match repr {
            RichTextRepr::Plain(text) => Self(vec![Inline::Text(text)]),
            RichTextRepr::Pieces(pieces) => Self(pieces),
        }
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self(vec![Inline::Text(text.to_string())])
    }
}

impl RichText {
    #[must_use]
    pub fn pieces(&self) -> &[Inline] {
        &self.0
    }

    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.0.iter().map(Inline::text).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|piece| piece.text().trim().is_empty())
    }

    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|piece| match piece {
            Inline::Link { link, href } => Some((link.as_str(), href.as_str())),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    #[default]
    Normal,
    Strong,
    Alert,
    Fine,
    Italic,
    Banner,
}

impl TextStyle {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Strong => "font-bold",
            Self::Alert => "font-bold text-rose-700",
            Self::Fine => "text-xs text-neutral-600",
            Self::Italic => "italic",
            Self::Banner => "font-bold text-lg text-rose-700 text-center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    #[default]
    Arrow,
    Bullet,
}

impl ListMarker {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Arrow => ">",
            Self::Bullet => "•",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        text: RichText,
        #[serde(default)]
        style: TextStyle,
    },
    List {
        #[serde(default)]
        marker: ListMarker,
        #[serde(default)]
        accent: Tone,
        items: Vec<RichText>,
    },
    Callout {
        heading: String,
        #[serde(default)]
        accent: Tone,
        blocks: Vec<Block>,
    },
}

impl Block {
    #[must_use]
    pub fn paragraph(text: impl Into<RichText>) -> Self {
        Self::Paragraph {
            text: text.into(),
            style: TextStyle::Normal,
        }
    }

    /// Every rich-text run in this block, nested callouts included.
    #[must_use]
    pub fn texts(&self) -> Vec<&RichText> {
        match self {
            Self::Paragraph { text, .. } => vec![text],
            Self::List { items, .. } => items.iter().collect(),
            Self::Callout { blocks, .. } => blocks.iter().flat_map(Self::texts).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub cta: CallToAction,
}

/// The always-open panel shown above the rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub blocks: Vec<Block>,
}

/// A collapsible group of rules or safe-zone details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub default_open: bool,
    pub blocks: Vec<Block>,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tone: Tone::default(),
            default_open: false,
            blocks,
        }
    }

    #[must_use]
    pub fn with_default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }

    #[must_use]
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub notice: Notice,
    pub rule_sections: Vec<Section>,
    pub safe_zones: Vec<Section>,
    pub footer: String,
}

impl SiteContent {
    /// Parse the site copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the content schema.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rule sections followed by safe-zone sections, in page order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.rule_sections.iter().chain(self.safe_zones.iter())
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections().find(|section| section.id == id)
    }
}

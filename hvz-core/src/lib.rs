//! HvZ Site Core
//!
//! Platform-agnostic content model and UI state for the Humans vs. Zombies
//! event site. This crate has no browser dependencies; the web crate renders
//! what is defined here.

pub mod content;
pub mod disclosure;
pub mod error;
pub mod loader;
pub mod resources;
pub mod validate;

pub use content::{
    Block, CallToAction, Hero, Inline, ListMarker, Notice, RichText, Section, SiteContent,
    TextStyle,
};
pub use disclosure::{Disclosure, Tone};
pub use error::ContentError;
pub use loader::{ContentLoader, EmbeddedContent, Site};
pub use resources::{ResourceIcon, ResourceLink, ResourceList};
pub use validate::{ContentIssue, is_external_href, validate_resources};

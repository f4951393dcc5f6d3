use yew::Classes;

pub mod block_panel;
pub mod button;
pub mod disclosure;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod resource_grid;
pub mod rich_text;

pub use block_panel::BlockPanel;
pub use button::PixelButtonLink;
pub use disclosure::{DisclosurePanel, section_panel};
pub use footer::Footer;
pub use hero::HeroBanner;
pub use icon::{Glyph, Icon};
pub use resource_grid::{GridVariant, ResourceCard, ResourceGrid};

/// Framed box used by every panel; the frame owns the border so content never overlaps it.
pub const PIXEL_FRAME: &str =
    "rounded-none border-4 border-neutral-900 bg-white/70 overflow-hidden [background-clip:padding-box]";

/// Grid-paper page background shared by both pages.
pub const PAGE_BACKGROUND: &str = "min-h-screen bg-[linear-gradient(90deg,rgba(0,0,0,0.06)_1px,transparent_1px),linear-gradient(rgba(0,0,0,0.06)_1px,transparent_1px)] bg-[size:24px_24px]";

#[must_use]
pub fn class_list(base: &'static str, extra: impl Into<Classes>) -> Classes {
    let mut classes = Classes::from(base);
    classes.push(extra);
    classes
}

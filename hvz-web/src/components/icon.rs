use hvz_core::ResourceIcon;
use yew::prelude::*;

/// Line icons drawn inline so the site ships without an icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Target,
    Users,
    Skull,
    Scroll,
    FileText,
    Link,
    Folder,
    ExternalLink,
    ChevronDown,
}

impl From<ResourceIcon> for Glyph {
    fn from(icon: ResourceIcon) -> Self {
        match icon {
            ResourceIcon::Target => Self::Target,
            ResourceIcon::Users => Self::Users,
            ResourceIcon::Skull => Self::Skull,
            ResourceIcon::Scroll => Self::Scroll,
            ResourceIcon::FileText => Self::FileText,
            ResourceIcon::Link => Self::Link,
            ResourceIcon::Folder => Self::Folder,
        }
    }
}

impl Glyph {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Users => "users",
            Self::Skull => "skull",
            Self::Scroll => "scroll",
            Self::FileText => "file-text",
            Self::Link => "link",
            Self::Folder => "folder",
            Self::ExternalLink => "external-link",
            Self::ChevronDown => "chevron-down",
        }
    }

    fn shapes(self) -> Html {
        match self {
            Self::Target => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <circle cx="12" cy="12" r="6" />
                    <circle cx="12" cy="12" r="2" />
                </>
            },
            Self::Users => html! {
                <>
                    <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                    <circle cx="9" cy="7" r="4" />
                    <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                    <path d="M16 3.13a4 4 0 0 1 0 7.75" />
                </>
            },
            Self::Skull => html! {
                <>
                    <circle cx="9" cy="12" r="1" />
                    <circle cx="15" cy="12" r="1" />
                    <path d="M8 20v2h8v-2" />
                    <path d="m12.5 17-.5-1-.5 1h1z" />
                    <path d="M16 20a2 2 0 0 0 1.56-3.25 8 8 0 1 0-11.12 0A2 2 0 0 0 8 20" />
                </>
            },
            Self::Scroll => html! {
                <>
                    <path d="M19 17V5a2 2 0 0 0-2-2H4" />
                    <path d="M8 21h12a2 2 0 0 0 2-2v-1a1 1 0 0 0-1-1H11a1 1 0 0 0-1 1v1a2 2 0 1 1-4 0V5a2 2 0 1 0-4 0v2a1 1 0 0 0 1 1h3" />
                </>
            },
            Self::FileText => html! {
                <>
                    <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
                    <path d="M14 2v4a2 2 0 0 0 2 2h4" />
                    <path d="M10 9H8" />
                    <path d="M16 13H8" />
                    <path d="M16 17H8" />
                </>
            },
            Self::Link => html! {
                <>
                    <path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" />
                    <path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" />
                </>
            },
            Self::Folder => html! {
                <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" />
            },
            Self::ExternalLink => html! {
                <>
                    <path d="M15 3h6v6" />
                    <path d="M10 14 21 3" />
                    <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
                </>
            },
            Self::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

/// Decorative icon; always hidden from assistive technology.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={props.class.clone()}
            aria-hidden="true"
            data-icon={props.glyph.name()}
        >
            { props.glyph.shapes() }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn resource_icons_map_to_matching_glyphs() {
        assert_eq!(Glyph::from(ResourceIcon::FileText).name(), "file-text");
        assert_eq!(Glyph::from(ResourceIcon::Skull), Glyph::Skull);
    }

    #[test]
    fn icon_renders_hidden_svg() {
        let props = IconProps {
            glyph: Glyph::ChevronDown,
            class: Classes::from("h-5"),
        };
        let html = block_on(LocalServerRenderer::<Icon>::with_props(props).render());
        assert!(html.contains("<svg"));
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("data-icon=\"chevron-down\""));
    }
}

use std::rc::Rc;

use hvz_core::ResourceLink;
use yew::prelude::*;

use super::icon::{Glyph, Icon};

/// Card density: compact on the home page, roomier on the resources page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridVariant {
    #[default]
    Compact,
    Spacious,
}

impl GridVariant {
    const fn grid_class(self) -> &'static str {
        match self {
            Self::Compact => "mx-auto grid max-w-5xl grid-cols-1 gap-3 sm:grid-cols-2 lg:grid-cols-3",
            Self::Spacious => {
                "mx-auto mt-10 grid max-w-5xl grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3"
            }
        }
    }

    const fn card_class(self) -> &'static str {
        match self {
            Self::Compact => "group relative block rounded-none border-4 border-neutral-900 bg-white/70 p-3 text-center shadow-[6px_6px_0_rgba(0,0,0,0.45)] hover:translate-x-[1px] hover:translate-y-[1px] hover:shadow-[5px_5px_0_rgba(0,0,0,0.45)] overflow-hidden [background-clip:padding-box]",
            Self::Spacious => "group relative block rounded-none border-4 border-neutral-900 bg-white/80 p-5 text-left shadow-[6px_6px_0_rgba(0,0,0,0.45)] hover:translate-x-[1px] hover:translate-y-[1px] hover:shadow-[5px_5px_0_rgba(0,0,0,0.45)] overflow-hidden [background-clip:padding-box]",
        }
    }

    const fn icon_frame_class(self) -> &'static str {
        match self {
            Self::Compact => "mb-2 grid place-items-center rounded-none border-4 border-neutral-900 bg-gray-100 p-2 [background-clip:padding-box]",
            Self::Spacious => "mb-3 grid w-12 place-items-center rounded-none border-4 border-neutral-900 bg-gray-100 p-3 [background-clip:padding-box]",
        }
    }

    const fn label_class(self) -> &'static str {
        match self {
            Self::Compact => "font-mono text-[10px] uppercase tracking-[0.18em] text-neutral-600",
            Self::Spacious => "font-mono text-xs uppercase tracking-[0.2em] text-neutral-500",
        }
    }

    const fn title_class(self) -> &'static str {
        match self {
            Self::Compact => "mt-1 font-mono text-xs font-bold tracking-wide text-neutral-900",
            Self::Spacious => {
                "mt-2 font-mono text-sm font-bold uppercase tracking-wide text-neutral-900"
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResourceCardProps {
    pub link: ResourceLink,
    pub index: usize,
    #[prop_or_default]
    pub variant: GridVariant,
}

/// One outbound link card. Activation opens the destination in a new
/// browsing context so the current page keeps its state.
#[function_component(ResourceCard)]
pub fn resource_card(props: &ResourceCardProps) -> Html {
    let link = &props.link;
    let variant = props.variant;
    html! {
        <a
            href={link.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={link.aria_label()}
            class={variant.card_class()}
            data-resource-index={props.index.to_string()}
        >
            <div class={variant.icon_frame_class()}>
                <Icon glyph={Glyph::from(link.icon)} class={classes!("h-6", "w-6", "text-emerald-700")} />
            </div>
            <div class={variant.label_class()}>{ link.label.clone() }</div>
            <div class={variant.title_class()}>{ link.title.clone() }</div>
            <Icon
                glyph={Glyph::ExternalLink}
                class={classes!("absolute", "right-2", "top-2", "h-4", "w-4", "text-neutral-700", "opacity-0", "transition-opacity", "group-hover:opacity-100")}
            />
        </a>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResourceGridProps {
    pub links: Rc<[ResourceLink]>,
    #[prop_or_default]
    pub variant: GridVariant,
}

/// Every configured link, unfiltered, in declared order.
#[function_component(ResourceGrid)]
pub fn resource_grid(props: &ResourceGridProps) -> Html {
    let variant = props.variant;
    html! {
        <div class={variant.grid_class()} data-resource-grid="true">
            { for props.links.iter().enumerate().map(|(index, link)| html! {
                <ResourceCard
                    key={format!("{index}-{}", link.display_key())}
                    link={link.clone()}
                    {index}
                    {variant}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use hvz_core::ResourceIcon;
    use yew::LocalServerRenderer;

    fn links() -> Rc<[ResourceLink]> {
        Rc::from(vec![
            ResourceLink::new("Points List", "Family Standings", "https://example.org/points", ResourceIcon::Target),
            ResourceLink::new("Graveyard", "Confirmed Kills", "https://example.org/graves", ResourceIcon::Skull),
        ])
    }

    #[test]
    fn card_opens_in_new_context_without_opener() {
        let props = ResourceCardProps {
            link: links()[0].clone(),
            index: 0,
            variant: GridVariant::Spacious,
        };
        let html = block_on(LocalServerRenderer::<ResourceCard>::with_props(props).render());
        assert!(html.contains("href=\"https://example.org/points\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("data-resource-index=\"0\""));
        assert!(html.contains("aria-label=\"Points List: Family Standings\""));
        assert!(html.contains("data-icon=\"target\""));
        assert!(html.contains("data-icon=\"external-link\""));
    }

    #[test]
    fn grid_keeps_declared_order() {
        let props = ResourceGridProps {
            links: links(),
            variant: GridVariant::Compact,
        };
        let html = block_on(LocalServerRenderer::<ResourceGrid>::with_props(props).render());
        let first = html.find("example.org/points").expect("first card");
        let second = html.find("example.org/graves").expect("second card");
        assert!(first < second);
        assert_eq!(html.matches("data-resource-index=").count(), 2);
    }

    #[test]
    fn empty_grid_renders_no_cards() {
        let props = ResourceGridProps {
            links: Rc::from(Vec::new()),
            variant: GridVariant::default(),
        };
        let html = block_on(LocalServerRenderer::<ResourceGrid>::with_props(props).render());
        assert!(html.contains("data-resource-grid"));
        assert!(!html.contains("<a"));
    }
}

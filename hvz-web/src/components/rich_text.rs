//! Renders authored content blocks into markup.

use hvz_core::{Block, Inline, ListMarker, RichText};
use yew::prelude::*;

use super::class_list;

fn render_inline(piece: &Inline) -> Html {
    match piece {
        Inline::Text(text) => html! { <>{ text.clone() }</> },
        Inline::Strong { strong } => html! { <strong>{ strong.clone() }</strong> },
        Inline::Em { em } => html! { <em>{ em.clone() }</em> },
        Inline::Link { link, href } if href.starts_with("mailto:") => html! {
            <a href={href.clone()} class="text-emerald-700 underline">{ link.clone() }</a>
        },
        Inline::Link { link, href } => html! {
            <a href={href.clone()} target="_blank" rel="noopener noreferrer" class="text-emerald-700 underline">
                { link.clone() }
            </a>
        },
    }
}

#[must_use]
pub fn render_rich_text(text: &RichText) -> Html {
    html! { <>{ for text.pieces().iter().map(render_inline) }</> }
}

fn list_class(marker: ListMarker) -> &'static str {
    match marker {
        ListMarker::Arrow => "space-y-2",
        ListMarker::Bullet => "space-y-2 pl-4",
    }
}

#[must_use]
pub fn render_block(block: &Block) -> Html {
    match block {
        Block::Paragraph { text, style } => html! {
            <p class={style.class()}>{ render_rich_text(text) }</p>
        },
        Block::List {
            marker,
            accent,
            items,
        } => html! {
            <ul class={list_class(*marker)}>
                { for items.iter().map(|item| html! {
                    <li class="flex gap-2">
                        <span class={accent.text_class()} aria-hidden="true">{ marker.glyph() }</span>
                        <span>{ render_rich_text(item) }</span>
                    </li>
                }) }
            </ul>
        },
        Block::Callout {
            heading,
            accent,
            blocks,
        } => html! {
            <div class={class_list("border-l-4 p-4", accent.callout_class())}>
                <h4 class={class_list("mb-3 font-mono text-lg font-bold", accent.text_class())}>
                    { heading.clone() }
                </h4>
                <div class="space-y-2">{ render_blocks(blocks) }</div>
            </div>
        },
    }
}

#[must_use]
pub fn render_blocks(blocks: &[Block]) -> Html {
    html! { <>{ for blocks.iter().map(render_block) }</> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use hvz_core::{TextStyle, Tone};
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct ProbeProps {
        blocks: Vec<Block>,
    }

    #[function_component(Probe)]
    fn probe(props: &ProbeProps) -> Html {
        render_blocks(&props.blocks)
    }

    fn render(blocks: Vec<Block>) -> String {
        block_on(LocalServerRenderer::<Probe>::with_props(ProbeProps { blocks }).render())
    }

    #[test]
    fn paragraphs_keep_style_and_inline_emphasis() {
        let html = render(vec![Block::Paragraph {
            text: RichText(vec![
                Inline::Text("Each family will start with ".into()),
                Inline::Strong {
                    strong: "THREE".into(),
                },
                Inline::Em { em: " zombies".into() },
            ]),
            style: TextStyle::Alert,
        }]);
        assert!(html.contains("text-rose-700"));
        assert!(html.contains("<strong>THREE</strong>"));
        assert!(html.contains("<em> zombies</em>"));
    }

    #[test]
    fn mailto_links_stay_in_page_and_web_links_open_new_context() {
        let html = render(vec![Block::paragraph(RichText(vec![
            Inline::Link {
                link: "mail".into(),
                href: "mailto:a@b.c".into(),
            },
            Inline::Link {
                link: "web".into(),
                href: "https://b.example".into(),
            },
        ]))]);
        assert_eq!(html.matches("target=\"_blank\"").count(), 1);
        assert!(html.contains("href=\"mailto:a@b.c\""));
    }

    #[test]
    fn callouts_nest_lists_with_markers() {
        let html = render(vec![Block::Callout {
            heading: "[ZOMBIE RULES]".into(),
            accent: Tone::Rose,
            blocks: vec![Block::List {
                marker: ListMarker::Arrow,
                accent: Tone::Rose,
                items: vec!["one".into(), "two".into()],
            }],
        }]);
        assert!(html.contains("[ZOMBIE RULES]"));
        assert!(html.contains("border-rose-600"));
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.contains("&gt;"));
    }
}

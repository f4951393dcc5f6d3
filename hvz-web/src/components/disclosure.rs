use hvz_core::{Disclosure, Section, Tone};
use yew::prelude::*;

use super::icon::{Glyph, Icon};
use super::rich_text::render_blocks;
use super::{PIXEL_FRAME, class_list};

const HEADER_BASE: &str = "flex w-full items-center justify-between px-6 py-3 rounded-none border-b-4 border-neutral-900 hover:no-underline focus:outline-none focus-visible:ring-4 focus-visible:ring-emerald-400/60";

#[derive(Properties, PartialEq, Clone)]
pub struct DisclosureProps {
    /// Stable id; the header and body ids are derived from it.
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub tone: Tone,
    #[prop_or_default]
    pub default_open: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_toggle: Callback<Disclosure>,
    #[prop_or_default]
    pub children: Children,
}

/// Titled panel whose body is hidden until the header is activated.
///
/// Each instance owns its state; opening one panel never touches another.
#[function_component(DisclosurePanel)]
pub fn disclosure_panel(props: &DisclosureProps) -> Html {
    let state = use_state(|| Disclosure::initial(props.default_open));

    let toggle = {
        let state = state.clone();
        let on_toggle = props.on_toggle.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*state).toggle();
            log::debug!("disclosure `{id}` is now {}", next.data_state());
            state.set(next);
            on_toggle.emit(next);
        })
    };

    let current = *state;
    let header_id = format!("{}-header", props.id);
    let body_id = format!("{}-body", props.id);

    html! {
        <div
            class={class_list(PIXEL_FRAME, props.class.clone())}
            data-disclosure={props.id.clone()}
            data-state={current.data_state()}
        >
            <button
                type="button"
                id={header_id.clone()}
                class={class_list(HEADER_BASE, props.tone.header_class())}
                aria-expanded={current.aria_expanded()}
                aria-controls={body_id.clone()}
                onclick={toggle}
            >
                <span class="block text-left font-mono text-xl md:text-2xl font-semibold text-emerald-700">
                    { props.title.clone() }
                </span>
                <Icon
                    glyph={Glyph::ChevronDown}
                    class={class_list("h-5 w-5 shrink-0 text-neutral-900 transition-transform", current.chevron_class())}
                />
            </button>
            <div id={body_id} role="region" aria-labelledby={header_id} hidden={current.body_hidden()}>
                <div class="p-6 md:p-8 space-y-4 font-mono text-sm leading-relaxed">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

/// One panel per authored section.
#[must_use]
pub fn section_panel(section: &Section) -> Html {
    html! {
        <DisclosurePanel
            key={section.id.clone()}
            id={section.id.clone()}
            title={section.title.clone()}
            tone={section.tone}
            default_open={section.default_open}
        >
            { render_blocks(&section.blocks) }
        </DisclosurePanel>
    }
}

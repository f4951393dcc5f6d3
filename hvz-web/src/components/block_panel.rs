use hvz_core::Tone;
use yew::prelude::*;

use super::class_list;

#[derive(Properties, PartialEq, Clone)]
pub struct BlockPanelProps {
    pub title: AttrValue,
    #[prop_or(Tone::Rose)]
    pub tone: Tone,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Always-open framed panel. It has no toggle control, so its body is visible
/// from the first render.
#[function_component(BlockPanel)]
pub fn block_panel(props: &BlockPanelProps) -> Html {
    let frame = class_list(
        "rounded-none border-4 shadow-[8px_8px_0_rgba(0,0,0,0.4)] overflow-hidden [background-clip:padding-box]",
        classes!(props.tone.callout_class(), props.class.clone()),
    );
    html! {
        <section class={frame} data-panel="pinned">
            <div class="rounded-none border-b-4 border-neutral-900 bg-black/10 px-4 py-3 [background-clip:padding-box]">
                <h3 class={class_list("font-mono text-xl md:text-2xl tracking-wider drop-shadow-[2px_2px_0_rgba(0,0,0,0.5)]", props.tone.text_class())}>
                    { props.title.clone() }
                </h3>
            </div>
            <div class="rounded-none p-6 space-y-4 font-mono text-sm leading-relaxed">
                { for props.children.iter() }
            </div>
        </section>
    }
}

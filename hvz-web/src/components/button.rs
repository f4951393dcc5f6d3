use yew::prelude::*;

use super::class_list;

const PIXEL_BUTTON: &str = "inline-flex items-center justify-center px-6 py-3 text-base font-bold text-neutral-900 rounded-none border-4 border-neutral-900 bg-emerald-500 shadow-[inset_-4px_-4px_0_0_rgba(0,0,0,0.4),inset_4px_4px_0_0_rgba(255,255,255,0.25),6px_6px_0_rgba(0,0,0,0.45)] active:translate-x-[2px] active:translate-y-[2px] active:shadow-[inset_-4px_-4px_0_0_rgba(0,0,0,0.45),inset_4px_4px_0_0_rgba(255,255,255,0.2),4px_4px_0_rgba(0,0,0,0.45)] font-mono tracking-tight uppercase";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    pub href: AttrValue,
    /// Open in a new browsing context, leaving this page untouched.
    #[prop_or(true)]
    pub new_tab: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Link styled as a chunky block button.
#[function_component(PixelButtonLink)]
pub fn pixel_button_link(p: &Props) -> Html {
    let class = class_list(PIXEL_BUTTON, p.class.clone());
    let label = p.label.clone();
    if p.new_tab {
        html! {
            <a href={p.href.clone()} target="_blank" rel="noopener noreferrer" {class}>{ label }</a>
        }
    } else {
        html! { <a href={p.href.clone()} {class}>{ label }</a> }
    }
}

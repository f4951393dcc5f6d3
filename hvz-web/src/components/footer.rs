use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    html! {
        <footer class="border-t-8 border-neutral-900 bg-emerald-900/10">
            <div class="container mx-auto px-4 py-10">
                <div class="text-center font-mono text-xs md:text-sm text-neutral-800">
                    <p class="mx-auto inline-block rounded-none border-4 border-neutral-900 bg-white/70 px-3 py-2 shadow-[4px_4px_0_rgba(0,0,0,0.45)]">
                        { props.text.clone() }
                    </p>
                </div>
            </div>
        </footer>
    }
}

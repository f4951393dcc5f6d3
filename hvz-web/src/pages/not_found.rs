use yew::prelude::*;

use crate::components::PAGE_BACKGROUND;
use crate::router::Route;

/// Shown when the path matches no known page.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={PAGE_BACKGROUND}>
            <section class="container mx-auto px-4 py-24 text-center" aria-live="assertive" data-page="not-found">
                <h1 class="font-mono text-4xl font-black tracking-[0.08em] text-neutral-900">{ "404: LOST IN THE HORDE" }</h1>
                <p class="mt-4 font-mono text-sm text-neutral-800">{ "That page does not exist." }</p>
                <a
                    href={Route::Home.href()}
                    class="mt-8 inline-block rounded-none border-4 border-neutral-900 bg-emerald-500 px-4 py-2 font-mono text-sm font-bold text-neutral-900 shadow-[4px_4px_0_rgba(0,0,0,0.45)]"
                >
                    { "<< Back to Home" }
                </a>
            </section>
        </div>
    }
}

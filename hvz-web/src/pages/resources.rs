use std::rc::Rc;

use yew::prelude::*;

use crate::components::{Footer, GridVariant, PAGE_BACKGROUND, ResourceGrid};
use crate::router::Route;
use crate::site::{self, ResourceLink, SiteContent};

const INTRO: &str = "Everything you need to track points, report kills and quests, and stay informed throughout the game.";

#[derive(Properties, PartialEq, Clone)]
pub struct ResourcesPageProps {
    #[prop_or_else(site::resources)]
    pub resources: Rc<[ResourceLink]>,
    #[prop_or_else(site::content)]
    pub content: Rc<SiteContent>,
}

/// Standalone listing of the same links the home page shows.
#[function_component(ResourcesPage)]
pub fn resources_page(props: &ResourcesPageProps) -> Html {
    html! {
        <div class={PAGE_BACKGROUND}>
            <main class="container mx-auto px-4 py-12">
                <a
                    href={Route::Home.href()}
                    class="inline-block rounded-none border-4 border-neutral-900 bg-white/70 px-3 py-1 font-mono text-sm text-neutral-900 shadow-[4px_4px_0_rgba(0,0,0,0.45)] hover:bg-white"
                    data-nav="home"
                >
                    { "<< Back to Home" }
                </a>
                <div class="mx-auto mt-10 max-w-3xl text-center">
                    <h1 class="font-mono text-3xl md:text-5xl font-black tracking-[0.08em] text-neutral-900 drop-shadow-[4px_4px_0_rgba(0,0,0,0.35)]">
                        { "PUBLIC HVZ RESOURCES" }
                    </h1>
                    <p class="mt-4 font-mono text-sm md:text-base text-neutral-800">{ INTRO }</p>
                </div>
                <ResourceGrid links={Rc::clone(&props.resources)} variant={GridVariant::Spacious} />
            </main>
            <Footer text={props.content.footer.clone()} />
        </div>
    }
}

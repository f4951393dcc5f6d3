use hvz_core::Hero;
use yew::prelude::*;

use super::button::PixelButtonLink;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub hero: Hero,
}

/// Sky-and-grass banner with the event title and the sign-up call to action.
#[function_component(HeroBanner)]
pub fn hero_banner(props: &HeroProps) -> Html {
    let hero = &props.hero;
    html! {
        <section class="relative overflow-hidden border-b-8 border-neutral-900" aria-label="Hero">
            <div class="absolute inset-0 bg-[linear-gradient(#7ec8e3,rgba(126,200,227,0.85))]" />
            <div class="absolute inset-0 opacity-70 [background-image:linear-gradient(90deg,rgba(255,255,255,0.15)_8px,transparent_8px),linear-gradient(rgba(255,255,255,0.12)_8px,transparent_8px)] bg-[size:64px_64px]" />
            <div class="absolute bottom-0 left-0 right-0 h-6 bg-emerald-600 shadow-[0_-6px_0_rgba(0,0,0,0.35)_inset]" />
            <div class="container relative mx-auto px-4 py-16 md:py-24">
                <div class="mx-auto max-w-4xl text-center">
                    <h1 class="mb-4 font-mono text-4xl md:text-6xl lg:text-7xl font-black tracking-[0.08em] text-neutral-900 drop-shadow-[4px_4px_0_rgba(0,0,0,0.4)]">
                        { hero.title.clone() }
                    </h1>
                    <p class="mx-auto mb-8 max-w-xl font-mono text-base md:text-lg text-neutral-800 bg-white/40 px-3 py-2 rounded-none border-4 border-neutral-900 shadow-[4px_4px_0_rgba(0,0,0,0.4)]">
                        { hero.tagline.clone() }
                    </p>
                    <div class="flex flex-wrap justify-center gap-4">
                        <PixelButtonLink
                            label={hero.cta.text.clone()}
                            href={hero.cta.href.clone()}
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

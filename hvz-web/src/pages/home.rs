use std::rc::Rc;

use yew::prelude::*;

use super::section_heading;
use crate::components::rich_text::render_blocks;
use crate::components::{
    BlockPanel, Footer, GridVariant, HeroBanner, PAGE_BACKGROUND, ResourceGrid, section_panel,
};
use crate::site::{self, ResourceLink, SiteContent};

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    #[prop_or_else(site::content)]
    pub content: Rc<SiteContent>,
    #[prop_or_else(site::resources)]
    pub resources: Rc<[ResourceLink]>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let content = &props.content;
    html! {
        <div class={PAGE_BACKGROUND}>
            <HeroBanner hero={content.hero.clone()} />

            <section class="container mx-auto px-4 py-12" data-group="resources">
                { section_heading(">> PUBLIC HVZ RESOURCES") }
                <ResourceGrid links={Rc::clone(&props.resources)} variant={GridVariant::Compact} />
            </section>

            <section class="container mx-auto px-4 py-12" data-group="rules">
                { section_heading(">> GAME RULES") }
                <div class="mx-auto max-w-4xl space-y-6">
                    <BlockPanel title={content.notice.title.clone()}>
                        { render_blocks(&content.notice.blocks) }
                    </BlockPanel>
                    { for content.rule_sections.iter().map(section_panel) }
                </div>
            </section>

            <section class="container mx-auto px-4 py-12" data-group="safe-zones">
                { section_heading(">> SAFE ZONES") }
                <div class="mx-auto max-w-4xl space-y-6">
                    { for content.safe_zones.iter().map(section_panel) }
                </div>
            </section>

            <Footer text={content.footer.clone()} />
        </div>
    }
}

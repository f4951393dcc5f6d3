use anyhow::Result;
use hvz_core::ResourceLink;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, StaticScenario, expected_site};
use crate::browser::CardInfo;
use crate::render::{RenderedSite, tags_with};

const REL: &str = "noopener noreferrer";

pub struct ResourcesScenario;

fn check_cards(page: &str, cards: &[CardInfo], links: &[ResourceLink]) -> Result<()> {
    anyhow::ensure!(
        cards.len() == links.len(),
        "{page} grid shows {} cards, {} configured",
        cards.len(),
        links.len()
    );
    for (idx, (card, link)) in cards.iter().zip(links).enumerate() {
        anyhow::ensure!(
            card.index == idx.to_string(),
            "{page} card {idx} is tagged as index {}",
            card.index
        );
        anyhow::ensure!(
            card.href == link.href,
            "{page} card {idx} ({}) links to {} instead of {}",
            link.label,
            card.href,
            link.href
        );
        anyhow::ensure!(
            card.target.as_deref() == Some("_blank"),
            "{page} card {idx} does not open a new browsing context"
        );
        anyhow::ensure!(
            card.rel.as_deref() == Some(REL),
            "{page} card {idx} must set rel=\"{REL}\""
        );
    }
    Ok(())
}

fn rendered_cards(html: &str) -> Result<Vec<CardInfo>> {
    Ok(tags_with(html, "data-resource-index")?
        .into_iter()
        .map(|tag| CardInfo {
            index: tag.attr("data-resource-index").unwrap_or_default().to_string(),
            href: tag.attr("href").unwrap_or_default().to_string(),
            target: tag.attr("target").map(str::to_string),
            rel: tag.attr("rel").map(str::to_string),
        })
        .collect())
}

impl StaticScenario for ResourcesScenario {
    fn run_static(&self, site: &RenderedSite) -> Result<()> {
        for (page, html) in [("home", &site.home), ("resources", &site.resources_page)] {
            check_cards(page, &rendered_cards(html)?, &site.resources)?;
            let labelled = tags_with(html, "data-resource-index")?;
            for (tag, link) in labelled.iter().zip(&site.resources) {
                anyhow::ensure!(
                    tag.attr("aria-label") == Some(link.aria_label().as_str()),
                    "{page} card `{}` has no accessible name",
                    link.label
                );
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ResourcesScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let expected = expected_site()?;
        let links = expected.resources.as_slice();
        for (page, path) in [("home", "/"), ("resources", "/resources")] {
            ctx.page.open(path).await?;
            let cards = ctx.page.cards().await?;
            check_cards(page, &cards, links)?;
            if ctx.verbose {
                println!("  🔗 {page} grid lists {} links", cards.len());
            }
        }
        Ok(())
    }
}

impl CombinedScenario for ResourcesScenario {
    fn name(&self) -> &'static str {
        "resources"
    }
}

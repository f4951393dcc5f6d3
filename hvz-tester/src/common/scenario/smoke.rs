use anyhow::Result;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, StaticScenario, expected_site};
use crate::render::{RenderedSite, escape_text};

pub const HOME_HEADINGS: [&str; 3] = [">> PUBLIC HVZ RESOURCES", ">> GAME RULES", ">> SAFE ZONES"];

pub struct SmokeScenario;

impl StaticScenario for SmokeScenario {
    fn run_static(&self, site: &RenderedSite) -> Result<()> {
        let content = &site.content;
        let home = &site.home;

        anyhow::ensure!(home.contains("<h1"), "home page has no <h1>");
        anyhow::ensure!(
            home.contains(&escape_text(&content.hero.title)),
            "home page is missing the hero title `{}`",
            content.hero.title
        );
        for heading in HOME_HEADINGS {
            anyhow::ensure!(
                home.contains(&escape_text(heading)),
                "home page is missing heading `{heading}`"
            );
        }
        for (page, html) in [("home", home), ("resources", &site.resources_page)] {
            anyhow::ensure!(
                html.contains(&escape_text(&content.footer)),
                "{page} page is missing the footer"
            );
        }

        anyhow::ensure!(
            site.resources_page.contains("Back to Home"),
            "resources page has no link back home"
        );
        anyhow::ensure!(
            site.not_found.contains(r#"data-page="not-found""#),
            "not-found page did not render"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let expected = expected_site()?;
        let page = &ctx.page;

        page.open("/").await?;
        let title = page.text_of("h1").await?;
        anyhow::ensure!(
            title.contains(&expected.content.hero.title),
            "hero title was `{title}`"
        );
        let groups = page.count("[data-group]").await?;
        anyhow::ensure!(groups == 3, "expected 3 home sections, found {groups}");
        let footer = page.text_of("footer").await?;
        anyhow::ensure!(
            footer.contains(&expected.content.footer),
            "footer was `{footer}`"
        );
        if ctx.verbose {
            println!("  🏠 Home page rendered with {groups} sections");
        }

        page.open("/resources").await?;
        let back_links = page.count("a[data-nav='home']").await?;
        anyhow::ensure!(back_links == 1, "resources page has {back_links} back links");

        page.open("/no-such-page").await?;
        let lost = page.count("[data-page='not-found']").await?;
        anyhow::ensure!(lost == 1, "unknown path did not show the not-found page");
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "smoke"
    }
}

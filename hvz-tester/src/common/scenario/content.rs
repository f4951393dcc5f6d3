use anyhow::Result;
use hvz_core::{ContentIssue, ResourceLink, SiteContent, validate_resources};

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, StaticScenario, expected_site};
use crate::render::RenderedSite;

pub struct ContentScenario;

fn lint(links: &[ResourceLink], content: &SiteContent) -> Result<()> {
    let issues: Vec<ContentIssue> = validate_resources(links)
        .into_iter()
        .chain(content.validate())
        .collect();
    if issues.is_empty() {
        return Ok(());
    }
    let listed: Vec<String> = issues.iter().map(ToString::to_string).collect();
    anyhow::bail!(
        "{} content issue(s):\n  - {}",
        issues.len(),
        listed.join("\n  - ")
    )
}

impl StaticScenario for ContentScenario {
    fn run_static(&self, site: &RenderedSite) -> Result<()> {
        lint(&site.resources, &site.content)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ContentScenario {
    /// The deployed build must serve the content this tester was built with.
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let expected = expected_site()?;
        lint(expected.resources.as_slice(), &expected.content)?;

        ctx.page.open("/").await?;
        let panels = ctx.page.panel_ids().await?;
        let authored: Vec<&str> = expected.content.sections().map(|s| s.id.as_str()).collect();
        anyhow::ensure!(
            panels.iter().map(String::as_str).eq(authored.iter().copied()),
            "deployed panels {panels:?} differ from {authored:?}"
        );
        let cards = ctx.page.count("a[data-resource-index]").await?;
        anyhow::ensure!(
            cards == expected.resources.len(),
            "deployed grid has {cards} cards, expected {}",
            expected.resources.len()
        );
        Ok(())
    }
}

impl CombinedScenario for ContentScenario {
    fn name(&self) -> &'static str {
        "content"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvz_core::{Block, ResourceIcon, Section};

    #[test]
    fn issues_are_reported_together() {
        let links = vec![ResourceLink::new(
            "Points",
            "Standings",
            "docs/points",
            ResourceIcon::Target,
        )];
        let content = SiteContent {
            safe_zones: vec![
                Section::new("dup", "ONE", vec![Block::paragraph("x")]),
                Section::new("dup", "TWO", vec![Block::paragraph("y")]),
            ],
            ..SiteContent::default()
        };
        let err = lint(&links, &content).expect_err("issues expected");
        let text = err.to_string();
        assert!(text.contains("docs/points"));
        assert!(text.contains("dup"));
    }
}

use anyhow::{Context, Result};
use hvz_core::{Disclosure, SiteContent};

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, StaticScenario, expected_site};
use crate::browser::PanelState;
use crate::render::{RenderedSite, Tag, tags};

pub struct DisclosureScenario;

fn find<'t>(tags: &'t [Tag], name: &str, id: &str) -> Result<&'t Tag> {
    tags.iter()
        .find(|tag| tag.name == name && tag.attr("id") == Some(id))
        .with_context(|| format!("no <{name} id=\"{id}\">"))
}

/// Rendered panels must appear in authored order and start in their configured state.
fn check_initial_markup(home: &str, content: &SiteContent) -> Result<()> {
    let parsed = tags(home)?;
    let rendered: Vec<&str> = parsed
        .iter()
        .filter_map(|tag| tag.attr("data-disclosure"))
        .collect();
    let authored: Vec<&str> = content.sections().map(|s| s.id.as_str()).collect();
    anyhow::ensure!(
        rendered == authored,
        "panels rendered as {rendered:?}, authored as {authored:?}"
    );

    for section in content.sections() {
        let id = &section.id;
        let expected = Disclosure::initial(section.default_open);
        let header = find(&parsed, "button", &format!("{id}-header"))?;
        let body = find(&parsed, "div", &format!("{id}-body"))?;

        anyhow::ensure!(
            header.attr("type") == Some("button"),
            "panel `{id}` header is not a plain button"
        );
        anyhow::ensure!(
            header.attr("aria-expanded") == Some(expected.aria_expanded()),
            "panel `{id}` should start {}",
            expected.data_state()
        );
        anyhow::ensure!(
            header.attr("aria-controls") == body.attr("id"),
            "panel `{id}` header does not control its body"
        );
        anyhow::ensure!(
            body.attr("role") == Some("region"),
            "panel `{id}` body is not a region"
        );
        anyhow::ensure!(
            body.has_attr("hidden") == expected.body_hidden(),
            "panel `{id}` body visibility disagrees with aria-expanded"
        );
    }
    Ok(())
}

/// The notice is always open: it carries no toggle control.
fn check_pinned_notice(home: &str) -> Result<()> {
    let start = home
        .find(r#"data-panel="pinned""#)
        .context("notice panel is missing")?;
    let rest = &home[start..];
    let end = rest.find("</section>").context("notice panel is not closed")?;
    let notice = &rest[..end];
    let inner = tags(notice)?;
    anyhow::ensure!(
        inner.iter().all(|tag| tag.name != "button"),
        "notice panel has a toggle"
    );
    anyhow::ensure!(
        inner.iter().all(|tag| !tag.has_attr("hidden")),
        "notice panel hides content"
    );
    Ok(())
}

/// Drive every panel through two toggles, checking no other panel moves.
fn check_independence(content: &SiteContent) -> Result<()> {
    let initial: Vec<Disclosure> = content
        .sections()
        .map(|s| Disclosure::initial(s.default_open))
        .collect();
    let mut panels = initial.clone();

    for target in 0..panels.len() {
        for clicks in 1..=2 {
            let before = panels.clone();
            panels[target] = panels[target].toggle();
            for (idx, (now, prev)) in panels.iter().zip(&before).enumerate() {
                if idx == target {
                    anyhow::ensure!(now != prev, "panel {idx} did not change on click {clicks}");
                } else {
                    anyhow::ensure!(now == prev, "panel {idx} changed when {target} toggled");
                }
            }
        }
        anyhow::ensure!(
            panels[target] == initial[target],
            "panel {target} did not return to its initial state after two clicks"
        );
    }
    Ok(())
}

impl StaticScenario for DisclosureScenario {
    fn run_static(&self, site: &RenderedSite) -> Result<()> {
        check_initial_markup(&site.home, &site.content)?;
        check_pinned_notice(&site.home)?;
        check_independence(&site.content)
    }
}

fn ensure_consistent(states: &[PanelState]) -> Result<()> {
    for state in states {
        anyhow::ensure!(
            state.is_consistent(),
            "panel `{}` reports aria-expanded={} but hidden={}",
            state.id,
            state.expanded,
            state.body_hidden
        );
    }
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for DisclosureScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let expected = expected_site()?;
        let page = &ctx.page;
        page.open("/").await?;

        let initial = page.panel_states().await?;
        ensure_consistent(&initial)?;
        let authored: Vec<(&str, bool)> = expected
            .content
            .sections()
            .map(|s| (s.id.as_str(), s.default_open))
            .collect();
        let observed: Vec<(&str, bool)> = initial
            .iter()
            .map(|s| (s.id.as_str(), s.expanded))
            .collect();
        anyhow::ensure!(
            observed == authored,
            "initial panels {observed:?}, expected {authored:?}"
        );

        for (idx, panel) in initial.iter().enumerate() {
            page.toggle(&panel.id).await?;
            let opened = page.panel_states().await?;
            ensure_consistent(&opened)?;
            for (other, state) in opened.iter().enumerate() {
                let was = initial[other].expanded;
                let want = if other == idx { !was } else { was };
                anyhow::ensure!(
                    state.expanded == want,
                    "after clicking `{}`, panel `{}` expanded={}",
                    panel.id,
                    state.id,
                    state.expanded
                );
            }

            page.toggle(&panel.id).await?;
            let restored = page.panel_states().await?;
            anyhow::ensure!(
                restored == initial,
                "clicking `{}` twice did not restore every panel",
                panel.id
            );
            if ctx.verbose {
                println!("  🔁 `{}` toggled open and closed", panel.id);
            }
        }

        let notice_buttons = page.count("[data-panel='pinned'] button").await?;
        anyhow::ensure!(notice_buttons == 0, "notice panel has a toggle control");
        let notice = page.text_of("[data-panel='pinned']").await?;
        anyhow::ensure!(
            notice.contains(&expected.content.notice.title),
            "notice panel is not visible"
        );
        Ok(())
    }
}

impl CombinedScenario for DisclosureScenario {
    fn name(&self) -> &'static str {
        "disclosure"
    }
}

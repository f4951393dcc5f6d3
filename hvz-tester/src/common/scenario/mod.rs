use anyhow::{Context, Result};
use hvz_core::{EmbeddedContent, Site};

use crate::browser::SitePage;
use crate::render::RenderedSite;

pub mod content;
pub mod disclosure;
pub mod resources;
pub mod smoke;

pub struct ScenarioCtx<'a> {
    pub page: SitePage<'a>,
    pub verbose: bool,
}

// Checks against server-rendered markup
pub trait StaticScenario {
    fn run_static(&self, site: &RenderedSite) -> Result<()>;
}

// Checks against the deployed site in a real browser
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

pub trait CombinedScenario: StaticScenario + BrowserScenario {
    fn name(&self) -> &'static str;
}

/// Data the deployed build is expected to carry.
pub(crate) fn expected_site() -> Result<Site> {
    Site::load(&EmbeddedContent).context("loading embedded site content")
}

pub const ALL_SCENARIOS: [&str; 4] = ["smoke", "disclosure", "resources", "content"];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.trim().to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "disclosure" | "panels" => Some(Box::new(disclosure::DisclosureScenario)),
        "resources" | "links" => Some(Box::new(resources::ResourcesScenario)),
        "content" | "lint" => Some(Box::new(content::ContentScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Every page renders its hero, headings and footer"),
        (
            "disclosure",
            "Panels start in their configured state and toggle independently",
        ),
        (
            "resources",
            "Both grids list every configured link in order, opening in a new tab",
        ),
        ("content", "Site content passes validation"),
    ]
}

/// Expand `all` into every known scenario, keeping first-seen order.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::new();
    for name in requested {
        let names: Vec<String> = if name.eq_ignore_ascii_case("all") {
            ALL_SCENARIOS.iter().map(ToString::to_string).collect()
        } else {
            vec![name.clone()]
        };
        for name in names {
            if !expanded.contains(&name) {
                expanded.push(name);
            }
        }
    }
    expanded
}

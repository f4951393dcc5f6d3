use anyhow::{Context, Result};
use serde_json::json;
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::common::page_url;

/// Observed state of one disclosure panel in the live page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub id: String,
    pub expanded: bool,
    pub body_hidden: bool,
}

impl PanelState {
    pub const fn is_consistent(&self) -> bool {
        self.expanded != self.body_hidden
    }
}

/// Outbound link card as the browser sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    pub index: String,
    pub href: String,
    pub target: Option<String>,
    pub rel: Option<String>,
}

/// DOM queries against the running site.
#[derive(Debug, Clone)]
pub struct SitePage<'a> {
    driver: &'a WebDriver,
    base_url: String,
}

impl<'a> SitePage<'a> {
    pub fn new(driver: &'a WebDriver, base_url: impl Into<String>) -> Self {
        Self {
            driver,
            base_url: base_url.into(),
        }
    }

    /// Navigate to an in-site path and wait for the app to mount.
    pub async fn open(&self, path: &str) -> Result<()> {
        let url = page_url(&self.base_url, path);
        self.driver
            .goto(&url)
            .await
            .with_context(|| format!("navigating to {url}"))?;
        self.driver
            .find(By::Css("[data-group], [data-resource-grid], [data-page]"))
            .await
            .with_context(|| format!("site did not render at {url}"))?;
        Ok(())
    }

    pub async fn panel_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for panel in self.driver.find_all(By::Css("[data-disclosure]")).await? {
            if let Some(id) = panel.attr("data-disclosure").await? {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    pub async fn panel_state(&self, id: &str) -> Result<PanelState> {
        let header = self
            .driver
            .find(By::Id(format!("{id}-header")))
            .await
            .with_context(|| format!("panel `{id}` has no header"))?;
        let expanded = header.attr("aria-expanded").await?.as_deref() == Some("true");
        let hidden = self
            .driver
            .execute(
                "const body = document.getElementById(arguments[0]); return body ? body.hidden : null;",
                vec![json!(format!("{id}-body"))],
            )
            .await?;
        let body_hidden = hidden
            .json()
            .as_bool()
            .with_context(|| format!("panel `{id}` has no body"))?;
        Ok(PanelState {
            id: id.to_string(),
            expanded,
            body_hidden,
        })
    }

    pub async fn panel_states(&self) -> Result<Vec<PanelState>> {
        let mut states = Vec::new();
        for id in self.panel_ids().await? {
            states.push(self.panel_state(&id).await?);
        }
        Ok(states)
    }

    /// Activate a panel header and give the app a moment to re-render.
    pub async fn toggle(&self, id: &str) -> Result<()> {
        self.driver
            .find(By::Id(format!("{id}-header")))
            .await?
            .click()
            .await
            .with_context(|| format!("clicking panel `{id}`"))?;
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(())
    }

    pub async fn cards(&self) -> Result<Vec<CardInfo>> {
        let mut cards = Vec::new();
        for card in self.driver.find_all(By::Css("a[data-resource-index]")).await? {
            cards.push(CardInfo {
                index: card.attr("data-resource-index").await?.unwrap_or_default(),
                href: card.attr("href").await?.unwrap_or_default(),
                target: card.attr("target").await?,
                rel: card.attr("rel").await?,
            });
        }
        Ok(cards)
    }

    pub async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.driver.find_all(By::Css(selector)).await?.len())
    }

    pub async fn text_of(&self, selector: &str) -> Result<String> {
        let element = self
            .driver
            .find(By::Css(selector))
            .await
            .with_context(|| format!("no element matches `{selector}`"))?;
        Ok(element.text().await?)
    }
}

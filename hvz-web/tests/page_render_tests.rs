use futures::executor::block_on;
use hvz_web::app::switch;
use hvz_web::pages::{HomePage, HomePageProps, NotFound, ResourcesPage, ResourcesPageProps};
use hvz_web::router::Route;
use hvz_web::site::{self, Block, ResourceIcon, ResourceLink, Section, SiteContent};
use regex::Regex;
use std::rc::Rc;
use yew::{BaseComponent, Html, LocalServerRenderer, Properties, function_component};

fn render<C: BaseComponent>(props: C::Properties) -> String {
    block_on(
        LocalServerRenderer::<C>::with_props(props)
            .hydratable(false)
            .render(),
    )
}

fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let re = Regex::new(&format!(r#"\s{name}="([^"]*)""#)).expect("attr regex");
    re.captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Opening tags of every resource card, in document order.
fn card_tags(html: &str) -> Vec<&str> {
    let re = Regex::new(r"<a\s[^>]*>").expect("anchor regex");
    re.find_iter(html)
        .map(|m| m.as_str())
        .filter(|tag| tag.contains("data-resource-index="))
        .collect()
}

fn region_tags(html: &str) -> Vec<&str> {
    let re = Regex::new(r"<div\s[^>]*>").expect("div regex");
    re.find_iter(html)
        .map(|m| m.as_str())
        .filter(|tag| tag.contains(r#"role="region""#))
        .collect()
}

fn assert_cards_match(html: &str, links: &[ResourceLink]) {
    let cards = card_tags(html);
    assert_eq!(cards.len(), links.len(), "card count");
    for (idx, (tag, link)) in cards.iter().zip(links).enumerate() {
        assert_eq!(attr(tag, "href"), Some(escape_attr(&link.href).as_str()));
        assert_eq!(attr(tag, "data-resource-index"), Some(idx.to_string().as_str()));
        assert_eq!(attr(tag, "target"), Some("_blank"));
        assert_eq!(attr(tag, "rel"), Some("noopener noreferrer"));
        assert_eq!(
            attr(tag, "aria-label"),
            Some(escape_attr(&link.aria_label()).as_str())
        );
    }
}

fn custom_links(count: usize) -> Rc<[ResourceLink]> {
    (0..count)
        .map(|idx| {
            ResourceLink::new(
                format!("Link {idx}"),
                format!("Title {idx}"),
                format!("https://example.org/{idx}"),
                ResourceIcon::Link,
            )
        })
        .collect()
}

#[test]
fn home_page_renders_every_configured_resource_in_order() {
    let html = render::<HomePage>(HomePageProps {
        content: site::content(),
        resources: site::resources(),
    });
    assert_cards_match(&html, &site::resources());
    assert!(html.contains("PUBLIC HVZ RESOURCES"));
    assert!(html.contains("GAME RULES"));
    assert!(html.contains("SAFE ZONES"));
    assert!(html.contains("HUMANS VS. ZOMBIES 2025"));
    assert!(html.contains("https://forms.gle/bnBijqm8rEba5UfR8"));
}

#[test]
fn resources_page_shares_the_home_page_list() {
    let html = render::<ResourcesPage>(ResourcesPageProps {
        resources: site::resources(),
        content: site::content(),
    });
    assert_cards_match(&html, &site::resources());
    assert!(html.contains("Back to Home"));
    assert!(html.contains("track points, report kills and quests"));
    assert!(html.contains(r#"href="/""#));
}

#[test]
fn grids_render_custom_lists_verbatim() {
    for count in [0, 1, 3] {
        let links = custom_links(count);
        let home = render::<HomePage>(HomePageProps {
            content: Rc::new(SiteContent::default()),
            resources: Rc::clone(&links),
        });
        assert_cards_match(&home, &links);

        let page = render::<ResourcesPage>(ResourcesPageProps {
            resources: Rc::clone(&links),
            content: Rc::new(SiteContent::default()),
        });
        assert_cards_match(&page, &links);
    }
}

#[test]
fn all_panels_start_collapsed_with_hidden_bodies() {
    let content = site::content();
    let html = render::<HomePage>(HomePageProps {
        content: Rc::clone(&content),
        resources: site::resources(),
    });

    let panels = content.sections().count();
    assert_eq!(panels, 8);
    assert_eq!(html.matches(r#"aria-expanded="false""#).count(), panels);
    assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 0);

    let regions = region_tags(&html);
    assert_eq!(regions.len(), panels);
    assert!(regions.iter().all(|tag| tag.contains("hidden")));

    for section in content.sections() {
        let controls = format!(r#"aria-controls="{}-body""#, section.id);
        assert!(html.contains(&controls), "missing toggle for {}", section.id);
    }
}

#[test]
fn notice_body_is_visible_without_a_toggle() {
    let content = site::content();
    let html = render::<HomePage>(HomePageProps {
        content: Rc::clone(&content),
        resources: site::resources(),
    });
    assert!(html.contains("THINGS TO NOTE"));
    assert!(html.contains("HONOR CODE APPLIES."));
    assert!(html.contains(r#"data-panel="pinned""#));
    // One button per disclosure panel; the notice contributes none.
    assert_eq!(html.matches("<button").count(), content.sections().count());
}

#[test]
fn default_open_section_renders_expanded() {
    let content = SiteContent {
        rule_sections: vec![
            Section::new("open-one", "OPEN", vec![Block::paragraph("visible body")])
                .with_default_open(true),
            Section::new("closed-one", "CLOSED", vec![Block::paragraph("hidden body")]),
        ],
        ..SiteContent::default()
    };
    let html = render::<HomePage>(HomePageProps {
        content: Rc::new(content),
        resources: custom_links(0),
    });

    let regions = region_tags(&html);
    assert_eq!(regions.len(), 2);
    assert!(!regions[0].contains("hidden"));
    assert!(regions[1].contains("hidden"));
    assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);
    assert!(html.contains("visible body"));
}

#[test]
fn not_found_page_links_home() {
    let html = render::<NotFound>(());
    assert!(html.contains("404"));
    assert!(html.contains(r#"href="/""#));
}

#[derive(Properties, PartialEq)]
struct RouteProbeProps {
    route: Route,
}

#[function_component(RouteProbe)]
fn route_probe(props: &RouteProbeProps) -> Html {
    switch(props.route.clone())
}

#[test]
fn every_route_renders_its_page() {
    let home = render::<RouteProbe>(RouteProbeProps { route: Route::Home });
    assert!(home.contains("SAFE ZONES"));

    let resources = render::<RouteProbe>(RouteProbeProps {
        route: Route::Resources,
    });
    assert!(resources.contains("Back to Home"));
    assert!(!resources.contains("SAFE ZONES"));

    let missing = render::<RouteProbe>(RouteProbeProps {
        route: Route::NotFound,
    });
    assert!(missing.contains(r#"data-page="not-found""#));
}

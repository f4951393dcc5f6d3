use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/resources")]
    Resources,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Link target for plain anchors, base path included.
    #[must_use]
    pub fn href(&self) -> String {
        crate::paths::route_href(&self.to_path())
    }
}

use yew::prelude::*;

use crate::pages::{HomePage, NotFound, ResourcesPage};
use crate::router::Route;

/// Page for a matched route. Public so the route table can be rendered
/// without a browser history.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Resources => html! { <ResourcesPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Top-level component mounted by `start`; owns the browser router.
#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    use yew_router::prelude::*;

    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

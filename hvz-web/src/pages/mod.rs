pub mod home;
pub mod not_found;
pub mod resources;

pub use home::{HomePage, HomePageProps};
pub use not_found::NotFound;
pub use resources::{ResourcesPage, ResourcesPageProps};

use yew::prelude::*;

/// `>> HEADING` banner above each home-page group.
pub(crate) fn section_heading(text: &'static str) -> Html {
    html! {
        <h2 class="mb-8 text-center font-mono text-2xl md:text-3xl tracking-[0.12em] text-neutral-900 drop-shadow-[3px_3px_0_rgba(0,0,0,0.35)]">
            { text }
        </h2>
    }
}

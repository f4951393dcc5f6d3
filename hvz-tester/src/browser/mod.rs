pub mod page;
pub mod session;

pub use page::{CardInfo, PanelState, SitePage};
pub use session::{BrowserConfig, BrowserKind, new_session};

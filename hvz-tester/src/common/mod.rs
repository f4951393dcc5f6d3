pub mod reports;
pub mod scenario;
pub mod util;

pub use reports::ScenarioResult;
pub use util::{artifacts_dir, capture_artifacts, page_url, split_csv};

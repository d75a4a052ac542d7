pub mod loader;
pub mod writer;

pub use loader::{Scenario, ScenarioLoader, ScenarioLoaderError, ScenarioRecord};
pub use writer::{ResultRow, write_results};

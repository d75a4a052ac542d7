pub mod app;
pub mod config;
pub mod logging;
pub mod report;
pub mod session;
pub mod state;
pub mod themes;
pub mod utils;

pub use app::InputOverrides;
pub use config::{Config, ConfigError};
pub use report::OutputFormat;
pub use state::CalculatorState;
pub use themes::{Palette, Theme};

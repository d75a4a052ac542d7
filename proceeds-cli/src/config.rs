//! TOML configuration.
//!
//! ```toml
//! [defaults]
//! sale_price = 525000
//! agent_commission_percent = 3.0
//! closing_costs_mode = "currency"
//!
//! [display]
//! theme = "light"
//! color = false
//! ```
//!
//! Any input left out of `[defaults]` keeps its startup value. Field names
//! follow [`CostField::parse`], so camelCase keys work too.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use proceeds_core::calculations::common::coerce_f64;
use proceeds_core::{ClosingCostsMode, CostField, CostInputs, UnknownFieldError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::themes::Theme;
use crate::utils::coerce_input;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid [defaults] entry: {0}")]
    UnknownField(#[from] UnknownFieldError),

    #[error("[defaults] {field} must be a number, got {value}")]
    InvalidValue { field: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub display: DisplayConfig,
}

/// Starting values for the calculator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub closing_costs_mode: Option<ClosingCostsMode>,

    /// Remaining keys, one per input field.
    #[serde(flatten)]
    pub fields: BTreeMap<String, toml::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: Theme,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            color: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The inputs and mode a calculator should start from: the startup
    /// snapshot with every configured default applied on top.
    pub fn starting_point(&self) -> Result<(CostInputs, ClosingCostsMode), ConfigError> {
        let mut inputs = CostInputs::startup_defaults();

        for (key, value) in &self.defaults.fields {
            let field: CostField = key.parse()?;
            field.set(&mut inputs, value_to_decimal(key, value)?);
        }

        let mode = self.defaults.closing_costs_mode.unwrap_or_default();
        Ok((inputs, mode))
    }
}

/// Numbers are read the way typed input is: sign dropped, never negative.
fn value_to_decimal(
    key: &str,
    value: &toml::Value,
) -> Result<Decimal, ConfigError> {
    match value {
        toml::Value::Integer(i) => Ok(Decimal::from(*i).abs()),
        toml::Value::Float(f) => Ok(coerce_f64(Some(*f)).abs()),
        toml::Value::String(s) => Ok(coerce_input(s)),
        other => Err(ConfigError::InvalidValue {
            field: key.to_string(),
            value: other.to_string(),
        }),
    }
}

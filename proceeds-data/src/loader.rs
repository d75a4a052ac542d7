//! CSV loader for sale scenarios.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does not matter, and
//! every column is optional. Empty or missing amounts are read as zero.
//!
//! | Column | Type | Notes |
//! |----------------------------------|---------|-------------------------------------------|
//! | `name` | string | Defaults to `scenario N` |
//! | `sale_price` | decimal | `$525,000` and `525000` are both accepted |
//! | `purchase_price` | decimal | |
//! | `mortgage_payoff` | decimal | |
//! | `other_liens` | decimal | |
//! | `agent_commission_percent` | decimal | `3` or `3%` |
//! | `buyer_agent_commission_percent` | decimal | |
//! | `closing_costs_percent` | decimal | Rate or flat amount, per the mode column |
//! | `prorated_property_taxes` | decimal | |
//! | `repair_credits` | decimal | |
//! | `other_fees` | decimal | |
//! | `closing_costs_mode` | string | `percent` (default) or `currency` |
//!
//! ### Example
//!
//! ```csv
//! name,sale_price,mortgage_payoff,agent_commission_percent,closing_costs_percent,closing_costs_mode
//! condo,"$525,000",290000,3,1.5,percent
//! ```

use std::io::Read;

use proceeds_core::{ClosingCostsMode, CostInputs};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading scenario data.
#[derive(Debug, Error)]
pub enum ScenarioLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// `row` is 1-based; the header is row 0.
    #[error("unrecognised closing costs mode '{mode}' on row {row}")]
    InvalidMode { mode: String, row: usize },
}

impl From<csv::Error> for ScenarioLoaderError {
    fn from(err: csv::Error) -> Self {
        ScenarioLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of the scenarios CSV, as written.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenarioRecord {
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub sale_price: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub purchase_price: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub mortgage_payoff: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub other_liens: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub agent_commission_percent: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub buyer_agent_commission_percent: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub closing_costs_percent: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub prorated_property_taxes: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub repair_credits: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub other_fees: Option<Decimal>,
    pub closing_costs_mode: Option<String>,
}

/// Reads an amount cell, ignoring currency symbols, percent signs and
/// thousands separators. A leading minus is dropped: amounts are never
/// negative.
fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | '%') && !c.is_whitespace())
                .collect();
            if cleaned.is_empty() {
                Ok(None)
            } else {
                cleaned
                    .parse::<Decimal>()
                    .map(|amount| Some(amount.abs()))
                    .map_err(serde::de::Error::custom)
            }
        }
        None => Ok(None),
    }
}

/// A named, ready-to-compute scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub inputs: CostInputs,
    pub mode: ClosingCostsMode,
}

impl ScenarioRecord {
    /// Converts the record, filling blanks with zero and the default mode.
    ///
    /// `row` is 1-based and only used for naming and error messages.
    pub fn into_scenario(
        self,
        row: usize,
    ) -> Result<Scenario, ScenarioLoaderError> {
        let mode = match self.closing_costs_mode.as_deref().map(str::trim) {
            None | Some("") => ClosingCostsMode::default(),
            Some(raw) => {
                ClosingCostsMode::parse(raw).ok_or_else(|| ScenarioLoaderError::InvalidMode {
                    mode: raw.to_string(),
                    row,
                })?
            }
        };

        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("scenario {row}"));

        let inputs = CostInputs {
            sale_price: self.sale_price.unwrap_or_default(),
            purchase_price: self.purchase_price.unwrap_or_default(),
            mortgage_payoff: self.mortgage_payoff.unwrap_or_default(),
            other_liens: self.other_liens.unwrap_or_default(),
            agent_commission_percent: self.agent_commission_percent.unwrap_or_default(),
            buyer_agent_commission_percent: self.buyer_agent_commission_percent.unwrap_or_default(),
            closing_costs_percent: self.closing_costs_percent.unwrap_or_default(),
            prorated_property_taxes: self.prorated_property_taxes.unwrap_or_default(),
            repair_credits: self.repair_credits.unwrap_or_default(),
            other_fees: self.other_fees.unwrap_or_default(),
        };

        Ok(Scenario { name, inputs, mode })
    }
}

/// Loader for scenario CSV files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Parse scenarios from any reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        csv_reader
            .deserialize::<ScenarioRecord>()
            .enumerate()
            .map(|(idx, result)| {
                let record = result?;
                record.into_scenario(idx + 1)
            })
            .collect()
    }
}

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::percent_of;

/// How the closing cost input field is interpreted.
///
/// The mode is tracked alongside [`CostInputs`](crate::CostInputs) rather than
/// inside it: the same `closing_costs_percent` value is read as a rate in
/// `Percent` mode and as a flat currency amount in `Currency` mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosingCostsMode {
    #[default]
    Percent,
    Currency,
}

impl ClosingCostsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percent => "percent",
            Self::Currency => "currency",
        }
    }

    /// Symbol shown on the mode toggle.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Currency => "$",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percent" | "%" | "pct" => Some(Self::Percent),
            "currency" | "flat" | "$" => Some(Self::Currency),
            _ => None,
        }
    }
}

impl fmt::Display for ClosingCostsMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closing costs with their unit attached.
///
/// Built from the raw field and the external mode so that nothing downstream
/// can read the number without knowing what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ClosingCosts {
    /// Rate in percent of the sale price (1.5 = 1.5%).
    Percent(Decimal),
    /// Flat currency amount.
    Flat(Decimal),
}

impl ClosingCosts {
    pub fn from_field(
        value: Decimal,
        mode: ClosingCostsMode,
    ) -> Self {
        match mode {
            ClosingCostsMode::Percent => Self::Percent(value),
            ClosingCostsMode::Currency => Self::Flat(value),
        }
    }

    /// Currency amount for a given sale price.
    pub fn amount(
        &self,
        sale_price: Decimal,
    ) -> Decimal {
        match self {
            Self::Percent(rate) => percent_of(*rate, sale_price),
            Self::Flat(amount) => *amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_accepts_names_and_symbols() {
        assert_eq!(ClosingCostsMode::parse("percent"), Some(ClosingCostsMode::Percent));
        assert_eq!(ClosingCostsMode::parse(" % "), Some(ClosingCostsMode::Percent));
        assert_eq!(ClosingCostsMode::parse("Currency"), Some(ClosingCostsMode::Currency));
        assert_eq!(ClosingCostsMode::parse("flat"), Some(ClosingCostsMode::Currency));
        assert_eq!(ClosingCostsMode::parse("$"), Some(ClosingCostsMode::Currency));
        assert_eq!(ClosingCostsMode::parse("points"), None);
    }

    #[test]
    fn mode_round_trips_through_as_str() {
        for mode in [ClosingCostsMode::Percent, ClosingCostsMode::Currency] {
            assert_eq!(ClosingCostsMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn percent_amount_scales_with_sale_price() {
        let costs = ClosingCosts::from_field(dec!(1.5), ClosingCostsMode::Percent);

        assert_eq!(costs.amount(dec!(525000)), dec!(7875));
        assert_eq!(costs.amount(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn flat_amount_ignores_sale_price() {
        let costs = ClosingCosts::from_field(dec!(1.5), ClosingCostsMode::Currency);

        assert_eq!(costs.amount(dec!(525000)), dec!(1.5));
        assert_eq!(costs.amount(Decimal::ZERO), dec!(1.5));
    }

    #[test]
    fn symbol_matches_toggle() {
        assert_eq!(ClosingCostsMode::Percent.symbol(), "%");
        assert_eq!(ClosingCostsMode::Currency.symbol(), "$");
    }

    #[test]
    fn mode_serializes_lowercase() {
        let json = serde_json::to_string(&ClosingCostsMode::Currency).unwrap();

        assert_eq!(json, "\"currency\"");
    }
}

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ClosingCostsMode, CostInputs};

/// Error returned when a field name is not one of the editable inputs.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown field '{0}'")]
pub struct UnknownFieldError(pub String);

/// Unit an input field is entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Currency,
    Percent,
}

/// One editable field of [`CostInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostField {
    SalePrice,
    PurchasePrice,
    MortgagePayoff,
    OtherLiens,
    AgentCommissionPercent,
    BuyerAgentCommissionPercent,
    ClosingCostsPercent,
    ProratedPropertyTaxes,
    RepairCredits,
    OtherFees,
}

impl CostField {
    /// All fields in form order.
    pub const ALL: [CostField; 10] = [
        Self::SalePrice,
        Self::PurchasePrice,
        Self::MortgagePayoff,
        Self::OtherLiens,
        Self::AgentCommissionPercent,
        Self::BuyerAgentCommissionPercent,
        Self::ClosingCostsPercent,
        Self::ProratedPropertyTaxes,
        Self::RepairCredits,
        Self::OtherFees,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SalePrice => "sale_price",
            Self::PurchasePrice => "purchase_price",
            Self::MortgagePayoff => "mortgage_payoff",
            Self::OtherLiens => "other_liens",
            Self::AgentCommissionPercent => "agent_commission_percent",
            Self::BuyerAgentCommissionPercent => "buyer_agent_commission_percent",
            Self::ClosingCostsPercent => "closing_costs_percent",
            Self::ProratedPropertyTaxes => "prorated_property_taxes",
            Self::RepairCredits => "repair_credits",
            Self::OtherFees => "other_fees",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SalePrice => "Listing Sale Price",
            Self::PurchasePrice => "Original Purchase",
            Self::MortgagePayoff => "Mortgage Balance",
            Self::OtherLiens => "Other Recorded Liens",
            Self::AgentCommissionPercent => "Listing %",
            Self::BuyerAgentCommissionPercent => "Buyer's %",
            Self::ClosingCostsPercent => "Title & Closing",
            Self::ProratedPropertyTaxes => "Prorated Property Taxes",
            Self::RepairCredits => "Repair Credits",
            Self::OtherFees => "Other Fees",
        }
    }

    /// Unit the field is entered in. Closing costs follow the mode.
    pub fn kind(
        &self,
        mode: ClosingCostsMode,
    ) -> InputKind {
        match self {
            Self::AgentCommissionPercent | Self::BuyerAgentCommissionPercent => InputKind::Percent,
            Self::ClosingCostsPercent => match mode {
                ClosingCostsMode::Percent => InputKind::Percent,
                ClosingCostsMode::Currency => InputKind::Currency,
            },
            _ => InputKind::Currency,
        }
    }

    /// Accepts snake_case, kebab-case and camelCase spellings.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|field| field.name().replace('_', "") == normalized)
    }

    pub fn get(
        &self,
        inputs: &CostInputs,
    ) -> Decimal {
        match self {
            Self::SalePrice => inputs.sale_price,
            Self::PurchasePrice => inputs.purchase_price,
            Self::MortgagePayoff => inputs.mortgage_payoff,
            Self::OtherLiens => inputs.other_liens,
            Self::AgentCommissionPercent => inputs.agent_commission_percent,
            Self::BuyerAgentCommissionPercent => inputs.buyer_agent_commission_percent,
            Self::ClosingCostsPercent => inputs.closing_costs_percent,
            Self::ProratedPropertyTaxes => inputs.prorated_property_taxes,
            Self::RepairCredits => inputs.repair_credits,
            Self::OtherFees => inputs.other_fees,
        }
    }

    pub fn set(
        &self,
        inputs: &mut CostInputs,
        value: Decimal,
    ) {
        let slot = match self {
            Self::SalePrice => &mut inputs.sale_price,
            Self::PurchasePrice => &mut inputs.purchase_price,
            Self::MortgagePayoff => &mut inputs.mortgage_payoff,
            Self::OtherLiens => &mut inputs.other_liens,
            Self::AgentCommissionPercent => &mut inputs.agent_commission_percent,
            Self::BuyerAgentCommissionPercent => &mut inputs.buyer_agent_commission_percent,
            Self::ClosingCostsPercent => &mut inputs.closing_costs_percent,
            Self::ProratedPropertyTaxes => &mut inputs.prorated_property_taxes,
            Self::RepairCredits => &mut inputs.repair_credits,
            Self::OtherFees => &mut inputs.other_fees,
        };
        *slot = value;
    }
}

impl fmt::Display for CostField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CostField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_accepts_every_spelling() {
        assert_eq!(CostField::parse("sale_price"), Some(CostField::SalePrice));
        assert_eq!(CostField::parse("salePrice"), Some(CostField::SalePrice));
        assert_eq!(CostField::parse("sale-price"), Some(CostField::SalePrice));
        assert_eq!(
            CostField::parse("buyerAgentCommissionPercent"),
            Some(CostField::BuyerAgentCommissionPercent)
        );
        assert_eq!(CostField::parse("price"), None);
    }

    #[test]
    fn every_name_parses_back() {
        for field in CostField::ALL {
            assert_eq!(CostField::parse(field.name()), Some(field));
        }
    }

    #[test]
    fn from_str_reports_unknown_field() {
        let err = "hoa_dues".parse::<CostField>().unwrap_err();

        assert_eq!(err, UnknownFieldError("hoa_dues".to_string()));
        assert_eq!(err.to_string(), "unknown field 'hoa_dues'");
    }

    #[test]
    fn set_then_get_touches_only_one_field() {
        let mut inputs = CostInputs::default();

        CostField::OtherLiens.set(&mut inputs, dec!(12000));

        assert_eq!(CostField::OtherLiens.get(&inputs), dec!(12000));
        for field in CostField::ALL.into_iter().filter(|f| *f != CostField::OtherLiens) {
            assert_eq!(field.get(&inputs), Decimal::ZERO, "{field} changed");
        }
    }

    #[test]
    fn closing_cost_kind_follows_mode() {
        assert_eq!(
            CostField::ClosingCostsPercent.kind(ClosingCostsMode::Percent),
            InputKind::Percent
        );
        assert_eq!(
            CostField::ClosingCostsPercent.kind(ClosingCostsMode::Currency),
            InputKind::Currency
        );
        assert_eq!(
            CostField::AgentCommissionPercent.kind(ClosingCostsMode::Currency),
            InputKind::Percent
        );
        assert_eq!(CostField::SalePrice.kind(ClosingCostsMode::Percent), InputKind::Currency);
    }
}

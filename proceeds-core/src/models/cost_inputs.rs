use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClosingCosts, ClosingCostsMode};
use crate::calculations::common::coerce_f64;

/// The seller's cost record.
///
/// Monetary values share a single currency unit. Percentages are expressed as
/// percent, so `3.0` means 3%. Missing fields deserialize as zero, and the
/// camelCase names used by browser front ends are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostInputs {
    /// Gross contracted sale price.
    #[serde(alias = "salePrice")]
    pub sale_price: Decimal,

    /// Original acquisition price, only used for appreciation.
    #[serde(alias = "purchasePrice")]
    pub purchase_price: Decimal,

    /// Outstanding loan balance settled at closing.
    #[serde(alias = "mortgagePayoff")]
    pub mortgage_payoff: Decimal,

    /// Additional recorded debt against the property.
    #[serde(alias = "otherLiens")]
    pub other_liens: Decimal,

    /// Listing-side commission rate.
    #[serde(alias = "agentCommissionPercent")]
    pub agent_commission_percent: Decimal,

    /// Buyer-side commission rate.
    #[serde(alias = "buyerAgentCommissionPercent")]
    pub buyer_agent_commission_percent: Decimal,

    /// Percent of sale price or flat amount, depending on [`ClosingCostsMode`].
    #[serde(alias = "closingCostsPercent")]
    pub closing_costs_percent: Decimal,

    /// Flat tax credit owed at closing.
    #[serde(alias = "proratedPropertyTaxes")]
    pub prorated_property_taxes: Decimal,

    /// Flat credit given to the buyer for repairs.
    #[serde(alias = "repairCredits")]
    pub repair_credits: Decimal,

    /// Flat miscellaneous fees.
    #[serde(alias = "otherFees")]
    pub other_fees: Decimal,
}

impl CostInputs {
    /// The snapshot a fresh calculator starts from.
    pub fn startup_defaults() -> Self {
        Self {
            sale_price: Decimal::from(5_250_000),
            purchase_price: Decimal::from(3_850_000),
            mortgage_payoff: Decimal::from(290_000),
            other_liens: Decimal::ZERO,
            agent_commission_percent: Decimal::new(30, 1),
            buyer_agent_commission_percent: Decimal::new(25, 1),
            closing_costs_percent: Decimal::new(15, 1),
            prorated_property_taxes: Decimal::from(1_450),
            repair_credits: Decimal::ZERO,
            other_fees: Decimal::from(550),
        }
    }

    /// Closing costs with the unit resolved from `mode`.
    pub fn closing_costs(
        &self,
        mode: ClosingCostsMode,
    ) -> ClosingCosts {
        ClosingCosts::from_field(self.closing_costs_percent, mode)
    }
}

/// Loosely typed input record, as handed over by a form or a script.
///
/// Converting into [`CostInputs`] treats every absent, NaN, infinite or
/// unrepresentable value as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCostInputs {
    pub sale_price: Option<f64>,
    pub purchase_price: Option<f64>,
    pub mortgage_payoff: Option<f64>,
    pub other_liens: Option<f64>,
    pub agent_commission_percent: Option<f64>,
    pub buyer_agent_commission_percent: Option<f64>,
    pub closing_costs_percent: Option<f64>,
    pub prorated_property_taxes: Option<f64>,
    pub repair_credits: Option<f64>,
    pub other_fees: Option<f64>,
}

impl From<RawCostInputs> for CostInputs {
    fn from(raw: RawCostInputs) -> Self {
        Self {
            sale_price: coerce_f64(raw.sale_price),
            purchase_price: coerce_f64(raw.purchase_price),
            mortgage_payoff: coerce_f64(raw.mortgage_payoff),
            other_liens: coerce_f64(raw.other_liens),
            agent_commission_percent: coerce_f64(raw.agent_commission_percent),
            buyer_agent_commission_percent: coerce_f64(raw.buyer_agent_commission_percent),
            closing_costs_percent: coerce_f64(raw.closing_costs_percent),
            prorated_property_taxes: coerce_f64(raw.prorated_property_taxes),
            repair_credits: coerce_f64(raw.repair_credits),
            other_fees: coerce_f64(raw.other_fees),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_is_all_zero() {
        let inputs = CostInputs::default();

        assert_eq!(inputs.sale_price, Decimal::ZERO);
        assert_eq!(inputs.closing_costs_percent, Decimal::ZERO);
        assert_eq!(inputs.other_fees, Decimal::ZERO);
    }

    #[test]
    fn startup_defaults_match_opening_form() {
        let inputs = CostInputs::startup_defaults();

        assert_eq!(inputs.sale_price, dec!(5250000));
        assert_eq!(inputs.purchase_price, dec!(3850000));
        assert_eq!(inputs.mortgage_payoff, dec!(290000));
        assert_eq!(inputs.agent_commission_percent, dec!(3.0));
        assert_eq!(inputs.buyer_agent_commission_percent, dec!(2.5));
        assert_eq!(inputs.closing_costs_percent, dec!(1.5));
        assert_eq!(inputs.prorated_property_taxes, dec!(1450));
        assert_eq!(inputs.other_fees, dec!(550));
    }

    #[test]
    fn deserialize_fills_missing_fields_with_zero() {
        let inputs: CostInputs = serde_json::from_str(r#"{"sale_price": "100000"}"#).unwrap();

        assert_eq!(inputs.sale_price, dec!(100000));
        assert_eq!(inputs.mortgage_payoff, Decimal::ZERO);
    }

    #[test]
    fn deserialize_accepts_camel_case_aliases() {
        let inputs: CostInputs = serde_json::from_str(
            r#"{"salePrice": "525000", "agentCommissionPercent": "3.0", "otherFees": "450"}"#,
        )
        .unwrap();

        assert_eq!(inputs.sale_price, dec!(525000));
        assert_eq!(inputs.agent_commission_percent, dec!(3.0));
        assert_eq!(inputs.other_fees, dec!(450));
    }

    #[test]
    fn raw_inputs_coerce_nan_and_absent_to_zero() {
        let raw = RawCostInputs {
            sale_price: Some(525000.0),
            purchase_price: Some(f64::NAN),
            mortgage_payoff: None,
            other_liens: Some(f64::INFINITY),
            agent_commission_percent: Some(3.0),
            ..Default::default()
        };

        let inputs = CostInputs::from(raw);

        assert_eq!(inputs.sale_price, dec!(525000));
        assert_eq!(inputs.purchase_price, Decimal::ZERO);
        assert_eq!(inputs.mortgage_payoff, Decimal::ZERO);
        assert_eq!(inputs.other_liens, Decimal::ZERO);
        assert_eq!(inputs.agent_commission_percent, dec!(3));
    }

    #[test]
    fn closing_costs_resolve_mode() {
        let inputs = CostInputs {
            closing_costs_percent: dec!(1.5),
            ..Default::default()
        };

        assert_eq!(
            inputs.closing_costs(ClosingCostsMode::Percent),
            ClosingCosts::Percent(dec!(1.5))
        );
        assert_eq!(
            inputs.closing_costs(ClosingCostsMode::Currency),
            ClosingCosts::Flat(dec!(1.5))
        );
    }
}

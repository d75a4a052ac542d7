//! Ratio figures shown next to the proceeds estimate.
//!
//! All ratios are percentages and unrounded. A blank sale or purchase price is
//! divided as if it were 1 so the figures stay finite.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::ratio_percent;
use crate::{CalculationResult, CostInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRatios {
    /// Selling expenses as a share of the sale price.
    pub selling_cost_share: Decimal,

    /// Net proceeds as a share of the sale price.
    pub net_ratio: Decimal,

    /// Total deductions as a share of the sale price.
    pub cost_burden: Decimal,

    /// Appreciation as a share of the purchase price.
    pub market_gains: Decimal,
}

impl SaleRatios {
    pub fn new(
        inputs: &CostInputs,
        result: &CalculationResult,
    ) -> Self {
        let sale = inputs.sale_price;

        Self {
            selling_cost_share: ratio_percent(result.selling_expenses, sale),
            net_ratio: ratio_percent(result.net_proceeds, sale),
            cost_burden: ratio_percent(result.total_deductions, sale),
            market_gains: ratio_percent(result.appreciation, inputs.purchase_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::{ClosingCostsMode, compute};

    #[test]
    fn ratios_for_typical_sale() {
        let inputs = CostInputs {
            sale_price: dec!(500000),
            purchase_price: dec!(400000),
            mortgage_payoff: dec!(200000),
            agent_commission_percent: dec!(3),
            buyer_agent_commission_percent: dec!(3),
            ..Default::default()
        };
        let result = compute(&inputs, ClosingCostsMode::Percent);

        let ratios = SaleRatios::new(&inputs, &result);

        assert_eq!(ratios.selling_cost_share, dec!(6));
        assert_eq!(ratios.cost_burden, dec!(46));
        assert_eq!(ratios.net_ratio, dec!(54));
        assert_eq!(ratios.market_gains, dec!(25));
    }

    #[test]
    fn ratios_round_to_one_decimal_for_display() {
        let inputs = CostInputs {
            sale_price: dec!(525000),
            purchase_price: dec!(385000),
            mortgage_payoff: dec!(290000),
            agent_commission_percent: dec!(3.0),
            buyer_agent_commission_percent: dec!(2.5),
            closing_costs_percent: dec!(1.5),
            prorated_property_taxes: dec!(1450),
            other_fees: dec!(450),
            ..Default::default()
        };
        let result = compute(&inputs, ClosingCostsMode::Percent);

        let ratios = SaleRatios::new(&inputs, &result);

        assert_eq!(round_half_up(ratios.selling_cost_share, 1), dec!(7.4));
        assert_eq!(round_half_up(ratios.net_ratio, 1), dec!(37.4));
        assert_eq!(round_half_up(ratios.cost_burden, 1), dec!(62.6));
        assert_eq!(round_half_up(ratios.market_gains, 1), dec!(36.4));
    }

    #[test]
    fn zero_prices_use_unit_denominator() {
        let inputs = CostInputs {
            mortgage_payoff: dec!(1000),
            ..Default::default()
        };
        let result = compute(&inputs, ClosingCostsMode::Percent);

        let ratios = SaleRatios::new(&inputs, &result);

        assert_eq!(ratios.cost_burden, dec!(100000));
        assert_eq!(ratios.net_ratio, dec!(-100000));
        assert_eq!(ratios.market_gains, Decimal::ZERO);
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chart category of a [`BreakdownSlice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownCategory {
    Commissions,
    ClosingCosts,
    DebtPayoff,
    NetProceeds,
}

impl BreakdownCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Commissions => "Commissions",
            Self::ClosingCosts => "Closing Costs",
            Self::DebtPayoff => "Debt Payoff",
            Self::NetProceeds => "Net Proceeds",
        }
    }

    /// Fill color used when the slice is drawn.
    pub fn display_color(&self) -> &'static str {
        match self {
            Self::Commissions => "#10b981",
            Self::ClosingCosts => "#fb923c",
            Self::DebtPayoff => "#6366f1",
            Self::NetProceeds => "#ffffff10",
        }
    }
}

/// One slice of the proceeds breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub name: String,
    pub value: Decimal,
    pub display_color: String,
}

impl BreakdownSlice {
    pub fn new(
        category: BreakdownCategory,
        value: Decimal,
    ) -> Self {
        Self {
            name: category.label().to_string(),
            value,
            display_color: category.display_color().to_string(),
        }
    }
}

/// Everything derived from one set of inputs.
///
/// Values are unrounded. `net_proceeds` and `appreciation` are signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Sale price as entered.
    pub gross_sale: Decimal,

    /// Listing plus buyer commission.
    pub total_commissions: Decimal,

    /// Closing cost amount plus prorated taxes plus other fees.
    pub total_closing_costs: Decimal,

    /// Commissions, closing costs and repair credits.
    pub selling_expenses: Decimal,

    /// Mortgage plus other liens.
    pub debt_payoff: Decimal,

    /// Selling expenses plus debt payoff.
    pub total_deductions: Decimal,

    /// Gross sale minus total deductions.
    pub net_proceeds: Decimal,

    /// Gross sale minus purchase price.
    pub appreciation: Decimal,

    /// Commissions, Closing Costs, Debt Payoff, Net Proceeds (floored at 0).
    pub breakdown: Vec<BreakdownSlice>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn slice_takes_label_and_color_from_category() {
        let slice = BreakdownSlice::new(BreakdownCategory::DebtPayoff, dec!(290000));

        assert_eq!(slice.name, "Debt Payoff");
        assert_eq!(slice.display_color, "#6366f1");
        assert_eq!(slice.value, dec!(290000));
    }

    #[test]
    fn net_proceeds_slice_is_translucent() {
        assert_eq!(BreakdownCategory::NetProceeds.display_color(), "#ffffff10");
    }
}

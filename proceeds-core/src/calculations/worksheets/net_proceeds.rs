//! Seller net proceeds worksheet.
//!
//! Derives the full [`CalculationResult`] from a [`CostInputs`] record and the
//! closing cost mode. The worksheet is a pure, total function: it never fails,
//! never mutates its input and applies no rounding.
//!
//! # Worksheet Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Gross sale (sale price) |
//! | 2a   | Listing commission: listing rate / 100 × Line 1 |
//! | 2b   | Buyer commission: buyer rate / 100 × Line 1 |
//! | 2c   | Total commissions (Line 2a + Line 2b) |
//! | 3a   | Closing cost amount (rate / 100 × Line 1, or the flat amount) |
//! | 3b   | Total closing costs (Line 3a + prorated taxes + other fees) |
//! | 4    | Selling expenses (Line 2c + Line 3b + repair credits) |
//! | 5    | Debt payoff (mortgage + other liens) |
//! | 6    | Total deductions (Line 4 + Line 5) |
//! | 7    | Net proceeds (Line 1 - Line 6, may be negative) |
//! | 8    | Appreciation (Line 1 - purchase price, may be negative) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use proceeds_core::{ClosingCostsMode, CostInputs, compute};
//!
//! let inputs = CostInputs {
//!     sale_price: dec!(525000),
//!     purchase_price: dec!(385000),
//!     mortgage_payoff: dec!(290000),
//!     agent_commission_percent: dec!(3.0),
//!     buyer_agent_commission_percent: dec!(2.5),
//!     closing_costs_percent: dec!(1.5),
//!     prorated_property_taxes: dec!(1450),
//!     other_fees: dec!(450),
//!     ..Default::default()
//! };
//!
//! let result = compute(&inputs, ClosingCostsMode::Percent);
//!
//! assert_eq!(result.total_commissions, dec!(28875));
//! assert_eq!(result.net_proceeds, dec!(196350));
//! assert_eq!(result.appreciation, dec!(140000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, percent_of, saturating_sum};
use crate::{BreakdownCategory, BreakdownSlice, CalculationResult, ClosingCostsMode, CostInputs};

/// The per-fee amounts behind the commission and closing cost totals.
///
/// Audit views list these individually; they come from the same formulas the
/// worksheet uses for its totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLineItems {
    /// Line 2a.
    pub listing_commission: Decimal,

    /// Line 2b.
    pub buyer_commission: Decimal,

    /// Line 3a.
    pub closing_costs_amount: Decimal,
}

/// Calculator for the net proceeds worksheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetProceedsWorksheet {
    mode: ClosingCostsMode,
}

impl NetProceedsWorksheet {
    /// Creates a worksheet that reads the closing cost field according to `mode`.
    pub fn new(mode: ClosingCostsMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ClosingCostsMode {
        self.mode
    }

    /// Calculates the complete worksheet.
    pub fn calculate(
        &self,
        inputs: &CostInputs,
    ) -> CalculationResult {
        let gross_sale = inputs.sale_price;
        let items = self.line_items(inputs);

        let total_commissions = self.total_commissions(&items);
        let total_closing_costs = self.total_closing_costs(&items, inputs);
        let selling_expenses =
            self.selling_expenses(total_commissions, total_closing_costs, inputs.repair_credits);
        let debt_payoff = self.debt_payoff(inputs);
        let total_deductions = selling_expenses.saturating_add(debt_payoff);
        let net_proceeds = gross_sale.saturating_sub(total_deductions);
        let appreciation = gross_sale.saturating_sub(inputs.purchase_price);

        debug!(
            mode = %self.mode,
            %gross_sale,
            %total_deductions,
            %net_proceeds,
            "net proceeds worksheet calculated"
        );

        CalculationResult {
            gross_sale,
            total_commissions,
            total_closing_costs,
            selling_expenses,
            debt_payoff,
            total_deductions,
            net_proceeds,
            appreciation,
            breakdown: self.breakdown(
                total_commissions,
                total_closing_costs,
                debt_payoff,
                net_proceeds,
            ),
        }
    }

    /// Calculates lines 2a, 2b and 3a.
    pub fn line_items(
        &self,
        inputs: &CostInputs,
    ) -> SaleLineItems {
        let sale = inputs.sale_price;

        SaleLineItems {
            listing_commission: percent_of(inputs.agent_commission_percent, sale),
            buyer_commission: percent_of(inputs.buyer_agent_commission_percent, sale),
            closing_costs_amount: inputs.closing_costs(self.mode).amount(sale),
        }
    }

    /// Line 2c.
    fn total_commissions(
        &self,
        items: &SaleLineItems,
    ) -> Decimal {
        items.listing_commission.saturating_add(items.buyer_commission)
    }

    /// Line 3b.
    fn total_closing_costs(
        &self,
        items: &SaleLineItems,
        inputs: &CostInputs,
    ) -> Decimal {
        saturating_sum([
            items.closing_costs_amount,
            inputs.prorated_property_taxes,
            inputs.other_fees,
        ])
    }

    /// Line 4.
    fn selling_expenses(
        &self,
        total_commissions: Decimal,
        total_closing_costs: Decimal,
        repair_credits: Decimal,
    ) -> Decimal {
        saturating_sum([total_commissions, total_closing_costs, repair_credits])
    }

    /// Line 5.
    fn debt_payoff(
        &self,
        inputs: &CostInputs,
    ) -> Decimal {
        inputs.mortgage_payoff.saturating_add(inputs.other_liens)
    }

    /// Chart slices. Only the net proceeds slice is floored, so a sale under
    /// water still draws a valid chart while `net_proceeds` keeps its sign.
    fn breakdown(
        &self,
        total_commissions: Decimal,
        total_closing_costs: Decimal,
        debt_payoff: Decimal,
        net_proceeds: Decimal,
    ) -> Vec<BreakdownSlice> {
        vec![
            BreakdownSlice::new(BreakdownCategory::Commissions, total_commissions),
            BreakdownSlice::new(BreakdownCategory::ClosingCosts, total_closing_costs),
            BreakdownSlice::new(BreakdownCategory::DebtPayoff, debt_payoff),
            BreakdownSlice::new(
                BreakdownCategory::NetProceeds,
                max(net_proceeds, Decimal::ZERO),
            ),
        ]
    }
}

/// Derives the result record for `inputs` under `mode`.
pub fn compute(
    inputs: &CostInputs,
    mode: ClosingCostsMode,
) -> CalculationResult {
    NetProceedsWorksheet::new(mode).calculate(inputs)
}

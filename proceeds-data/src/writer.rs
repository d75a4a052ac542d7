//! CSV writer for computed scenarios.

use std::io::Write;

use proceeds_core::calculations::common::round_half_up;
use proceeds_core::{CalculationResult, ClosingCostsMode, SaleRatios};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::Scenario;

/// One output row: the scenario name, its mode, the result amounts and the
/// ratios. Amounts are written unrounded without trailing zeros; ratios are
/// rounded to two places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub closing_costs_mode: ClosingCostsMode,
    pub gross_sale: Decimal,
    pub total_commissions: Decimal,
    pub total_closing_costs: Decimal,
    pub selling_expenses: Decimal,
    pub debt_payoff: Decimal,
    pub total_deductions: Decimal,
    pub net_proceeds: Decimal,
    pub appreciation: Decimal,
    pub selling_cost_share: Decimal,
    pub net_ratio: Decimal,
    pub cost_burden: Decimal,
    pub market_gains: Decimal,
}

impl ResultRow {
    pub fn new(
        scenario: &Scenario,
        result: &CalculationResult,
    ) -> Self {
        let ratios = SaleRatios::new(&scenario.inputs, result);

        Self {
            name: scenario.name.clone(),
            closing_costs_mode: scenario.mode,
            gross_sale: result.gross_sale.normalize(),
            total_commissions: result.total_commissions.normalize(),
            total_closing_costs: result.total_closing_costs.normalize(),
            selling_expenses: result.selling_expenses.normalize(),
            debt_payoff: result.debt_payoff.normalize(),
            total_deductions: result.total_deductions.normalize(),
            net_proceeds: result.net_proceeds.normalize(),
            appreciation: result.appreciation.normalize(),
            selling_cost_share: round_half_up(ratios.selling_cost_share, 2).normalize(),
            net_ratio: round_half_up(ratios.net_ratio, 2).normalize(),
            cost_burden: round_half_up(ratios.cost_burden, 2).normalize(),
            market_gains: round_half_up(ratios.market_gains, 2).normalize(),
        }
    }
}

/// Writes a header and one row per entry. Returns the number of rows written.
pub fn write_results<W: Write>(
    writer: W,
    rows: &[ResultRow],
) -> Result<usize, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(rows.len())
}

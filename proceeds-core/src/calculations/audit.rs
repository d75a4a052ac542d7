//! Line-item audit of a net proceeds calculation.
//!
//! The audit sheet lists every amount that feeds the result, grouped the way
//! a closing statement groups them. Each section carries the subtotal from the
//! [`CalculationResult`], and its lines always add up to that subtotal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::worksheets::NetProceedsWorksheet;
use crate::{CalculationResult, ClosingCostsMode, CostInputs};

/// A single amount on the audit sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLine {
    pub label: String,

    /// Rate the amount was derived from, in percent, when it is rate based.
    pub rate: Option<Decimal>,

    pub amount: Decimal,
}

impl AuditLine {
    fn flat(
        label: &str,
        amount: Decimal,
    ) -> Self {
        Self {
            label: label.to_string(),
            rate: None,
            amount,
        }
    }

    fn rated(
        label: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            label: label.to_string(),
            rate: Some(rate),
            amount,
        }
    }
}

/// A titled group of lines with its subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSection {
    pub title: String,
    pub lines: Vec<AuditLine>,
    pub subtotal: Decimal,
}

impl AuditSection {
    /// Sum of the section's lines.
    pub fn line_total(&self) -> Decimal {
        self.lines.iter().map(|line| line.amount).sum()
    }
}

/// The full net recovery sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSheet {
    pub closing_costs_mode: ClosingCostsMode,
    pub revenue: AuditSection,
    pub debt_payoff: AuditSection,
    pub transaction_costs: AuditSection,
    pub net_proceeds: Decimal,
}

impl AuditSheet {
    /// Builds the sheet for `inputs`, computing the result along the way.
    pub fn build(
        inputs: &CostInputs,
        mode: ClosingCostsMode,
    ) -> Self {
        let worksheet = NetProceedsWorksheet::new(mode);
        let result = worksheet.calculate(inputs);
        Self::from_result(inputs, mode, &result)
    }

    /// Builds the sheet from a result that was already computed for `inputs`.
    pub fn from_result(
        inputs: &CostInputs,
        mode: ClosingCostsMode,
        result: &CalculationResult,
    ) -> Self {
        let items = NetProceedsWorksheet::new(mode).line_items(inputs);

        let revenue = AuditSection {
            title: "Primary Revenue".to_string(),
            lines: vec![AuditLine::flat("Contract Sale Price", result.gross_sale)],
            subtotal: result.gross_sale,
        };

        let mut debt_lines = vec![AuditLine::flat("Mortgage Balance", inputs.mortgage_payoff)];
        if inputs.other_liens > Decimal::ZERO {
            debt_lines.push(AuditLine::flat("Other Liens", inputs.other_liens));
        }
        let debt_payoff = AuditSection {
            title: "Debt Payoff".to_string(),
            lines: debt_lines,
            subtotal: result.debt_payoff,
        };

        let closing_line = match mode {
            ClosingCostsMode::Percent => AuditLine::rated(
                "Closing Fees",
                inputs.closing_costs_percent,
                items.closing_costs_amount,
            ),
            ClosingCostsMode::Currency => {
                AuditLine::flat("Closing Fees", items.closing_costs_amount)
            }
        };
        let mut cost_lines = vec![
            AuditLine::rated(
                "Listing Fee",
                inputs.agent_commission_percent,
                items.listing_commission,
            ),
            AuditLine::rated(
                "Buyer Fee",
                inputs.buyer_agent_commission_percent,
                items.buyer_commission,
            ),
            closing_line,
        ];
        let optional_costs = [
            ("Prorated Property Taxes", inputs.prorated_property_taxes),
            ("Other Fees", inputs.other_fees),
            ("Repair Credits", inputs.repair_credits),
        ];
        cost_lines.extend(
            optional_costs
                .into_iter()
                .filter(|(_, amount)| !amount.is_zero())
                .map(|(label, amount)| AuditLine::flat(label, amount)),
        );
        let transaction_costs = AuditSection {
            title: "Transaction Costs".to_string(),
            lines: cost_lines,
            subtotal: result.selling_expenses,
        };

        Self {
            closing_costs_mode: mode,
            revenue,
            debt_payoff,
            transaction_costs,
            net_proceeds: result.net_proceeds,
        }
    }

    /// Sections in display order.
    pub fn sections(&self) -> [&AuditSection; 3] {
        [&self.revenue, &self.debt_payoff, &self.transaction_costs]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn inputs() -> CostInputs {
        CostInputs {
            sale_price: dec!(525000),
            purchase_price: dec!(385000),
            mortgage_payoff: dec!(290000),
            other_liens: dec!(0),
            agent_commission_percent: dec!(3.0),
            buyer_agent_commission_percent: dec!(2.5),
            closing_costs_percent: dec!(1.5),
            prorated_property_taxes: dec!(1450),
            repair_credits: dec!(0),
            other_fees: dec!(450),
        }
    }

    #[test]
    fn sections_reconcile_with_subtotals() {
        for mode in [ClosingCostsMode::Percent, ClosingCostsMode::Currency] {
            let with_extras = CostInputs {
                other_liens: dec!(8000),
                repair_credits: dec!(2500),
                ..inputs()
            };
            let sheet = AuditSheet::build(&with_extras, mode);

            for section in sheet.sections() {
                assert_eq!(section.line_total(), section.subtotal, "{}", section.title);
            }
        }
    }

    #[test]
    fn percent_mode_lines() {
        let sheet = AuditSheet::build(&inputs(), ClosingCostsMode::Percent);
        let labels: Vec<&str> = sheet
            .transaction_costs
            .lines
            .iter()
            .map(|l| l.label.as_str())
            .collect();

        assert_eq!(
            labels,
            vec![
                "Listing Fee",
                "Buyer Fee",
                "Closing Fees",
                "Prorated Property Taxes",
                "Other Fees"
            ]
        );
        assert_eq!(sheet.transaction_costs.lines[0].rate, Some(dec!(3.0)));
        assert_eq!(sheet.transaction_costs.lines[0].amount, dec!(15750));
        assert_eq!(sheet.transaction_costs.lines[2].rate, Some(dec!(1.5)));
        assert_eq!(sheet.transaction_costs.lines[2].amount, dec!(7875));
        assert_eq!(sheet.transaction_costs.subtotal, dec!(38650));
        assert_eq!(sheet.net_proceeds, dec!(196350));
    }

    #[test]
    fn currency_mode_closing_line_has_no_rate() {
        let sheet = AuditSheet::build(&inputs(), ClosingCostsMode::Currency);
        let closing = &sheet.transaction_costs.lines[2];

        assert_eq!(closing.label, "Closing Fees");
        assert_eq!(closing.rate, None);
        assert_eq!(closing.amount, dec!(1.5));
        assert_eq!(sheet.net_proceeds, dec!(204223.5));
    }

    #[test]
    fn other_liens_line_only_when_present() {
        let without = AuditSheet::build(&inputs(), ClosingCostsMode::Percent);
        let with = AuditSheet::build(
            &CostInputs {
                other_liens: dec!(15000),
                ..inputs()
            },
            ClosingCostsMode::Percent,
        );

        assert_eq!(without.debt_payoff.lines.len(), 1);
        assert_eq!(with.debt_payoff.lines.len(), 2);
        assert_eq!(with.debt_payoff.lines[1].label, "Other Liens");
        assert_eq!(with.debt_payoff.subtotal, dec!(305000));
    }

    #[test]
    fn revenue_section_echoes_sale_price() {
        let sheet = AuditSheet::build(&inputs(), ClosingCostsMode::Percent);

        assert_eq!(sheet.revenue.title, "Primary Revenue");
        assert_eq!(sheet.revenue.subtotal, dec!(525000));
    }
}

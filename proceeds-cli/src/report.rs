//! Text and JSON rendering of calculator results.

use std::fmt;

use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use proceeds_core::{
    AuditSection, AuditSheet, CalculationResult, ClosingCostsMode, CostField, CostInputs,
    InputKind, SaleRatios,
};
use serde::Serialize;

use crate::state::CalculatorState;
use crate::themes::{Palette, Role};
use crate::utils::{format_currency, format_grouped, format_percent, format_rate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub inputs: &'a CostInputs,
    pub closing_costs_mode: ClosingCostsMode,
    pub result: &'a CalculationResult,
    pub ratios: SaleRatios,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditSheet>,
}

impl<'a> JsonReport<'a> {
    pub fn new(
        state: &'a CalculatorState,
        with_audit: bool,
    ) -> Self {
        Self {
            inputs: state.inputs(),
            closing_costs_mode: state.mode(),
            result: state.result(),
            ratios: state.ratios(),
            audit: with_audit.then(|| state.audit()),
        }
    }
}

pub fn render_json(
    state: &CalculatorState,
    with_audit: bool,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(state, with_audit))
}

/// Appends `text` and a newline.
fn line(
    out: &mut String,
    text: impl fmt::Display,
) {
    out.push_str(&text.to_string());
    out.push('\n');
}

/// The headline estimate, the three summary figures and the ratio cards.
pub fn render_summary(
    state: &CalculatorState,
    palette: &Palette,
) -> String {
    let result = state.result();
    let ratios = state.ratios();
    let mut out = String::new();

    let headline_role = if result.net_proceeds.is_sign_negative() {
        Role::Negative
    } else {
        Role::Accent
    };
    line(&mut out, palette.paint(Role::Muted, "ESTIMATED TAKE-HOME CASH"));
    line(
        &mut out,
        format_args!(
            "  {}",
            palette.paint(headline_role, &format_currency(result.net_proceeds, 0))
        ),
    );
    line(&mut out, "");

    let (growth_role, growth_sign) = if result.appreciation.is_sign_negative() {
        (Role::Negative, "-")
    } else {
        (Role::Accent, "+")
    };
    let growth = format!(
        "{growth_sign}${}",
        format_grouped(result.appreciation.abs(), 0)
    );
    let expenses = format!("-${}", format_grouped(result.selling_expenses, 0));
    let debt = format!("-${}", format_grouped(result.debt_payoff, 0));

    let figures = [
        ("Equity Growth", growth_role, growth),
        ("Total Expenses", Role::Expense, expenses),
        ("Debt Settled", Role::Debt, debt),
    ];
    for (label, role, amount) in figures {
        line(&mut out, format_args!("  {:<16}{}", label, palette.paint(role, &amount)));
    }
    line(&mut out, "");

    line(
        &mut out,
        format_args!(
            "Selling costs represent approx. {} of your final sale price.",
            format_percent(ratios.selling_cost_share)
        ),
    );
    line(&mut out, "");

    let cards = [
        ("Net Ratio", ratios.net_ratio, "of Gross Sale Price"),
        ("Cost Burden", ratios.cost_burden, "Total Sunk Costs"),
        ("Market Gains", ratios.market_gains, "Growth Since Purchase"),
    ];
    for (label, value, caption) in cards {
        line(
            &mut out,
            format_args!(
                "  {:<14}{:>9}  {}",
                label,
                format_percent(value),
                palette.paint(Role::Muted, caption)
            ),
        );
    }

    out
}

fn section_table(
    section: &AuditSection,
    deduction: bool,
) -> Table {
    let sign = if deduction { "-" } else { "" };
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![Cell::new(&section.title), Cell::new("Amount")]);

    for item in &section.lines {
        let label = match item.rate {
            Some(rate) => format!("{} ({})", item.label, format_rate(rate)),
            None => item.label.clone(),
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{sign}{}", format_currency(item.amount, 2)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Subtotal"),
        Cell::new(format!("{sign}{}", format_currency(section.subtotal, 2)))
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

/// The full net recovery sheet.
pub fn render_audit(
    sheet: &AuditSheet,
    palette: &Palette,
) -> String {
    let mut out = String::new();
    let mode = sheet.closing_costs_mode;

    line(&mut out, palette.paint(Role::Accent, "ASSET INTEGRITY AUDIT"));
    line(&mut out, "Full Net Recovery Sheet");
    line(
        &mut out,
        palette.paint(
            Role::Muted,
            &format!("Closing costs entered as {mode} ({})", mode.symbol()),
        ),
    );
    line(&mut out, "");

    line(&mut out, section_table(&sheet.revenue, false));
    line(&mut out, section_table(&sheet.debt_payoff, true));
    line(&mut out, section_table(&sheet.transaction_costs, true));
    line(&mut out, "");

    let final_role = if sheet.net_proceeds.is_sign_negative() {
        Role::Negative
    } else {
        Role::Accent
    };
    line(
        &mut out,
        format_args!(
            "Final Estimated Recovery: {}",
            palette.paint(final_role, &format_currency(sheet.net_proceeds, 0))
        ),
    );
    line(
        &mut out,
        palette.paint(
            Role::Muted,
            "Estimates provided for informational purposes only. Consult with your title officer.",
        ),
    );

    out
}

/// Every editable field with its current value.
pub fn render_fields(state: &CalculatorState) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Label", "Value"]);

    for field in CostField::ALL {
        let value = field.get(state.inputs());
        let shown = match field.kind(state.mode()) {
            InputKind::Percent => format_rate(value),
            InputKind::Currency => format_currency(value, 2),
        };
        table.add_row(vec![
            Cell::new(field.name()),
            Cell::new(field.label()),
            Cell::new(shown).set_alignment(CellAlignment::Right),
        ]);
    }

    let mode = state.mode();
    format!("{table}\nClosing costs mode: {mode} ({})\n", mode.symbol())
}

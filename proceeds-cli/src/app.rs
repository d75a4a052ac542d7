//! Wiring between the command line, the configuration and the calculator.

use anyhow::{Context, Result};
use proceeds_core::{ClosingCostsMode, CostField};
use tracing::debug;

use crate::config::Config;
use crate::report::{OutputFormat, render_audit, render_json, render_summary};
use crate::state::CalculatorState;
use crate::themes::Palette;
use crate::utils::coerce_input;

/// Field values given on the command line, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOverrides {
    pub values: Vec<(CostField, String)>,
    pub mode: Option<ClosingCostsMode>,
}

impl InputOverrides {
    pub fn push(
        &mut self,
        field: CostField,
        raw: Option<String>,
    ) {
        if let Some(raw) = raw {
            self.values.push((field, raw));
        }
    }
}

/// Builds the calculator: startup snapshot, then configured defaults, then
/// command line overrides.
pub fn build_state(
    config: &Config,
    overrides: &InputOverrides,
) -> Result<CalculatorState> {
    let (mut inputs, mut mode) = config
        .starting_point()
        .context("Failed to apply configured defaults")?;

    for (field, raw) in &overrides.values {
        let value = coerce_input(raw);
        debug!(%field, raw = %raw, %value, "override applied");
        field.set(&mut inputs, value);
    }
    if let Some(overridden) = overrides.mode {
        mode = overridden;
    }

    Ok(CalculatorState::new(inputs, mode))
}

pub fn estimate_report(
    state: &CalculatorState,
    format: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_summary(state, palette)),
        OutputFormat::Json => render_json(state, false)
            .map(|json| json + "\n")
            .context("Failed to serialize estimate"),
    }
}

pub fn audit_report(
    state: &CalculatorState,
    format: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_audit(&state.audit(), palette)),
        OutputFormat::Json => render_json(state, true)
            .map(|json| json + "\n")
            .context("Failed to serialize audit"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn overrides_win_over_config_and_snapshot() {
        let config = Config::from_toml_str("[defaults]\nsale_price = 600000\nother_fees = 0\n").unwrap();
        let mut overrides = InputOverrides::default();
        overrides.push(CostField::SalePrice, Some("$525,000".to_string()));
        overrides.push(CostField::OtherFees, None);
        overrides.mode = Some(ClosingCostsMode::Currency);

        let state = build_state(&config, &overrides).unwrap();

        assert_eq!(state.inputs().sale_price, dec!(525000));
        assert_eq!(state.inputs().other_fees, dec!(0));
        assert_eq!(state.inputs().mortgage_payoff, dec!(290000));
        assert_eq!(state.mode(), ClosingCostsMode::Currency);
    }

    #[test]
    fn json_estimate_has_no_audit() {
        let state = build_state(&Config::default(), &InputOverrides::default()).unwrap();

        let json = estimate_report(&state, OutputFormat::Json, &Palette::plain()).unwrap();

        assert!(!json.contains("\"audit\""));
        assert!(json.contains("\"net_proceeds\""));
    }

    #[test]
    fn text_audit_renders_sheet() {
        let state = build_state(&Config::default(), &InputOverrides::default()).unwrap();

        let text = audit_report(&state, OutputFormat::Text, &Palette::plain()).unwrap();

        assert!(text.contains("Full Net Recovery Sheet"));
    }
}
